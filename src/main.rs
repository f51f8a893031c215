//! IAF Dashboard host
//!
//! Seeds the in-memory store with the sample action plans, runs a refresh
//! tick, and prints the indicator evaluations and action plan summary as JSON.

use std::error::Error;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use iaf_dashboard::adapters::{InMemoryActionPlanRepository, InMemoryEventBus};
use iaf_dashboard::application::{
    GetActionPlanSummaryHandler, GetActionPlanSummaryQuery, RefreshActionPlanStatusesHandler,
};
use iaf_dashboard::config::{AppConfig, LoggingConfig};
use iaf_dashboard::domain::action_plan::{ActionPlan, ActionPlanSummary, PlanStatus};
use iaf_dashboard::domain::foundation::{ActionPlanId, CommandMetadata, Percentage, Timestamp};
use iaf_dashboard::domain::indicator::{Indicator, IndicatorEvaluation, IndicatorKind};
use iaf_dashboard::domain::period::DateRange;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardSnapshot {
    period: DateRange,
    indicators: Vec<IndicatorRow>,
    action_plans: Vec<ActionPlan>,
    summary: ActionPlanSummary,
}

#[derive(Serialize)]
struct IndicatorRow {
    kind: IndicatorKind,
    label: &'static str,
    #[serde(flatten)]
    evaluation: IndicatorEvaluation,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = AppConfig::load_validated()?;
    init_tracing(&config.logging)?;

    let now = Timestamp::now();
    let period = config.rules.date_range_validator().default_window(now);
    info!(start = %period.start(), end = %period.end(), "dashboard period");

    let repository = Arc::new(InMemoryActionPlanRepository::with_plans(sample_plans()?));
    let event_bus = Arc::new(InMemoryEventBus::new());

    let refreshed = RefreshActionPlanStatusesHandler::new(repository.clone(), event_bus.clone())
        .handle(CommandMetadata::new(now).with_source("startup"))
        .await?;
    info!(
        marked_overdue = refreshed.marked_overdue.len(),
        events = event_bus.event_count(),
        "action plan statuses refreshed"
    );

    let summary = GetActionPlanSummaryHandler::new(repository)
        .handle(GetActionPlanSummaryQuery { now })
        .await?;

    let snapshot = DashboardSnapshot {
        period,
        indicators: sample_indicators(),
        action_plans: refreshed.plans,
        summary,
    };
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn Error + Send + Sync>> {
    let filter = logging.env_filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().try_init()?;
    } else {
        builder.try_init()?;
    }
    Ok(())
}

fn sample_indicators() -> Vec<IndicatorRow> {
    [
        (IndicatorKind::Revenue, 850_000.0, 920_000.0),
        (IndicatorKind::Tickets, 450.0, 380.0),
        (IndicatorKind::AverageTicket, 1_890.0, 2_420.0),
        (IndicatorKind::Items, 1_200.0, 980.0),
        (IndicatorKind::ItemsPerTicket, 2.7, 2.6),
        (IndicatorKind::AveragePrice, 700.0, 940.0),
    ]
    .into_iter()
    .map(|(kind, target, actual)| IndicatorRow {
        kind,
        label: kind.label(),
        evaluation: IndicatorEvaluation::evaluate(&Indicator::of(kind, target, actual)),
    })
    .collect()
}

fn sample_plans() -> Result<Vec<ActionPlan>, chrono::ParseError> {
    let day = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d");

    Ok(vec![
        ActionPlan {
            id: ActionPlanId::new(1),
            offense: "Boletos abaixo da meta".to_string(),
            cause: "Baixo fluxo de clientes na loja".to_string(),
            action: "Campanha de prospecção ativa".to_string(),
            execution_plan: "Ligações diárias para a carteira de clientes inativos".to_string(),
            owner: "maria-silva".to_string(),
            start_date: day("2024-10-15")?,
            deadline: day("2024-11-15")?,
            status: PlanStatus::InProgress,
            progress: Percentage::new(65),
        },
        ActionPlan {
            id: ActionPlanId::new(2),
            offense: "Itens por boleto abaixo da meta".to_string(),
            cause: "Pouca venda adicional no atendimento".to_string(),
            action: "Treinamento de venda complementar".to_string(),
            execution_plan: "Workshop semanal com a equipe de vendas".to_string(),
            owner: "joao-santos".to_string(),
            start_date: day("2024-10-01")?,
            deadline: day("2024-10-30")?,
            status: PlanStatus::Completed,
            progress: Percentage::HUNDRED,
        },
        ActionPlan {
            id: ActionPlanId::new(3),
            offense: "Quantidade de itens abaixo da meta".to_string(),
            cause: "Ruptura de estoque nas linhas principais".to_string(),
            action: "Revisão do planejamento de compras".to_string(),
            execution_plan: "Reunião quinzenal com o time de compras".to_string(),
            owner: "ana-costa".to_string(),
            start_date: day("2024-10-20")?,
            deadline: day("2024-12-20")?,
            status: PlanStatus::ToStart,
            progress: Percentage::ZERO,
        },
    ])
}
