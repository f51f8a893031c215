//! Hand-written port mocks shared by the action plan handler tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Mutex;

use crate::domain::action_plan::{ActionPlan, ActionPlanDraft, PlanStatus};
use crate::domain::foundation::{
    ActionPlanId, DomainError, ErrorCode, EventEnvelope, Percentage, Timestamp,
};
use crate::ports::{action_plan_not_found, ActionPlanRepository, EventPublisher};

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn at(s: &str) -> Timestamp {
    Timestamp::start_of_day(day(s)).plus_secs(10 * 3600)
}

pub fn draft(status: PlanStatus) -> ActionPlanDraft {
    ActionPlanDraft::new(
        "Receita 8,2% abaixo da meta",
        "Baixa conversão",
        "Treinamento de abordagem",
        "Workshops semanais",
        "maria-silva",
        day("2024-10-15"),
        day("2024-11-15"),
        status,
    )
}

pub fn stored_plan(id: u64, status: PlanStatus, deadline: &str, progress: u8) -> ActionPlan {
    ActionPlan {
        id: ActionPlanId::new(id),
        offense: "Boletos abaixo da meta".to_string(),
        cause: "Fluxo reduzido".to_string(),
        action: "Campanha".to_string(),
        execution_plan: "Disparo semanal".to_string(),
        owner: "joao-santos".to_string(),
        start_date: day("2024-10-01"),
        deadline: day(deadline),
        status,
        progress: Percentage::new(progress),
    }
}

pub struct MockActionPlanRepository {
    plans: Mutex<Vec<ActionPlan>>,
    next_id: Mutex<u64>,
    fail_writes: bool,
}

impl MockActionPlanRepository {
    pub fn new() -> Self {
        Self::with_plans(vec![])
    }

    pub fn with_plans(plans: Vec<ActionPlan>) -> Self {
        let next = plans.iter().map(|p| p.id.value()).max().unwrap_or(0) + 1;
        Self {
            plans: Mutex::new(plans),
            next_id: Mutex::new(next),
            fail_writes: false,
        }
    }

    pub fn failing(plans: Vec<ActionPlan>) -> Self {
        Self {
            fail_writes: true,
            ..Self::with_plans(plans)
        }
    }

    pub fn plans(&self) -> Vec<ActionPlan> {
        self.plans.lock().unwrap().clone()
    }

    fn check_writable(&self) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::new(
                ErrorCode::StorageError,
                "Simulated write failure",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ActionPlanRepository for MockActionPlanRepository {
    async fn next_id(&self) -> Result<ActionPlanId, DomainError> {
        let mut next = self.next_id.lock().unwrap();
        let id = ActionPlanId::new(*next);
        *next += 1;
        Ok(id)
    }

    async fn save(&self, plan: &ActionPlan) -> Result<(), DomainError> {
        self.check_writable()?;
        self.plans.lock().unwrap().push(plan.clone());
        Ok(())
    }

    async fn update(&self, plan: &ActionPlan) -> Result<(), DomainError> {
        self.check_writable()?;
        let mut plans = self.plans.lock().unwrap();
        match plans.iter_mut().find(|p| p.id == plan.id) {
            Some(stored) => {
                *stored = plan.clone();
                Ok(())
            }
            None => Err(action_plan_not_found(plan.id)),
        }
    }

    async fn find_by_id(&self, id: ActionPlanId) -> Result<Option<ActionPlan>, DomainError> {
        Ok(self.plans.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<ActionPlan>, DomainError> {
        Ok(self.plans())
    }

    async fn delete(&self, id: ActionPlanId) -> Result<(), DomainError> {
        self.check_writable()?;
        let mut plans = self.plans.lock().unwrap();
        let before = plans.len();
        plans.retain(|p| p.id != id);
        if plans.len() == before {
            return Err(action_plan_not_found(id));
        }
        Ok(())
    }
}

pub struct MockEventPublisher {
    published: Mutex<Vec<EventEnvelope>>,
}

impl MockEventPublisher {
    pub fn new() -> Self {
        Self {
            published: Mutex::new(Vec::new()),
        }
    }

    pub fn published(&self) -> Vec<EventEnvelope> {
        self.published.lock().unwrap().clone()
    }

    pub fn event_types(&self) -> Vec<String> {
        self.published()
            .into_iter()
            .map(|e| e.event_type)
            .collect()
    }
}

#[async_trait]
impl EventPublisher for MockEventPublisher {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        self.published.lock().unwrap().push(event);
        Ok(())
    }
}
