//! The fixed set of indicators tracked on the IAF dashboard.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// How an indicator's values are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Currency,
    Count,
    Ratio,
}

/// Indicators the dashboard knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    Revenue,
    Tickets,
    AverageTicket,
    Items,
    ItemsPerTicket,
    AveragePrice,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 6] = [
        IndicatorKind::Revenue,
        IndicatorKind::Tickets,
        IndicatorKind::AverageTicket,
        IndicatorKind::Items,
        IndicatorKind::ItemsPerTicket,
        IndicatorKind::AveragePrice,
    ];

    /// Stable code used in URLs and selectors.
    pub fn code(&self) -> &'static str {
        match self {
            IndicatorKind::Revenue => "receita",
            IndicatorKind::Tickets => "boletos",
            IndicatorKind::AverageTicket => "boleto-medio",
            IndicatorKind::Items => "itens",
            IndicatorKind::ItemsPerTicket => "itens-por-boleto",
            IndicatorKind::AveragePrice => "preco-medio",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IndicatorKind::Revenue => "Receita",
            IndicatorKind::Tickets => "Boletos",
            IndicatorKind::AverageTicket => "Boleto Médio",
            IndicatorKind::Items => "Itens",
            IndicatorKind::ItemsPerTicket => "Itens por Boleto",
            IndicatorKind::AveragePrice => "Preço Médio",
        }
    }

    pub fn value_kind(&self) -> ValueKind {
        match self {
            IndicatorKind::Revenue | IndicatorKind::AverageTicket | IndicatorKind::AveragePrice => {
                ValueKind::Currency
            }
            IndicatorKind::Tickets | IndicatorKind::Items => ValueKind::Count,
            IndicatorKind::ItemsPerTicket => ValueKind::Ratio,
        }
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for IndicatorKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == s.trim())
            .ok_or_else(|| {
                ValidationError::invalid_format("indicator", format!("unknown code '{}'", s))
            })
    }
}
