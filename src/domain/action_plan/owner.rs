//! Known action-plan owners.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// People who can be assigned as owner of an action plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Owner {
    MariaSilva,
    JoaoSantos,
    AnaCosta,
    PedroOliveira,
    CarlosRodrigues,
    LuciaFerreira,
}

impl Owner {
    pub const ALL: [Owner; 6] = [
        Owner::MariaSilva,
        Owner::JoaoSantos,
        Owner::AnaCosta,
        Owner::PedroOliveira,
        Owner::CarlosRodrigues,
        Owner::LuciaFerreira,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Owner::MariaSilva => "maria-silva",
            Owner::JoaoSantos => "joao-santos",
            Owner::AnaCosta => "ana-costa",
            Owner::PedroOliveira => "pedro-oliveira",
            Owner::CarlosRodrigues => "carlos-rodrigues",
            Owner::LuciaFerreira => "lucia-ferreira",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Owner::MariaSilva => "Maria Silva",
            Owner::JoaoSantos => "João Santos",
            Owner::AnaCosta => "Ana Costa",
            Owner::PedroOliveira => "Pedro Oliveira",
            Owner::CarlosRodrigues => "Carlos Rodrigues",
            Owner::LuciaFerreira => "Lúcia Ferreira",
        }
    }
}

impl FromStr for Owner {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|owner| owner.code() == s.trim())
            .ok_or_else(|| ValidationError::invalid_format("owner", format!("unknown code '{}'", s)))
    }
}

/// Display name for a stored owner value.
///
/// The owner field is free text; values outside the known set are shown as-is.
pub fn owner_display_name(code: &str) -> &str {
    match code.parse::<Owner>() {
        Ok(owner) => owner.display_name(),
        Err(_) => code,
    }
}
