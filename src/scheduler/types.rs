use crate::model::{Employee, Role};
use thiserror::Error;

/// Options de génération
#[derive(Debug, Clone, Copy, Default)]
pub struct AssignOptions {
    /// Graine du tirage aléatoire ; `None` = entropie système.
    pub seed: Option<u64>,
}

impl AssignOptions {
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictKind {
    DoubleBooking,
    Unassigned,
}

/// Anomalie relevée dans un planning généré.
#[derive(Debug, Clone)]
pub struct Conflict {
    pub week: usize,
    pub role: Role,
    /// Second rôle tenu la même semaine (double réservation uniquement).
    pub other_role: Option<Role>,
    pub employee: Option<Employee>,
    pub kind: ConflictKind,
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("no employees in roster: add employees before generating")]
    EmptyRoster,
    #[error("duplicate employee: {0}")]
    DuplicateEmployee(String),
    #[error("duplicate role: {0}")]
    DuplicateRole(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
