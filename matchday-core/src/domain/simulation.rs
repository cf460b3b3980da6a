//! Simulation domain types

use serde::{Deserialize, Serialize};

/// Identifier of a persisted simulation result set.
///
/// Distinct from the [`JobId`](crate::domain::job::JobId) of the run that
/// produced it.
pub type SimulationId = i64;

/// An immutable record of a completed simulation run, as known to the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    pub id: SimulationId,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
