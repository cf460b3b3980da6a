//! Job domain types

use serde::{Deserialize, Serialize};

/// Identifier of a server-side simulation run.
///
/// Assigned by the service when a run is queued. Unique per submission and
/// never reused.
pub type JobId = i64;

/// Lifecycle status of a simulation job.
///
/// A job progresses queued -> running -> {completed, failed}. The transition
/// out of the non-terminal states is monotonic: once terminal, a job never
/// changes status again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Queued,
    Running,
    Completed,
    Failed,
}

impl JobStatus {
    /// Whether this status ends the job's lifecycle.
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }
}
