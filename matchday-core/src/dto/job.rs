//! Job endpoint payloads

use serde::{Deserialize, Serialize};

use crate::domain::job::{JobId, JobStatus};
use crate::domain::simulation::SimulationId;

/// Response of `POST /api/simulate`: the queued run's job id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub job_id: JobId,
}

/// Response of `GET /api/jobs?job_id={id}`.
///
/// `simulation_id` is attached by the server once the run completes; it can
/// be null even for a completed job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPoll {
    pub job_status: JobStatus,
    #[serde(default)]
    pub simulation_id: Option<SimulationId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_response_wire_format() {
        let r: SubmitResponse = serde_json::from_str(r#"{"jobId": 42}"#).unwrap();
        assert_eq!(r.job_id, 42);
    }

    #[test]
    fn test_job_poll_wire_format() {
        let p: JobPoll =
            serde_json::from_str(r#"{"jobStatus": "completed", "simulationId": 7}"#).unwrap();
        assert_eq!(p.job_status, JobStatus::Completed);
        assert_eq!(p.simulation_id, Some(7));
    }

    #[test]
    fn test_job_poll_null_simulation() {
        let p: JobPoll =
            serde_json::from_str(r#"{"jobStatus": "running", "simulationId": null}"#).unwrap();
        assert_eq!(p.job_status, JobStatus::Running);
        assert_eq!(p.simulation_id, None);
    }

    #[test]
    fn test_job_poll_tolerates_extra_fields() {
        // Older service builds include an "ok" flag alongside the status.
        let p: JobPoll =
            serde_json::from_str(r#"{"ok": true, "jobStatus": "queued", "simulationId": null}"#)
                .unwrap();
        assert_eq!(p.job_status, JobStatus::Queued);
    }

    #[test]
    fn test_job_poll_requires_status() {
        assert!(serde_json::from_str::<JobPoll>(r#"{"simulationId": 7}"#).is_err());
    }
}
