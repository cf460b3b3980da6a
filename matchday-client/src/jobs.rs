//! Job-related API endpoints

use crate::ApiClient;
use crate::error::Result;
use matchday_core::domain::job::JobId;
use matchday_core::dto::job::{JobPoll, SubmitResponse};

impl ApiClient {
    /// Queue a new simulation run
    ///
    /// The service creates the run asynchronously and answers immediately
    /// with the job id to poll.
    ///
    /// # Returns
    /// The id of the queued job
    ///
    /// # Example
    /// ```no_run
    /// # use matchday_client::ApiClient;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = ApiClient::new("http://localhost:8000");
    /// let job_id = client.submit_simulation().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn submit_simulation(&self) -> Result<JobId> {
        let url = format!("{}/api/simulate", self.base_url());
        let response = self.client.post(&url).send().await?;

        let submitted: SubmitResponse = self.handle_response(response).await?;
        Ok(submitted.job_id)
    }

    /// Fetch the current status of a job
    ///
    /// # Arguments
    /// * `job_id` - The job to poll
    ///
    /// # Returns
    /// The job's status and, once completed, its simulation id
    pub async fn poll_job(&self, job_id: JobId) -> Result<JobPoll> {
        let url = format!("{}/api/jobs?job_id={}", self.base_url(), job_id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }
}
