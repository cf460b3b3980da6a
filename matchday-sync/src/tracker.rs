//! Job tracking policy for the prediction service
//!
//! [`JobTracker`] binds the generic [`PollableSet`] to the job-status
//! endpoint: it classifies poll responses, refreshes the simulation cache
//! when runs complete, and forwards lifecycle events to the notification
//! seams.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use matchday_client::ApiClient;
use matchday_client::error::Result;
use matchday_core::domain::job::{JobId, JobStatus};
use matchday_core::dto::job::JobPoll;

use crate::cache::SimulationCache;
use crate::notify::{NoopNotifier, Notifier, SelectionListener};
use crate::poll::{PollableSet, StatusProbe, TerminalSink};

/// How often outstanding jobs are polled unless configured otherwise.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Job-status endpoint operations the tracker depends on.
///
/// Trait-based so tests can script poll responses without a live service.
#[async_trait]
pub trait JobStatusSource: Send + Sync {
    async fn poll_job(&self, job: JobId) -> Result<JobPoll>;
}

#[async_trait]
impl JobStatusSource for ApiClient {
    async fn poll_job(&self, job: JobId) -> Result<JobPoll> {
        ApiClient::poll_job(self, job).await
    }
}

/// Probe adapter: a poll response is terminal once the status is.
struct JobProbe {
    source: Arc<dyn JobStatusSource>,
}

#[async_trait]
impl StatusProbe for JobProbe {
    type Id = JobId;
    type Outcome = JobPoll;

    async fn check(&self, id: JobId) -> anyhow::Result<JobPoll> {
        let poll = self.source.poll_job(id).await?;
        Ok(poll)
    }

    fn is_terminal(&self, outcome: &JobPoll) -> bool {
        outcome.job_status.is_terminal()
    }
}

/// Collaborators shared between the tracker handle and its sink.
struct TrackerShared {
    cache: Arc<SimulationCache>,
    notifier: Mutex<Arc<dyn Notifier>>,
    selection: Mutex<Option<Arc<dyn SelectionListener>>>,
}

/// Terminal-batch policy: refresh once, select the last completion, notify
/// each job.
struct JobSink {
    shared: Arc<TrackerShared>,
}

#[async_trait]
impl TerminalSink<JobId, JobPoll> for JobSink {
    async fn on_terminal(&self, batch: Vec<(JobId, JobPoll)>) {
        let (completed, failed): (Vec<_>, Vec<_>) = batch
            .into_iter()
            .partition(|(_, poll)| poll.job_status == JobStatus::Completed);

        let notifier = self.shared.notifier.lock().unwrap().clone();

        if !completed.is_empty() {
            // The cache must hold the new simulations before anyone is told
            // about them. A failed refresh is recorded by the cache itself
            // and never aborts job accounting.
            if let Err(e) = self.shared.cache.refresh().await {
                warn!("simulation refresh after completion failed: {}", e);
            }

            // The UI tracks a single current selection, so only the last
            // completion of the tick (in enqueue order) wins. A job the
            // server completed without a simulation id selects nothing.
            let last_simulation = completed.last().and_then(|(_, poll)| poll.simulation_id);
            if let Some(simulation) = last_simulation {
                let listener = self.shared.selection.lock().unwrap().clone();
                if let Some(listener) = listener {
                    listener.simulation_selected(simulation);
                }
            }

            for (_, poll) in &completed {
                notifier.job_completed(poll.simulation_id);
            }
        }

        for (_, poll) in &failed {
            notifier.job_failed(poll.simulation_id);
        }
    }
}

/// Tracks submitted jobs until they reach a terminal state.
///
/// One instance per application session owns the tracked set; presentation
/// components hand it job ids after submitting work and observe the results
/// through the cache and the notification seams.
pub struct JobTracker {
    set: PollableSet<JobProbe>,
    shared: Arc<TrackerShared>,
}

impl JobTracker {
    /// Creates a tracker polling `source` every `poll_interval`.
    ///
    /// Completed runs are folded into `cache`. Notifications go nowhere
    /// until [`set_notifier`](Self::set_notifier) is called.
    pub fn new(
        source: Arc<dyn JobStatusSource>,
        cache: Arc<SimulationCache>,
        poll_interval: Duration,
    ) -> Self {
        let shared = Arc::new(TrackerShared {
            cache,
            notifier: Mutex::new(Arc::new(NoopNotifier)),
            selection: Mutex::new(None),
        });
        let sink = Arc::new(JobSink {
            shared: Arc::clone(&shared),
        });
        let set = PollableSet::new(JobProbe { source }, poll_interval, sink);
        Self { set, shared }
    }

    /// Starts tracking a freshly submitted job.
    ///
    /// Emits the "started" notification and begins polling. Tracking an
    /// already-tracked id changes nothing beyond the notification.
    pub fn enqueue(&self, job: JobId) {
        self.shared.notifier.lock().unwrap().clone().job_started(job);
        self.set.enqueue(job);
    }

    /// Replaces the notifier. The latest one registered receives all
    /// subsequent events; polling is not interrupted.
    pub fn set_notifier(&self, notifier: Arc<dyn Notifier>) {
        *self.shared.notifier.lock().unwrap() = notifier;
    }

    /// Registers the "current selection" collaborator.
    pub fn set_selection_listener(&self, listener: Arc<dyn SelectionListener>) {
        *self.shared.selection.lock().unwrap() = Some(listener);
    }

    /// Ids of the jobs still being polled, in enqueue order.
    pub fn active_jobs(&self) -> Vec<JobId> {
        self.set.tracked()
    }

    /// Stops all polling; results of checks already in flight are discarded.
    pub fn shutdown(&self) {
        self.set.shutdown();
    }
}
