//! Matchday Sync
//!
//! The asynchronous job-tracking and cache-synchronization core of the
//! Matchday client.
//!
//! Three cooperating pieces:
//! - [`PollableSet`]: generic fixed-interval polling of a dynamic id set,
//!   with terminal-state detection and exactly-once side-effect delivery
//! - [`JobTracker`]: binds the set to the prediction service's job-status
//!   endpoint and drives cache refresh and notifications on completion
//! - [`SimulationCache`]: the authoritative client-side list of known
//!   simulations, shared by every view
//!
//! Everything here is single-owner: one tracker and one cache per
//! application session, injected into consumers, which read snapshots and
//! call the exposed operations.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use matchday_client::ApiClient;
//! use matchday_sync::{DEFAULT_POLL_INTERVAL, JobTracker, SimulationCache};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let api = Arc::new(ApiClient::new("http://localhost:8000"));
//!     let cache = Arc::new(SimulationCache::new(api.clone()));
//!     let tracker = JobTracker::new(api.clone(), cache.clone(), DEFAULT_POLL_INTERVAL);
//!
//!     let job_id = api.submit_simulation().await?;
//!     tracker.enqueue(job_id);
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod notify;
pub mod poll;
pub mod tracker;

// Re-export the component surface
pub use cache::{CacheSnapshot, SimulationCache, SimulationStore};
pub use notify::{NoopNotifier, Notifier, SelectionListener};
pub use poll::{PollableSet, StatusProbe, TerminalSink};
pub use tracker::{DEFAULT_POLL_INTERVAL, JobStatusSource, JobTracker};
