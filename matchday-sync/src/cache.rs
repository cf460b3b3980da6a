//! Client-side cache of the known-simulations list
//!
//! [`SimulationCache`] is the single source of truth for every view that
//! renders the simulation list. The server owns the data; the cache only
//! mirrors the last successful fetch and records whether a fetch is in
//! flight or has failed.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::{debug, warn};

use matchday_client::ApiClient;
use matchday_client::error::Result;
use matchday_core::domain::simulation::Simulation;

use crate::notify::{NoopNotifier, Notifier};

/// Server-side simulation store operations the cache depends on.
///
/// Trait-based so tests can script responses without a live service.
#[async_trait]
pub trait SimulationStore: Send + Sync {
    /// Fetch the full simulation list, in server order.
    async fn list_simulations(&self) -> Result<Vec<Simulation>>;

    /// Delete all server-side simulation data.
    async fn clear_simulations(&self) -> Result<()>;
}

#[async_trait]
impl SimulationStore for ApiClient {
    async fn list_simulations(&self) -> Result<Vec<Simulation>> {
        ApiClient::list_simulations(self).await
    }

    async fn clear_simulations(&self) -> Result<()> {
        ApiClient::clear_simulations(self).await
    }
}

/// What a reader observes: the collection plus fetch bookkeeping.
///
/// The collection is always a complete server answer, never a partial one:
/// refresh replaces it in a single assignment.
#[derive(Debug, Clone, Default)]
pub struct CacheSnapshot {
    pub simulations: Vec<Simulation>,
    /// True only while a refresh or clear is in flight.
    pub loading: bool,
    /// Message of the last failed operation, cleared when a new one starts.
    pub error: Option<String>,
}

/// Authoritative client-side list of known simulations.
///
/// Owned by exactly one instance per application session; consumers read
/// snapshots or invoke the exposed operations, never mutate directly.
pub struct SimulationCache {
    store: Arc<dyn SimulationStore>,
    state: Mutex<CacheSnapshot>,
    notifier: Mutex<Arc<dyn Notifier>>,
}

impl SimulationCache {
    /// Creates an empty cache. Call [`refresh`](Self::refresh) to populate it.
    pub fn new(store: Arc<dyn SimulationStore>) -> Self {
        Self {
            store,
            state: Mutex::new(CacheSnapshot::default()),
            notifier: Mutex::new(Arc::new(NoopNotifier)),
        }
    }

    /// Replaces the notifier used for the "all cleared" event.
    pub fn set_notifier(&self, notifier: Arc<dyn Notifier>) {
        *self.notifier.lock().unwrap() = notifier;
    }

    /// Current cache contents. Cheap clone; never blocks on the network.
    pub fn snapshot(&self) -> CacheSnapshot {
        self.state.lock().unwrap().clone()
    }

    /// Re-fetches the simulation list and replaces the cache.
    ///
    /// On failure the previous collection is kept and the error is recorded
    /// for observation; there is no automatic retry. Concurrent refreshes
    /// are last-write-wins: the server is the sole source of truth, so a
    /// later refresh pulling later data superseding an earlier one is a
    /// benign race.
    pub async fn refresh(&self) -> Result<Vec<Simulation>> {
        {
            let mut state = self.state.lock().unwrap();
            state.error = None;
            state.loading = true;
        }

        let fetched = self.store.list_simulations().await;

        let mut state = self.state.lock().unwrap();
        state.loading = false;
        match fetched {
            Ok(simulations) => {
                debug!("refreshed simulation cache: {} entries", simulations.len());
                state.simulations = simulations.clone();
                Ok(simulations)
            }
            Err(e) => {
                state.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Deletes all server-side simulation data, then resynchronises.
    ///
    /// A failed delete leaves the cache untouched and is returned to the
    /// caller. After a successful delete the cache is refreshed (expected to
    /// yield an empty collection) and the "all cleared" notification fires
    /// exactly once; a refresh failure at that point is recorded in the
    /// error field but does not undo the clear.
    pub async fn clear(&self) -> Result<()> {
        {
            let mut state = self.state.lock().unwrap();
            state.error = None;
            state.loading = true;
        }

        if let Err(e) = self.store.clear_simulations().await {
            let mut state = self.state.lock().unwrap();
            state.loading = false;
            state.error = Some(e.to_string());
            return Err(e);
        }

        if let Err(e) = self.refresh().await {
            warn!("resync after clear failed: {}", e);
        }

        let notifier = self.notifier.lock().unwrap().clone();
        notifier.simulations_cleared();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use matchday_client::error::ClientError;
    use matchday_core::domain::job::JobId;
    use matchday_core::domain::simulation::SimulationId;

    fn sim(id: SimulationId) -> Simulation {
        Simulation {
            id,
            created_at: chrono::DateTime::from_timestamp(1_768_473_000 + id, 0).unwrap(),
        }
    }

    /// Store that replays scripted list answers and can refuse deletes.
    #[derive(Default)]
    struct ScriptedStore {
        lists: Mutex<VecDeque<Result<Vec<Simulation>>>>,
        clear_status: Mutex<Option<u16>>,
        list_calls: AtomicUsize,
        clear_calls: AtomicUsize,
    }

    impl ScriptedStore {
        fn with_lists(lists: Vec<Result<Vec<Simulation>>>) -> Arc<Self> {
            Arc::new(Self {
                lists: Mutex::new(lists.into()),
                ..Self::default()
            })
        }

        fn refuse_clear(self: Arc<Self>, status: u16) -> Arc<Self> {
            *self.clear_status.lock().unwrap() = Some(status);
            self
        }
    }

    #[async_trait]
    impl SimulationStore for ScriptedStore {
        async fn list_simulations(&self) -> Result<Vec<Simulation>> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            self.lists
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn clear_simulations(&self) -> Result<()> {
            self.clear_calls.fetch_add(1, Ordering::SeqCst);
            match *self.clear_status.lock().unwrap() {
                Some(status) => Err(ClientError::fetch_error(status, "delete refused")),
                None => Ok(()),
            }
        }
    }

    #[derive(Default)]
    struct ClearedProbe {
        cleared: AtomicUsize,
    }

    impl Notifier for ClearedProbe {
        fn job_started(&self, _job: JobId) {}
        fn job_completed(&self, _simulation: Option<SimulationId>) {}
        fn job_failed(&self, _simulation: Option<SimulationId>) {}
        fn simulations_cleared(&self) {
            self.cleared.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn test_refresh_replaces_collection_atomically() {
        let store = ScriptedStore::with_lists(vec![
            Ok(vec![sim(1)]),
            Ok(vec![sim(1), sim(2), sim(3)]),
        ]);
        let cache = SimulationCache::new(store);

        let first = cache.refresh().await.unwrap();
        assert_eq!(first.len(), 1);

        let second = cache.refresh().await.unwrap();
        assert_eq!(second.len(), 3);

        let snapshot = cache.snapshot();
        assert_eq!(snapshot.simulations, vec![sim(1), sim(2), sim(3)]);
        assert!(!snapshot.loading);
        assert_eq!(snapshot.error, None);
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_previous_collection() {
        let store = ScriptedStore::with_lists(vec![
            Ok(vec![sim(1), sim(2)]),
            Err(ClientError::fetch_error(503, "maintenance")),
        ]);
        let cache = SimulationCache::new(store);

        cache.refresh().await.unwrap();
        let err = cache.refresh().await.unwrap_err();
        assert!(err.is_server_error());

        let snapshot = cache.snapshot();
        assert_eq!(snapshot.simulations, vec![sim(1), sim(2)]);
        assert!(!snapshot.loading);
        assert!(snapshot.error.as_deref().unwrap().contains("503"));
    }

    #[tokio::test]
    async fn test_error_cleared_on_next_attempt() {
        let store = ScriptedStore::with_lists(vec![
            Err(ClientError::fetch_error(500, "boom")),
            Ok(vec![sim(4)]),
        ]);
        let cache = SimulationCache::new(store);

        assert!(cache.refresh().await.is_err());
        assert!(cache.snapshot().error.is_some());

        cache.refresh().await.unwrap();
        let snapshot = cache.snapshot();
        assert_eq!(snapshot.error, None);
        assert_eq!(snapshot.simulations, vec![sim(4)]);
    }

    #[tokio::test]
    async fn test_failed_clear_leaves_cache_untouched() {
        let store =
            ScriptedStore::with_lists(vec![Ok(vec![sim(1), sim(2)])]).refuse_clear(500);
        let cache = SimulationCache::new(store.clone());
        let probe = Arc::new(ClearedProbe::default());
        cache.set_notifier(probe.clone());

        cache.refresh().await.unwrap();
        let err = cache.clear().await.unwrap_err();
        assert!(err.is_server_error());

        let snapshot = cache.snapshot();
        assert_eq!(snapshot.simulations, vec![sim(1), sim(2)]);
        assert!(snapshot.error.is_some());
        assert_eq!(probe.cleared.load(Ordering::SeqCst), 0);
        // The failed delete never reached the list endpoint again.
        assert_eq!(store.list_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_clear_resyncs_and_notifies_once() {
        let store = ScriptedStore::with_lists(vec![Ok(vec![sim(1), sim(2)]), Ok(Vec::new())]);
        let cache = SimulationCache::new(store.clone());
        let probe = Arc::new(ClearedProbe::default());
        cache.set_notifier(probe.clone());

        cache.refresh().await.unwrap();
        assert_eq!(cache.snapshot().simulations.len(), 2);

        cache.clear().await.unwrap();

        let snapshot = cache.snapshot();
        assert!(snapshot.simulations.is_empty());
        assert!(!snapshot.loading);
        assert_eq!(probe.cleared.load(Ordering::SeqCst), 1);
        assert_eq!(store.clear_calls.load(Ordering::SeqCst), 1);
    }

    /// Store whose list call stalls until virtual time advances, to observe
    /// the loading flag mid-flight.
    struct SlowStore;

    #[async_trait]
    impl SimulationStore for SlowStore {
        async fn list_simulations(&self) -> Result<Vec<Simulation>> {
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok(vec![sim(9)])
        }

        async fn clear_simulations(&self) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_loading_flag_tracks_inflight_refresh() {
        let cache = Arc::new(SimulationCache::new(Arc::new(SlowStore)));

        let task = {
            let cache = cache.clone();
            tokio::spawn(async move { cache.refresh().await })
        };

        // Let the refresh reach its suspension point.
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(cache.snapshot().loading);

        task.await.unwrap().unwrap();
        let snapshot = cache.snapshot();
        assert!(!snapshot.loading);
        assert_eq!(snapshot.simulations, vec![sim(9)]);
    }
}
