//! Generic fixed-interval polling of a dynamic set of identifiers
//!
//! [`PollableSet`] tracks outstanding work-item ids and, while any are
//! tracked, runs one poll tick per interval: every tracked id is checked
//! concurrently, the whole batch is awaited, and ids whose result is
//! terminal are removed and reported to the sink exactly once. When the set
//! drains, the poll task exits; the next enqueue starts a fresh one.

use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Status check invoked for every tracked id on every tick.
///
/// Fixed at construction. A returned error means "could not determine
/// status this tick": the id stays tracked and is retried on the next tick.
#[async_trait]
pub trait StatusProbe: Send + Sync + 'static {
    type Id: Copy + Eq + Display + Send + Sync + 'static;
    type Outcome: Send + 'static;

    async fn check(&self, id: Self::Id) -> anyhow::Result<Self::Outcome>;

    /// Whether this outcome ends the item's lifecycle.
    fn is_terminal(&self, outcome: &Self::Outcome) -> bool;
}

/// Receiver of terminal results.
///
/// Called at most once per tick, with every id that reached a terminal
/// outcome in that tick, ordered by the tick's input order (enqueue order),
/// not by network completion order. Each id appears in at most one batch
/// over the lifetime of the set, so "the last terminal item of the batch"
/// is well-defined for consumers that track a single current item.
#[async_trait]
pub trait TerminalSink<I, O>: Send + Sync {
    async fn on_terminal(&self, batch: Vec<(I, O)>);
}

/// A set of outstanding ids polled on a fixed cadence.
///
/// The set is the sole owner of its tracked ids: consumers enqueue and read
/// snapshots, and only the poll task removes. Dropping the set (or calling
/// [`shutdown`](PollableSet::shutdown)) cancels the poll task before its
/// next tick; checks already in flight resolve but their results are
/// discarded.
pub struct PollableSet<P: StatusProbe> {
    inner: Arc<SetInner<P>>,
}

struct SetInner<P: StatusProbe> {
    probe: P,
    interval: Duration,
    state: Mutex<SetState<P::Id>>,
    /// Current sink, read fresh on every tick so consumers can swap it
    /// without restarting the poll task.
    sink: Mutex<Arc<dyn TerminalSink<P::Id, P::Outcome>>>,
    alive: AtomicBool,
}

struct SetState<I> {
    /// Tracked ids in enqueue order, no duplicates.
    ids: Vec<I>,
    /// Handle of the running poll task, None while the set is idle.
    poller: Option<JoinHandle<()>>,
}

impl<P: StatusProbe> PollableSet<P> {
    /// Creates an idle set. Polling starts on the first enqueue.
    pub fn new(
        probe: P,
        interval: Duration,
        sink: Arc<dyn TerminalSink<P::Id, P::Outcome>>,
    ) -> Self {
        Self {
            inner: Arc::new(SetInner {
                probe,
                interval,
                state: Mutex::new(SetState {
                    ids: Vec::new(),
                    poller: None,
                }),
                sink: Mutex::new(sink),
                alive: AtomicBool::new(true),
            }),
        }
    }

    /// Adds `id` to the tracked set if absent.
    ///
    /// Idempotent: enqueueing an already-tracked id is a no-op. If the set
    /// was idle, the poll task is started. Must be called from within a
    /// Tokio runtime.
    pub fn enqueue(&self, id: P::Id) {
        if !self.inner.alive.load(Ordering::SeqCst) {
            return;
        }

        let mut state = self.inner.state.lock().unwrap();
        if state.ids.contains(&id) {
            debug!("id {} already tracked, ignoring enqueue", id);
            return;
        }
        state.ids.push(id);

        if state.poller.is_none() {
            debug!("tracked set became non-empty, starting poll task");
            let inner = Arc::clone(&self.inner);
            state.poller = Some(tokio::spawn(poll_loop(inner)));
        }
    }

    /// Replaces the terminal sink. Takes effect from the next tick; the
    /// running poll task is not restarted and in-flight checks are kept.
    pub fn set_sink(&self, sink: Arc<dyn TerminalSink<P::Id, P::Outcome>>) {
        *self.inner.sink.lock().unwrap() = sink;
    }

    /// Snapshot of the currently tracked ids, in enqueue order.
    pub fn tracked(&self) -> Vec<P::Id> {
        self.inner.state.lock().unwrap().ids.clone()
    }

    /// Whether no poll task is running.
    pub fn is_idle(&self) -> bool {
        self.inner.state.lock().unwrap().poller.is_none()
    }

    /// Cancels the poll task and clears the tracked set.
    ///
    /// Checks already in flight resolve but their results are discarded; no
    /// mutation or sink delivery happens after this returns. Subsequent
    /// enqueues are no-ops.
    pub fn shutdown(&self) {
        self.inner.alive.store(false, Ordering::SeqCst);
        let mut state = self.inner.state.lock().unwrap();
        if let Some(poller) = state.poller.take() {
            poller.abort();
        }
        state.ids.clear();
    }
}

impl<P: StatusProbe> Drop for PollableSet<P> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// One poll task lifetime: tick until the tracked set drains.
///
/// Each tick awaits its whole check batch before touching the set, so no
/// partial mutation is ever visible and two checks for the same id never
/// overlap: the next sleep only starts after the previous batch (and the
/// sink) resolved.
async fn poll_loop<P: StatusProbe>(inner: Arc<SetInner<P>>) {
    loop {
        tokio::time::sleep(inner.interval).await;

        let ids: Vec<P::Id> = inner.state.lock().unwrap().ids.clone();

        // All checks for the tick run concurrently; handles are awaited in
        // input order so the terminal batch is ordered by enqueue order.
        let mut checks = Vec::with_capacity(ids.len());
        for id in ids {
            let inner = Arc::clone(&inner);
            checks.push((id, tokio::spawn(async move { inner.probe.check(id).await })));
        }

        let mut terminal: Vec<(P::Id, P::Outcome)> = Vec::new();
        for (id, handle) in checks {
            match handle.await {
                Ok(Ok(outcome)) => {
                    if inner.probe.is_terminal(&outcome) {
                        terminal.push((id, outcome));
                    }
                }
                Ok(Err(e)) => {
                    warn!("status check for {} failed, will retry: {:#}", id, e);
                }
                Err(e) => {
                    warn!("status check task for {} panicked: {}", id, e);
                }
            }
        }

        if !inner.alive.load(Ordering::SeqCst) {
            return;
        }

        // Terminal ids leave the set in the same step that schedules their
        // side effects: a repeated poll can never re-report them. The drain
        // decision happens under the same lock as the removal, so an enqueue
        // racing with it either lands before (and this task keeps going) or
        // observes the cleared poller slot and starts a fresh task.
        let drained = {
            let mut state = inner.state.lock().unwrap();
            state.ids.retain(|id| !terminal.iter().any(|(t, _)| t == id));
            let drained = state.ids.is_empty();
            if drained {
                state.poller = None;
            }
            drained
        };

        if !terminal.is_empty() {
            let sink = inner.sink.lock().unwrap().clone();
            sink.on_terminal(terminal).await;
        }

        if drained {
            debug!("tracked set drained, polling stopped");
            return;
        }
    }
}
