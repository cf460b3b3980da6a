//! Run command handler
//!
//! Submits a new simulation run, tracks the job until it reaches a terminal
//! state, and shows the refreshed simulation list.

use std::sync::{Arc, Mutex};

use anyhow::Result;
use colored::*;
use tokio::sync::Notify;

use matchday_client::ApiClient;
use matchday_core::domain::job::JobId;
use matchday_core::domain::simulation::SimulationId;
use matchday_sync::{
    DEFAULT_POLL_INTERVAL, JobTracker, Notifier, SelectionListener, SimulationCache,
};

use crate::config::Config;
use crate::notify::ConsoleNotifier;

/// Console notifier that additionally signals when the watched job settles.
struct WatchNotifier {
    console: ConsoleNotifier,
    settled: Notify,
}

impl Notifier for WatchNotifier {
    fn job_started(&self, job: JobId) {
        self.console.job_started(job);
    }

    fn job_completed(&self, simulation: Option<SimulationId>) {
        self.console.job_completed(simulation);
        self.settled.notify_one();
    }

    fn job_failed(&self, simulation: Option<SimulationId>) {
        self.console.job_failed(simulation);
        self.settled.notify_one();
    }

    fn simulations_cleared(&self) {
        self.console.simulations_cleared();
    }
}

/// Remembers the last simulation the tracker selected.
#[derive(Default)]
struct SelectedCell {
    value: Mutex<Option<SimulationId>>,
}

impl SelectionListener for SelectedCell {
    fn simulation_selected(&self, simulation: SimulationId) {
        *self.value.lock().unwrap() = Some(simulation);
    }
}

/// Submit one run and watch it to completion
pub async fn handle_run_command(config: &Config) -> Result<()> {
    let api = Arc::new(ApiClient::new(&config.api_url));
    let cache = Arc::new(SimulationCache::new(api.clone()));
    let tracker = JobTracker::new(api.clone(), cache.clone(), DEFAULT_POLL_INTERVAL);

    let notifier = Arc::new(WatchNotifier {
        console: ConsoleNotifier,
        settled: Notify::new(),
    });
    let selected = Arc::new(SelectedCell::default());
    tracker.set_notifier(notifier.clone());
    tracker.set_selection_listener(selected.clone());
    cache.set_notifier(notifier.clone());

    let job_id = api.submit_simulation().await?;
    tracker.enqueue(job_id);

    // The completed/failed notification fires after the cache refresh and
    // the selection update, so once it lands the results are readable.
    notifier.settled.notified().await;
    tracker.shutdown();

    let selected = *selected.value.lock().unwrap();
    if let Some(simulation) = selected {
        println!();
        println!(
            "{}",
            format!("Simulation {} is now selected.", simulation).bold()
        );
        print_simulations(&cache, selected);
    }

    Ok(())
}

/// Print the cached simulation list, marking the selected entry
fn print_simulations(cache: &SimulationCache, selected: Option<SimulationId>) {
    let snapshot = cache.snapshot();

    if snapshot.simulations.is_empty() {
        println!("{}", "No simulations found.".yellow());
        return;
    }

    println!(
        "{}",
        format!("Found {} simulation(s):", snapshot.simulations.len()).bold()
    );
    for simulation in &snapshot.simulations {
        let marker = if Some(simulation.id) == selected {
            "▸".cyan()
        } else {
            " ".normal()
        };
        println!(
            "  {} Simulation {}  created {}",
            marker,
            simulation.id,
            simulation
                .created_at
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
                .dimmed()
        );
    }
}
