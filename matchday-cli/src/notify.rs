//! Console notifier
//!
//! Terminal rendition of the transient notifications the sync core emits,
//! one line per event.

use colored::*;

use matchday_core::domain::job::JobId;
use matchday_core::domain::simulation::SimulationId;
use matchday_sync::Notifier;

/// Prints each notification as a colored line on stdout.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn job_started(&self, job: JobId) {
        println!("{}", format!("Simulation job #{} began", job).cyan());
    }

    fn job_completed(&self, simulation: Option<SimulationId>) {
        match simulation {
            Some(id) => println!("{}", format!("Simulation #{} complete!", id).green()),
            None => println!("{}", "Simulation complete!".green()),
        }
    }

    fn job_failed(&self, simulation: Option<SimulationId>) {
        match simulation {
            Some(id) => println!("{}", format!("Simulation #{} failed...", id).red()),
            None => println!("{}", "Simulation failed...".red()),
        }
    }

    fn simulations_cleared(&self) {
        println!("{}", "All simulations have been deleted".yellow());
    }
}
