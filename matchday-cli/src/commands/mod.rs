//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod results;
mod run;
mod simulations;

pub use simulations::SimulationCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;
use matchday_core::domain::simulation::SimulationId;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Submit a new simulation run and watch it to completion
    Run,
    /// Simulation management
    Simulations {
        #[command(subcommand)]
        command: SimulationCommands,
    },
    /// Show the predicted matches of a simulation
    Matches {
        /// Simulation id
        simulation: SimulationId,
    },
    /// Show the simulated league table of a simulation
    Table {
        /// Simulation id
        simulation: SimulationId,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Run => run::handle_run_command(config).await,
        Commands::Simulations { command } => {
            simulations::handle_simulation_command(command, config).await
        }
        Commands::Matches { simulation } => {
            results::handle_matches_command(config, simulation).await
        }
        Commands::Table { simulation } => results::handle_table_command(config, simulation).await,
    }
}
