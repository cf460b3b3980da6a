//! Simulation command handlers
//!
//! Listing and clearing the simulations held by the service.

use std::sync::Arc;

use anyhow::Result;
use clap::Subcommand;
use colored::*;

use matchday_client::ApiClient;
use matchday_sync::SimulationCache;

use crate::config::Config;
use crate::notify::ConsoleNotifier;

/// Simulation subcommands
#[derive(Subcommand)]
pub enum SimulationCommands {
    /// List all simulations
    List,
    /// Delete all simulations and their results
    Clear,
}

/// Handle simulation commands
///
/// # Arguments
/// * `command` - The simulation command to execute
/// * `config` - The CLI configuration
pub async fn handle_simulation_command(
    command: SimulationCommands,
    config: &Config,
) -> Result<()> {
    let api = Arc::new(ApiClient::new(&config.api_url));
    let cache = SimulationCache::new(api);
    cache.set_notifier(Arc::new(ConsoleNotifier));

    match command {
        SimulationCommands::List => list_simulations(&cache).await,
        SimulationCommands::Clear => clear_simulations(&cache).await,
    }
}

/// List all simulations
async fn list_simulations(cache: &SimulationCache) -> Result<()> {
    let simulations = cache.refresh().await?;

    if simulations.is_empty() {
        println!("{}", "No simulations found.".yellow());
    } else {
        println!(
            "{}",
            format!("Found {} simulation(s):", simulations.len()).bold()
        );
        for simulation in simulations {
            println!(
                "  {} Simulation {}  created {}",
                "▸".cyan(),
                simulation.id,
                simulation
                    .created_at
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string()
                    .dimmed()
            );
        }
    }

    Ok(())
}

/// Delete all simulations
async fn clear_simulations(cache: &SimulationCache) -> Result<()> {
    cache.clear().await?;
    Ok(())
}
