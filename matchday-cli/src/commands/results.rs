//! Result command handlers
//!
//! Rendering the per-simulation read endpoints: predicted matches and the
//! simulated league table.

use anyhow::Result;
use colored::*;

use matchday_client::ApiClient;
use matchday_core::domain::prediction::{MatchOutcome, MatchPrediction, Standing};
use matchday_core::domain::simulation::SimulationId;

use crate::config::Config;

/// Show the predicted matches of a simulation
pub async fn handle_matches_command(config: &Config, simulation: SimulationId) -> Result<()> {
    let client = ApiClient::new(&config.api_url);
    let matches = client.list_matches(simulation).await?;

    if matches.is_empty() {
        println!(
            "{}",
            format!("No matches found for simulation {}.", simulation).yellow()
        );
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "Found {} match(es) for simulation {}:",
            matches.len(),
            simulation
        )
        .bold()
    );
    println!();
    for m in matches {
        print_match(&m);
    }

    Ok(())
}

/// Show the simulated league table of a simulation
pub async fn handle_table_command(config: &Config, simulation: SimulationId) -> Result<()> {
    let client = ApiClient::new(&config.api_url);
    let standings = client.list_table(simulation).await?;

    if standings.is_empty() {
        println!(
            "{}",
            format!("No table found for simulation {}.", simulation).yellow()
        );
        return Ok(());
    }

    println!(
        "{}",
        format!("Simulated table for simulation {}:", simulation).bold()
    );
    println!(
        "{}",
        format!(
            "  {:>3}  {:<4} {:>3} {:>3} {:>3} {:>3} {:>4}",
            "Pos", "Team", "P", "W", "D", "L", "Pts"
        )
        .dimmed()
    );
    for standing in standings {
        print_standing(&standing);
    }

    Ok(())
}

/// Print one predicted fixture
fn print_match(m: &MatchPrediction) {
    println!(
        "  {} {} {} vs {}  {}",
        "▸".cyan(),
        m.date.dimmed(),
        m.home_id.bold(),
        m.away_id.bold(),
        colorize_outcome(m.prediction)
    );
    println!(
        "      home {:.0}%  draw {:.0}%  away {:.0}%",
        m.probabilities.home_win * 100.0,
        m.probabilities.draw * 100.0,
        m.probabilities.away_win * 100.0
    );
    if let Some(actual) = m.actual {
        println!("      actual: {}", colorize_outcome(actual));
    }
}

/// Print one table row
fn print_standing(standing: &Standing) {
    println!(
        "  {:>3}  {:<4} {:>3} {:>3} {:>3} {:>3} {:>4}",
        standing.position,
        standing.team_id.cyan(),
        standing.played,
        standing.won,
        standing.drew,
        standing.lost,
        standing.points.to_string().bold()
    );
}

/// Colorize a match outcome for display
fn colorize_outcome(outcome: MatchOutcome) -> colored::ColoredString {
    match outcome {
        MatchOutcome::HomeWin => "home win".green(),
        MatchOutcome::Draw => "draw".yellow(),
        MatchOutcome::AwayWin => "away win".red(),
    }
}
