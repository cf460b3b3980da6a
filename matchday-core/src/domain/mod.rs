//! Core domain types
//!
//! This module contains the domain structures shared across the Matchday
//! crates. Jobs and simulations are owned by the prediction service; the
//! client only ever observes them.

pub mod job;
pub mod prediction;
pub mod simulation;
