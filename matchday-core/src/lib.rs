//! Matchday Core
//!
//! Core types for the Matchday prediction client.
//!
//! This crate contains:
//! - Domain types: Core business entities (Job, Simulation, predictions)
//! - DTOs: Wire payloads exchanged with the prediction service

pub mod domain;
pub mod dto;
