//! Wire payloads for the prediction service API
//!
//! These mirror the service's JSON responses field for field; the camelCase
//! names on the wire are part of the external contract.

pub mod job;
