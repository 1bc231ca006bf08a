//! Crate-level combat suites.
//!
//! - `scenarios.rs`: end-to-end rule scenarios driven through the session
//! - `determinism.rs`: same seed and inputs produce the same combat
//! - `properties.rs`: property tests for conservation and arithmetic invariants
//! - `helpers.rs`: factories and tracing setup shared by the suites

mod determinism;
mod helpers;
