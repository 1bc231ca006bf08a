//! Rule resolution: the parts of combat that turn declared actions into state
//! changes.
//!
//! # Modules
//!
//! - [`damage`]: the attack damage pipeline (strength, vulnerable, weak)
//! - [`intent`]: enemy intent resolution and execution
//! - `effect`: the card-effect interpreter used by the session
//!
//! # Invariants
//!
//! - Intent resolution is pure. Only execution advances a pattern cursor, and
//!   it advances it exactly once per action.
//! - Player attacks and enemy attacks share [`damage::apply_attack_modifiers`],
//!   so both paths apply multipliers in the same order with the same
//!   truncation.
//! - Nothing in this module consults randomness except drawing, which goes
//!   through the session's seeded generator.

pub mod damage;
pub(crate) mod effect;
pub mod intent;

pub use damage::{apply_attack_modifiers, attack_damage};
pub use intent::{execute_intent, resolve_intent, Intent, IntentOutcome};
