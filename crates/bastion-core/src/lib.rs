//! # Bastion Core
//!
//! Deterministic turn-based combat engine for Bastion, a deck-building
//! roguelike.
//!
//! A player with a deck of cards fights one or more enemies that follow
//! scripted attack patterns. The engine resolves energy costs, card effects,
//! block and damage arithmetic and stacking status effects across alternating
//! player and enemy turns until one side is defeated. It renders nothing,
//! persists nothing and never blocks.
//!
//! ## Architecture
//!
//! - **Statuses** ([`status`]): per-combatant stack/duration table
//! - **Entities** ([`entity`]): player and enemies composed from shared vitals
//! - **Cards** ([`card`], [`catalog`]): immutable card values and the content library
//! - **Resolvers** ([`resolver`]): damage pipeline, enemy intents, card effects
//! - **Session** ([`session`]): the turn state machine and public entry points
//! - **Log** ([`event`]): typed, append-only combat log
//!
//! ## Usage
//!
//! ```
//! use bastion_core::catalog::{CardCatalog, EnemyKind};
//! use bastion_core::entity::{CharacterClass, Combatant};
//! use bastion_core::session::CombatSession;
//!
//! let mut catalog = CardCatalog::new();
//! let player = catalog.new_player(CharacterClass::Knight);
//! let enemies = vec![EnemyKind::Goblin.spawn(), EnemyKind::Slime.spawn()];
//!
//! let mut session = CombatSession::start_seeded(player, enemies, 42);
//! while !session.is_combat_over() && session.turn() < 50 {
//!     loop {
//!         let target = session.enemies().iter().find(|e| !e.is_dead()).map(|e| e.id());
//!         let energy = session.player().energy();
//!         let Some(card) = session.hand().iter().find(|c| c.cost() <= energy).map(|c| c.id()) else {
//!             break;
//!         };
//!         if !session.play_card(card, target) {
//!             break;
//!         }
//!     }
//!     session.end_player_turn();
//! }
//! let player = session.conclude();
//! assert_eq!(player.piles().total_len(), 10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod card;
pub mod catalog;
pub mod config;
pub mod entity;
pub mod error;
pub mod event;
pub mod resolver;
pub mod session;
pub mod status;

pub use card::{Card, CardEffect, CardId, EffectKind, TargetSelector};
pub use config::CombatConfig;
pub use entity::{CharacterClass, Combatant, Enemy, EnemyId, Player};
pub use error::{ConfigError, PileError, PlayError};
pub use event::{CombatEvent, CombatLog};
pub use resolver::Intent;
pub use session::{CombatRewards, CombatSession, CombatSnapshot, PlayReport};
pub use status::{StatusEffect, StatusKind, StatusTable};

#[cfg(test)]
mod tests;
