//! Combatants: the player, enemies and the state they share.
//!
//! This module provides the combatant types for Bastion's combat engine:
//! - [`EnemyId`]: Identifier of an enemy within a session
//! - [`Vitals`]: Health, block and status table shared by every combatant
//! - [`Combatant`]: The capability the rules operate on
//! - [`Player`]: Vitals plus energy, gold and card [`Piles`]
//! - [`Enemy`]: Vitals plus an attack pattern cursor and rewards
//!
//! # Composition
//!
//! Player and enemy do not share a base type. Each owns a [`Vitals`] value and
//! implements [`Combatant`] by exposing it; player-only and enemy-only data
//! live beside it. The one behavioral difference the trait carries is
//! [`Combatant::gain_block`], which the player overrides to add its strength.
//!
//! # Example
//!
//! ```
//! use bastion_core::entity::Vitals;
//!
//! let mut vitals = Vitals::new(40);
//! vitals.gain_block(5);
//! let lost = vitals.take_damage(8);
//!
//! assert_eq!(lost, 3);
//! assert_eq!(vitals.current_health(), 37);
//! assert_eq!(vitals.block(), 0);
//! ```

pub mod enemy;
pub mod piles;
pub mod player;
mod vitals;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use enemy::{Enemy, EnemyTier, PatternToken};
pub use piles::{DrawOutcome, Piles};
pub use player::{CharacterClass, Player};
pub use vitals::Vitals;

use crate::status::{StatusEffect, StatusKind, StatusTable};

/// Identifier of an enemy within a combat session.
///
/// The session assigns ids by position when combat starts, so ids are dense,
/// start at 0 and follow the fixed enemy iteration order.
///
/// # Example
///
/// ```
/// use bastion_core::entity::EnemyId;
///
/// let first = EnemyId::new(0);
/// let second = EnemyId::new(1);
/// assert!(first < second);
/// assert_eq!(second.index(), 1);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EnemyId(u32);

impl EnemyId {
    /// Creates an `EnemyId` from its slot number.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns the slot as an index into the session's enemy list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for EnemyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EnemyId({})", self.0)
    }
}

impl fmt::Display for EnemyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EnemyId {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

/// Shared capability of everything that fights.
///
/// Implementors only expose their [`Vitals`]; the default methods carry the
/// health, block and status arithmetic.
pub trait Combatant {
    /// Name used in combat log lines.
    fn name(&self) -> &str;

    /// Read access to health, block and statuses.
    fn vitals(&self) -> &Vitals;

    /// Write access to health, block and statuses.
    fn vitals_mut(&mut self) -> &mut Vitals;

    /// True once current health is 0.
    fn is_dead(&self) -> bool {
        self.vitals().is_dead()
    }

    /// Stacks of `kind` on this combatant, 0 if absent.
    fn stacks_of(&self, kind: StatusKind) -> u32 {
        self.vitals().statuses().stacks_of(kind)
    }

    /// The combatant's status table.
    fn statuses(&self) -> &StatusTable {
        self.vitals().statuses()
    }

    /// Applies a status effect using the table's stacking rules.
    fn add_status(&mut self, effect: StatusEffect) {
        self.vitals_mut().statuses_mut().apply(effect);
    }

    /// Takes damage through block. Returns the health actually lost.
    fn take_damage(&mut self, amount: u32) -> u32 {
        self.vitals_mut().take_damage(amount)
    }

    /// Gains block. Returns the block actually added.
    fn gain_block(&mut self, amount: u32) -> u32 {
        self.vitals_mut().gain_block(amount)
    }

    /// Restores health up to the maximum. Returns the health restored.
    fn heal(&mut self, amount: u32) -> u32 {
        self.vitals_mut().heal(amount)
    }
}
