//! Health, block and status state shared by every combatant.

use serde::{Deserialize, Serialize};

use crate::status::StatusTable;

/// Health, block and statuses of a single combatant.
///
/// # Invariants
///
/// - `current_health <= max_health`
/// - health and block never go below 0 (both are unsigned and every
///   subtraction saturates)
/// - once `current_health` reaches 0 the combatant is dead and further damage
///   is ignored
///
/// Deserialized vitals are clamped the same way as [`Vitals::with_health`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "VitalsRepr")]
pub struct Vitals {
    max_health: u32,
    current_health: u32,
    block: u32,
    statuses: StatusTable,
}

/// Wire form of [`Vitals`], before the health cap is enforced.
#[derive(Deserialize)]
struct VitalsRepr {
    max_health: u32,
    current_health: u32,
    block: u32,
    statuses: StatusTable,
}

impl From<VitalsRepr> for Vitals {
    fn from(repr: VitalsRepr) -> Self {
        Self {
            max_health: repr.max_health,
            current_health: repr.current_health.min(repr.max_health),
            block: repr.block,
            statuses: repr.statuses,
        }
    }
}

impl Vitals {
    /// Creates vitals at full health with no block and no statuses.
    #[must_use]
    pub fn new(max_health: u32) -> Self {
        Self::with_health(max_health, max_health)
    }

    /// Creates vitals with a specific current health, clamped to the maximum.
    #[must_use]
    pub fn with_health(max_health: u32, current_health: u32) -> Self {
        Self {
            max_health,
            current_health: current_health.min(max_health),
            block: 0,
            statuses: StatusTable::new(),
        }
    }

    /// Maximum health, fixed at creation.
    #[must_use]
    pub const fn max_health(&self) -> u32 {
        self.max_health
    }

    /// Current health.
    #[must_use]
    pub const fn current_health(&self) -> u32 {
        self.current_health
    }

    /// Current block.
    #[must_use]
    pub const fn block(&self) -> u32 {
        self.block
    }

    /// True once current health is 0.
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.current_health == 0
    }

    /// Status table.
    #[must_use]
    pub const fn statuses(&self) -> &StatusTable {
        &self.statuses
    }

    /// Mutable status table.
    #[must_use]
    pub fn statuses_mut(&mut self) -> &mut StatusTable {
        &mut self.statuses
    }

    /// Applies `amount` damage: block absorbs first, the rest comes off health.
    ///
    /// Returns the health actually lost. A dead combatant takes nothing.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        if self.is_dead() {
            return 0;
        }
        let through_block = amount.saturating_sub(self.block);
        self.block = self.block.saturating_sub(amount);
        let lost = through_block.min(self.current_health);
        self.current_health -= lost;
        lost
    }

    /// Adds `amount` block. Returns the block added.
    pub fn gain_block(&mut self, amount: u32) -> u32 {
        self.block = self.block.saturating_add(amount);
        amount
    }

    /// Drops block to 0.
    pub fn reset_block(&mut self) {
        self.block = 0;
    }

    /// Restores up to `amount` health without exceeding the maximum.
    ///
    /// Returns the health restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.max_health.saturating_sub(self.current_health));
        self.current_health += healed;
        healed
    }
}
