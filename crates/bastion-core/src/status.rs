//! Status effects and the per-combatant status table.
//!
//! Every combatant owns a [`StatusTable`] mapping a [`StatusKind`] to a single
//! [`StatusEffect`] entry. Re-applying a kind that is already present sums the
//! stacks and keeps the duration of the first application.
//!
//! # Durations
//!
//! - `duration: None` is permanent and is never touched by [`StatusTable::tick`].
//! - `duration: Some(n)` is decremented once per tick; the entry is removed
//!   entirely (not zeroed) as soon as the decremented value reaches 0.
//!
//! # Example
//!
//! ```
//! use bastion_core::status::{StatusKind, StatusTable};
//!
//! let mut table = StatusTable::new();
//! table.add(StatusKind::Weak, 1, Some(2));
//! table.add(StatusKind::Weak, 2, Some(5)); // stacks sum, first duration wins
//!
//! assert_eq!(table.stacks_of(StatusKind::Weak), 3);
//! assert_eq!(table.get(StatusKind::Weak).unwrap().duration, Some(2));
//!
//! table.tick();
//! table.tick();
//! assert_eq!(table.stacks_of(StatusKind::Weak), 0);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Status Kinds
// =============================================================================

/// The kinds of status effect the combat rules understand.
///
/// Ordering is used by [`StatusTable`] for deterministic iteration.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// Adds its stacks to outgoing attack damage (and, for the player, to block gained).
    Strength,
    /// Outgoing attack damage of the afflicted combatant is multiplied by 0.75.
    Weak,
    /// Incoming attack damage to the afflicted combatant is multiplied by 1.5.
    Vulnerable,
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strength => write!(f, "Strength"),
            Self::Weak => write!(f, "Weak"),
            Self::Vulnerable => write!(f, "Vulnerable"),
        }
    }
}

// =============================================================================
// Status Effect
// =============================================================================

/// A single status entry: kind, stack count and optional remaining duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffect {
    /// Which status this is.
    pub kind: StatusKind,
    /// Magnitude of the effect.
    pub stacks: u32,
    /// Remaining turns, or `None` for a permanent effect.
    pub duration: Option<u32>,
}

impl StatusEffect {
    /// Creates a status effect that never expires.
    #[must_use]
    pub const fn permanent(kind: StatusKind, stacks: u32) -> Self {
        Self {
            kind,
            stacks,
            duration: None,
        }
    }

    /// Creates a status effect that expires after `turns` ticks.
    #[must_use]
    pub const fn timed(kind: StatusKind, stacks: u32, turns: u32) -> Self {
        Self {
            kind,
            stacks,
            duration: Some(turns),
        }
    }
}

// =============================================================================
// Status Table
// =============================================================================

/// Per-combatant mapping from status kind to its entry.
///
/// Serialized as an ordered list of [`StatusEffect`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<StatusEffect>", into = "Vec<StatusEffect>")]
pub struct StatusTable {
    entries: BTreeMap<StatusKind, StatusEffect>,
}

impl StatusTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Applies `stacks` of `kind`.
    ///
    /// If the kind is already present the stacks are summed and the existing
    /// duration is left unchanged; otherwise a new entry is inserted.
    pub fn add(&mut self, kind: StatusKind, stacks: u32, duration: Option<u32>) {
        self.entries
            .entry(kind)
            .and_modify(|existing| existing.stacks = existing.stacks.saturating_add(stacks))
            .or_insert(StatusEffect {
                kind,
                stacks,
                duration,
            });
    }

    /// Applies a prepared [`StatusEffect`]. Same stacking rules as [`Self::add`].
    pub fn apply(&mut self, effect: StatusEffect) {
        self.add(effect.kind, effect.stacks, effect.duration);
    }

    /// Returns the stacks of `kind`, or 0 if absent.
    #[must_use]
    pub fn stacks_of(&self, kind: StatusKind) -> u32 {
        self.entries.get(&kind).map_or(0, |effect| effect.stacks)
    }

    /// Returns true if `kind` is present with at least one stack.
    #[must_use]
    pub fn has(&self, kind: StatusKind) -> bool {
        self.stacks_of(kind) > 0
    }

    /// Returns the entry for `kind`, if present.
    #[must_use]
    pub fn get(&self, kind: StatusKind) -> Option<&StatusEffect> {
        self.entries.get(&kind)
    }

    /// Removes `kind` entirely. No-op if absent.
    pub fn remove(&mut self, kind: StatusKind) {
        self.entries.remove(&kind);
    }

    /// Advances every timed entry by one turn.
    ///
    /// Durations are decremented by 1 and any entry whose duration reaches 0
    /// is dropped. Permanent entries are untouched.
    pub fn tick(&mut self) {
        self.entries.retain(|_, effect| match effect.duration {
            None => true,
            Some(turns) => {
                let remaining = turns.saturating_sub(1);
                effect.duration = Some(remaining);
                remaining > 0
            }
        });
    }

    /// Iterates entries in deterministic (kind) order.
    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> + '_ {
        self.entries.values()
    }

    /// Number of distinct kinds present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no status is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<StatusEffect>> for StatusTable {
    fn from(effects: Vec<StatusEffect>) -> Self {
        let mut table = Self::new();
        for effect in effects {
            table.apply(effect);
        }
        table
    }
}

impl From<StatusTable> for Vec<StatusEffect> {
    fn from(table: StatusTable) -> Self {
        table.entries.into_values().collect()
    }
}
