//! The combat log.
//!
//! Everything user-facing that happens in a session is recorded as a typed
//! [`CombatEvent`] tagged with the turn it happened on. The human-readable
//! line is the event's `Display` output, rendered on demand. The log is
//! append-only.
//!
//! Every push is mirrored to `tracing` at debug level so a subscriber sees
//! the same stream the player does.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::resolver::intent::Intent;
use crate::status::StatusKind;

/// Something that happened during combat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CombatEvent {
    /// Combat opened.
    CombatStarted,
    /// The opening hand was drawn.
    OpeningHand {
        /// Cards actually drawn.
        drawn: usize,
    },
    /// A new player turn began.
    TurnStarted {
        /// Turn number, starting at 1.
        turn: u32,
    },
    /// The player drew for the new turn.
    TurnHand {
        /// Cards actually drawn.
        drawn: usize,
        /// Energy after the reset.
        energy: u32,
        /// Maximum energy.
        max_energy: u32,
    },
    /// The player ended the turn and discarded the hand.
    TurnEnded {
        /// Cards discarded.
        discarded: usize,
    },
    /// Enemies started acting.
    EnemyTurnStarted,
    /// An enemy carried out its intent.
    EnemyAction {
        /// Enemy name.
        enemy: String,
        /// What it did.
        intent: Intent,
    },
    /// The player died during the enemy turn.
    PlayerDefeated,
    /// A card play was rejected for lack of energy.
    NotEnoughEnergy {
        /// Card name.
        card: String,
        /// Card cost.
        cost: u32,
        /// Energy available.
        available: u32,
    },
    /// A card play was rejected because combat had ended.
    CombatAlreadyOver {
        /// Card name.
        card: String,
    },
    /// A card was played.
    CardPlayed {
        /// Card name.
        card: String,
        /// Energy left.
        energy: u32,
        /// Maximum energy.
        max_energy: u32,
    },
    /// A targeted effect had nothing to hit.
    NoValidTarget {
        /// Card name.
        card: String,
    },
    /// The player gained block.
    BlockGained {
        /// Block added (strength included).
        amount: u32,
    },
    /// The player gained strength.
    StrengthGained {
        /// Stacks added.
        amount: u32,
    },
    /// The player applied a debuff to an enemy.
    DebuffApplied {
        /// Status applied.
        status: StatusKind,
        /// Stacks applied.
        amount: u32,
        /// Enemy name.
        target: String,
    },
    /// The player hit an enemy.
    DamageDealt {
        /// Enemy name.
        target: String,
        /// Damage after modifiers, before block.
        amount: u32,
    },
    /// An enemy reached 0 health.
    EnemyDefeated {
        /// Enemy name.
        enemy: String,
    },
    /// The discard pile was shuffled into the empty draw pile.
    Reshuffled,
    /// Every enemy is dead.
    Victory,
    /// Victory gold was awarded.
    GoldGained {
        /// Gold added.
        amount: u32,
    },
    /// The player is dead.
    Defeat,
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CombatStarted => write!(f, "Combat begins!"),
            Self::OpeningHand { drawn } => write!(f, "Drew {drawn} cards."),
            Self::TurnStarted { turn } => write!(f, "--- Turn {turn} ---"),
            Self::TurnHand {
                drawn,
                energy,
                max_energy,
            } => write!(f, "Drew {drawn} cards. Energy: {energy}/{max_energy}"),
            Self::TurnEnded { .. } => write!(f, "Turn ended. Discarded hand."),
            Self::EnemyTurnStarted => write!(f, "--- Enemy Turn ---"),
            Self::EnemyAction { enemy, intent } => write!(f, "{enemy} uses {intent}"),
            Self::PlayerDefeated => write!(f, "You have been defeated!"),
            Self::NotEnoughEnergy { .. } => write!(f, "Not enough energy!"),
            Self::CombatAlreadyOver { card } => {
                write!(f, "Cannot play {card}: combat is over.")
            }
            Self::CardPlayed {
                card,
                energy,
                max_energy,
            } => write!(f, "Played {card}. Energy: {energy}/{max_energy}"),
            Self::NoValidTarget { card } => write!(f, "{card} has no valid target."),
            Self::BlockGained { amount } => write!(f, "Gained {amount} block"),
            Self::StrengthGained { amount } => write!(f, "Gained {amount} Strength"),
            Self::DebuffApplied {
                status,
                amount,
                target,
            } => write!(f, "Applied {amount} {status} to {target}"),
            Self::DamageDealt { target, amount } => {
                write!(f, "Dealt {amount} damage to {target}")
            }
            Self::EnemyDefeated { enemy } => write!(f, "{enemy} has been defeated!"),
            Self::Reshuffled => write!(f, "Shuffled discard pile into draw pile."),
            Self::Victory => write!(f, "=== VICTORY ==="),
            Self::GoldGained { amount } => write!(f, "Gained {amount} gold!"),
            Self::Defeat => write!(f, "=== DEFEAT ==="),
        }
    }
}

/// A logged event and the turn it happened on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Turn number when the event was recorded.
    pub turn: u32,
    /// The event.
    pub event: CombatEvent,
}

/// Append-only, ordered record of a combat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatLog {
    entries: Vec<LogEntry>,
    turn: u32,
}

impl Default for CombatLog {
    fn default() -> Self {
        Self::new()
    }
}

impl CombatLog {
    /// Creates an empty log at turn 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            turn: 1,
        }
    }

    /// Sets the turn stamped on subsequent entries.
    pub(crate) fn set_turn(&mut self, turn: u32) {
        self.turn = turn;
    }

    /// Appends an event.
    pub(crate) fn push(&mut self, event: CombatEvent) {
        tracing::debug!(turn = self.turn, "{event}");
        self.entries.push(LogEntry {
            turn: self.turn,
            event,
        });
    }

    /// Every entry in order.
    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Iterates the events in order.
    pub fn events(&self) -> impl Iterator<Item = &CombatEvent> + '_ {
        self.entries.iter().map(|entry| &entry.event)
    }

    /// Every line, rendered.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.events().map(ToString::to_string).collect()
    }

    /// The last `n` lines (fewer if the log is shorter), oldest first.
    #[must_use]
    pub fn recent(&self, n: usize) -> Vec<String> {
        let start = self.entries.len().saturating_sub(n);
        self.entries[start..]
            .iter()
            .map(|entry| entry.event.to_string())
            .collect()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries matching `predicate`.
    pub fn count_where(&self, predicate: impl Fn(&CombatEvent) -> bool) -> usize {
        self.events().filter(|event| predicate(event)).count()
    }
}
