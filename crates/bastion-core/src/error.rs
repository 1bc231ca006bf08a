//! Error types.
//!
//! Rule violations during play are ordinary outcomes, not failures of the
//! engine: [`PlayError`] describes why a card play was rejected and leaves the
//! session untouched. [`ConfigError`] covers loading rule configuration and
//! [`PileError`] rejects loaded card piles that break card conservation.

use crate::card::CardId;

/// Why a card play was rejected. A rejected play never mutates the session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayError {
    /// The player or every enemy is already dead.
    #[error("combat is already over")]
    CombatOver,

    /// The card costs more energy than the player has left.
    #[error("not enough energy to play {card}: costs {cost}, have {available}")]
    InsufficientEnergy {
        /// Name of the rejected card.
        card: String,
        /// Energy the card costs.
        cost: u32,
        /// Energy the player had.
        available: u32,
    },

    /// No card with this id is in the hand.
    #[error("card {0} is not in hand")]
    CardNotInHand(CardId),
}

/// Loaded card piles that break card conservation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PileError {
    /// The same card id sits in two pile slots.
    #[error("card {0} appears in more than one pile slot")]
    DuplicateCard(CardId),
}

/// Failure to load a [`CombatConfig`](crate::config::CombatConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid JSON for the config schema.
    #[error("failed to parse combat config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds an unusable value.
    #[error("invalid combat config field `{field}`: {reason}")]
    Invalid {
        /// Offending field name.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}
