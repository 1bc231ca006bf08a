//! Enemy intent resolution and execution.
//!
//! [`resolve_intent`] is a pure function of an enemy's pattern, cursor and
//! strength. Telegraph display and [`execute_intent`] both go through it, so
//! what the player is shown is what the enemy does.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::CombatConfig;
use crate::entity::{Combatant, Enemy, PatternToken, Player};
use crate::status::{StatusEffect, StatusKind};

use super::damage::apply_attack_modifiers;

/// Base damage of [`PatternToken::AttackSmall`].
pub const ATTACK_SMALL_DAMAGE: u32 = 6;
/// Base damage of [`PatternToken::AttackMedium`].
pub const ATTACK_MEDIUM_DAMAGE: u32 = 10;
/// Base damage of [`PatternToken::AttackLarge`].
pub const ATTACK_LARGE_DAMAGE: u32 = 16;
/// Block gained by [`PatternToken::Defend`].
pub const DEFEND_BLOCK: u32 = 8;
/// Strength gained by [`PatternToken::BuffStrength`].
pub const BUFF_STRENGTH_AMOUNT: u32 = 2;
/// Weak stacks applied by [`PatternToken::DebuffWeak`].
pub const DEBUFF_WEAK_AMOUNT: u32 = 1;

/// An enemy's declared next action.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Intent {
    /// Attack the player. `damage` already includes the enemy's strength but
    /// not weak/vulnerable.
    Attack {
        /// Damage before multipliers.
        damage: u32,
    },
    /// Gain block.
    Defend {
        /// Block to gain.
        block: u32,
    },
    /// Permanent self-buff.
    Buff {
        /// Status gained.
        status: StatusKind,
        /// Stacks gained.
        amount: u32,
    },
    /// Debuff on the player.
    Debuff {
        /// Status applied.
        status: StatusKind,
        /// Stacks applied.
        amount: u32,
    },
    /// Unrecognized token or empty pattern. Executes as a no-op.
    Unknown,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attack { damage } => write!(f, "Attack for {damage} damage"),
            Self::Defend { block } => write!(f, "Defend for {block} block"),
            Self::Buff { status, amount } => write!(f, "Gain {amount} {status}"),
            Self::Debuff { status, amount } => write!(f, "Apply {amount} {status}"),
            Self::Unknown => write!(f, "???"),
        }
    }
}

/// What an executed intent did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IntentOutcome {
    /// The intent that ran.
    pub intent: Intent,
    /// Attack damage after multipliers, before block. 0 for non-attacks.
    pub damage: u32,
    /// Health the player actually lost.
    pub health_lost: u32,
}

/// The intent at the enemy's cursor. Never mutates.
#[must_use]
pub fn resolve_intent(enemy: &Enemy) -> Intent {
    let strength = enemy.stacks_of(StatusKind::Strength);
    let attack = |base: u32| Intent::Attack {
        damage: base.saturating_add(strength),
    };

    match enemy.current_token() {
        Some(PatternToken::AttackSmall) => attack(ATTACK_SMALL_DAMAGE),
        Some(PatternToken::AttackMedium) => attack(ATTACK_MEDIUM_DAMAGE),
        Some(PatternToken::AttackLarge) => attack(ATTACK_LARGE_DAMAGE),
        Some(PatternToken::Defend) => Intent::Defend {
            block: DEFEND_BLOCK,
        },
        Some(PatternToken::BuffStrength) => Intent::Buff {
            status: StatusKind::Strength,
            amount: BUFF_STRENGTH_AMOUNT,
        },
        Some(PatternToken::DebuffWeak) => Intent::Debuff {
            status: StatusKind::Weak,
            amount: DEBUFF_WEAK_AMOUNT,
        },
        Some(PatternToken::Unrecognized(_)) | None => Intent::Unknown,
    }
}

/// Resolves and carries out the enemy's current intent against the player,
/// then advances the cursor by exactly one.
///
/// Returns `None` without touching anything if the enemy is dead.
pub fn execute_intent(
    enemy: &mut Enemy,
    player: &mut Player,
    config: &CombatConfig,
) -> Option<IntentOutcome> {
    if enemy.is_dead() {
        return None;
    }

    let intent = resolve_intent(enemy);
    let mut damage = 0;
    let mut health_lost = 0;

    match intent {
        Intent::Attack { damage: base } => {
            damage = apply_attack_modifiers(base, enemy.statuses(), player.statuses(), config);
            health_lost = player.take_damage(damage);
        }
        Intent::Defend { block } => {
            enemy.gain_block(block);
        }
        Intent::Buff { status, amount } => {
            enemy.add_status(StatusEffect::permanent(status, amount));
        }
        Intent::Debuff { status, amount } => {
            player.add_status(StatusEffect::timed(
                status,
                amount,
                config.enemy_debuff_duration,
            ));
        }
        Intent::Unknown => {
            tracing::debug!(
                enemy = enemy.name(),
                token = ?enemy.current_token(),
                "unknown intent, skipping action"
            );
        }
    }

    enemy.advance_pattern();
    Some(IntentOutcome {
        intent,
        damage,
        health_lost,
    })
}
