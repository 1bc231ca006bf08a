//! Enemy combatants and their scripted attack patterns.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::resolver::intent::{resolve_intent, Intent};

use super::{Combatant, EnemyId, Vitals};

/// Encounter tier of an enemy.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyTier {
    /// Regular encounter.
    Normal,
    /// Tougher encounter that grants a card reward.
    Elite,
    /// End-of-act encounter.
    Boss,
}

/// One step of an enemy's attack pattern.
///
/// On the wire a token is its snake_case name. Unknown names parse into
/// [`PatternToken::Unrecognized`], which resolves to an unknown intent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PatternToken {
    /// Light attack.
    AttackSmall,
    /// Medium attack.
    AttackMedium,
    /// Heavy attack.
    AttackLarge,
    /// Gain block.
    Defend,
    /// Gain permanent strength.
    BuffStrength,
    /// Weaken the player.
    DebuffWeak,
    /// A token the resolver does not know.
    Unrecognized(String),
}

impl PatternToken {
    /// Parses a token name.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        match token {
            "attack_small" => Self::AttackSmall,
            "attack_medium" => Self::AttackMedium,
            "attack_large" => Self::AttackLarge,
            "defend" => Self::Defend,
            "buff_strength" => Self::BuffStrength,
            "debuff_weak" => Self::DebuffWeak,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// Returns the token name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::AttackSmall => "attack_small",
            Self::AttackMedium => "attack_medium",
            Self::AttackLarge => "attack_large",
            Self::Defend => "defend",
            Self::BuffStrength => "buff_strength",
            Self::DebuffWeak => "debuff_weak",
            Self::Unrecognized(token) => token,
        }
    }
}

impl fmt::Display for PatternToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for PatternToken {
    fn from(token: String) -> Self {
        Self::parse(&token)
    }
}

impl From<PatternToken> for String {
    fn from(token: PatternToken) -> Self {
        token.as_str().to_string()
    }
}

/// An enemy: vitals, a cyclic attack pattern and its cursor, and rewards.
///
/// The cursor only moves through [`Enemy::advance_pattern`], which the
/// intent executor calls exactly once per action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    id: EnemyId,
    name: String,
    tier: EnemyTier,
    vitals: Vitals,
    pattern: Vec<PatternToken>,
    pattern_index: usize,
    gold_reward: u32,
    card_reward: bool,
}

impl Enemy {
    /// Creates an enemy at full health with its cursor at the start of `pattern`.
    ///
    /// The id is provisional; a combat session reassigns ids by position.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        tier: EnemyTier,
        max_health: u32,
        pattern: Vec<PatternToken>,
        gold_reward: u32,
        card_reward: bool,
    ) -> Self {
        Self {
            id: EnemyId::new(0),
            name: name.into(),
            tier,
            vitals: Vitals::new(max_health),
            pattern,
            pattern_index: 0,
            gold_reward,
            card_reward,
        }
    }

    /// Session-assigned id.
    #[must_use]
    pub const fn id(&self) -> EnemyId {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: EnemyId) {
        self.id = id;
    }

    /// Encounter tier.
    #[must_use]
    pub const fn tier(&self) -> EnemyTier {
        self.tier
    }

    /// The attack pattern, cycled through in order.
    #[must_use]
    pub fn pattern(&self) -> &[PatternToken] {
        &self.pattern
    }

    /// Raw cursor. Reduced modulo the pattern length when read.
    #[must_use]
    pub const fn pattern_index(&self) -> usize {
        self.pattern_index
    }

    /// Token at the cursor, or `None` for an empty pattern.
    #[must_use]
    pub fn current_token(&self) -> Option<&PatternToken> {
        if self.pattern.is_empty() {
            return None;
        }
        self.pattern.get(self.pattern_index % self.pattern.len())
    }

    /// The action this enemy will take next. Querying never moves the cursor.
    #[must_use]
    pub fn current_intent(&self) -> Intent {
        resolve_intent(self)
    }

    pub(crate) fn advance_pattern(&mut self) {
        self.pattern_index = self.pattern_index.wrapping_add(1);
    }

    /// Gold granted when this enemy is defeated.
    #[must_use]
    pub const fn gold_reward(&self) -> u32 {
        self.gold_reward
    }

    /// True if defeating this enemy makes a card reward available.
    #[must_use]
    pub const fn grants_card_reward(&self) -> bool {
        self.card_reward
    }
}

impl Combatant for Enemy {
    fn name(&self) -> &str {
        &self.name
    }

    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }
}
