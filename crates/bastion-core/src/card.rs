//! Card values and their effect descriptors.
//!
//! A [`Card`] is immutable once constructed. Upgrading never mutates a card:
//! [`Card::upgraded`] derives a new value with its own [`CardId`], a `+`
//! suffix on the name, every effect magnitude raised by
//! [`UPGRADE_MAGNITUDE_BONUS`] and the cost lowered by
//! [`UPGRADE_COST_REDUCTION`] (floored at 0).
//!
//! # Effect Kinds
//!
//! [`EffectKind`] is a closed set of the kinds the card interpreter knows,
//! plus [`EffectKind::Unrecognized`] which carries the raw tag. Unrecognized
//! effects are a defined no-op when played. On the wire an effect kind is a
//! plain string such as `"damage"` or `"revenge_damage"`.
//!
//! # Example
//!
//! ```
//! use bastion_core::card::{Card, CardEffect, CardId, CardType, EffectKind, Rarity, TargetSelector};
//!
//! let strike = Card::new(
//!     CardId::new(1),
//!     "Strike",
//!     "Deal 6 damage",
//!     1,
//!     CardType::Attack,
//!     Rarity::Common,
//!     vec![CardEffect::new(EffectKind::Damage, 6, TargetSelector::SingleEnemy)],
//! );
//!
//! let plus = strike.upgraded(CardId::new(2));
//! assert_eq!(plus.name(), "Strike+");
//! assert_eq!(plus.cost(), 0);
//! assert_eq!(plus.effects()[0].magnitude, 9);
//! assert!(!strike.is_upgraded());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Amount added to every effect magnitude when a card is upgraded.
pub const UPGRADE_MAGNITUDE_BONUS: u32 = 3;

/// Amount removed from the energy cost when a card is upgraded.
pub const UPGRADE_COST_REDUCTION: u32 = 1;

// =============================================================================
// Card Identity
// =============================================================================

/// Identity of a single card instance.
///
/// Two copies of "Strike" in a deck are distinct instances with distinct ids.
/// Pile membership and hand lookups are always by id.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(u64);

impl CardId {
    /// Creates a card id from a raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CardId({})", self.0)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CardId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

// =============================================================================
// Classification
// =============================================================================

/// Broad card category.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    /// Deals damage.
    Attack,
    /// Defensive or utility card.
    Skill,
    /// Lasting self-buff.
    Power,
}

/// Card rarity tier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    /// Starter and common reward cards.
    Common,
    /// Less common reward cards.
    Uncommon,
    /// Rare reward cards.
    Rare,
}

/// Who an effect is aimed at.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetSelector {
    /// The enemy chosen when the card is played.
    SingleEnemy,
    /// Every living enemy.
    AllEnemies,
    /// The player playing the card.
    SelfTarget,
    /// No target at all.
    Untargeted,
}

// =============================================================================
// Effects
// =============================================================================

/// What an effect does.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EffectKind {
    /// Deal damage to the target enemy (or every enemy).
    Damage,
    /// Player gains block.
    Block,
    /// Player draws cards.
    Draw,
    /// Player gains permanent strength.
    Strength,
    /// Apply weak to the target enemy.
    Weak,
    /// Apply vulnerable to the target enemy.
    Vulnerable,
    /// A tag the interpreter does not know. Playing it does nothing.
    Unrecognized(String),
}

impl EffectKind {
    /// Parses a wire tag. Unknown tags become [`EffectKind::Unrecognized`].
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        match tag {
            "damage" => Self::Damage,
            "block" => Self::Block,
            "draw" => Self::Draw,
            "strength" => Self::Strength,
            "weak" => Self::Weak,
            "vulnerable" => Self::Vulnerable,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// Returns the wire tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Damage => "damage",
            Self::Block => "block",
            Self::Draw => "draw",
            Self::Strength => "strength",
            Self::Weak => "weak",
            Self::Vulnerable => "vulnerable",
            Self::Unrecognized(tag) => tag,
        }
    }

    /// Returns true if the effect does nothing without an enemy target.
    #[must_use]
    pub const fn needs_enemy(&self) -> bool {
        matches!(self, Self::Damage | Self::Weak | Self::Vulnerable)
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for EffectKind {
    fn from(tag: String) -> Self {
        Self::parse(&tag)
    }
}

impl From<EffectKind> for String {
    fn from(kind: EffectKind) -> Self {
        kind.as_str().to_string()
    }
}

/// One step of a card: kind, magnitude and target selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEffect {
    /// What the effect does.
    pub kind: EffectKind,
    /// How much of it.
    pub magnitude: u32,
    /// Who it applies to.
    pub target: TargetSelector,
}

impl CardEffect {
    /// Creates an effect descriptor.
    #[must_use]
    pub const fn new(kind: EffectKind, magnitude: u32, target: TargetSelector) -> Self {
        Self {
            kind,
            magnitude,
            target,
        }
    }
}

// =============================================================================
// Card
// =============================================================================

/// An immutable card instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    name: String,
    description: String,
    cost: u32,
    card_type: CardType,
    rarity: Rarity,
    effects: Vec<CardEffect>,
    upgraded: bool,
}

impl Card {
    /// Creates a base (not upgraded) card.
    #[must_use]
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        description: impl Into<String>,
        cost: u32,
        card_type: CardType,
        rarity: Rarity,
        effects: Vec<CardEffect>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            cost,
            card_type,
            rarity,
            effects,
            upgraded: false,
        }
    }

    /// Derives the upgraded variant of this card under a new identity.
    ///
    /// The original is untouched. Upgrading an already upgraded card applies
    /// the bonus again and appends another `+`.
    #[must_use]
    pub fn upgraded(&self, id: CardId) -> Self {
        let effects = self
            .effects
            .iter()
            .map(|effect| CardEffect {
                kind: effect.kind.clone(),
                magnitude: effect.magnitude.saturating_add(UPGRADE_MAGNITUDE_BONUS),
                target: effect.target,
            })
            .collect();

        Self {
            id,
            name: format!("{}+", self.name),
            description: self.description.clone(),
            cost: self.cost.saturating_sub(UPGRADE_COST_REDUCTION),
            card_type: self.card_type,
            rarity: self.rarity,
            effects,
            upgraded: true,
        }
    }

    /// Instance identity.
    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rules text.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Energy cost.
    #[must_use]
    pub const fn cost(&self) -> u32 {
        self.cost
    }

    /// Category.
    #[must_use]
    pub const fn card_type(&self) -> CardType {
        self.card_type
    }

    /// Rarity tier.
    #[must_use]
    pub const fn rarity(&self) -> Rarity {
        self.rarity
    }

    /// Effects in resolution order.
    #[must_use]
    pub fn effects(&self) -> &[CardEffect] {
        &self.effects
    }

    /// True for derived `+` variants.
    #[must_use]
    pub const fn is_upgraded(&self) -> bool {
        self.upgraded
    }

    /// True if any effect is aimed at a single chosen enemy.
    #[must_use]
    pub fn requires_target(&self) -> bool {
        self.effects
            .iter()
            .any(|effect| effect.kind.needs_enemy() && effect.target == TargetSelector::SingleEnemy)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.cost)
    }
}
