//! Static content: card templates, starter decks and the bestiary.
//!
//! Templates are plain descriptions. [`CardCatalog`] turns them into card
//! instances, handing every instance (and every upgrade) a fresh [`CardId`]
//! from a monotonic counter so that two copies of the same card are still
//! distinct pile members.
//!
//! # Example
//!
//! ```
//! use bastion_core::catalog::{CardCatalog, CardTemplate};
//! use bastion_core::entity::CharacterClass;
//!
//! let mut catalog = CardCatalog::new();
//! let deck = catalog.starter_deck(CharacterClass::Knight);
//! assert_eq!(deck.len(), 10);
//!
//! let cleave = catalog.instantiate(CardTemplate::Cleave);
//! assert_ne!(cleave.id(), deck[0].id());
//! ```

mod enemies;

pub use enemies::EnemyKind;

use serde::{Deserialize, Serialize};

use crate::card::{Card, CardEffect, CardId, CardType, EffectKind, Rarity, TargetSelector};
use crate::entity::{CharacterClass, Player};

// =============================================================================
// Card Templates
// =============================================================================

/// Every card design the game ships with.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardTemplate {
    /// Deal 6 damage.
    Strike,
    /// Gain 5 block.
    Defend,
    /// Deal 8 damage, gain 5 block.
    ShieldBash,
    /// Deal 14 damage.
    HeavyBlow,
    /// Gain 12 block and 1 strength.
    IronWill,
    /// Deal 8 damage to every enemy.
    Cleave,
    /// Gain 18 block.
    ShieldWall,
    /// Carries an effect kind the interpreter does not implement.
    Revenge,
    /// Gain 2 strength.
    Rampage,
}

impl CardTemplate {
    /// All templates in catalog order.
    pub const ALL: [Self; 9] = [
        Self::Strike,
        Self::Defend,
        Self::ShieldBash,
        Self::HeavyBlow,
        Self::IronWill,
        Self::Cleave,
        Self::ShieldWall,
        Self::Revenge,
        Self::Rampage,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Strike => "Strike",
            Self::Defend => "Defend",
            Self::ShieldBash => "Shield Bash",
            Self::HeavyBlow => "Heavy Blow",
            Self::IronWill => "Iron Will",
            Self::Cleave => "Cleave",
            Self::ShieldWall => "Shield Wall",
            Self::Revenge => "Revenge",
            Self::Rampage => "Rampage",
        }
    }

    const fn description(self) -> &'static str {
        match self {
            Self::Strike => "Deal 6 damage",
            Self::Defend => "Gain 5 block",
            Self::ShieldBash => "Deal 8 damage. Gain 5 block.",
            Self::HeavyBlow => "Deal 14 damage",
            Self::IronWill => "Gain 12 block. Gain 1 Strength.",
            Self::Cleave => "Deal 8 damage to ALL enemies",
            Self::ShieldWall => "Gain 18 block",
            Self::Revenge => "Deal damage equal to block lost this turn",
            Self::Rampage => "Gain 2 Strength",
        }
    }

    const fn cost(self) -> u32 {
        match self {
            Self::ShieldBash | Self::HeavyBlow | Self::ShieldWall => 2,
            _ => 1,
        }
    }

    const fn card_type(self) -> CardType {
        match self {
            Self::Strike | Self::ShieldBash | Self::HeavyBlow | Self::Cleave | Self::Revenge => {
                CardType::Attack
            }
            Self::Defend | Self::IronWill | Self::ShieldWall => CardType::Skill,
            Self::Rampage => CardType::Power,
        }
    }

    const fn rarity(self) -> Rarity {
        match self {
            Self::IronWill | Self::ShieldWall => Rarity::Uncommon,
            Self::Revenge | Self::Rampage => Rarity::Rare,
            _ => Rarity::Common,
        }
    }

    fn effects(self) -> Vec<CardEffect> {
        use EffectKind::{Block, Damage, Strength};
        use TargetSelector::{AllEnemies, SelfTarget, SingleEnemy};

        match self {
            Self::Strike => vec![CardEffect::new(Damage, 6, SingleEnemy)],
            Self::Defend => vec![CardEffect::new(Block, 5, SelfTarget)],
            Self::ShieldBash => vec![
                CardEffect::new(Damage, 8, SingleEnemy),
                CardEffect::new(Block, 5, SelfTarget),
            ],
            Self::HeavyBlow => vec![CardEffect::new(Damage, 14, SingleEnemy)],
            Self::IronWill => vec![
                CardEffect::new(Block, 12, SelfTarget),
                CardEffect::new(Strength, 1, SelfTarget),
            ],
            Self::Cleave => vec![CardEffect::new(Damage, 8, AllEnemies)],
            Self::ShieldWall => vec![CardEffect::new(Block, 18, SelfTarget)],
            Self::Revenge => vec![CardEffect::new(
                EffectKind::parse("revenge_damage"),
                0,
                SingleEnemy,
            )],
            Self::Rampage => vec![CardEffect::new(Strength, 2, SelfTarget)],
        }
    }
}

// =============================================================================
// Card Catalog
// =============================================================================

/// Card factory and id allocator.
///
/// Use one catalog per run so ids never collide across the player's deck.
///
/// # Panics
///
/// Creating a card after id `u64::MAX` has been handed out panics, since the
/// next id would repeat an earlier one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardCatalog {
    /// `None` once every id has been handed out.
    next_id: Option<u64>,
}

impl Default for CardCatalog {
    fn default() -> Self {
        Self::starting_at(0)
    }
}

impl CardCatalog {
    /// Creates a catalog whose first card gets id 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog that continues numbering at `next_id`.
    #[must_use]
    pub const fn starting_at(next_id: u64) -> Self {
        Self {
            next_id: Some(next_id),
        }
    }

    fn allocate(&mut self) -> CardId {
        let id = self.next_id.expect("card id space exhausted");
        self.next_id = id.checked_add(1);
        CardId::new(id)
    }

    /// Creates a fresh instance of `template`.
    pub fn instantiate(&mut self, template: CardTemplate) -> Card {
        Card::new(
            self.allocate(),
            template.name(),
            template.description(),
            template.cost(),
            template.card_type(),
            template.rarity(),
            template.effects(),
        )
    }

    /// Creates `count` fresh instances of `template`.
    pub fn instantiate_many(&mut self, template: CardTemplate, count: usize) -> Vec<Card> {
        (0..count).map(|_| self.instantiate(template)).collect()
    }

    /// Derives the upgraded variant of `card` under a fresh id.
    pub fn upgrade(&mut self, card: &Card) -> Card {
        card.upgraded(self.allocate())
    }

    /// The deck a class starts a run with.
    pub fn starter_deck(&mut self, class: CharacterClass) -> Vec<Card> {
        match class {
            CharacterClass::Knight => {
                let mut deck = self.instantiate_many(CardTemplate::Strike, 5);
                deck.extend(self.instantiate_many(CardTemplate::Defend, 4));
                deck.push(self.instantiate(CardTemplate::ShieldBash));
                deck
            }
            CharacterClass::Archer | CharacterClass::Mage => Vec::new(),
        }
    }

    /// A fresh player of `class` holding its starter deck.
    pub fn new_player(&mut self, class: CharacterClass) -> Player {
        let deck = self.starter_deck(class);
        Player::new(class, deck)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Combatant;

    mod template_tests {
        use super::*;

        #[test]
        fn costs_match_designs() {
            let mut catalog = CardCatalog::new();
            let costs: Vec<u32> = CardTemplate::ALL
                .iter()
                .map(|t| catalog.instantiate(*t).cost())
                .collect();
            assert_eq!(costs, vec![1, 1, 2, 2, 1, 1, 2, 1, 1]);
        }

        #[test]
        fn cleave_hits_all_enemies() {
            let card = CardCatalog::new().instantiate(CardTemplate::Cleave);
            assert_eq!(card.effects()[0].target, TargetSelector::AllEnemies);
            assert_eq!(card.effects()[0].magnitude, 8);
        }

        #[test]
        fn revenge_carries_unrecognized_effect() {
            let card = CardCatalog::new().instantiate(CardTemplate::Revenge);
            assert!(matches!(
                card.effects()[0].kind,
                EffectKind::Unrecognized(ref tag) if tag == "revenge_damage"
            ));
            assert_eq!(card.rarity(), Rarity::Rare);
        }

        #[test]
        fn rampage_is_a_power() {
            let card = CardCatalog::new().instantiate(CardTemplate::Rampage);
            assert_eq!(card.card_type(), CardType::Power);
        }
    }

    mod allocation_tests {
        use super::*;

        #[test]
        fn ids_are_unique_and_monotonic() {
            let mut catalog = CardCatalog::new();
            let a = catalog.instantiate(CardTemplate::Strike);
            let b = catalog.instantiate(CardTemplate::Strike);
            let c = catalog.upgrade(&a);
            assert!(a.id() < b.id());
            assert!(b.id() < c.id());
            assert_eq!(c.name(), "Strike+");
        }

        #[test]
        fn starting_at_continues_numbering() {
            let mut catalog = CardCatalog::starting_at(100);
            assert_eq!(catalog.instantiate(CardTemplate::Defend).id(), CardId::new(100));
        }

        #[test]
        fn last_id_is_handed_out_once() {
            let mut catalog = CardCatalog::starting_at(u64::MAX);
            assert_eq!(catalog.instantiate(CardTemplate::Strike).id(), CardId::new(u64::MAX));
        }

        #[test]
        #[should_panic(expected = "card id space exhausted")]
        fn allocating_past_last_id_panics() {
            let mut catalog = CardCatalog::starting_at(u64::MAX);
            catalog.instantiate(CardTemplate::Strike);
            catalog.instantiate(CardTemplate::Strike);
        }
    }

    mod starter_deck_tests {
        use super::*;

        #[test]
        fn knight_deck_composition() {
            let deck = CardCatalog::new().starter_deck(CharacterClass::Knight);
            let count = |name: &str| deck.iter().filter(|c| c.name() == name).count();
            assert_eq!(count("Strike"), 5);
            assert_eq!(count("Defend"), 4);
            assert_eq!(count("Shield Bash"), 1);
        }

        #[test]
        fn archer_and_mage_start_empty() {
            let mut catalog = CardCatalog::new();
            assert!(catalog.starter_deck(CharacterClass::Archer).is_empty());
            assert!(catalog.starter_deck(CharacterClass::Mage).is_empty());
        }

        #[test]
        fn new_player_holds_starter_deck() {
            let player = CardCatalog::new().new_player(CharacterClass::Knight);
            assert_eq!(player.piles().deck().len(), 10);
            assert_eq!(player.vitals().current_health(), 80);
        }
    }
}
