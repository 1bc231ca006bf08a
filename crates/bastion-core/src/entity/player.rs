//! The player character.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::card::{Card, CardId};
use crate::status::StatusKind;

use super::{Combatant, Piles, Vitals};

/// Starting maximum health for every class.
pub const STARTING_HEALTH: u32 = 80;

/// Starting maximum energy for every class.
pub const STARTING_ENERGY: u32 = 3;

/// Playable character classes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    /// Defensive warrior with a block-heavy starter deck.
    Knight,
    /// Ranged attacker. No starter deck yet.
    Archer,
    /// Spellcaster. No starter deck yet.
    Mage,
}

impl CharacterClass {
    /// Flavor text shown on class selection.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Knight => {
                "A defensive warrior who excels at blocking and withstanding attacks."
            }
            Self::Archer => "A ranged attacker with quick strikes and poison arrows.",
            Self::Mage => "A powerful spellcaster with devastating area-of-effect magic.",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Knight => write!(f, "Knight"),
            Self::Archer => write!(f, "Archer"),
            Self::Mage => write!(f, "Mage"),
        }
    }
}

/// The player: vitals plus energy, gold and card piles.
///
/// Energy never exceeds `max_energy`; a deserialized player is clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PlayerRepr")]
pub struct Player {
    class: CharacterClass,
    name: String,
    vitals: Vitals,
    energy: u32,
    max_energy: u32,
    gold: u32,
    piles: Piles,
}

#[derive(Deserialize)]
struct PlayerRepr {
    class: CharacterClass,
    name: String,
    vitals: Vitals,
    energy: u32,
    max_energy: u32,
    gold: u32,
    piles: Piles,
}

impl From<PlayerRepr> for Player {
    fn from(repr: PlayerRepr) -> Self {
        Self {
            class: repr.class,
            name: repr.name,
            vitals: repr.vitals,
            energy: repr.energy.min(repr.max_energy),
            max_energy: repr.max_energy,
            gold: repr.gold,
            piles: repr.piles,
        }
    }
}

impl Player {
    /// Creates a player with the standard starting stats and the given deck.
    #[must_use]
    pub fn new(class: CharacterClass, deck: Vec<Card>) -> Self {
        Self::with_stats(class, STARTING_HEALTH, STARTING_ENERGY, deck)
    }

    /// Creates a player with explicit health and energy limits.
    #[must_use]
    pub fn with_stats(
        class: CharacterClass,
        max_health: u32,
        max_energy: u32,
        deck: Vec<Card>,
    ) -> Self {
        Self {
            class,
            name: class.to_string(),
            vitals: Vitals::new(max_health),
            energy: max_energy,
            max_energy,
            gold: 0,
            piles: Piles::new(deck),
        }
    }

    /// Character class.
    #[must_use]
    pub const fn class(&self) -> CharacterClass {
        self.class
    }

    /// Energy left this turn.
    #[must_use]
    pub const fn energy(&self) -> u32 {
        self.energy
    }

    /// Energy restored at the start of each turn.
    #[must_use]
    pub const fn max_energy(&self) -> u32 {
        self.max_energy
    }

    /// True if the player has at least `cost` energy.
    #[must_use]
    pub const fn can_afford(&self, cost: u32) -> bool {
        self.energy >= cost
    }

    /// Spends `cost` energy. Fails without change if there is not enough.
    pub fn spend_energy(&mut self, cost: u32) -> bool {
        if !self.can_afford(cost) {
            return false;
        }
        self.energy -= cost;
        true
    }

    /// Restores energy to the maximum.
    pub fn reset_energy(&mut self) {
        self.energy = self.max_energy;
    }

    /// Gold carried.
    #[must_use]
    pub const fn gold(&self) -> u32 {
        self.gold
    }

    /// Adds gold.
    pub fn add_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// The player's card piles.
    #[must_use]
    pub const fn piles(&self) -> &Piles {
        &self.piles
    }

    pub(crate) fn piles_mut(&mut self) -> &mut Piles {
        &mut self.piles
    }

    /// Adds a card to the deck (card rewards enter this way).
    pub fn add_card_to_deck(&mut self, card: Card) {
        self.piles.add_to_deck(card);
    }

    /// Removes a card from the deck by id.
    pub fn remove_card_from_deck(&mut self, id: CardId) -> Option<Card> {
        self.piles.remove_from_deck(id)
    }
}

impl Combatant for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }

    /// Block gained by the player is boosted by its strength stacks.
    fn gain_block(&mut self, amount: u32) -> u32 {
        let boosted = amount.saturating_add(self.stacks_of(StatusKind::Strength));
        self.vitals.gain_block(boosted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::StatusEffect;

    fn knight() -> Player {
        Player::new(CharacterClass::Knight, Vec::new())
    }

    mod energy_tests {
        use super::*;

        #[test]
        fn spend_succeeds_and_decrements() {
            let mut player = knight();
            assert!(player.spend_energy(2));
            assert_eq!(player.energy(), 1);
        }

        #[test]
        fn spend_fails_without_change() {
            let mut player = knight();
            assert!(player.spend_energy(3));
            assert!(!player.spend_energy(1));
            assert_eq!(player.energy(), 0);
        }

        #[test]
        fn zero_cost_always_succeeds() {
            let mut player = knight();
            player.spend_energy(3);
            assert!(player.spend_energy(0));
        }

        #[test]
        fn reset_restores_max() {
            let mut player = knight();
            player.spend_energy(3);
            player.reset_energy();
            assert_eq!(player.energy(), player.max_energy());
        }
    }

    mod block_tests {
        use super::*;

        #[test]
        fn block_without_strength_is_unchanged() {
            let mut player = knight();
            assert_eq!(player.gain_block(5), 5);
            assert_eq!(player.vitals().block(), 5);
        }

        #[test]
        fn strength_boosts_block() {
            let mut player = knight();
            player.add_status(StatusEffect::permanent(StatusKind::Strength, 2));
            assert_eq!(player.gain_block(5), 7);
            assert_eq!(player.vitals().block(), 7);
        }
    }

    #[test]
    fn new_player_has_standard_stats() {
        let player = knight();
        assert_eq!(player.vitals().max_health(), STARTING_HEALTH);
        assert_eq!(player.vitals().current_health(), STARTING_HEALTH);
        assert_eq!(player.max_energy(), STARTING_ENERGY);
        assert_eq!(player.gold(), 0);
        assert_eq!(player.name(), "Knight");
    }

    #[test]
    fn loaded_player_is_clamped() {
        let mut player = knight();
        player.vitals_mut().take_damage(30);
        let mut value = serde_json::to_value(&player).unwrap();
        value["energy"] = 9.into();
        value["vitals"]["current_health"] = 500.into();

        let loaded: Player = serde_json::from_value(value).unwrap();
        assert_eq!(loaded.energy(), loaded.max_energy());
        assert_eq!(loaded.vitals().current_health(), STARTING_HEALTH);
        assert_eq!(loaded.piles(), player.piles());
    }

    #[test]
    fn class_display_and_description() {
        assert_eq!(CharacterClass::Mage.to_string(), "Mage");
        assert!(CharacterClass::Knight.description().contains("blocking"));
    }
}
