//! The player's card piles.
//!
//! Every card the player owns sits in exactly one of the five piles: deck,
//! hand, draw pile, discard pile or exhaust pile. Cards only move between
//! piles; nothing here creates or destroys a card except
//! [`Piles::add_to_deck`] and [`Piles::remove_from_deck`].
//!
//! Outside combat every card is in the deck. When combat begins the deck is
//! shuffled into the draw pile, and when the session concludes all piles are
//! gathered back into the deck.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::card::{Card, CardId};
use crate::error::PileError;

/// Result of a single draw.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DrawOutcome {
    /// A card moved from the draw pile into the hand.
    Drawn {
        /// The card drawn.
        card: CardId,
        /// True if the discard pile had to be shuffled in first.
        reshuffled: bool,
    },
    /// Draw and discard piles were both empty; the hand did not grow.
    Empty,
}

/// Deck, hand, draw, discard and exhaust piles.
///
/// Loading piles in which one card id appears twice fails with
/// [`PileError::DuplicateCard`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PilesRepr")]
pub struct Piles {
    deck: Vec<Card>,
    hand: Vec<Card>,
    draw_pile: VecDeque<Card>,
    discard_pile: Vec<Card>,
    exhaust_pile: Vec<Card>,
}

#[derive(Deserialize)]
struct PilesRepr {
    deck: Vec<Card>,
    hand: Vec<Card>,
    draw_pile: VecDeque<Card>,
    discard_pile: Vec<Card>,
    exhaust_pile: Vec<Card>,
}

impl TryFrom<PilesRepr> for Piles {
    type Error = PileError;

    fn try_from(repr: PilesRepr) -> Result<Self, Self::Error> {
        let piles = Self {
            deck: repr.deck,
            hand: repr.hand,
            draw_pile: repr.draw_pile,
            discard_pile: repr.discard_pile,
            exhaust_pile: repr.exhaust_pile,
        };
        match piles.first_duplicate() {
            Some(id) => Err(PileError::DuplicateCard(id)),
            None => Ok(piles),
        }
    }
}

impl Piles {
    /// Creates piles with every card in the deck.
    #[must_use]
    pub fn new(deck: Vec<Card>) -> Self {
        let piles = Self {
            deck,
            ..Self::default()
        };
        piles.debug_assert_unique();
        piles
    }

    /// The master deck (empty during combat).
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Cards in hand, in draw order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Draw pile, front first.
    pub fn draw_pile(&self) -> impl Iterator<Item = &Card> + '_ {
        self.draw_pile.iter()
    }

    /// Number of cards left to draw before a reshuffle.
    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    /// Discard pile, oldest first.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    /// Exhausted cards.
    #[must_use]
    pub fn exhaust_pile(&self) -> &[Card] {
        &self.exhaust_pile
    }

    /// Finds a card in hand by id.
    #[must_use]
    pub fn find_in_hand(&self, id: CardId) -> Option<&Card> {
        self.hand.iter().find(|card| card.id() == id)
    }

    /// Total number of cards across all piles.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.deck.len()
            + self.hand.len()
            + self.draw_pile.len()
            + self.discard_pile.len()
            + self.exhaust_pile.len()
    }

    /// Ids of every owned card across all piles, sorted.
    ///
    /// Comparing this before and after any sequence of draws, plays and
    /// reshuffles checks card conservation.
    #[must_use]
    pub fn card_ids(&self) -> Vec<CardId> {
        let mut ids: Vec<CardId> = self
            .deck
            .iter()
            .chain(&self.hand)
            .chain(&self.draw_pile)
            .chain(&self.discard_pile)
            .chain(&self.exhaust_pile)
            .map(Card::id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Adds a card to the deck.
    pub fn add_to_deck(&mut self, card: Card) {
        self.deck.push(card);
        self.debug_assert_unique();
    }

    /// Removes a card from the deck by id.
    pub fn remove_from_deck(&mut self, id: CardId) -> Option<Card> {
        let index = self.deck.iter().position(|card| card.id() == id)?;
        Some(self.deck.remove(index))
    }

    /// Moves every card into the deck, then shuffles the deck into the draw pile.
    pub(crate) fn begin_combat<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.gather_into_deck();
        let mut cards = std::mem::take(&mut self.deck);
        cards.shuffle(rng);
        self.draw_pile = cards.into();
    }

    /// Draws one card into the hand.
    ///
    /// An empty draw pile is refilled from a shuffled discard pile first. With
    /// both piles empty nothing happens.
    pub(crate) fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> DrawOutcome {
        let mut reshuffled = false;
        if self.draw_pile.is_empty() {
            if self.discard_pile.is_empty() {
                return DrawOutcome::Empty;
            }
            let mut cards = std::mem::take(&mut self.discard_pile);
            cards.shuffle(rng);
            self.draw_pile = cards.into();
            reshuffled = true;
        }

        match self.draw_pile.pop_front() {
            Some(card) => {
                let id = card.id();
                self.hand.push(card);
                DrawOutcome::Drawn {
                    card: id,
                    reshuffled,
                }
            }
            None => DrawOutcome::Empty,
        }
    }

    /// Removes a card from the hand. The card belongs to no pile until it is
    /// handed back through [`Self::discard`].
    pub(crate) fn take_from_hand(&mut self, id: CardId) -> Option<Card> {
        let index = self.hand.iter().position(|card| card.id() == id)?;
        Some(self.hand.remove(index))
    }

    /// Puts a card on the discard pile.
    pub(crate) fn discard(&mut self, card: Card) {
        self.discard_pile.push(card);
        self.debug_assert_unique();
    }

    /// Moves the whole hand to the discard pile. Returns how many cards moved.
    pub(crate) fn discard_hand(&mut self) -> usize {
        let count = self.hand.len();
        self.discard_pile.append(&mut self.hand);
        count
    }

    /// Moves every card from the combat piles back into the deck.
    pub(crate) fn gather_into_deck(&mut self) {
        self.deck.append(&mut self.hand);
        self.deck.extend(self.draw_pile.drain(..));
        self.deck.append(&mut self.discard_pile);
        self.deck.append(&mut self.exhaust_pile);
    }

    #[cfg(test)]
    pub(crate) fn stack_for_test(&mut self, draw: Vec<Card>, discard: Vec<Card>) {
        self.draw_pile = draw.into();
        self.discard_pile = discard;
        self.debug_assert_unique();
    }

    fn first_duplicate(&self) -> Option<CardId> {
        self.card_ids()
            .windows(2)
            .find(|pair| pair[0] == pair[1])
            .map(|pair| pair[0])
    }

    fn debug_assert_unique(&self) {
        if cfg!(debug_assertions) {
            if let Some(id) = self.first_duplicate() {
                panic!("card {id} appears in more than one pile slot");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardEffect, CardType, EffectKind, Rarity, TargetSelector};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn card(id: u64) -> Card {
        Card::new(
            CardId::new(id),
            "Strike",
            "Deal 6 damage",
            1,
            CardType::Attack,
            Rarity::Common,
            vec![CardEffect::new(EffectKind::Damage, 6, TargetSelector::SingleEnemy)],
        )
    }

    fn cards(ids: std::ops::Range<u64>) -> Vec<Card> {
        ids.map(card).collect()
    }

    mod draw_tests {
        use super::*;

        #[test]
        fn draw_takes_front_of_draw_pile() {
            let mut piles = Piles::default();
            piles.stack_for_test(cards(0..3), Vec::new());
            let mut rng = ChaCha8Rng::seed_from_u64(1);

            let outcome = piles.draw(&mut rng);
            assert_eq!(
                outcome,
                DrawOutcome::Drawn {
                    card: CardId::new(0),
                    reshuffled: false
                }
            );
            assert_eq!(piles.hand().len(), 1);
            assert_eq!(piles.draw_pile_len(), 2);
        }

        #[test]
        fn draw_with_both_piles_empty_is_noop() {
            let mut piles = Piles::default();
            let mut rng = ChaCha8Rng::seed_from_u64(1);
            assert_eq!(piles.draw(&mut rng), DrawOutcome::Empty);
            assert!(piles.hand().is_empty());
        }

        #[test]
        fn empty_draw_pile_reshuffles_discard() {
            let mut piles = Piles::default();
            piles.stack_for_test(Vec::new(), cards(0..4));
            let mut rng = ChaCha8Rng::seed_from_u64(9);

            let outcome = piles.draw(&mut rng);
            assert!(matches!(
                outcome,
                DrawOutcome::Drawn {
                    reshuffled: true,
                    ..
                }
            ));
            assert!(piles.discard_pile().is_empty());
            assert_eq!(piles.draw_pile_len(), 3);
            assert_eq!(piles.card_ids(), cards(0..4).iter().map(Card::id).collect::<Vec<_>>());
        }
    }

    mod movement_tests {
        use super::*;

        #[test]
        fn begin_combat_moves_deck_to_draw_pile() {
            let mut piles = Piles::new(cards(0..10));
            let mut rng = ChaCha8Rng::seed_from_u64(3);
            piles.begin_combat(&mut rng);

            assert!(piles.deck().is_empty());
            assert_eq!(piles.draw_pile_len(), 10);
            assert_eq!(piles.card_ids().len(), 10);
        }

        #[test]
        fn take_and_discard_conserves_cards() {
            let mut piles = Piles::default();
            piles.stack_for_test(cards(0..2), Vec::new());
            let mut rng = ChaCha8Rng::seed_from_u64(3);
            piles.draw(&mut rng);

            let before = piles.card_ids();
            let taken = piles.take_from_hand(CardId::new(0)).unwrap();
            assert_eq!(piles.total_len(), 1);
            piles.discard(taken);
            assert_eq!(piles.card_ids(), before);
        }

        #[test]
        fn take_missing_card_is_none() {
            let mut piles = Piles::new(cards(0..2));
            assert!(piles.take_from_hand(CardId::new(0)).is_none());
        }

        #[test]
        fn discard_hand_empties_hand() {
            let mut piles = Piles::default();
            piles.stack_for_test(cards(0..3), Vec::new());
            let mut rng = ChaCha8Rng::seed_from_u64(3);
            piles.draw(&mut rng);
            piles.draw(&mut rng);

            assert_eq!(piles.discard_hand(), 2);
            assert!(piles.hand().is_empty());
            assert_eq!(piles.discard_pile().len(), 2);
        }

        #[test]
        fn gather_returns_everything_to_deck() {
            let mut piles = Piles::default();
            piles.stack_for_test(cards(0..3), cards(3..5));
            let mut rng = ChaCha8Rng::seed_from_u64(3);
            piles.draw(&mut rng);

            piles.gather_into_deck();
            assert_eq!(piles.deck().len(), 5);
            assert_eq!(piles.total_len(), 5);
        }
    }

    mod serde_tests {
        use super::*;

        #[test]
        fn duplicate_card_rejected_on_load() {
            let mut piles = Piles::default();
            piles.stack_for_test(cards(0..2), cards(2..3));
            let mut value = serde_json::to_value(&piles).unwrap();
            value["hand"] = serde_json::to_value(vec![card(1)]).unwrap();

            let err = serde_json::from_value::<Piles>(value).unwrap_err();
            assert!(err.to_string().contains("card 1 appears in more than one pile"));
        }

        #[test]
        fn unique_piles_load() {
            let mut piles = Piles::default();
            piles.stack_for_test(cards(0..2), cards(2..4));
            let json = serde_json::to_string(&piles).unwrap();
            assert_eq!(serde_json::from_str::<Piles>(&json).unwrap(), piles);
        }
    }

    #[test]
    fn deck_add_and_remove() {
        let mut piles = Piles::new(cards(0..2));
        piles.add_to_deck(card(5));
        assert_eq!(piles.deck().len(), 3);
        assert_eq!(piles.remove_from_deck(CardId::new(5)).unwrap().id(), CardId::new(5));
        assert!(piles.remove_from_deck(CardId::new(5)).is_none());
    }
}
