//! Factories for sessions with hands and enemies set up exactly as a test
//! needs them.

use crate::card::{Card, CardId, CardType};
use crate::catalog::{CardCatalog, CardTemplate};
use crate::entity::{CharacterClass, Combatant, Enemy, EnemyTier, Player};
use crate::session::CombatSession;

/// Routes `tracing` output to the test harness. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// A knight whose deck is exactly `templates`, in catalog id order.
pub fn knight_with(templates: &[CardTemplate]) -> Player {
    let mut catalog = CardCatalog::new();
    let deck: Vec<Card> = templates.iter().map(|t| catalog.instantiate(*t)).collect();
    Player::new(CharacterClass::Knight, deck)
}

/// A knight with the standard starter deck.
pub fn starter_knight() -> Player {
    CardCatalog::new().new_player(CharacterClass::Knight)
}

/// A normal-tier enemy with an empty pattern. It never acts.
pub fn dummy(name: &str, health: u32, gold: u32) -> Enemy {
    Enemy::new(name, EnemyTier::Normal, health, Vec::new(), gold, false)
}

/// Starts a session where the hand holds every card of a deck of at most
/// five cards.
pub fn session_with_hand(
    templates: &[CardTemplate],
    enemies: Vec<Enemy>,
    seed: u64,
) -> CombatSession {
    assert!(templates.len() <= 5, "hand holds at most five cards");
    init_tracing();
    CombatSession::start_seeded(knight_with(templates), enemies, seed)
}

/// Id of the first card in hand named `name`.
pub fn card_in_hand(session: &CombatSession, name: &str) -> CardId {
    session
        .hand()
        .iter()
        .find(|card| card.name() == name)
        .map(Card::id)
        .unwrap_or_else(|| panic!("{name} not in hand"))
}

/// Plays an affordable card at the first living enemy, attacks first.
/// Returns false if nothing was playable.
pub fn play_first_affordable(session: &mut CombatSession) -> bool {
    let energy = session.player().energy();
    let target = session
        .enemies()
        .iter()
        .find(|enemy| !enemy.is_dead())
        .map(Enemy::id);
    let hand = session.hand();
    let affordable = |card: &&Card| card.cost() <= energy;
    let Some(card) = hand
        .iter()
        .filter(affordable)
        .find(|card| card.card_type() == CardType::Attack)
        .or_else(|| hand.iter().find(affordable))
        .map(Card::id)
    else {
        return false;
    };
    session.play_card(card, target)
}

/// Plays out a whole combat with a greedy policy, capped at `max_turns`.
pub fn autoplay(session: &mut CombatSession, max_turns: u32) {
    while !session.is_combat_over() && session.turn() <= max_turns {
        while play_first_affordable(session) {}
        session.end_player_turn();
    }
}
