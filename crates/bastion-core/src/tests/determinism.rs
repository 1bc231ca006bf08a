//! Determinism verification tests.
//!
//! A combat started from the same player, enemies and seed, then driven by
//! the same actions, must produce the same log and the same final state.

use crate::card::CardId;
use crate::catalog::EnemyKind;
use crate::entity::Enemy;
use crate::session::CombatSession;

use super::helpers::{autoplay, init_tracing, play_first_affordable, starter_knight};

fn encounter() -> Vec<Enemy> {
    vec![EnemyKind::Goblin.spawn(), EnemyKind::Slime.spawn()]
}

/// Hand followed by draw pile, in draw order.
fn draw_order(session: &CombatSession) -> Vec<CardId> {
    session
        .hand()
        .iter()
        .chain(session.draw_pile())
        .map(|card| card.id())
        .collect()
}

#[test]
fn same_seed_same_combat() {
    init_tracing();
    let mut first = CombatSession::start_seeded(starter_knight(), encounter(), 1234);
    let mut second = CombatSession::start_seeded(starter_knight(), encounter(), 1234);

    autoplay(&mut first, 40);
    autoplay(&mut second, 40);

    assert_eq!(first.turn(), second.turn(), "Turn counters should match");
    assert_eq!(
        first.combat_log().lines(),
        second.combat_log().lines(),
        "Logs should be identical"
    );
    assert_eq!(first.snapshot(), second.snapshot(), "Final state should match");
}

#[test]
fn same_seed_same_opening_hand() {
    let first = CombatSession::start_seeded(starter_knight(), encounter(), 77);
    let second = CombatSession::start_seeded(starter_knight(), encounter(), 77);
    assert_eq!(draw_order(&first), draw_order(&second));
}

#[test]
fn different_seeds_shuffle_differently() {
    let first = CombatSession::start_seeded(starter_knight(), encounter(), 1);
    let second = CombatSession::start_seeded(starter_knight(), encounter(), 2);
    assert_ne!(first.seed(), second.seed());
    assert_ne!(draw_order(&first), draw_order(&second));
}

#[test]
fn unseeded_combat_replays_from_its_seed() {
    init_tracing();
    let mut original = CombatSession::start(starter_knight(), encounter());
    let mut replay = CombatSession::start_seeded(starter_knight(), encounter(), original.seed());

    autoplay(&mut original, 40);
    autoplay(&mut replay, 40);

    assert_eq!(original.combat_log().lines(), replay.combat_log().lines());
    assert_eq!(original.snapshot(), replay.snapshot());
}

#[test]
fn cloned_session_continues_identically() {
    let mut session = CombatSession::start_seeded(starter_knight(), encounter(), 9);
    while play_first_affordable(&mut session) {}
    session.end_player_turn();

    let mut fork = session.clone();
    for _ in 0..3 {
        while play_first_affordable(&mut session) {}
        session.end_player_turn();
        while play_first_affordable(&mut fork) {}
        fork.end_player_turn();
    }

    assert_eq!(session.combat_log(), fork.combat_log());
    assert_eq!(draw_order(&session), draw_order(&fork));
}

#[test]
fn snapshot_json_is_stable() {
    let first = CombatSession::start_seeded(starter_knight(), encounter(), 5);
    let second = CombatSession::start_seeded(starter_knight(), encounter(), 5);
    assert_eq!(
        first.snapshot().to_json().unwrap(),
        second.snapshot().to_json().unwrap()
    );
}
