//! Serializable views of a session for the presentation layer.

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::entity::{Combatant, Enemy, EnemyId, EnemyTier, Player};
use crate::resolver::intent::Intent;
use crate::status::StatusEffect;

use super::CombatSession;

/// Player state at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Display name.
    pub name: String,
    /// Current health.
    pub health: u32,
    /// Maximum health.
    pub max_health: u32,
    /// Current block.
    pub block: u32,
    /// Energy left.
    pub energy: u32,
    /// Maximum energy.
    pub max_energy: u32,
    /// Gold carried.
    pub gold: u32,
    /// Active statuses in kind order.
    pub statuses: Vec<StatusEffect>,
    /// Cards in hand.
    pub hand: Vec<Card>,
    /// Cards left in the draw pile.
    pub draw_pile_size: usize,
    /// Cards in the discard pile.
    pub discard_pile_size: usize,
    /// Cards in the exhaust pile.
    pub exhaust_pile_size: usize,
}

impl PlayerSnapshot {
    fn capture(player: &Player) -> Self {
        let vitals = player.vitals();
        let piles = player.piles();
        Self {
            name: player.name().to_string(),
            health: vitals.current_health(),
            max_health: vitals.max_health(),
            block: vitals.block(),
            energy: player.energy(),
            max_energy: player.max_energy(),
            gold: player.gold(),
            statuses: player.statuses().iter().copied().collect(),
            hand: piles.hand().to_vec(),
            draw_pile_size: piles.draw_pile_len(),
            discard_pile_size: piles.discard_pile().len(),
            exhaust_pile_size: piles.exhaust_pile().len(),
        }
    }
}

/// Enemy state at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemySnapshot {
    /// Session id.
    pub id: EnemyId,
    /// Display name.
    pub name: String,
    /// Encounter tier.
    pub tier: EnemyTier,
    /// Current health.
    pub health: u32,
    /// Maximum health.
    pub max_health: u32,
    /// Current block.
    pub block: u32,
    /// Active statuses in kind order.
    pub statuses: Vec<StatusEffect>,
    /// Telegraphed next action; `None` once dead.
    pub intent: Option<Intent>,
}

impl EnemySnapshot {
    fn capture(enemy: &Enemy) -> Self {
        let vitals = enemy.vitals();
        Self {
            id: enemy.id(),
            name: enemy.name().to_string(),
            tier: enemy.tier(),
            health: vitals.current_health(),
            max_health: vitals.max_health(),
            block: vitals.block(),
            statuses: enemy.statuses().iter().copied().collect(),
            intent: (!enemy.is_dead()).then(|| enemy.current_intent()),
        }
    }
}

/// Whole-session view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatSnapshot {
    /// Turn number.
    pub turn: u32,
    /// True while the player may act.
    pub is_player_turn: bool,
    /// The player.
    pub player: PlayerSnapshot,
    /// Every enemy in iteration order.
    pub enemies: Vec<EnemySnapshot>,
    /// Either side is dead.
    pub is_combat_over: bool,
    /// The player won.
    pub player_won: bool,
}

impl CombatSnapshot {
    pub(super) fn capture(session: &CombatSession) -> Self {
        Self {
            turn: session.turn(),
            is_player_turn: session.is_player_turn(),
            player: PlayerSnapshot::capture(session.player()),
            enemies: session.enemies().iter().map(EnemySnapshot::capture).collect(),
            is_combat_over: session.is_combat_over(),
            player_won: session.player_won(),
        }
    }

    /// Serializes the snapshot as JSON.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` failures.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::{CardCatalog, EnemyKind};
    use crate::entity::{CharacterClass, EnemyId};
    use crate::resolver::intent::Intent;
    use crate::session::{CombatSession, CombatSnapshot};

    fn session() -> CombatSession {
        let player = CardCatalog::new().new_player(CharacterClass::Knight);
        CombatSession::start_seeded(
            player,
            vec![EnemyKind::Cultist.spawn(), EnemyKind::Slime.spawn()],
            11,
        )
    }

    #[test]
    fn snapshot_reflects_session() {
        let session = session();
        let snap = session.snapshot();
        assert_eq!(snap.turn, 1);
        assert!(snap.is_player_turn);
        assert_eq!(snap.player.health, 80);
        assert_eq!(snap.player.hand.len(), 5);
        assert_eq!(snap.player.draw_pile_size, 5);
        assert_eq!(snap.enemies.len(), 2);
        assert_eq!(snap.enemies[1].id, EnemyId::new(1));
        assert!(matches!(snap.enemies[0].intent, Some(Intent::Buff { .. })));
        assert_eq!(snap.enemies[1].intent, Some(Intent::Attack { damage: 6 }));
        assert!(!snap.is_combat_over);
    }

    #[test]
    fn snapshot_json_roundtrip() {
        let snap = session().snapshot();
        let json = snap.to_json().unwrap();
        let back: CombatSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, back);
    }
}
