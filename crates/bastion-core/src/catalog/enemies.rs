//! The bestiary.

use serde::{Deserialize, Serialize};

use crate::entity::{Enemy, EnemyTier, PatternToken};

/// Every enemy design the game ships with.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKind {
    /// Normal, 40 health.
    Bandit,
    /// Normal, 35 health, weakens the player.
    Goblin,
    /// Normal, 45 health, opens with a strength buff.
    Cultist,
    /// Normal, 50 health, defends between attacks.
    Slime,
    /// Elite, 90 health.
    BanditLeader,
    /// Elite, 100 health.
    OrcWarrior,
    /// Boss, 250 health.
    DarkKnight,
}

impl EnemyKind {
    /// All enemy kinds in bestiary order.
    pub const ALL: [Self; 7] = [
        Self::Bandit,
        Self::Goblin,
        Self::Cultist,
        Self::Slime,
        Self::BanditLeader,
        Self::OrcWarrior,
        Self::DarkKnight,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bandit => "Bandit",
            Self::Goblin => "Goblin",
            Self::Cultist => "Cultist",
            Self::Slime => "Slime",
            Self::BanditLeader => "Bandit Leader",
            Self::OrcWarrior => "Orc Warrior",
            Self::DarkKnight => "Dark Knight",
        }
    }

    /// Encounter tier.
    #[must_use]
    pub const fn tier(self) -> EnemyTier {
        match self {
            Self::Bandit | Self::Goblin | Self::Cultist | Self::Slime => EnemyTier::Normal,
            Self::BanditLeader | Self::OrcWarrior => EnemyTier::Elite,
            Self::DarkKnight => EnemyTier::Boss,
        }
    }

    const fn max_health(self) -> u32 {
        match self {
            Self::Bandit => 40,
            Self::Goblin => 35,
            Self::Cultist => 45,
            Self::Slime => 50,
            Self::BanditLeader => 90,
            Self::OrcWarrior => 100,
            Self::DarkKnight => 250,
        }
    }

    const fn gold_reward(self) -> u32 {
        match self {
            Self::Bandit => 20,
            Self::Goblin => 18,
            Self::Cultist => 25,
            Self::Slime => 15,
            Self::BanditLeader => 50,
            Self::OrcWarrior => 55,
            Self::DarkKnight => 100,
        }
    }

    fn pattern(self) -> Vec<PatternToken> {
        use PatternToken::{AttackLarge, AttackMedium, AttackSmall, BuffStrength, DebuffWeak, Defend};

        match self {
            Self::Bandit => vec![AttackSmall, AttackMedium],
            Self::Goblin => vec![AttackSmall, DebuffWeak, AttackMedium],
            Self::Cultist => vec![BuffStrength, AttackMedium, AttackMedium],
            Self::Slime => vec![AttackSmall, Defend, AttackSmall],
            Self::BanditLeader => vec![BuffStrength, AttackLarge, AttackMedium, AttackMedium],
            Self::OrcWarrior => vec![AttackMedium, AttackLarge, Defend],
            Self::DarkKnight => vec![AttackMedium, AttackLarge, BuffStrength, AttackLarge, Defend],
        }
    }

    /// Creates a fresh enemy of this kind at full health.
    #[must_use]
    pub fn spawn(self) -> Enemy {
        Enemy::new(
            self.name(),
            self.tier(),
            self.max_health(),
            self.pattern(),
            self.gold_reward(),
            self.tier() != EnemyTier::Normal,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Combatant;

    #[test]
    fn spawn_sets_stats() {
        let slime = EnemyKind::Slime.spawn();
        assert_eq!(slime.name(), "Slime");
        assert_eq!(slime.vitals().max_health(), 50);
        assert_eq!(slime.gold_reward(), 15);
        assert_eq!(slime.pattern().len(), 3);
    }

    #[test]
    fn only_elites_and_bosses_grant_cards() {
        for kind in EnemyKind::ALL {
            let enemy = kind.spawn();
            assert_eq!(enemy.grants_card_reward(), kind.tier() != EnemyTier::Normal);
        }
    }

    #[test]
    fn every_pattern_is_non_empty_and_recognized() {
        for kind in EnemyKind::ALL {
            let enemy = kind.spawn();
            assert!(!enemy.pattern().is_empty());
            assert!(enemy
                .pattern()
                .iter()
                .all(|token| !matches!(token, PatternToken::Unrecognized(_))));
        }
    }

    #[test]
    fn dark_knight_is_the_boss() {
        assert_eq!(EnemyKind::DarkKnight.tier(), EnemyTier::Boss);
        assert_eq!(EnemyKind::DarkKnight.spawn().vitals().current_health(), 250);
    }
}
