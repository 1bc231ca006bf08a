//! Card-effect interpreter.
//!
//! Effects are applied one at a time, in card order, against a borrowed view
//! of the session. Each user-visible change is logged. Effects whose target
//! is missing or dead log a "no valid target" line and change nothing;
//! unrecognized effect kinds change nothing and are not logged.

use rand_chacha::ChaCha8Rng;

use crate::card::{CardEffect, EffectKind, TargetSelector};
use crate::config::CombatConfig;
use crate::entity::{Combatant, DrawOutcome, Enemy, EnemyId, Player};
use crate::event::{CombatEvent, CombatLog};
use crate::status::{StatusEffect, StatusKind};

use super::damage::attack_damage;

/// Draws up to `count` cards, logging each reshuffle. Returns how many
/// cards reached the hand.
pub(crate) fn draw_cards(
    player: &mut Player,
    log: &mut CombatLog,
    rng: &mut ChaCha8Rng,
    count: u32,
) -> usize {
    let mut drawn = 0;
    for _ in 0..count {
        match player.piles_mut().draw(rng) {
            DrawOutcome::Drawn { reshuffled, .. } => {
                if reshuffled {
                    log.push(CombatEvent::Reshuffled);
                }
                drawn += 1;
            }
            DrawOutcome::Empty => {
                tracing::trace!("draw and discard piles empty, draw skipped");
            }
        }
    }
    drawn
}

/// Mutable view of the session used while a card resolves.
pub(crate) struct EffectContext<'a> {
    pub player: &'a mut Player,
    pub enemies: &'a mut [Enemy],
    pub log: &'a mut CombatLog,
    pub rng: &'a mut ChaCha8Rng,
    pub config: &'a CombatConfig,
}

impl EffectContext<'_> {
    /// Applies one effect of the card named `card`.
    pub(crate) fn apply(&mut self, card: &str, effect: &CardEffect, target: Option<EnemyId>) {
        match &effect.kind {
            EffectKind::Damage => {
                let targets = self.enemy_targets(effect.target, target);
                if targets.is_empty() {
                    self.no_target(card);
                }
                for index in targets {
                    self.deal_damage(index, effect.magnitude);
                }
            }
            EffectKind::Block => {
                let amount = self.player.gain_block(effect.magnitude);
                self.log.push(CombatEvent::BlockGained { amount });
            }
            EffectKind::Draw => {
                draw_cards(self.player, self.log, self.rng, effect.magnitude);
            }
            EffectKind::Strength => {
                self.player
                    .add_status(StatusEffect::permanent(StatusKind::Strength, effect.magnitude));
                self.log.push(CombatEvent::StrengthGained {
                    amount: effect.magnitude,
                });
            }
            EffectKind::Weak => self.debuff(card, StatusKind::Weak, effect, target),
            EffectKind::Vulnerable => self.debuff(card, StatusKind::Vulnerable, effect, target),
            EffectKind::Unrecognized(tag) => {
                tracing::debug!(card, effect = %tag, "unrecognized effect kind, skipping");
            }
        }
    }

    /// Indices of the living enemies an effect reaches.
    fn enemy_targets(&self, selector: TargetSelector, target: Option<EnemyId>) -> Vec<usize> {
        match selector {
            TargetSelector::AllEnemies => self
                .enemies
                .iter()
                .enumerate()
                .filter(|(_, enemy)| !enemy.is_dead())
                .map(|(index, _)| index)
                .collect(),
            TargetSelector::SingleEnemy | TargetSelector::SelfTarget | TargetSelector::Untargeted => {
                target
                    .map(EnemyId::index)
                    .filter(|&index| self.enemies.get(index).is_some_and(|enemy| !enemy.is_dead()))
                    .into_iter()
                    .collect()
            }
        }
    }

    fn deal_damage(&mut self, index: usize, base: u32) {
        let enemy = &mut self.enemies[index];
        let amount = attack_damage(base, self.player.statuses(), enemy.statuses(), self.config);
        enemy.take_damage(amount);
        self.log.push(CombatEvent::DamageDealt {
            target: enemy.name().to_string(),
            amount,
        });
        if enemy.is_dead() {
            self.log.push(CombatEvent::EnemyDefeated {
                enemy: enemy.name().to_string(),
            });
        }
    }

    fn debuff(&mut self, card: &str, status: StatusKind, effect: &CardEffect, target: Option<EnemyId>) {
        let targets = self.enemy_targets(effect.target, target);
        if targets.is_empty() {
            self.no_target(card);
        }
        for index in targets {
            let enemy = &mut self.enemies[index];
            enemy.add_status(StatusEffect::timed(
                status,
                effect.magnitude,
                self.config.card_debuff_duration,
            ));
            self.log.push(CombatEvent::DebuffApplied {
                status,
                amount: effect.magnitude,
                target: enemy.name().to_string(),
            });
        }
    }

    fn no_target(&mut self, card: &str) {
        self.log.push(CombatEvent::NoValidTarget {
            card: card.to_string(),
        });
    }
}
