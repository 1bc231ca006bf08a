//! Attack damage pipeline shared by player attacks and enemy attacks.
//!
//! Order is fixed: the attacker's strength is added to the base value, then
//! the defender's vulnerable multiplier applies, then the attacker's weak
//! multiplier. Each multiplication truncates toward zero on its own.

use crate::config::CombatConfig;
use crate::status::{StatusKind, StatusTable};

/// Scales `damage` by `factor`, truncating.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn scale(damage: u32, factor: f64) -> u32 {
    (f64::from(damage) * factor) as u32
}

/// Applies the vulnerable and weak multipliers to an already strength-adjusted
/// amount.
#[must_use]
pub fn apply_attack_modifiers(
    damage: u32,
    attacker: &StatusTable,
    defender: &StatusTable,
    config: &CombatConfig,
) -> u32 {
    let mut damage = damage;
    if defender.has(StatusKind::Vulnerable) {
        damage = scale(damage, config.vulnerable_multiplier);
    }
    if attacker.has(StatusKind::Weak) {
        damage = scale(damage, config.weak_multiplier);
    }
    damage
}

/// Full pipeline for a base attack value: strength, then modifiers.
#[must_use]
pub fn attack_damage(
    base: u32,
    attacker: &StatusTable,
    defender: &StatusTable,
    config: &CombatConfig,
) -> u32 {
    let with_strength = base.saturating_add(attacker.stacks_of(StatusKind::Strength));
    apply_attack_modifiers(with_strength, attacker, defender, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(StatusKind, u32)]) -> StatusTable {
        let mut table = StatusTable::new();
        for &(kind, stacks) in entries {
            table.add(kind, stacks, None);
        }
        table
    }

    #[test]
    fn no_statuses_passes_base_through() {
        let config = CombatConfig::default();
        assert_eq!(attack_damage(6, &table(&[]), &table(&[]), &config), 6);
    }

    #[test]
    fn strength_adds_before_multipliers() {
        let config = CombatConfig::default();
        let attacker = table(&[(StatusKind::Strength, 2)]);
        let defender = table(&[(StatusKind::Vulnerable, 1)]);
        // (6 + 2) * 1.5 = 12
        assert_eq!(attack_damage(6, &attacker, &defender, &config), 12);
    }

    #[test]
    fn vulnerable_truncates() {
        let config = CombatConfig::default();
        let defender = table(&[(StatusKind::Vulnerable, 1)]);
        // 7 * 1.5 = 10.5
        assert_eq!(attack_damage(7, &table(&[]), &defender, &config), 10);
    }

    #[test]
    fn weak_truncates() {
        let config = CombatConfig::default();
        let attacker = table(&[(StatusKind::Weak, 1)]);
        // 6 * 0.75 = 4.5
        assert_eq!(attack_damage(6, &attacker, &table(&[]), &config), 4);
    }

    #[test]
    fn both_multipliers_apply_in_order() {
        let config = CombatConfig::default();
        let attacker = table(&[(StatusKind::Weak, 1)]);
        let defender = table(&[(StatusKind::Vulnerable, 1)]);
        // 9 -> 13 -> 9. A single combined 1.125 factor would give 10.
        assert_eq!(attack_damage(7, &attacker, &defender, &config), 7);
        assert_eq!(attack_damage(9, &attacker, &defender, &config), 9);
    }

    #[test]
    fn weak_on_defender_and_vulnerable_on_attacker_do_nothing() {
        let config = CombatConfig::default();
        let attacker = table(&[(StatusKind::Vulnerable, 1)]);
        let defender = table(&[(StatusKind::Weak, 1)]);
        assert_eq!(attack_damage(10, &attacker, &defender, &config), 10);
    }
}
