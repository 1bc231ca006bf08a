//! Rule configuration for a combat session.
//!
//! [`CombatConfig::default`] reproduces the standard rules. A partial JSON
//! document can override individual fields; anything missing keeps its
//! default value.
//!
//! ```
//! use bastion_core::config::CombatConfig;
//!
//! let config = CombatConfig::from_json_str(r#"{ "hand_size": 6 }"#).unwrap();
//! assert_eq!(config.hand_size, 6);
//! assert_eq!(config.card_debuff_duration, 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tunable combat rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Cards drawn at combat start and at the start of every player turn.
    pub hand_size: u32,
    /// Duration of weak/vulnerable applied by the player's cards.
    pub card_debuff_duration: u32,
    /// Duration of debuffs an enemy applies to the player.
    pub enemy_debuff_duration: u32,
    /// Factor applied to attack damage against a vulnerable defender.
    pub vulnerable_multiplier: f64,
    /// Factor applied to attack damage from a weakened attacker.
    pub weak_multiplier: f64,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            hand_size: 5,
            card_debuff_duration: 2,
            enemy_debuff_duration: 1,
            vulnerable_multiplier: 1.5,
            weak_multiplier: 0.75,
        }
    }
}

impl CombatConfig {
    /// Parses and validates a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every field is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hand_size == 0 {
            return Err(ConfigError::Invalid {
                field: "hand_size",
                reason: "must be at least 1".to_string(),
            });
        }
        for (field, value) in [
            ("card_debuff_duration", self.card_debuff_duration),
            ("enemy_debuff_duration", self.enemy_debuff_duration),
        ] {
            if value == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must last at least one turn".to_string(),
                });
            }
        }
        for (field, value) in [
            ("vulnerable_multiplier", self.vulnerable_multiplier),
            ("weak_multiplier", self.weak_multiplier),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a finite non-negative number, got {value}"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_standard_rules() {
        let config = CombatConfig::default();
        assert_eq!(config.hand_size, 5);
        assert_eq!(config.card_debuff_duration, 2);
        assert_eq!(config.enemy_debuff_duration, 1);
        assert!((config.vulnerable_multiplier - 1.5).abs() < f64::EPSILON);
        assert!((config.weak_multiplier - 0.75).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_document_is_default() {
        let config = CombatConfig::from_json_str("{}").unwrap();
        assert_eq!(config, CombatConfig::default());
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = CombatConfig::from_json_str("{ hand_size: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn zero_hand_size_rejected() {
        let err = CombatConfig::from_json_str(r#"{ "hand_size": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "hand_size", .. }));
    }

    #[test]
    fn zero_duration_rejected() {
        let err = CombatConfig::from_json_str(r#"{ "enemy_debuff_duration": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "enemy_debuff_duration",
                ..
            }
        ));
    }

    #[test]
    fn negative_multiplier_rejected() {
        let err = CombatConfig::from_json_str(r#"{ "weak_multiplier": -0.5 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "weak_multiplier",
                ..
            }
        ));
    }
}
