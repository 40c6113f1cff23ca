//! Rules configuration.
//!
//! Every tunable number the calculator and the record preparation use lives
//! in [`RulesConfig`]. It is an explicit value passed into each call rather
//! than a global, and it can be loaded from a RON file such as
//! `data/rules.ron`. Missing fields fall back to the defaults of the current
//! rules revision.

use crate::errors::{ConfigError, ConfigResult};
use schema::DieFaces;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Config layout version understood by this build.
pub const RULES_CONFIG_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub version: u32,
    /// Faces of the die used for accuracy, critical and skill checks.
    pub check_die: u32,
    /// Critical threshold before attacker, defender and move modifiers.
    pub base_crit_threshold: i32,
    pub critical_multiplier: f64,
    /// Floor applied to every non-immune damage result.
    pub minimum_damage: u32,
    pub moves: MoveDefaults,
    pub actors: ActorDefaults,
    pub skills: SkillBounds,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveDefaults {
    pub accuracy: i32,
    pub base_power: f64,
    pub pp: u32,
    pub extra_rolls_die: DieFaces,
    pub multi_attack_die: DieFaces,
    /// Upper bound on the extra-roll dice count of a single move.
    pub max_extra_dice: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorDefaults {
    pub level: f64,
    pub hp: f64,
    pub belly: f64,
    /// Experience needed per level; experience max is `level * this`.
    pub experience_per_level: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            version: RULES_CONFIG_VERSION,
            check_die: 100,
            base_crit_threshold: 10,
            critical_multiplier: 1.5,
            minimum_damage: 1,
            moves: MoveDefaults::default(),
            actors: ActorDefaults::default(),
            skills: SkillBounds::default(),
        }
    }
}

impl Default for MoveDefaults {
    fn default() -> Self {
        Self {
            accuracy: 75,
            base_power: 10.0,
            pp: 10,
            extra_rolls_die: DieFaces::D6,
            multi_attack_die: DieFaces::D4,
            max_extra_dice: 100,
        }
    }
}

impl Default for ActorDefaults {
    fn default() -> Self {
        Self {
            level: 1.0,
            hp: 10.0,
            belly: 100.0,
            experience_per_level: 100.0,
        }
    }
}

impl Default for SkillBounds {
    fn default() -> Self {
        Self { min: 15.0, max: 95.0 }
    }
}

impl RulesConfig {
    /// Parse a config from RON text and check its version.
    pub fn from_ron(content: &str) -> ConfigResult<Self> {
        let config: RulesConfig = ron::from_str(content)?;
        config.validated()
    }

    /// Load a config file from disk.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron(&content)?;
        tracing::debug!(path = %path.display(), version = config.version, "loaded rules config");
        Ok(config)
    }

    fn validated(mut self) -> ConfigResult<Self> {
        if self.version != RULES_CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: self.version,
                expected: RULES_CONFIG_VERSION,
            });
        }
        if self.check_die == 0 {
            tracing::warn!("check_die of 0 in rules config, using 100");
            self.check_die = 100;
        }
        if !self.critical_multiplier.is_finite() || self.critical_multiplier < 1.0 {
            tracing::warn!(
                critical_multiplier = self.critical_multiplier,
                "critical_multiplier below 1 in rules config, using 1.5"
            );
            self.critical_multiplier = 1.5;
        }
        if self.minimum_damage == 0 {
            tracing::warn!("minimum_damage of 0 in rules config, using 1");
            self.minimum_damage = 1;
        }
        if self.skills.min > self.skills.max {
            std::mem::swap(&mut self.skills.min, &mut self.skills.max);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = RulesConfig::from_ron("()").unwrap();
        assert_eq!(config, RulesConfig::default());
        assert_eq!(config.base_crit_threshold, 10);
        assert_eq!(config.critical_multiplier, 1.5);
    }

    #[test]
    fn test_partial_config_overrides() {
        let config =
            RulesConfig::from_ron("(version: 1, base_crit_threshold: 5, moves: (accuracy: 90))")
                .unwrap();
        assert_eq!(config.base_crit_threshold, 5);
        assert_eq!(config.moves.accuracy, 90);
        assert_eq!(config.moves.pp, 10);
    }

    #[test]
    fn test_unsupported_version_is_rejected() {
        let err = RulesConfig::from_ron("(version: 7)").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnsupportedVersion { found: 7, expected: 1 }
        ));
    }

    #[test]
    fn test_zero_minimum_damage_is_raised() {
        let config = RulesConfig::from_ron("(minimum_damage: 0)").unwrap();
        assert_eq!(config.minimum_damage, 1);
    }

    #[test]
    fn test_bad_critical_multiplier_falls_back() {
        for raw in [
            "(critical_multiplier: 0.0)",
            "(critical_multiplier: -2.0)",
            "(critical_multiplier: 0.5)",
        ] {
            let config = RulesConfig::from_ron(raw).unwrap();
            assert_eq!(config.critical_multiplier, 1.5, "{}", raw);
        }
        let config = RulesConfig::from_ron("(critical_multiplier: 2.0)").unwrap();
        assert_eq!(config.critical_multiplier, 2.0);
    }

    #[test]
    fn test_zero_check_die_falls_back() {
        let config = RulesConfig::from_ron("(check_die: 0)").unwrap();
        assert_eq!(config.check_die, 100);
    }

    #[test]
    fn test_malformed_config_is_parse_error() {
        let err = RulesConfig::from_ron("(version: \"one\")").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_bundled_rules_file_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/rules.ron");
        let config = RulesConfig::load(&path).unwrap();
        assert_eq!(config, RulesConfig::default());
    }
}
