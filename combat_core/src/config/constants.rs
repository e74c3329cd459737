//! Combat constants configuration

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Tunable combat constants
///
/// Built once at startup (from defaults or a TOML file) and passed by
/// reference to the calculator and targeting functions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CombatConstants {
    #[serde(default)]
    pub crit: CritConstants,
    #[serde(default)]
    pub defense: DefenseConstants,
    #[serde(default)]
    pub damage: DamageConstants,
    #[serde(default)]
    pub skills: SkillConstants,
    #[serde(default)]
    pub status: StatusConstants,
}

impl CombatConstants {
    /// Reject values the formulas cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let crit = &self.crit;
        if !crit.multiplier.is_finite() || crit.multiplier < 1.0 {
            return Err(ConfigError::ValidationError(format!(
                "crit.multiplier must be >= 1.0, got {}",
                crit.multiplier
            )));
        }
        if !(0.0..=1.0).contains(&crit.base_chance) {
            return Err(ConfigError::ValidationError(format!(
                "crit.base_chance must be within [0, 1], got {}",
                crit.base_chance
            )));
        }

        for (name, ratio) in [
            ("physical_reduction_ratio", self.defense.physical_reduction_ratio),
            ("magical_reduction_ratio", self.defense.magical_reduction_ratio),
        ] {
            if !ratio.is_finite() || ratio < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "defense.{} must be a non-negative number, got {}",
                    name, ratio
                )));
            }
        }

        if self.damage.minimum < 1 {
            return Err(ConfigError::ValidationError(
                "damage.minimum must be at least 1".to_string(),
            ));
        }

        if self.skills.max_targets == 0 {
            return Err(ConfigError::ValidationError(
                "skills.max_targets must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CritConstants {
    /// Critical hit multiplier (1.5 = 150%)
    #[serde(default = "default_crit_multiplier")]
    pub multiplier: f64,
    /// Chance for a hit to crit, as a probability in [0, 1]
    #[serde(default = "default_crit_chance")]
    pub base_chance: f64,
}

impl Default for CritConstants {
    fn default() -> Self {
        CritConstants {
            multiplier: 1.5,
            base_chance: 0.05,
        }
    }
}

fn default_crit_multiplier() -> f64 {
    1.5
}
fn default_crit_chance() -> f64 {
    0.05
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefenseConstants {
    /// Portion of defense subtracted from physical damage
    #[serde(default = "default_physical_ratio")]
    pub physical_reduction_ratio: f64,
    /// Portion of defense subtracted from magical damage
    #[serde(default = "default_magical_ratio")]
    pub magical_reduction_ratio: f64,
}

impl Default for DefenseConstants {
    fn default() -> Self {
        DefenseConstants {
            physical_reduction_ratio: 0.10,
            magical_reduction_ratio: 0.05,
        }
    }
}

fn default_physical_ratio() -> f64 {
    0.10
}
fn default_magical_ratio() -> f64 {
    0.05
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageConstants {
    /// Lowest damage any landed hit deals
    #[serde(default = "default_minimum_damage")]
    pub minimum: u32,
}

impl Default for DamageConstants {
    fn default() -> Self {
        DamageConstants { minimum: 1 }
    }
}

fn default_minimum_damage() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillConstants {
    /// Upper bound on targets a single skill resolution can affect
    #[serde(default = "default_max_targets")]
    pub max_targets: usize,
    /// Cooldown used by skills that do not set their own
    #[serde(default = "default_cooldown_turns")]
    pub default_cooldown_turns: u32,
}

impl Default for SkillConstants {
    fn default() -> Self {
        SkillConstants {
            max_targets: 5,
            default_cooldown_turns: 2,
        }
    }
}

fn default_max_targets() -> usize {
    5
}
fn default_cooldown_turns() -> u32 {
    2
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusConstants {
    /// Duration used by status applications that do not set their own
    #[serde(default = "default_status_duration")]
    pub default_duration_turns: u32,
}

impl Default for StatusConstants {
    fn default() -> Self {
        StatusConstants {
            default_duration_turns: 3,
        }
    }
}

fn default_status_duration() -> u32 {
    3
}
