//! SkillDefinition - what a skill does, who it can reach, how it scales

use crate::config::CombatConstants;
use crate::error::DefinitionError;
use crate::status::StatusApplication;
use crate::types::{DamageType, PrimaryStat, SkillReach, SkillTargetType, SkillType};
use serde::{Deserialize, Serialize};

/// Describes a skill. Loaded from TOML configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillDefinition {
    /// Unique skill identifier
    pub id: String,
    /// Display name
    pub name: String,

    // === Classification ===
    #[serde(default = "default_skill_type")]
    pub skill_type: SkillType,
    #[serde(default = "default_target_type")]
    pub target_type: SkillTargetType,
    #[serde(default = "default_reach")]
    pub reach: SkillReach,

    // === Scaling ===
    #[serde(default = "default_damage_type")]
    pub damage_type: DamageType,
    /// Stat the amount scales from; the caster's primary stat when unset
    #[serde(default)]
    pub scaling_stat: Option<PrimaryStat>,
    /// Scales the caster's stat (1.0 = 100%)
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,

    // === Crit ===
    #[serde(default = "default_can_crit")]
    pub can_crit: bool,

    // === Timing ===
    /// Turns before reuse; the configured default when unset
    #[serde(default)]
    pub cooldown_turns: Option<u32>,

    // === Effects ===
    #[serde(default)]
    pub status: Option<StatusApplication>,
}

fn default_skill_type() -> SkillType {
    SkillType::Damage
}
fn default_target_type() -> SkillTargetType {
    SkillTargetType::SingleEnemy
}
fn default_reach() -> SkillReach {
    SkillReach::MeleeFrontThenBack
}
fn default_damage_type() -> DamageType {
    DamageType::Physical
}
fn default_multiplier() -> f64 {
    1.0
}
fn default_can_crit() -> bool {
    true
}

impl Default for SkillDefinition {
    fn default() -> Self {
        SkillDefinition {
            id: "default".to_string(),
            name: "Default Attack".to_string(),
            skill_type: default_skill_type(),
            target_type: default_target_type(),
            reach: default_reach(),
            damage_type: default_damage_type(),
            scaling_stat: None,
            multiplier: default_multiplier(),
            can_crit: default_can_crit(),
            cooldown_turns: Some(0),
            status: None,
        }
    }
}

impl SkillDefinition {
    /// Create a basic melee attack
    pub fn basic_attack() -> Self {
        SkillDefinition {
            id: "basic_attack".to_string(),
            name: "Basic Attack".to_string(),
            ..Default::default()
        }
    }

    /// Turns before reuse, falling back to the configured default
    pub fn cooldown(&self, constants: &CombatConstants) -> u32 {
        self.cooldown_turns
            .unwrap_or(constants.skills.default_cooldown_turns)
    }

    /// Whether this skill is aimed at the caster's own side
    pub fn is_supportive(&self) -> bool {
        matches!(self.skill_type, SkillType::Heal | SkillType::Buff)
    }

    /// Check the skill's numbers make sense
    pub fn validate(&self) -> Result<(), DefinitionError> {
        if self.id.trim().is_empty() {
            return Err(DefinitionError::EmptySkillId);
        }
        if !self.multiplier.is_finite() || self.multiplier < 0.0 {
            return Err(DefinitionError::InvalidMultiplier {
                skill: self.id.clone(),
                value: self.multiplier,
            });
        }
        if let Some(status) = &self.status {
            if !status.magnitude.is_finite() {
                return Err(DefinitionError::InvalidStatusMagnitude {
                    skill: self.id.clone(),
                    status: status.id.clone(),
                });
            }
        }
        if !self.skill_type.has_amount() && self.status.is_none() {
            return Err(DefinitionError::MissingStatus {
                skill: self.id.clone(),
                skill_type: self.skill_type,
            });
        }
        Ok(())
    }
}
