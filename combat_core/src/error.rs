//! Errors raised by combat calculations and skill resolution

use crate::targeting::CombatantId;
use crate::types::{CombatPhase, SkillType};
use thiserror::Error;

/// Caller contract violations. None of these are transient.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CombatError {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
    #[error("combatant {0} is not on the battlefield")]
    UnknownCombatant(CombatantId),
    #[error("combatant {0} is defeated and cannot act")]
    CasterDefeated(CombatantId),
    #[error("cannot move from {from:?} to {to:?}")]
    InvalidPhaseTransition { from: CombatPhase, to: CombatPhase },
}

impl CombatError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        CombatError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

pub type CombatResult<T> = Result<T, CombatError>;

/// Skill or roster data that cannot be used as written
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DefinitionError {
    #[error("skill id must not be empty")]
    EmptySkillId,
    #[error("skill `{skill}` has invalid multiplier {value}")]
    InvalidMultiplier { skill: String, value: f64 },
    #[error("skill `{skill}` status `{status}` has invalid magnitude")]
    InvalidStatusMagnitude { skill: String, status: String },
    #[error("skill `{skill}` is a {skill_type:?} skill without a status to apply")]
    MissingStatus { skill: String, skill_type: SkillType },
    #[error("unknown character `{0}`")]
    UnknownCharacter(String),
    #[error("unknown enemy `{0}`")]
    UnknownEnemy(String),
}

/// Stats and defense must be non-negative
pub(crate) fn check_stat(name: &'static str, value: i32) -> CombatResult<()> {
    if value < 0 {
        return Err(CombatError::invalid(name, format!("must be >= 0, got {}", value)));
    }
    Ok(())
}

/// Multipliers must be finite and non-negative
pub(crate) fn check_multiplier(name: &'static str, value: f64) -> CombatResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CombatError::invalid(
            name,
            format!("must be a finite number >= 0, got {}", value),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_stat() {
        assert!(check_stat("attacker_stat", 0).is_ok());
        assert!(check_stat("attacker_stat", 250).is_ok());
        let err = check_stat("target_defense", -1).unwrap_err();
        assert_eq!(
            err,
            CombatError::InvalidArgument {
                name: "target_defense",
                reason: "must be >= 0, got -1".to_string(),
            }
        );
    }

    #[test]
    fn test_check_multiplier() {
        assert!(check_multiplier("multiplier", 0.0).is_ok());
        assert!(check_multiplier("multiplier", -0.5).is_err());
        assert!(check_multiplier("multiplier", f64::NAN).is_err());
        assert!(check_multiplier("multiplier", f64::INFINITY).is_err());
    }

    #[test]
    fn test_definition_error_display() {
        assert_eq!(
            DefinitionError::UnknownEnemy("dragon".to_string()).to_string(),
            "unknown enemy `dragon`"
        );
        let err = DefinitionError::MissingStatus {
            skill: "rally".to_string(),
            skill_type: SkillType::Buff,
        };
        assert_eq!(err.to_string(), "skill `rally` is a Buff skill without a status to apply");
    }

    #[test]
    fn test_display() {
        let err = CombatError::invalid("multiplier", "must be a finite number >= 0, got NaN");
        assert_eq!(
            err.to_string(),
            "invalid argument `multiplier`: must be a finite number >= 0, got NaN"
        );
    }
}
