//! Prelude module for convenient imports
//!
//! ```rust
//! use combat_core::prelude::*;
//! ```

// Core types
pub use crate::types::{
    CombatPhase, DamageType, PrimaryStat, RowPosition, SkillReach, SkillTargetType, SkillType, Team,
};

// Calculator
pub use crate::damage::{
    compute_critical_damage, compute_damage, compute_healing, roll_for_critical, CritRoll,
    NO_SCALING,
};

// Targeting
pub use crate::targeting::{resolve_targets, Battlefield, Combatant, CombatantId, StatLine, TargetSet};

// Combat
pub use crate::combat::{apply_resolution, resolve_skill, PhaseTracker, SkillResolution};

// Config and data
pub use crate::config::CombatConstants;
pub use crate::definitions::{Roster, SkillDefinition};
pub use crate::error::{CombatError, DefinitionError};
