//! combat_core - Combat rules for a turn-based RPG
//!
//! This library provides:
//! - Damage/healing calculator: stat + multiplier + defense -> integer outcome
//! - Critical hits rolled against a caller-supplied random source
//! - Target resolution: side/cardinality filter intersected with row reach
//! - Skill resolution and the combat phase lifecycle
//! - TOML-backed constants and static character/enemy/dungeon/skill data
//!
//! Every operation is a pure function over its inputs. Constants are built
//! once and passed by reference; randomness is always injected.

pub mod combat;
pub mod config;
pub mod damage;
pub mod defense;
pub mod definitions;
pub mod error;
pub mod prelude;
pub mod status;
pub mod targeting;
pub mod types;

// Re-export core types for convenience
pub use combat::{apply_resolution, resolve_skill, HitKind, HitOutcome, PhaseTracker, SkillResolution};
pub use config::{default_constants, default_roster, default_skills, CombatConstants, ConfigError};
pub use damage::{
    compute_critical_damage, compute_damage, compute_healing, compute_magical_damage,
    compute_physical_damage, compute_true_damage, roll_for_critical, CritRoll,
};
pub use definitions::{CharacterDefinition, DungeonDefinition, EnemyDefinition, Roster, SkillDefinition};
pub use error::{CombatError, DefinitionError};
pub use status::{ActiveStatus, Cooldown, StatusApplication};
pub use targeting::{resolve_targets, Battlefield, Combatant, CombatantId, StatLine, TargetSet};
pub use types::{
    CombatPhase, DamageType, PrimaryStat, RowPosition, SkillReach, SkillTargetType, SkillType,
    StatValue, Team,
};
