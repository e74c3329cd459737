//! Defense mitigation - flat reduction proportional to defense
//!
//! Formula:
//! - reduction = defense * ratio(damage_type)
//! - damage_after_defense = raw_damage - reduction
//!
//! Physical uses a 10% ratio, magical 5%, true damage ignores defense.
//! The minimum-damage floor is applied by the calculator, not here.

use crate::config::CombatConstants;
use crate::types::DamageType;

/// Amount subtracted from raw damage by the target's defense
pub fn defense_reduction(constants: &CombatConstants, damage_type: DamageType, defense: f64) -> f64 {
    if defense <= 0.0 {
        return 0.0;
    }
    defense * damage_type.defense_ratio(constants)
}

/// Raw damage minus defense reduction, unrounded and unfloored (may be negative)
pub fn apply_defense(
    constants: &CombatConstants,
    damage_type: DamageType,
    raw_damage: f64,
    defense: f64,
) -> f64 {
    raw_damage - defense_reduction(constants, damage_type, defense)
}
