//! Damage and healing formulas - turning a stat and a multiplier into a number
//!
//! All results are rounded half away from zero. Damage never drops below
//! `constants.damage.minimum`; healing has no floor.

use crate::config::CombatConstants;
use crate::defense::apply_defense;
use crate::error::{check_multiplier, check_stat, CombatResult};
use crate::types::{DamageType, StatValue};

/// Multiplier that leaves the base value unscaled
pub const NO_SCALING: f64 = 1.0;

/// Physical damage: `max(floor, round(stat * multiplier - defense * 0.10))`
pub fn compute_physical_damage(
    constants: &CombatConstants,
    attacker_stat: StatValue,
    target_defense: StatValue,
    multiplier: f64,
) -> CombatResult<u32> {
    compute_damage(constants, DamageType::Physical, attacker_stat, target_defense, multiplier)
}

/// Magical damage: `max(floor, round(int * multiplier - defense * 0.05))`
pub fn compute_magical_damage(
    constants: &CombatConstants,
    attacker_int: StatValue,
    target_defense: StatValue,
    multiplier: f64,
) -> CombatResult<u32> {
    compute_damage(constants, DamageType::Magical, attacker_int, target_defense, multiplier)
}

/// True damage: `max(floor, round(stat * multiplier))`, defense is never consulted
pub fn compute_true_damage(
    constants: &CombatConstants,
    attacker_stat: StatValue,
    multiplier: f64,
) -> CombatResult<u32> {
    compute_damage(constants, DamageType::True, attacker_stat, 0, multiplier)
}

/// Damage for any [`DamageType`]
pub fn compute_damage(
    constants: &CombatConstants,
    damage_type: DamageType,
    attacker_stat: StatValue,
    target_defense: StatValue,
    multiplier: f64,
) -> CombatResult<u32> {
    check_stat("attacker_stat", attacker_stat)?;
    check_stat("target_defense", target_defense)?;
    check_multiplier("multiplier", multiplier)?;

    let base = attacker_stat as f64 * multiplier;
    let after_defense = apply_defense(constants, damage_type, base, target_defense as f64);
    let floored = after_defense.round().max(constants.damage.minimum as f64);

    Ok(to_amount(floored))
}

/// Healing: `round(int * multiplier)`, zero is a valid result
pub fn compute_healing(healer_int: StatValue, multiplier: f64) -> CombatResult<u32> {
    check_stat("healer_int", healer_int)?;
    check_multiplier("multiplier", multiplier)?;

    Ok(to_amount((healer_int as f64 * multiplier).round()))
}

/// Saturating conversion of an already rounded, non-negative value
pub(crate) fn to_amount(value: f64) -> u32 {
    // `as` saturates at u32::MAX and maps negatives to 0
    value as u32
}
