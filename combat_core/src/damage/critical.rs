//! Critical hits - scaling a landed hit and rolling for it

use super::calculation::to_amount;
use crate::config::CombatConstants;
use crate::error::{check_multiplier, CombatError, CombatResult};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Outcome of a critical roll
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CritRoll {
    /// Final amount, scaled when the roll crit
    pub amount: u32,
    pub is_critical: bool,
    /// Uniform draw in [0, 1) that decided the roll
    pub sample: f64,
}

/// Scale a hit by the crit multiplier: `round(base * multiplier)`
pub fn compute_critical_damage(base_damage: u32, crit_multiplier: f64) -> CombatResult<u32> {
    check_multiplier("crit_multiplier", crit_multiplier)?;
    Ok(to_amount((base_damage as f64 * crit_multiplier).round()))
}

/// Roll for a critical hit with a caller-supplied random source
///
/// Exactly one `f64` is drawn from `rng` per call, whatever the chance, so a
/// seeded source replays the same sequence of outcomes. The hit crits when
/// `sample <= crit_chance`; a chance of 0 never crits and a chance of 1
/// always does.
pub fn roll_for_critical(
    base_damage: u32,
    crit_chance: f64,
    crit_multiplier: f64,
    rng: &mut impl Rng,
) -> CombatResult<CritRoll> {
    if !(0.0..=1.0).contains(&crit_chance) {
        return Err(CombatError::invalid(
            "crit_chance",
            format!("must be a probability within [0, 1], got {}", crit_chance),
        ));
    }
    check_multiplier("crit_multiplier", crit_multiplier)?;

    let sample: f64 = rng.gen();
    let is_critical = crit_chance > 0.0 && sample <= crit_chance;

    let amount = if is_critical {
        compute_critical_damage(base_damage, crit_multiplier)?
    } else {
        base_damage
    };

    tracing::trace!(
        base_damage,
        crit_chance,
        sample,
        is_critical,
        amount,
        "critical roll"
    );

    Ok(CritRoll {
        amount,
        is_critical,
        sample,
    })
}

/// Roll using the configured base chance and multiplier
pub fn roll_with_constants(
    constants: &CombatConstants,
    base_damage: u32,
    rng: &mut impl Rng,
) -> CombatResult<CritRoll> {
    roll_for_critical(
        base_damage,
        constants.crit.base_chance,
        constants.crit.multiplier,
        rng,
    )
}
