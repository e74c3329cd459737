//! Damage system - mitigation formulas, healing and critical hits

mod calculation;
mod critical;

pub use calculation::{
    compute_damage, compute_healing, compute_magical_damage, compute_physical_damage,
    compute_true_damage, NO_SCALING,
};
pub use critical::{compute_critical_damage, roll_for_critical, roll_with_constants, CritRoll};
