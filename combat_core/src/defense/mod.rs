//! Defense system - flat mitigation keyed by damage type

mod mitigation;

pub use mitigation::{apply_defense, defense_reduction};
