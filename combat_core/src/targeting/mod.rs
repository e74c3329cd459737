//! Targeting - combatants, battlefield layout and skill reach

mod battlefield;
mod combatant;
mod reach;

pub use battlefield::Battlefield;
pub use combatant::{Combatant, CombatantId, StatLine};
pub use reach::{resolve_targets, TargetSet};
