//! Combat resolution - skill outcomes and the turn phase lifecycle

mod phase;
mod resolution;
mod result;

pub use phase::PhaseTracker;
pub use resolution::{apply_resolution, resolve_skill};
pub use result::{HealthChange, HitKind, HitOutcome, SkillResolution};
