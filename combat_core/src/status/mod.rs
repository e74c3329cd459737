//! Turn-based durations - status effects and skill cooldowns

mod active;
mod cooldown;

pub use active::{ActiveStatus, StatusApplication};
pub use cooldown::Cooldown;
