//! ActiveStatus - a buff or debuff counting down in turns

use crate::config::CombatConstants;
use crate::targeting::CombatantId;
use serde::{Deserialize, Serialize};

/// Status a skill applies on hit (data, read from skill definitions)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusApplication {
    /// Status identifier (e.g., "poison", "guard_up")
    pub id: String,
    /// Turns the status lasts; the configured default when unset
    #[serde(default)]
    pub duration_turns: Option<u32>,
    /// Effect strength, interpreted by whoever consumes the status
    #[serde(default = "default_magnitude")]
    pub magnitude: f64,
}

fn default_magnitude() -> f64 {
    1.0
}

impl StatusApplication {
    pub fn new(id: impl Into<String>) -> Self {
        StatusApplication {
            id: id.into(),
            duration_turns: None,
            magnitude: default_magnitude(),
        }
    }

    pub fn with_duration(mut self, turns: u32) -> Self {
        self.duration_turns = Some(turns);
        self
    }

    /// Duration in turns, falling back to the configured default
    pub fn duration(&self, constants: &CombatConstants) -> u32 {
        self.duration_turns
            .unwrap_or(constants.status.default_duration_turns)
    }

    /// Instantiate this status on a target
    pub fn activate(&self, constants: &CombatConstants, source: CombatantId) -> ActiveStatus {
        ActiveStatus {
            id: self.id.clone(),
            turns_remaining: self.duration(constants),
            magnitude: self.magnitude,
            source,
        }
    }
}

/// Status currently affecting a combatant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveStatus {
    pub id: String,
    pub turns_remaining: u32,
    pub magnitude: f64,
    /// Combatant that applied the status
    pub source: CombatantId,
}

impl ActiveStatus {
    pub fn is_active(&self) -> bool {
        self.turns_remaining > 0
    }

    /// Advance one turn. Returns whether the status is still active.
    pub fn tick(&mut self) -> bool {
        self.turns_remaining = self.turns_remaining.saturating_sub(1);
        self.is_active()
    }

    /// Reapplication keeps the longer duration and the stronger magnitude
    pub fn refresh(&mut self, other: &ActiveStatus) {
        self.turns_remaining = self.turns_remaining.max(other.turns_remaining);
        if other.magnitude > self.magnitude {
            self.magnitude = other.magnitude;
            self.source = other.source;
        }
    }
}
