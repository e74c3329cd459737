//! Cooldown - turns until a skill can be used again

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cooldown {
    pub remaining: u32,
}

impl Cooldown {
    pub fn ready() -> Self {
        Self::default()
    }

    pub fn is_ready(&self) -> bool {
        self.remaining == 0
    }

    /// Put the skill on cooldown after use
    pub fn start(&mut self, turns: u32) {
        self.remaining = turns;
    }

    /// Advance one turn
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }
}
