//! Combat phase lifecycle
//!
//! Preparation -> TurnStart -> Action -> Execution -> TurnEnd -> TurnStart ...
//!
//! Victory and Defeat are reachable from Execution or TurnEnd and are
//! terminal: nothing leaves them.

use crate::error::{CombatError, CombatResult};
use crate::targeting::Battlefield;
use crate::types::CombatPhase;
use serde::{Deserialize, Serialize};

impl CombatPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, CombatPhase::Victory | CombatPhase::Defeat)
    }

    /// Phases directly reachable from this one
    pub fn successors(self) -> &'static [CombatPhase] {
        match self {
            CombatPhase::Preparation => &[CombatPhase::TurnStart],
            CombatPhase::TurnStart => &[CombatPhase::Action],
            CombatPhase::Action => &[CombatPhase::Execution],
            CombatPhase::Execution => &[
                CombatPhase::TurnEnd,
                CombatPhase::Victory,
                CombatPhase::Defeat,
            ],
            CombatPhase::TurnEnd => &[
                CombatPhase::TurnStart,
                CombatPhase::Victory,
                CombatPhase::Defeat,
            ],
            CombatPhase::Victory | CombatPhase::Defeat => &[],
        }
    }

    pub fn can_transition_to(self, next: CombatPhase) -> bool {
        self.successors().contains(&next)
    }

    /// Validated move to `next`
    pub fn transition(self, next: CombatPhase) -> CombatResult<CombatPhase> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(CombatError::InvalidPhaseTransition {
                from: self,
                to: next,
            })
        }
    }
}

/// Current phase and turn counter of one battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseTracker {
    pub phase: CombatPhase,
    /// Number of turns started so far
    pub turn: u32,
}

impl Default for PhaseTracker {
    fn default() -> Self {
        PhaseTracker {
            phase: CombatPhase::Preparation,
            turn: 0,
        }
    }
}

impl PhaseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Move to an explicit phase
    pub fn advance(&mut self, next: CombatPhase) -> CombatResult<CombatPhase> {
        self.phase = self.phase.transition(next)?;
        if self.phase == CombatPhase::TurnStart {
            self.turn += 1;
        }
        tracing::debug!(phase = ?self.phase, turn = self.turn, "combat phase");
        Ok(self.phase)
    }

    /// Move to the natural next phase, ending the battle when one side is down
    ///
    /// A terminal phase stays where it is.
    pub fn step(&mut self, battlefield: &Battlefield) -> CombatResult<CombatPhase> {
        let next = match self.phase {
            CombatPhase::Victory | CombatPhase::Defeat => return Ok(self.phase),
            CombatPhase::Preparation => CombatPhase::TurnStart,
            CombatPhase::TurnStart => CombatPhase::Action,
            CombatPhase::Action => CombatPhase::Execution,
            CombatPhase::Execution => battlefield.outcome().unwrap_or(CombatPhase::TurnEnd),
            CombatPhase::TurnEnd => battlefield.outcome().unwrap_or(CombatPhase::TurnStart),
        };
        self.advance(next)
    }
}
