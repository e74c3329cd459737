//! Battlefield - both sides of a battle, with row placement

use super::combatant::{Combatant, CombatantId};
use crate::error::{CombatError, CombatResult};
use crate::types::{CombatPhase, RowPosition, Team};
use serde::{Deserialize, Serialize};

/// Every combatant in one battle, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Battlefield {
    pub combatants: Vec<Combatant>,
}

impl Battlefield {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_combatants(combatants: Vec<Combatant>) -> Self {
        Battlefield { combatants }
    }

    pub fn add(&mut self, combatant: Combatant) {
        self.combatants.push(combatant);
    }

    pub fn get(&self, id: CombatantId) -> Option<&Combatant> {
        self.combatants.iter().find(|c| c.id == id)
    }

    pub fn get_mut(&mut self, id: CombatantId) -> Option<&mut Combatant> {
        self.combatants.iter_mut().find(|c| c.id == id)
    }

    /// Look up a combatant that is about to act
    pub fn caster(&self, id: CombatantId) -> CombatResult<&Combatant> {
        let caster = self.get(id).ok_or(CombatError::UnknownCombatant(id))?;
        if !caster.is_alive() {
            return Err(CombatError::CasterDefeated(id));
        }
        Ok(caster)
    }

    pub fn living(&self) -> impl Iterator<Item = &Combatant> {
        self.combatants.iter().filter(|c| c.is_alive())
    }

    pub fn living_on(&self, team: Team) -> impl Iterator<Item = &Combatant> {
        self.living().filter(move |c| c.team == team)
    }

    pub fn living_in_row(&self, team: Team, row: RowPosition) -> impl Iterator<Item = &Combatant> {
        self.living_on(team).filter(move |c| c.row == row)
    }

    /// End-of-turn bookkeeping: count down every status effect
    pub fn tick_statuses(&mut self) {
        for combatant in &mut self.combatants {
            combatant.tick_statuses();
        }
    }

    pub fn is_team_defeated(&self, team: Team) -> bool {
        self.living_on(team).next().is_none()
    }

    /// Terminal phase reached by this battlefield, if any
    ///
    /// Defeat wins ties: a party wiped out together with the last enemy
    /// still loses.
    pub fn outcome(&self) -> Option<CombatPhase> {
        if self.is_team_defeated(Team::Party) {
            Some(CombatPhase::Defeat)
        } else if self.is_team_defeated(Team::Enemy) {
            Some(CombatPhase::Victory)
        } else {
            None
        }
    }
}
