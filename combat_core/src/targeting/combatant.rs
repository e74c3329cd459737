//! Combatant - the numeric contract a fighter exposes to the combat rules

use crate::status::ActiveStatus;
use crate::types::{PrimaryStat, RowPosition, StatValue, Team};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a combatant within one battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CombatantId(pub u32);

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Primary stats and defense of a fighter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatLine {
    #[serde(default)]
    pub strength: StatValue,
    #[serde(default)]
    pub agility: StatValue,
    #[serde(default)]
    pub intelligence: StatValue,
    #[serde(default)]
    pub defense: StatValue,
}

impl StatLine {
    pub fn new(strength: StatValue, agility: StatValue, intelligence: StatValue, defense: StatValue) -> Self {
        StatLine {
            strength,
            agility,
            intelligence,
            defense,
        }
    }

    pub fn get(&self, stat: PrimaryStat) -> StatValue {
        match stat {
            PrimaryStat::Strength => self.strength,
            PrimaryStat::Agility => self.agility,
            PrimaryStat::Intelligence => self.intelligence,
        }
    }

    /// Name of the first negative field, if any
    pub fn first_negative(&self) -> Option<&'static str> {
        [
            ("strength", self.strength),
            ("agility", self.agility),
            ("intelligence", self.intelligence),
            ("defense", self.defense),
        ]
        .into_iter()
        .find(|(_, value)| *value < 0)
        .map(|(name, _)| name)
    }
}

/// A fighter placed on the battlefield
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub id: CombatantId,
    pub name: String,
    pub team: Team,
    pub row: RowPosition,
    /// Position within the row, lower slots come first
    pub slot: u8,
    /// Stat used by skills that do not name their own scaling stat
    pub primary_stat: PrimaryStat,
    pub stats: StatLine,
    pub max_health: u32,
    pub current_health: u32,
    #[serde(default)]
    pub statuses: Vec<ActiveStatus>,
}

impl Combatant {
    /// Create a combatant at full health, scaling from strength
    pub fn new(
        id: CombatantId,
        name: impl Into<String>,
        team: Team,
        row: RowPosition,
        slot: u8,
        stats: StatLine,
        max_health: u32,
    ) -> Self {
        Combatant {
            id,
            name: name.into(),
            team,
            row,
            slot,
            primary_stat: PrimaryStat::Strength,
            stats,
            max_health,
            current_health: max_health,
            statuses: Vec::new(),
        }
    }

    pub fn with_primary_stat(mut self, primary_stat: PrimaryStat) -> Self {
        self.primary_stat = primary_stat;
        self
    }

    pub fn with_health(mut self, current_health: u32) -> Self {
        self.current_health = current_health.min(self.max_health);
        self
    }

    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    pub fn is_ally_of(&self, other: &Combatant) -> bool {
        self.team == other.team
    }

    pub fn stat(&self, stat: PrimaryStat) -> StatValue {
        self.stats.get(stat)
    }

    pub fn primary_value(&self) -> StatValue {
        self.stats.get(self.primary_stat)
    }

    pub fn defense(&self) -> StatValue {
        self.stats.defense
    }

    /// Lose health, saturating at zero. Returns the health actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.current_health);
        self.current_health -= lost;
        lost
    }

    /// Restore health, capped at max. Defeated combatants are not revived.
    /// Returns the health actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if !self.is_alive() {
            return 0;
        }
        let restored = amount.min(self.max_health - self.current_health);
        self.current_health += restored;
        restored
    }

    /// Add a status, refreshing an existing one with the same id
    pub fn apply_status(&mut self, status: ActiveStatus) {
        if !self.is_alive() || !status.is_active() {
            return;
        }
        match self.statuses.iter_mut().find(|s| s.id == status.id) {
            Some(existing) => existing.refresh(&status),
            None => self.statuses.push(status),
        }
    }

    pub fn has_status(&self, id: &str) -> bool {
        self.statuses.iter().any(|s| s.id == id)
    }

    /// Count every status down one turn and drop the expired ones
    pub fn tick_statuses(&mut self) {
        self.statuses.retain_mut(|status| status.tick());
    }
}
