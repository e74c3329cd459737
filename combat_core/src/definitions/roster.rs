//! Character, enemy and dungeon records
//!
//! Inert data. The combat rules only ever read the numeric contract
//! (stats, defense, health, row) copied into a [`Combatant`].

use crate::error::DefinitionError;
use crate::targeting::{Battlefield, Combatant, CombatantId, StatLine};
use crate::types::{PrimaryStat, RowPosition, Team};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A playable character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterDefinition {
    pub id: String,
    pub name: String,
    #[serde(default = "default_level")]
    pub level: u32,
    /// Class identifier (e.g., "knight", "cleric")
    pub class: String,
    pub max_health: u32,
    pub primary_stat: PrimaryStat,
    pub stats: StatLine,
    #[serde(default = "default_row")]
    pub row: RowPosition,
    #[serde(default)]
    pub traits: Vec<String>,
    /// Skill ids this character can use
    #[serde(default)]
    pub skills: Vec<String>,
}

/// An enemy type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyDefinition {
    pub id: String,
    pub name: String,
    #[serde(default = "default_level")]
    pub level: u32,
    pub max_health: u32,
    pub primary_stat: PrimaryStat,
    pub stats: StatLine,
    #[serde(default = "default_row")]
    pub row: RowPosition,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Experience granted on defeat
    #[serde(default)]
    pub experience: u32,
}

/// A group of enemies fought together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Encounter {
    /// Enemy ids, in deployment order
    pub enemies: Vec<String>,
}

/// A dungeon as an ordered list of encounters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DungeonDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub encounters: Vec<Encounter>,
}

fn default_level() -> u32 {
    1
}
fn default_row() -> RowPosition {
    RowPosition::Front
}

/// Every character, enemy and dungeon known to the game
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub characters: Vec<CharacterDefinition>,
    #[serde(default)]
    pub enemies: Vec<EnemyDefinition>,
    #[serde(default)]
    pub dungeons: Vec<DungeonDefinition>,
}

impl Roster {
    pub fn character(&self, id: &str) -> Option<&CharacterDefinition> {
        self.characters.iter().find(|c| c.id == id)
    }

    pub fn enemy(&self, id: &str) -> Option<&EnemyDefinition> {
        self.enemies.iter().find(|e| e.id == id)
    }

    pub fn dungeon(&self, id: &str) -> Option<&DungeonDefinition> {
        self.dungeons.iter().find(|d| d.id == id)
    }

    /// Place a party against one encounter
    ///
    /// Ids are assigned in deployment order starting at 1, party first.
    /// Slots count up per team and row. Unknown ids are reported by name.
    pub fn deploy(&self, party: &[&str], encounter: &Encounter) -> Result<Battlefield, DefinitionError> {
        let mut deployment = Deployment::default();

        for id in party {
            let def = self
                .character(id)
                .ok_or_else(|| DefinitionError::UnknownCharacter(id.to_string()))?;
            deployment.place(Team::Party, &def.name, def.row, def.primary_stat, def.stats, def.max_health);
        }
        for id in &encounter.enemies {
            let def = self
                .enemy(id)
                .ok_or_else(|| DefinitionError::UnknownEnemy(id.clone()))?;
            deployment.place(Team::Enemy, &def.name, def.row, def.primary_stat, def.stats, def.max_health);
        }

        Ok(deployment.battlefield)
    }
}

#[derive(Default)]
struct Deployment {
    battlefield: Battlefield,
    next_slot: HashMap<(Team, RowPosition), u8>,
}

impl Deployment {
    fn place(
        &mut self,
        team: Team,
        name: &str,
        row: RowPosition,
        primary_stat: PrimaryStat,
        stats: StatLine,
        max_health: u32,
    ) {
        let id = CombatantId(self.battlefield.combatants.len() as u32 + 1);
        let slot = self.next_slot.entry((team, row)).or_insert(0);
        let combatant = Combatant::new(id, name, team, row, *slot, stats, max_health)
            .with_primary_stat(primary_stat);
        *slot = slot.saturating_add(1);
        self.battlefield.add(combatant);
    }
}
