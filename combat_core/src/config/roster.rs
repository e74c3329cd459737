//! Character, enemy and dungeon loading

use super::ConfigError;
use crate::definitions::{Roster, SkillDefinition};
use crate::targeting::StatLine;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Load and validate a roster from a TOML file
pub fn load_roster(path: &Path) -> Result<Roster, ConfigError> {
    let roster: Roster = super::load_toml(path)?;
    validate_roster(&roster)?;
    Ok(roster)
}

/// Load and validate a roster from a TOML string
pub fn parse_roster(content: &str) -> Result<Roster, ConfigError> {
    let roster: Roster = super::parse_toml(content)?;
    validate_roster(&roster)?;
    Ok(roster)
}

/// Get the bundled roster
pub fn default_roster() -> Roster {
    let toml = include_str!("../../config/roster.toml");
    parse_roster(toml).unwrap_or_else(|err| {
        tracing::warn!("bundled roster.toml rejected, using an empty roster: {}", err);
        Roster::default()
    })
}

/// Every skill a character or enemy lists must exist
pub fn validate_skill_refs(
    roster: &Roster,
    skills: &HashMap<String, SkillDefinition>,
) -> Result<(), ConfigError> {
    let listed = roster
        .characters
        .iter()
        .map(|c| (&c.id, &c.skills))
        .chain(roster.enemies.iter().map(|e| (&e.id, &e.skills)));

    for (owner, skill_ids) in listed {
        if let Some(missing) = skill_ids.iter().find(|id| !skills.contains_key(*id)) {
            return Err(ConfigError::ValidationError(format!(
                "`{}` uses unknown skill `{}`",
                owner, missing
            )));
        }
    }
    Ok(())
}

fn validate_roster(roster: &Roster) -> Result<(), ConfigError> {
    let mut character_ids = HashSet::new();
    for character in &roster.characters {
        if !character_ids.insert(character.id.as_str()) {
            return Err(duplicate("character", &character.id));
        }
        check_combat_numbers(&character.id, character.max_health, &character.stats)?;
    }

    let mut enemy_ids = HashSet::new();
    for enemy in &roster.enemies {
        if !enemy_ids.insert(enemy.id.as_str()) {
            return Err(duplicate("enemy", &enemy.id));
        }
        check_combat_numbers(&enemy.id, enemy.max_health, &enemy.stats)?;
    }

    let mut dungeon_ids = HashSet::new();
    for dungeon in &roster.dungeons {
        if !dungeon_ids.insert(dungeon.id.as_str()) {
            return Err(duplicate("dungeon", &dungeon.id));
        }
        for (index, encounter) in dungeon.encounters.iter().enumerate() {
            if encounter.enemies.is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "dungeon `{}` encounter {} has no enemies",
                    dungeon.id, index
                )));
            }
            if let Some(unknown) = encounter
                .enemies
                .iter()
                .find(|id| !enemy_ids.contains(id.as_str()))
            {
                return Err(ConfigError::ValidationError(format!(
                    "dungeon `{}` encounter {} references unknown enemy `{}`",
                    dungeon.id, index, unknown
                )));
            }
        }
    }

    Ok(())
}

fn check_combat_numbers(id: &str, max_health: u32, stats: &StatLine) -> Result<(), ConfigError> {
    if max_health == 0 {
        return Err(ConfigError::ValidationError(format!(
            "`{}` must have max_health above 0",
            id
        )));
    }
    if let Some(field) = stats.first_negative() {
        return Err(ConfigError::ValidationError(format!(
            "`{}` has negative {}",
            id, field
        )));
    }
    Ok(())
}

fn duplicate(kind: &str, id: &str) -> ConfigError {
    ConfigError::ValidationError(format!("duplicate {} id `{}`", kind, id))
}
