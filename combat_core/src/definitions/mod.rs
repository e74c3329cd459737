//! Static game data - skills, characters, enemies, dungeons

mod roster;
mod skill;

pub use roster::{CharacterDefinition, DungeonDefinition, Encounter, EnemyDefinition, Roster};
pub use skill::SkillDefinition;
