//! Skill configuration loading

use super::ConfigError;
use crate::definitions::SkillDefinition;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Container for skill configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsConfig {
    #[serde(rename = "skills")]
    pub skills: Vec<SkillDefinition>,
}

impl SkillsConfig {
    fn into_map(self) -> Result<HashMap<String, SkillDefinition>, ConfigError> {
        let mut map = HashMap::new();
        for skill in self.skills {
            skill.validate()?;
            if map.contains_key(&skill.id) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate skill id `{}`",
                    skill.id
                )));
            }
            map.insert(skill.id.clone(), skill);
        }
        Ok(map)
    }
}

/// Load skill configurations from a TOML file
pub fn load_skill_configs(path: &Path) -> Result<HashMap<String, SkillDefinition>, ConfigError> {
    let config: SkillsConfig = super::load_toml(path)?;
    config.into_map()
}

/// Load skill configurations from a TOML string
pub fn parse_skill_configs(content: &str) -> Result<HashMap<String, SkillDefinition>, ConfigError> {
    let config: SkillsConfig = super::parse_toml(content)?;
    config.into_map()
}

/// Get default skill configurations
pub fn default_skills() -> HashMap<String, SkillDefinition> {
    let toml = include_str!("../../config/skills.toml");
    parse_skill_configs(toml).unwrap_or_else(|err| {
        tracing::warn!("bundled skills.toml rejected, using basic attack only: {}", err);
        let mut map = HashMap::new();
        map.insert("basic_attack".to_string(), SkillDefinition::basic_attack());
        map
    })
}
