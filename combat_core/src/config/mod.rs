//! Configuration loading from TOML files

mod constants;
mod roster;
mod skills;

pub use constants::{
    CombatConstants, CritConstants, DamageConstants, DefenseConstants, SkillConstants,
    StatusConstants,
};
pub use roster::{default_roster, load_roster, parse_roster, validate_skill_refs};
pub use skills::{default_skills, load_skill_configs, parse_skill_configs};

use crate::error::DefinitionError;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
    #[error("Invalid definition: {0}")]
    InvalidDefinition(#[from] DefinitionError),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load and validate combat constants from a TOML file
pub fn load_constants(path: &Path) -> Result<CombatConstants, ConfigError> {
    let constants: CombatConstants = load_toml(path)?;
    constants.validate()?;
    Ok(constants)
}

/// Parse and validate combat constants from a TOML string
pub fn parse_constants(content: &str) -> Result<CombatConstants, ConfigError> {
    let constants: CombatConstants = parse_toml(content)?;
    constants.validate()?;
    Ok(constants)
}

/// Bundled constants, falling back to the built-in defaults
pub fn default_constants() -> CombatConstants {
    let toml = include_str!("../../config/constants.toml");
    parse_constants(toml).unwrap_or_else(|err| {
        tracing::warn!("bundled constants.toml rejected, using defaults: {}", err);
        CombatConstants::default()
    })
}
