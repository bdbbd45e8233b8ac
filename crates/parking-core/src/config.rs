//! Lot configuration
//!
//! # Hierarchy
//!
//! Configuration is loaded in this order (later overrides earlier):
//! 1. Built-in defaults (2 floors, 3 spaces per floor)
//! 2. Global config: `<config dir>/parking/config.toml`
//! 3. Project config: `.parking/config.toml`
//! 4. Environment variables: `PARKING_FLOORS`, `PARKING_SPACES_PER_FLOOR`
//! 5. CLI flags (applied by the binary)
//!
//! An explicit config path replaces layers 2 and 3.
//!
//! A lot holds at most [`MAX_TOTAL_SPACES`] spaces across all floors.
//!
//! # Example Config
//!
//! ```toml
//! floors = 4
//! spaces_per_floor = 25
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const ENV_FLOORS: &str = "PARKING_FLOORS";
pub const ENV_SPACES_PER_FLOOR: &str = "PARKING_SPACES_PER_FLOOR";

/// Upper bound on `floors * spaces_per_floor`
pub const MAX_TOTAL_SPACES: u32 = 100_000;

/// Dimensions of the lot, fixed for its lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotConfig {
    pub floors: u32,
    pub spaces_per_floor: u32,
}

impl Default for LotConfig {
    fn default() -> Self {
        Self {
            floors: 2,
            spaces_per_floor: 3,
        }
    }
}

/// A config file layer; absent keys keep the value beneath
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialLotConfig {
    floors: Option<u32>,
    spaces_per_floor: Option<u32>,
}

impl LotConfig {
    /// Check both dimensions are at least one and the lot holds at most
    /// [`MAX_TOTAL_SPACES`] spaces
    pub fn validate(&self) -> Result<()> {
        if self.floors == 0 {
            return Err(Error::InvalidConfig(
                "floors must be at least 1".to_string(),
            ));
        }
        if self.spaces_per_floor == 0 {
            return Err(Error::InvalidConfig(
                "spaces_per_floor must be at least 1".to_string(),
            ));
        }
        match self.floors.checked_mul(self.spaces_per_floor) {
            Some(total) if total <= MAX_TOTAL_SPACES => Ok(()),
            _ => Err(Error::InvalidConfig(format!(
                "lot of {} floors x {} spaces exceeds the maximum of {MAX_TOTAL_SPACES} spaces",
                self.floors, self.spaces_per_floor
            ))),
        }
    }

    fn merge(&mut self, other: PartialLotConfig) {
        if let Some(floors) = other.floors {
            self.floors = floors;
        }
        if let Some(spaces) = other.spaces_per_floor {
            self.spaces_per_floor = spaces;
        }
    }

    /// Apply overrides from an environment lookup
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if a variable is set but not a number
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_FLOORS) {
            self.floors = parse_env_u32(ENV_FLOORS, &value)?;
        }
        if let Some(value) = lookup(ENV_SPACES_PER_FLOOR) {
            self.spaces_per_floor = parse_env_u32(ENV_SPACES_PER_FLOOR, &value)?;
        }
        Ok(())
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }
}

fn parse_env_u32(key: &str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse()
        .map_err(|e| Error::InvalidConfig(format!("Invalid {key} value '{value}': {e}")))
}

/// Load configuration through every layer
///
/// `explicit` names a config file that must exist and replaces the global
/// and project files.
///
/// # Errors
///
/// Returns error if:
/// - A config file cannot be read or is malformed TOML
/// - An environment override is not a number
/// - The final values fail validation
pub fn load_config(explicit: Option<&Path>) -> Result<LotConfig> {
    let mut config = LotConfig::default();

    if let Some(path) = explicit {
        config.merge(load_toml_file(path)?);
    } else {
        let discovered = [global_config_path(), project_config_path()];
        for path in discovered.into_iter().flatten() {
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading config file");
                config.merge(load_toml_file(&path)?);
            }
        }
    }

    config.apply_env()?;
    config.validate()?;
    Ok(config)
}

fn project_config_path() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .map(|dir| dir.join(".parking/config.toml"))
}

fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "parking")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

fn load_toml_file(path: &Path) -> Result<PartialLotConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::IoError(format!(
            "Failed to read config file {}: {e}",
            path.display()
        ))
    })?;

    toml::from_str(&content)
        .map_err(|e| Error::ParseError(format!("Failed to parse config: {}: {e}", path.display())))
}
