use std::{env, path::PathBuf};

use logger::Level;

use crate::viewport::clamp_radius;

pub const API_KEY_VAR: &str = "MAP_API_KEY";
pub const GAZETTEER_VAR: &str = "VENTURE_MAP_GAZETTEER";
pub const LOG_DIR_VAR: &str = "VENTURE_MAP_LOG_DIR";
pub const RADIUS_VAR: &str = "VENTURE_MAP_RADIUS";
pub const LOG_LEVEL_VAR: &str = "VENTURE_MAP_LOG_LEVEL";

const DEFAULT_LOG_DIR: &str = "logs";
const DEFAULT_RADIUS_MILES: f64 = 5.0;

/// Startup settings for the explorer, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Map tile service credential. Without it the map is not shown.
    pub api_key: Option<String>,
    /// CSV file of known places. The bundled list is used when unset.
    pub gazetteer_path: Option<PathBuf>,
    pub log_dir: PathBuf,
    pub log_level: Level,
    pub initial_radius_miles: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            gazetteer_path: None,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            log_level: Level::Info,
            initial_radius_miles: DEFAULT_RADIUS_MILES,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key/value source. Blank values count as unset
    /// and unparsable values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let initial_radius_miles = read(RADIUS_VAR)
            .and_then(|value| value.parse::<f64>().ok())
            .map(clamp_radius)
            .unwrap_or(DEFAULT_RADIUS_MILES);

        Self {
            api_key: read(API_KEY_VAR),
            gazetteer_path: read(GAZETTEER_VAR).map(PathBuf::from),
            log_dir: read(LOG_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR)),
            log_level: read(LOG_LEVEL_VAR)
                .and_then(|value| value.parse().ok())
                .unwrap_or(Level::Info),
            initial_radius_miles,
        }
    }

    /// Message shown in place of the map when the credential is missing.
    pub fn missing_key_message(&self) -> Option<String> {
        match self.api_key {
            Some(_) => None,
            None => Some(format!("API key not found. Set {API_KEY_VAR} and restart.")),
        }
    }
}
