//! CLI settings, read from `~/.qrpromo/config.toml`.

use chrono::{FixedOffset, Offset, Utc};
use qrpromo_admin::DEFAULT_PAGE_SIZE;
use qrpromo_registration::{RegistrationRules, MIN_AGE_YEARS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Manaus time, where the campaign runs.
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = -4;

/// Settings parsed from `config.toml`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default = "default_min_age")]
    pub minimum_age_years: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Prefix for printed request paths. Empty means relative paths.
    #[serde(default)]
    pub api_base_url: String,
    /// Offset of the admin's wall clock, used for the promotion deadline.
    #[serde(default = "default_utc_offset")]
    pub utc_offset_hours: i32,
}

fn default_min_age() -> u32 {
    MIN_AGE_YEARS
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_utc_offset() -> i32 {
    DEFAULT_UTC_OFFSET_HOURS
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            minimum_age_years: MIN_AGE_YEARS,
            page_size: DEFAULT_PAGE_SIZE,
            api_base_url: String::new(),
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
        }
    }
}

impl CliConfig {
    /// Loads `~/.qrpromo/config.toml` if it exists.
    pub fn load() -> Self {
        Self::load_from(&default_config_path())
    }

    /// Loads settings from an explicit path.
    /// A missing or unparsable file yields the defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No config file found at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<CliConfig>(&contents) {
                Ok(config) => {
                    info!("Loaded config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!("Failed to parse config file {:?}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config file {:?}: {}. Using defaults.", path, e);
                Self::default()
            }
        }
    }

    /// Registration rules derived from these settings.
    pub fn rules(&self) -> RegistrationRules {
        RegistrationRules {
            min_age_years: self.minimum_age_years,
        }
    }

    /// The admin's UTC offset. Out-of-range values fall back to Manaus time.
    pub fn offset(&self) -> FixedOffset {
        offset_from_hours(self.utc_offset_hours)
            .or_else(|| {
                warn!(hours = self.utc_offset_hours, "UTC offset out of range, using default");
                offset_from_hours(DEFAULT_UTC_OFFSET_HOURS)
            })
            .unwrap_or_else(|| Utc.fix())
    }

    /// Joins a request path onto `api_base_url`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url.trim_end_matches('/'), path)
    }
}

fn offset_from_hours(hours: i32) -> Option<FixedOffset> {
    hours.checked_mul(3600).and_then(FixedOffset::east_opt)
}

/// Default location of the config file.
pub fn default_config_path() -> PathBuf {
    dirs_path().join("config.toml")
}

fn dirs_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        Path::new(&home).join(".qrpromo")
    } else if let Ok(home) = std::env::var("USERPROFILE") {
        Path::new(&home).join(".qrpromo")
    } else {
        PathBuf::from(".qrpromo")
    }
}
