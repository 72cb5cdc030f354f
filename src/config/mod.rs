use crate::errors::{AppError, AppResult};
use crate::models::locale::LocaleCode;
use crate::models::session::SessionMode;
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;
pub mod settings;

pub use settings::Settings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_target_work_duration")]
    pub target_work_duration: String,
    #[serde(default)]
    pub locale: LocaleCode,
    #[serde(default)]
    pub session_mode: SessionMode,
    /// Upper bound for the startup location lookup; 0 waits forever.
    #[serde(default = "default_location_timeout_secs")]
    pub location_timeout_secs: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationConfig>,
}

/// Fixed position and address served by the built-in location service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    #[serde(default = "default_permission_granted")]
    pub permission_granted: bool,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
}

fn default_target_work_duration() -> String {
    "8h".to_string()
}
fn default_location_timeout_secs() -> u64 {
    10
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_permission_granted() -> bool {
    true
}

/// Top-level keys every config file is expected to carry.
pub const KNOWN_KEYS: [&str; 5] = [
    "target_work_duration",
    "locale",
    "session_mode",
    "location_timeout_secs",
    "log_level",
];

impl Default for Config {
    fn default() -> Self {
        Self {
            target_work_duration: default_target_work_duration(),
            locale: LocaleCode::default(),
            session_mode: SessionMode::default(),
            location_timeout_secs: default_location_timeout_secs(),
            log_level: default_log_level(),
            location: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Load configuration from `path`, or return defaults if the file is missing.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Write a default configuration file. In test mode nothing is written.
    pub fn init_all(path: &Path, is_test: bool) -> AppResult<Self> {
        let config = Config::default();

        if !is_test {
            config.save(path)?;
            success(format!("Config file: {}", path.display()));
        }

        Ok(config)
    }

    /// Validate the raw values and turn them into engine settings.
    pub fn settings(&self) -> AppResult<Settings> {
        Settings::from_config(self)
    }
}
