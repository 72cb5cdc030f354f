use super::Config;
use crate::errors::AppResult;
use crate::models::locale::Locale;
use crate::models::session::SessionMode;
use crate::utils::time::parse_work_duration_or_err;
use chrono::Duration;

/// Validated, typed view of the configuration used by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub target: Duration,
    pub locale: Locale,
    pub mode: SessionMode,
    pub location_timeout: Option<std::time::Duration>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target: Duration::hours(8),
            locale: Locale::korean(),
            mode: SessionMode::Full,
            location_timeout: Some(std::time::Duration::from_secs(10)),
        }
    }
}

impl Settings {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let target = parse_work_duration_or_err(&cfg.target_work_duration)?;
        let location_timeout = match cfg.location_timeout_secs {
            0 => None,
            secs => Some(std::time::Duration::from_secs(secs)),
        };

        Ok(Self {
            target,
            locale: cfg.locale.locale(),
            mode: cfg.session_mode,
            location_timeout,
        })
    }

    pub fn with_target(mut self, target: Duration) -> Self {
        self.target = target;
        self
    }
}
