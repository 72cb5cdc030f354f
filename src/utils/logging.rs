//! tracing subscriber setup. Logs go to stderr so the dashboard on stdout
//! stays readable.

use std::env;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "RATTENDANCE_LOG";
pub const DEBUG_LOG_ENV: &str = "RATTENDANCE_DEBUG_LOG";

/// Filter precedence: `RATTENDANCE_LOG`, then `RATTENDANCE_DEBUG_LOG=1`
/// (forces debug), then the configured default level.
pub fn init_logging(default_level: &str) {
    let debug_enabled = env::var(DEBUG_LOG_ENV)
        .map(|value| matches!(value.as_str(), "1" | "true" | "TRUE" | "yes" | "YES"))
        .unwrap_or(false);

    let filter = if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        filter
    } else if debug_enabled {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_new(default_level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A second init (e.g. from a test harness) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
