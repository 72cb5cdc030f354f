use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// Creates the config directory and a configuration file with defaults.
/// An existing file is left alone; `config --migrate` upgrades it instead.
pub fn handle(cli: &Cli, path: &Path) -> AppResult<()> {
    info("Initializing rAttendance…");

    if path.exists() && !cli.test {
        info(format!(
            "Configuration already present at {}, leaving it untouched",
            path.display()
        ));
        return Ok(());
    }

    let cfg = Config::init_all(path, cli.test)?;
    success(format!(
        "Target shift: {} | locale: {}",
        cfg.target_work_duration,
        cfg.locale.as_str()
    ));
    Ok(())
}
