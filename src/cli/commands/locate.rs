use crate::config::Config;
use crate::core::location::{ConfiguredLocationService, location_text, resolve_label};
use crate::errors::AppResult;
use crate::models::location::LocationStatus;

/// Handle the `where` command: one lookup, then print the label or the
/// fallback text. A failed lookup is not an error exit.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let settings = cfg.settings()?;
    let service = ConfiguredLocationService::new(cfg.location.clone());

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let res = rt.block_on(resolve_label(&service, settings.location_timeout));

    println!(
        "{}",
        location_text(&LocationStatus::from_result(res), &settings.locale)
    );
    Ok(())
}
