use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::{Clock, SystemClock};
use crate::core::location::ConfiguredLocationService;
use crate::core::observer::LogObserver;
use crate::core::runtime::{RunOptions, run_tracker};
use crate::core::session::SessionMachine;
use crate::core::tracker::Tracker;
use crate::errors::AppResult;
use crate::utils::time::parse_work_duration_or_err;
use tracing::info;

/// Run the live tracker until `q`, Ctrl-C or the tick limit.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start {
        target,
        ticks,
        plain,
    } = cmd
    {
        let mut settings = cfg.settings()?;
        if let Some(t) = target {
            settings = settings.with_target(parse_work_duration_or_err(t)?);
        }

        let clock = SystemClock;
        let machine = SessionMachine::new(settings.mode).with_observer(LogObserver);
        let mut tracker = Tracker::new(machine, settings, clock.now());
        let service = ConfiguredLocationService::new(cfg.location.clone());

        let opts = RunOptions {
            ticks: *ticks,
            clear_screen: !*plain,
            color: !*plain,
        };

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let mut stdout = std::io::stdout();
        let res = rt.block_on(run_tracker(
            &mut tracker,
            &clock,
            &service,
            tokio::io::stdin(),
            &mut stdout,
            async {
                let _ = tokio::signal::ctrl_c().await;
            },
            opts,
        ));

        // A blocked stdin read cannot be cancelled; don't wait for it.
        rt.shutdown_background();
        res?;

        info!(status = tracker.session().status().as_str(), "Tracker stopped");
    }

    Ok(())
}
