use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::{Clock, SystemClock};
use crate::core::logic::Core;
use crate::core::session::SessionMachine;
use crate::errors::{AppError, AppResult};
use crate::models::session::SessionMode;
use crate::ui::dashboard::{RenderOptions, render};
use crate::utils::date::parse_date_or_today;
use crate::utils::time::{at, parse_optional_time, parse_time, parse_work_duration_or_err};

/// Evaluate a single session without the live loop.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc {
        check_in,
        check_out,
        now,
        date,
        target,
        json,
    } = cmd
    {
        let day = parse_date_or_today(date.as_ref())?;

        let in_time =
            parse_time(check_in).ok_or_else(|| AppError::InvalidTime(check_in.to_string()))?;
        let check_in_at = at(day, in_time);
        let check_out_at = parse_optional_time(check_out.as_ref())?.map(|t| at(day, t));
        let now = match parse_optional_time(now.as_ref())? {
            Some(t) => at(day, t),
            None => at(day, SystemClock.now().time()),
        };

        if let Some(out) = check_out_at
            && out < check_in_at
        {
            return Err(AppError::InvalidTime(format!(
                "check-out {} is before check-in {}",
                out.time(),
                check_in_at.time()
            )));
        }

        let mut settings = cfg.settings()?;
        if let Some(t) = target {
            settings = settings.with_target(parse_work_duration_or_err(t)?);
        }

        // Always the full lifecycle here, so a given check-out is kept.
        let mut machine = SessionMachine::new(SessionMode::Full);
        machine.check_in(check_in_at);
        if let Some(out) = check_out_at {
            machine.check_out(out);
        }

        let snapshot = Core::build_snapshot(now, machine.session(), &settings, None);

        if *json {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        } else {
            print!(
                "{}",
                render(&snapshot, &settings.locale, RenderOptions::default())
            );
        }
    }

    Ok(())
}
