use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::{Clock, SystemClock};
use crate::errors::AppResult;
use crate::utils::date::parse_date_or_today;
use crate::utils::formatting::{ClockStyle, format_clock, format_date};
use crate::utils::time::{at, parse_optional_time};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clock { date, time } = cmd {
        let locale = cfg.locale.locale();
        let day = parse_date_or_today(date.as_ref())?;
        let time = parse_optional_time(time.as_ref())?.unwrap_or_else(|| SystemClock.now().time());
        let now = at(day, time);

        println!("{}", format_date(day, &locale));
        println!("{}", format_clock(now, &locale, ClockStyle::Long));
    }

    Ok(())
}
