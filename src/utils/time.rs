//! Time utilities: parsing HH:MM[:SS] and work durations like `8h` or `7h30m`.

use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

pub fn at(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    date.and_time(time)
}

/// Longest accepted target shift.
pub const MAX_WORK_MINUTES: i64 = 24 * 60;

/// Parse a work duration.
///
/// Accepted forms: `8h`, `7h30m`, `450m`, and a bare number of hours (`8`).
/// The result must be strictly positive and at most [`MAX_WORK_MINUTES`].
pub fn parse_work_duration(s: &str) -> Option<Duration> {
    let s = s.trim().to_lowercase();
    if s.is_empty() {
        return None;
    }

    let minutes: i64 = if let Ok(h) = s.parse::<i64>() {
        h.checked_mul(60)?
    } else if let Some((h, rest)) = s.split_once('h') {
        let hours: i64 = h.trim().parse().ok()?;
        let rest = rest.trim();
        let mins: i64 = if rest.is_empty() {
            0
        } else {
            rest.strip_suffix('m')?.trim().parse().ok()?
        };
        if !(0..60).contains(&mins) {
            return None;
        }
        hours.checked_mul(60)?.checked_add(mins)?
    } else if let Some(m) = s.strip_suffix('m') {
        m.trim().parse().ok()?
    } else {
        return None;
    };

    if !(1..=MAX_WORK_MINUTES).contains(&minutes) {
        return None;
    }

    Duration::try_minutes(minutes)
}

pub fn parse_work_duration_or_err(s: &str) -> AppResult<Duration> {
    parse_work_duration(s).ok_or_else(|| AppError::InvalidDuration(s.to_string()))
}
