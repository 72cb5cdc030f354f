use super::elapsed::elapsed;
use crate::models::session::Session;
use chrono::{Duration, NaiveDateTime};

/// Share of the target worked, as a whole percentage in `0..=100`.
pub fn progress_percent(now: NaiveDateTime, session: &Session, target: Duration) -> u8 {
    if session.check_in_at().is_none() {
        return 0;
    }
    if target <= Duration::zero() {
        return 100;
    }

    let worked = elapsed(now, session).num_milliseconds() as f64;
    let ratio = (worked / target.num_milliseconds() as f64).clamp(0.0, 1.0);

    (ratio * 100.0).round() as u8
}
