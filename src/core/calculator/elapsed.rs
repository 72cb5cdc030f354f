use crate::models::hours_minutes::HoursMinutes;
use crate::models::session::Session;
use chrono::{Duration, NaiveDateTime};

/// Time worked so far: up to the check-out if there is one, otherwise up to
/// `now`. Zero before any check-in and whenever `now` precedes the check-in.
pub fn elapsed(now: NaiveDateTime, session: &Session) -> Duration {
    let Some(check_in) = session.check_in_at() else {
        return Duration::zero();
    };

    let end = session.check_out_at().unwrap_or(now);
    (end - check_in).max(Duration::zero())
}

pub fn elapsed_hm(now: NaiveDateTime, session: &Session) -> HoursMinutes {
    HoursMinutes::from_duration(elapsed(now, session))
}
