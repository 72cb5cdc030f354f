use crate::models::hours_minutes::HoursMinutes;
use crate::models::session::Session;
use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Remaining {
    Left(HoursMinutes),
    /// Less than one whole minute of the target is left.
    ShiftComplete,
}

/// Time left until `check_in + target`, only while a session is active.
///
/// Counted in whole minutes, floored. A clock behind the check-in is treated
/// as sitting exactly on it, so the result never exceeds the target.
pub fn remaining(now: NaiveDateTime, session: &Session, target: Duration) -> Option<Remaining> {
    let Session::Active { check_in_at } = *session else {
        return None;
    };

    let worked = now.max(check_in_at) - check_in_at;
    let Some(left) = target.checked_sub(&worked) else {
        return Some(Remaining::ShiftComplete);
    };
    let minutes = left.num_seconds().div_euclid(60);

    if minutes <= 0 {
        Some(Remaining::ShiftComplete)
    } else {
        Some(Remaining::Left(HoursMinutes::from_minutes(minutes)))
    }
}
