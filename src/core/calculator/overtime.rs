use super::elapsed::elapsed;
use crate::models::session::Session;
use chrono::{Duration, NaiveDateTime};

/// Time worked past the target. `None` until the target is exceeded.
pub fn overtime(now: NaiveDateTime, session: &Session, target: Duration) -> Option<Duration> {
    session.check_in_at()?;

    let extra = elapsed(now, session).checked_sub(&target)?;
    (extra > Duration::zero()).then_some(extra)
}
