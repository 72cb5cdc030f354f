use crate::models::session::Session;
use chrono::{Duration, NaiveDateTime};

/// Expected end of shift, `check_in + target`. `None` if that instant is not
/// representable.
pub fn projected_check_out(session: &Session, target: Duration) -> Option<NaiveDateTime> {
    session
        .check_in_at()
        .and_then(|check_in| check_in.checked_add_signed(target))
}
