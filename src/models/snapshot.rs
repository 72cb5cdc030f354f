use super::session::SessionStatus;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Everything the dashboard shows, recomputed from scratch on every tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub now: NaiveDateTime,
    pub date: String,
    pub clock: String,
    pub status: SessionStatus,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub elapsed: String,
    pub elapsed_minutes: i64,
    pub remaining: Option<String>,
    pub shift_complete: bool,
    pub progress_percent: u8,
    pub projected_check_out: Option<String>,
    pub target: String,
    pub overtime: Option<String>,
    pub location: Option<String>,
}
