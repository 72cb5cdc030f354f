use chrono::Duration;
use serde::Serialize;

/// A non-negative duration split into whole hours and remainder minutes.
/// Seconds are floored away, never rounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HoursMinutes {
    pub hours: i64,
    pub minutes: i64,
}

impl HoursMinutes {
    pub fn from_duration(d: Duration) -> Self {
        Self::from_minutes(d.num_seconds().max(0) / 60)
    }

    pub fn from_minutes(total: i64) -> Self {
        let total = total.max(0);
        Self {
            hours: total / 60,
            minutes: total % 60,
        }
    }

    pub fn total_minutes(&self) -> i64 {
        self.hours * 60 + self.minutes
    }
}
