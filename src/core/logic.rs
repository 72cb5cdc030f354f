use crate::config::Settings;
use crate::core::calculator::{self, Remaining};
use crate::core::location::location_text;
use crate::models::hours_minutes::HoursMinutes;
use crate::models::location::LocationStatus;
use crate::models::session::Session;
use crate::models::snapshot::Snapshot;
use crate::utils::formatting::{ClockStyle, format_clock, format_date, format_hm, format_target};
use chrono::NaiveDateTime;

pub struct Core;

impl Core {
    /// Compute every displayed value for `session` as of `now`.
    /// `location` is `None` when no lookup was requested at all.
    pub fn build_snapshot(
        now: NaiveDateTime,
        session: &Session,
        settings: &Settings,
        location: Option<&LocationStatus>,
    ) -> Snapshot {
        let locale = &settings.locale;
        let target = settings.target;

        let elapsed = calculator::elapsed_hm(now, session);
        let remaining = calculator::remaining(now, session, target);

        Snapshot {
            now,
            date: format_date(now.date(), locale),
            clock: format_clock(now, locale, ClockStyle::Long),
            status: session.status(),
            check_in: session
                .check_in_at()
                .map(|t| format_clock(t, locale, ClockStyle::Short)),
            check_out: session
                .check_out_at()
                .map(|t| format_clock(t, locale, ClockStyle::Short)),
            elapsed: format_hm(elapsed, locale),
            elapsed_minutes: elapsed.total_minutes(),
            remaining: remaining.map(|r| match r {
                Remaining::Left(hm) => format_hm(hm, locale),
                Remaining::ShiftComplete => locale.shift_complete.to_string(),
            }),
            shift_complete: matches!(remaining, Some(Remaining::ShiftComplete)),
            progress_percent: calculator::progress_percent(now, session, target),
            projected_check_out: calculator::projected_check_out(session, target)
                .map(|t| format_clock(t, locale, ClockStyle::Short)),
            target: format_target(HoursMinutes::from_duration(target), locale),
            overtime: calculator::overtime(now, session, target)
                .map(|d| format_hm(HoursMinutes::from_duration(d), locale)),
            location: location.map(|l| location_text(l, locale)),
        }
    }
}
