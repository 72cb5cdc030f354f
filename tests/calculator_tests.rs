use chrono::{Duration, NaiveDateTime};
use rattendance::config::Settings;
use rattendance::core::calculator::{
    Remaining, elapsed, elapsed_hm, overtime, progress_percent, projected_check_out, remaining,
};
use rattendance::core::logic::Core;
use rattendance::core::session::SessionMachine;
use rattendance::models::hours_minutes::HoursMinutes;
use rattendance::models::session::{Session, SessionStatus};

mod common;
use common::t;

const EIGHT_HOURS: i64 = 8;

fn target() -> Duration {
    Duration::hours(EIGHT_HOURS)
}

fn active_at_nine() -> Session {
    Session::Active {
        check_in_at: t(9, 0, 0),
    }
}

fn hm(hours: i64, minutes: i64) -> HoursMinutes {
    HoursMinutes { hours, minutes }
}

#[test]
fn test_elapsed_is_zero_before_check_in() {
    assert_eq!(elapsed(t(12, 0, 0), &Session::NotStarted), Duration::zero());
    assert_eq!(progress_percent(t(12, 0, 0), &Session::NotStarted, target()), 0);
    assert_eq!(remaining(t(12, 0, 0), &Session::NotStarted, target()), None);
    assert_eq!(projected_check_out(&Session::NotStarted, target()), None);
    assert_eq!(overtime(t(23, 0, 0), &Session::NotStarted, target()), None);
}

#[test]
fn test_elapsed_floors_seconds_and_minutes() {
    let s = active_at_nine();
    assert_eq!(elapsed_hm(t(10, 29, 59), &s), hm(1, 29));
    assert_eq!(elapsed_hm(t(9, 0, 59), &s), hm(0, 0));
    assert_eq!(elapsed_hm(t(13, 0, 0), &s), hm(4, 0));
}

#[test]
fn test_elapsed_stops_at_check_out() {
    let s = Session::Completed {
        check_in_at: t(9, 0, 0),
        check_out_at: t(17, 5, 0),
    };
    assert_eq!(elapsed_hm(t(23, 0, 0), &s), hm(8, 5));
    assert_eq!(elapsed_hm(t(17, 5, 0), &s), hm(8, 5));
}

#[test]
fn test_elapsed_is_monotonic_while_active() {
    let s = active_at_nine();
    let mut previous = Duration::zero();
    let mut now = t(8, 0, 0);

    while now < t(20, 0, 0) {
        let current = elapsed(now, &s);
        assert!(current >= previous, "elapsed went backwards at {now}");
        previous = current;
        now += Duration::seconds(97);
    }
}

#[test]
fn test_backward_skew_clamps_to_zero_and_target() {
    let s = active_at_nine();
    let before = t(8, 59, 59);

    assert_eq!(elapsed(before, &s), Duration::zero());
    assert_eq!(progress_percent(before, &s, target()), 0);
    assert_eq!(
        remaining(before, &s, target()),
        Some(Remaining::Left(hm(8, 0)))
    );
}

#[test]
fn test_remaining_counts_down_in_whole_minutes() {
    let s = active_at_nine();

    assert_eq!(
        remaining(t(9, 0, 0), &s, target()),
        Some(Remaining::Left(hm(8, 0)))
    );
    assert_eq!(
        remaining(t(9, 0, 30), &s, target()),
        Some(Remaining::Left(hm(7, 59)))
    );
    assert_eq!(
        remaining(t(16, 58, 0), &s, target()),
        Some(Remaining::Left(hm(0, 2)))
    );
}

#[test]
fn test_remaining_reports_shift_complete_sentinel() {
    let s = active_at_nine();

    assert_eq!(
        remaining(t(17, 0, 0), &s, target()),
        Some(Remaining::ShiftComplete)
    );
    // Under a minute left already counts as done.
    assert_eq!(
        remaining(t(16, 59, 30), &s, target()),
        Some(Remaining::ShiftComplete)
    );
    assert_eq!(
        remaining(t(23, 0, 0), &s, target()),
        Some(Remaining::ShiftComplete)
    );
}

#[test]
fn test_remaining_only_while_active() {
    let s = Session::Completed {
        check_in_at: t(9, 0, 0),
        check_out_at: t(12, 0, 0),
    };
    assert_eq!(remaining(t(12, 0, 0), &s, target()), None);
}

#[test]
fn test_progress_rounds_and_caps() {
    let s = active_at_nine();

    assert_eq!(progress_percent(t(9, 0, 0), &s, target()), 0);
    assert_eq!(progress_percent(t(13, 0, 0), &s, target()), 50);
    // 2h / 8h = 25%, 2h03m = 25.6% -> 26
    assert_eq!(progress_percent(t(11, 3, 0), &s, target()), 26);
    assert_eq!(progress_percent(t(17, 30, 0), &s, target()), 100);
}

#[test]
fn test_progress_stays_in_range_far_past_target() {
    let s = active_at_nine();
    let mut now = t(0, 0, 0);
    let end = t(23, 59, 59) + Duration::days(3);

    while now < end {
        let p = progress_percent(now, &s, target());
        assert!(p <= 100, "progress {p} out of range at {now}");
        now += Duration::minutes(37);
    }
}

#[test]
fn test_progress_freezes_after_check_out() {
    let s = Session::Completed {
        check_in_at: t(9, 0, 0),
        check_out_at: t(11, 0, 0),
    };
    assert_eq!(progress_percent(t(20, 0, 0), &s, target()), 25);
}

#[test]
fn test_projected_check_out_is_check_in_plus_target() {
    assert_eq!(
        projected_check_out(&active_at_nine(), target()),
        Some(t(17, 0, 0))
    );
    assert_eq!(
        projected_check_out(&active_at_nine(), Duration::minutes(450)),
        Some(t(16, 30, 0))
    );
}

#[test]
fn test_overtime_only_past_target() {
    let s = active_at_nine();

    assert_eq!(overtime(t(17, 0, 0), &s, target()), None);
    assert_eq!(
        overtime(t(19, 0, 0), &s, target()),
        Some(Duration::hours(2))
    );

    let done = Session::Completed {
        check_in_at: t(9, 0, 0),
        check_out_at: t(17, 45, 0),
    };
    assert_eq!(
        overtime(t(23, 0, 0), &done, target()),
        Some(Duration::minutes(45))
    );
}

#[test]
fn test_projected_check_out_past_calendar_end_is_absent() {
    let s = Session::Active {
        check_in_at: NaiveDateTime::MAX,
    };

    assert_eq!(projected_check_out(&s, target()), None);
    assert_eq!(
        remaining(NaiveDateTime::MAX, &s, target()),
        Some(Remaining::Left(hm(8, 0)))
    );
}

#[test]
fn test_extreme_targets_do_not_overflow() {
    let s = active_at_nine();

    assert_eq!(
        remaining(t(12, 0, 0), &s, Duration::MIN),
        Some(Remaining::ShiftComplete)
    );
    assert_eq!(overtime(t(12, 0, 0), &s, Duration::MIN), None);
    assert_eq!(projected_check_out(&s, Duration::MAX), None);
    assert_eq!(progress_percent(t(12, 0, 0), &s, Duration::MAX), 0);
}

#[test]
fn test_snapshot_at_calendar_end_still_renders() {
    let settings = Settings::default();
    let s = Session::Active {
        check_in_at: NaiveDateTime::MAX,
    };

    let snap = Core::build_snapshot(NaiveDateTime::MAX, &s, &settings, None);
    assert_eq!(snap.elapsed, "0시간 0분");
    assert_eq!(snap.remaining.as_deref(), Some("8시간 0분"));
    assert_eq!(snap.projected_check_out, None);
}

#[test]
fn test_scenario_eight_hour_shift_from_nine() {
    let settings = Settings::default();
    let s = active_at_nine();

    let start = Core::build_snapshot(t(9, 0, 0), &s, &settings, None);
    assert_eq!(start.elapsed, "0시간 0분");
    assert_eq!(start.progress_percent, 0);
    assert_eq!(start.remaining.as_deref(), Some("8시간 0분"));
    assert_eq!(start.projected_check_out.as_deref(), Some("오후 5:00"));
    assert_eq!(start.target, "8시간");

    let midday = Core::build_snapshot(t(13, 0, 0), &s, &settings, None);
    assert_eq!(midday.elapsed, "4시간 0분");
    assert_eq!(midday.progress_percent, 50);

    let late = Core::build_snapshot(t(17, 30, 0), &s, &settings, None);
    assert_eq!(late.progress_percent, 100);
    assert_eq!(late.remaining.as_deref(), Some("근무 완료"));
    assert!(late.shift_complete);
    assert_eq!(late.overtime.as_deref(), Some("0시간 30분"));
}

#[test]
fn test_scenario_check_out_at_five_past_five() {
    let settings = Settings::default();
    let mut machine = SessionMachine::default();
    machine.check_in(t(9, 0, 0));
    machine.check_out(t(17, 5, 0));

    let snap = Core::build_snapshot(t(17, 5, 0), machine.session(), &settings, None);
    assert_eq!(snap.status, SessionStatus::Completed);
    assert_eq!(snap.elapsed, "8시간 5분");
    assert_eq!(snap.check_in.as_deref(), Some("오전 9:00"));
    assert_eq!(snap.check_out.as_deref(), Some("오후 5:05"));
    assert_eq!(snap.remaining, None);

    machine.check_in(t(18, 0, 0));
    let again = Core::build_snapshot(t(18, 0, 0), machine.session(), &settings, None);
    assert_eq!(again.status, SessionStatus::Active);
    assert_eq!(again.check_out, None);
    assert_eq!(again.elapsed, "0시간 0분");
}

#[test]
fn test_scenario_one_second_of_backward_skew() {
    let settings = Settings::default();
    let snap = Core::build_snapshot(t(8, 59, 59), &active_at_nine(), &settings, None);

    assert_eq!(snap.elapsed, "0시간 0분");
    assert_eq!(snap.elapsed_minutes, 0);
    assert_eq!(snap.progress_percent, 0);
    assert_eq!(snap.remaining.as_deref(), Some("8시간 0분"));
}
