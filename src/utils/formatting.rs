//! Formatting utilities for clocks, dates and durations shown to the user.

use crate::models::hours_minutes::HoursMinutes;
use crate::models::locale::{DateLayout, Locale};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockStyle {
    /// `오후 1:05:09`
    Long,
    /// `오후 1:05`
    Short,
}

/// 12-hour clock with the locale's AM/PM marker. Minutes and seconds are
/// zero-padded, the hour is not; midnight and noon read as 12.
pub fn format_clock(t: NaiveDateTime, locale: &Locale, style: ClockStyle) -> String {
    let hour = t.hour();
    let marker = if hour >= 12 { locale.pm } else { locale.am };
    let h12 = match hour % 12 {
        0 => 12,
        h => h,
    };

    let body = match style {
        ClockStyle::Long => format!("{}:{:02}:{:02}", h12, t.minute(), t.second()),
        ClockStyle::Short => format!("{}:{:02}", h12, t.minute()),
    };

    if locale.period_first {
        format!("{} {}", marker, body)
    } else {
        format!("{} {}", body, marker)
    }
}

pub fn format_date(d: NaiveDate, locale: &Locale) -> String {
    let dow = locale.day_name(d.weekday().num_days_from_sunday());
    match locale.date_layout {
        DateLayout::YearMonthDay => {
            format!("{}년 {}월 {}일 ({})", d.year(), d.month(), d.day(), dow)
        }
        DateLayout::WeekdayMonthDayYear => {
            format!("{}, {} {}, {}", dow, d.format("%B"), d.day(), d.year())
        }
    }
}

/// `4시간 0분` / `4h 0m`
pub fn format_hm(hm: HoursMinutes, locale: &Locale) -> String {
    format!(
        "{}{} {}{}",
        hm.hours, locale.hour_unit, hm.minutes, locale.minute_unit
    )
}

/// Like `format_hm`, but drops a zero minute part (`8시간`).
pub fn format_target(hm: HoursMinutes, locale: &Locale) -> String {
    if hm.minutes == 0 {
        format!("{}{}", hm.hours, locale.hour_unit)
    } else {
        format_hm(hm, locale)
    }
}

/// Pad to a terminal display width; Hangul counts as two columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Text progress bar, `width` cells wide.
pub fn progress_bar(percent: u8, width: usize) -> String {
    let filled = (usize::from(percent.min(100)) * width) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
