//! Locale tables used when rendering times, dates and dashboard labels.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    #[default]
    Ko,
    En,
}

impl LocaleCode {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "ko" | "ko-kr" | "korean" => Some(LocaleCode::Ko),
            "en" | "en-us" | "english" => Some(LocaleCode::En),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LocaleCode::Ko => "ko",
            LocaleCode::En => "en",
        }
    }

    pub fn locale(&self) -> Locale {
        match self {
            LocaleCode::Ko => Locale::korean(),
            LocaleCode::En => Locale::english(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLayout {
    /// `2026년 10월 16일 (금)`
    YearMonthDay,
    /// `Fri, October 16, 2026`
    WeekdayMonthDayYear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub code: LocaleCode,
    /// Indexed by day-of-week ordinal, 0 = Sunday.
    pub days: [&'static str; 7],
    pub am: &'static str,
    pub pm: &'static str,
    /// Put the AM/PM marker before the clock (`오후 5:00`) instead of after (`5:00 PM`).
    pub period_first: bool,
    pub date_layout: DateLayout,
    pub hour_unit: &'static str,
    pub minute_unit: &'static str,
    pub shift_complete: &'static str,

    pub location_pending: &'static str,
    pub location_denied: &'static str,
    pub location_unavailable: &'static str,

    pub status_not_started: &'static str,
    pub status_active: &'static str,
    pub status_completed: &'static str,
    pub label_check_in: &'static str,
    pub label_check_out: &'static str,
    pub label_elapsed: &'static str,
    pub label_total: &'static str,
    pub label_remaining: &'static str,
    pub label_progress: &'static str,
    pub progress_suffix: &'static str,
    pub label_projected: &'static str,
    pub label_target: &'static str,
    pub label_overtime: &'static str,
    pub label_location: &'static str,
    pub key_hint: &'static str,
}

impl Default for Locale {
    fn default() -> Self {
        Self::korean()
    }
}

impl Locale {
    pub fn korean() -> Self {
        Self {
            code: LocaleCode::Ko,
            days: ["일", "월", "화", "수", "목", "금", "토"],
            am: "오전",
            pm: "오후",
            period_first: true,
            date_layout: DateLayout::YearMonthDay,
            hour_unit: "시간",
            minute_unit: "분",
            shift_complete: "근무 완료",
            location_pending: "위치 확인 중...",
            location_denied: "위치 권한이 필요합니다",
            location_unavailable: "위치를 가져올 수 없습니다",
            status_not_started: "출근 전",
            status_active: "근무 중",
            status_completed: "근무 완료",
            label_check_in: "출근",
            label_check_out: "퇴근",
            label_elapsed: "근무 시간",
            label_total: "총 근무 시간",
            label_remaining: "남은 시간",
            label_progress: "진행률",
            progress_suffix: "완료",
            label_projected: "퇴근 예정",
            label_target: "목표 시간",
            label_overtime: "초과 근무",
            label_location: "위치",
            key_hint: "[i] 출근  [o] 퇴근  [q] 종료",
        }
    }

    pub fn english() -> Self {
        Self {
            code: LocaleCode::En,
            days: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            am: "AM",
            pm: "PM",
            period_first: false,
            date_layout: DateLayout::WeekdayMonthDayYear,
            hour_unit: "h",
            minute_unit: "m",
            shift_complete: "Shift complete",
            location_pending: "Locating...",
            location_denied: "Location permission required",
            location_unavailable: "Location unavailable",
            status_not_started: "Not checked in",
            status_active: "Working",
            status_completed: "Shift complete",
            label_check_in: "Check-in",
            label_check_out: "Check-out",
            label_elapsed: "Worked",
            label_total: "Total worked",
            label_remaining: "Remaining",
            label_progress: "Progress",
            progress_suffix: "done",
            label_projected: "Expected out",
            label_target: "Target",
            label_overtime: "Overtime",
            label_location: "Location",
            key_hint: "[i] check in  [o] check out  [q] quit",
        }
    }

    /// Day name for a day-of-week ordinal (0 = Sunday). Wraps past 6.
    pub fn day_name(&self, ordinal: u32) -> &'static str {
        self.days[(ordinal % 7) as usize]
    }
}
