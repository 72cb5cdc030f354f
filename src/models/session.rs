use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The current or most recent work session.
///
/// Timestamps live inside the variants, so a session can only carry a
/// check-in time once it started and a check-out time once it completed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Session {
    #[default]
    NotStarted,
    Active {
        check_in_at: NaiveDateTime,
    },
    Completed {
        check_in_at: NaiveDateTime,
        check_out_at: NaiveDateTime,
    },
}

impl Session {
    pub fn status(&self) -> SessionStatus {
        match self {
            Session::NotStarted => SessionStatus::NotStarted,
            Session::Active { .. } => SessionStatus::Active,
            Session::Completed { .. } => SessionStatus::Completed,
        }
    }

    pub fn check_in_at(&self) -> Option<NaiveDateTime> {
        match *self {
            Session::NotStarted => None,
            Session::Active { check_in_at } | Session::Completed { check_in_at, .. } => {
                Some(check_in_at)
            }
        }
    }

    pub fn check_out_at(&self) -> Option<NaiveDateTime> {
        match *self {
            Session::Completed { check_out_at, .. } => Some(check_out_at),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    NotStarted,
    Active,
    Completed,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::NotStarted => "not_started",
            SessionStatus::Active => "active",
            SessionStatus::Completed => "completed",
        }
    }
}

/// The two user actions that drive the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionEvent {
    CheckIn,
    CheckOut,
}

impl SessionEvent {
    /// Parse a user command typed at the prompt (`i`, `in`, `o`, `out`, ...).
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "i" | "in" | "checkin" | "check-in" => Some(Self::CheckIn),
            "o" | "out" | "checkout" | "check-out" => Some(Self::CheckOut),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionEvent::CheckIn => "check_in",
            SessionEvent::CheckOut => "check_out",
        }
    }
}

/// How much of the lifecycle is kept after checking out.
///
/// `Full` retains the completed session (with its check-out time) until the
/// next check-in. `Simple` drops straight back to `NotStarted`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionMode {
    #[default]
    Full,
    Simple,
}

/// A state change that actually happened, as seen by observers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub event: SessionEvent,
    pub at: NaiveDateTime,
    pub check_in_at: NaiveDateTime,
    pub from: SessionStatus,
    pub session: Session,
}

impl Transition {
    /// Worked time for a check-out; zero for check-ins and when the clock
    /// went backwards between the two.
    pub fn worked(&self) -> chrono::Duration {
        match self.event {
            SessionEvent::CheckIn => chrono::Duration::zero(),
            SessionEvent::CheckOut => (self.at - self.check_in_at).max(chrono::Duration::zero()),
        }
    }
}
