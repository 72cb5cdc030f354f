//! Check-in / check-out state machine.
//!
//! `NotStarted -> Active -> Completed -> Active -> ...`
//!
//! Transitions are total: an event that does not apply to the current state
//! is ignored and leaves the session untouched.

use crate::core::observer::SessionObserver;
use crate::models::session::{Session, SessionEvent, SessionMode, Transition};
use chrono::NaiveDateTime;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied(Transition),
    Ignored,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }
}

/// Next session for `event` at `now`, or `None` if the event is not allowed.
pub fn next_session(
    session: &Session,
    event: SessionEvent,
    now: NaiveDateTime,
    mode: SessionMode,
) -> Option<Session> {
    match (*session, event) {
        (Session::NotStarted | Session::Completed { .. }, SessionEvent::CheckIn) => {
            Some(Session::Active { check_in_at: now })
        }
        (Session::Active { check_in_at }, SessionEvent::CheckOut) => match mode {
            SessionMode::Full => Some(Session::Completed {
                check_in_at,
                check_out_at: now,
            }),
            SessionMode::Simple => Some(Session::NotStarted),
        },
        (Session::Active { .. }, SessionEvent::CheckIn)
        | (Session::NotStarted | Session::Completed { .. }, SessionEvent::CheckOut) => None,
    }
}

pub struct SessionMachine {
    session: Session,
    mode: SessionMode,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl Default for SessionMachine {
    fn default() -> Self {
        Self::new(SessionMode::Full)
    }
}

impl SessionMachine {
    pub fn new(mode: SessionMode) -> Self {
        Self {
            session: Session::NotStarted,
            mode,
            observers: Vec::new(),
        }
    }

    pub fn with_observer(mut self, observer: impl SessionObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn check_in(&mut self, now: NaiveDateTime) -> Outcome {
        self.apply(SessionEvent::CheckIn, now)
    }

    pub fn check_out(&mut self, now: NaiveDateTime) -> Outcome {
        self.apply(SessionEvent::CheckOut, now)
    }

    pub fn apply(&mut self, event: SessionEvent, now: NaiveDateTime) -> Outcome {
        let from = self.session.status();

        let Some(next) = next_session(&self.session, event, now, self.mode) else {
            debug!(
                event = event.as_str(),
                status = from.as_str(),
                "Ignoring event not allowed in current state"
            );
            return Outcome::Ignored;
        };

        // Check-in time of the session this event belongs to.
        let check_in_at = match event {
            SessionEvent::CheckIn => now,
            SessionEvent::CheckOut => self.session.check_in_at().unwrap_or(now),
        };

        self.session = next;

        let transition = Transition {
            event,
            at: now,
            check_in_at,
            from,
            session: next,
        };

        for observer in &mut self.observers {
            observer.on_transition(&transition);
        }

        Outcome::Applied(transition)
    }
}
