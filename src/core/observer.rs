//! Transition observers. This is where a future persistence or reporting
//! call would plug in; today the only built-in observer writes log lines.

use crate::models::session::{SessionEvent, Transition};
use tracing::info;

pub trait SessionObserver {
    fn on_transition(&mut self, transition: &Transition);
}

/// Logs every check-in and check-out through `tracing`.
#[derive(Debug, Default)]
pub struct LogObserver;

impl SessionObserver for LogObserver {
    fn on_transition(&mut self, t: &Transition) {
        match t.event {
            SessionEvent::CheckIn => {
                info!(at = %t.at, from = t.from.as_str(), "Checked in");
            }
            SessionEvent::CheckOut => {
                info!(
                    at = %t.at,
                    check_in_at = %t.check_in_at,
                    worked_minutes = t.worked().num_minutes(),
                    "Checked out"
                );
            }
        }
    }
}

/// Any `FnMut(&Transition)` is an observer.
impl<F> SessionObserver for F
where
    F: FnMut(&Transition),
{
    fn on_transition(&mut self, transition: &Transition) {
        self(transition)
    }
}
