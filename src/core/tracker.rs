//! Single update function behind the live dashboard.
//!
//! Ticks only move the clock; check-in and check-out are the only messages
//! that touch the session. Every message returns a fresh snapshot.

use crate::config::Settings;
use crate::core::logic::Core;
use crate::core::session::{Outcome, SessionMachine};
use crate::errors::LocationError;
use crate::models::location::LocationStatus;
use crate::models::session::{Session, SessionEvent};
use crate::models::snapshot::Snapshot;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Tick(NaiveDateTime),
    CheckIn(NaiveDateTime),
    CheckOut(NaiveDateTime),
    LocationResolved(Result<String, LocationError>),
}

impl Msg {
    pub fn from_event(event: SessionEvent, at: NaiveDateTime) -> Self {
        match event {
            SessionEvent::CheckIn => Msg::CheckIn(at),
            SessionEvent::CheckOut => Msg::CheckOut(at),
        }
    }
}

pub struct Tracker {
    machine: SessionMachine,
    settings: Settings,
    location: LocationStatus,
    now: NaiveDateTime,
    last_outcome: Option<Outcome>,
}

impl Tracker {
    pub fn new(machine: SessionMachine, settings: Settings, now: NaiveDateTime) -> Self {
        Self {
            machine,
            settings,
            location: LocationStatus::Pending,
            now,
            last_outcome: None,
        }
    }

    pub fn update(&mut self, msg: Msg) -> Snapshot {
        match msg {
            Msg::Tick(now) => self.now = now,
            Msg::CheckIn(at) => self.transition(SessionEvent::CheckIn, at),
            Msg::CheckOut(at) => self.transition(SessionEvent::CheckOut, at),
            Msg::LocationResolved(res) => self.location = LocationStatus::from_result(res),
        }
        self.snapshot()
    }

    fn transition(&mut self, event: SessionEvent, at: NaiveDateTime) {
        self.last_outcome = Some(self.machine.apply(event, at));
        self.now = at;
    }

    pub fn snapshot(&self) -> Snapshot {
        Core::build_snapshot(
            self.now,
            self.machine.session(),
            &self.settings,
            Some(&self.location),
        )
    }

    pub fn session(&self) -> &Session {
        self.machine.session()
    }

    pub fn location(&self) -> &LocationStatus {
        &self.location
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Result of the most recent check-in / check-out message.
    pub fn last_outcome(&self) -> Option<&Outcome> {
        self.last_outcome.as_ref()
    }
}
