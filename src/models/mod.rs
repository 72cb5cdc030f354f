pub mod hours_minutes;
pub mod locale;
pub mod location;
pub mod session;
pub mod snapshot;
