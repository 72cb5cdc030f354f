pub mod calculator;
pub mod clock;
pub mod config;
pub mod location;
pub mod logic;
pub mod observer;
pub mod runtime;
pub mod session;
pub mod tracker;
