pub mod date;
pub mod formatting;
pub mod logging;
pub mod path;
pub mod time;

pub use formatting::{ClockStyle, format_clock, format_date, format_hm};
