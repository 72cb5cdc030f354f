//! Pure derivations over `(now, session, target)`. Nothing here mutates
//! state or fails: backward clock skew is clamped, overruns are capped.

pub mod elapsed;
pub mod overtime;
pub mod progress;
pub mod projected;
pub mod remaining;

pub use elapsed::{elapsed, elapsed_hm};
pub use overtime::overtime;
pub use progress::progress_percent;
pub use projected::projected_check_out;
pub use remaining::{Remaining, remaining};
