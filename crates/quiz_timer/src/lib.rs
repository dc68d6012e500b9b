//! # quiz_timer - Countdown Timer
//!
//! Per-tick countdown component driven by the host scheduler:
//! - Lazy end-time computation on the first running tick
//! - Throttled MM:SS label updates through a display sink
//! - Queued completion events drained by the host
//!
//! The component performs no blocking work; `tick` must be called at
//! least once per label-update interval.

pub mod countdown;
pub mod format;

pub use countdown::*;
pub use format::*;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::countdown::{CountdownTimer, TimerConfig, TimerEvent, TimerPhase};
    pub use crate::format::format_time;
}
