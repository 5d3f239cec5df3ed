//! State management module
//!
//! This module contains the countdown state machine and the host that owns it.

pub mod countdown;
pub mod app_state;
pub mod timer_state;

// Re-export main types
pub use countdown::{parse_duration, ActivityState, Countdown};
pub use app_state::AppState;
pub use timer_state::TimerState;
