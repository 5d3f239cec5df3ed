//! Background tasks module
//!
//! This module contains the tick task behind a running countdown and the
//! task that logs what the widget displays.

pub mod ticker;
pub mod display_log;

// Re-export main functions
pub use ticker::{spawn_ticker, TickHandle, TICK_PERIOD};
pub use display_log::display_log_task;
