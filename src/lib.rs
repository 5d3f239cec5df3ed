//! Countdown Timer - a single countdown component controlled over HTTP
//!
//! The core is a three-state countdown machine ticking once per second while
//! running. The HTTP layer exposes the widget's controls and renders its view.

pub mod config;
pub mod error;
pub mod state;
pub mod view;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{DurationError, TimerError};
pub use state::{ActivityState, AppState, Countdown, TimerState};
pub use view::{format_time, CountdownView};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
