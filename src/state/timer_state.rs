//! Timer state snapshot published to watchers

use serde::{Deserialize, Serialize};

use super::countdown::{ActivityState, Countdown};

/// Snapshot of the whole component: committed countdown plus the draft input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub activity: ActivityState,
    pub time_left: u64,
    pub duration: Option<u64>,
    /// Raw text currently in the input field
    pub input: String,
}

impl TimerState {
    /// Create the snapshot of a fresh, never configured timer
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the current countdown together with the draft input
    pub fn capture(countdown: &Countdown, input: &str) -> Self {
        Self {
            activity: countdown.activity(),
            time_left: countdown.time_left(),
            duration: countdown.duration(),
            input: input.to_string(),
        }
    }

    /// Check if the countdown is running
    pub fn is_active(&self) -> bool {
        self.activity.is_active()
    }

    pub fn is_paused(&self) -> bool {
        self.activity.is_paused()
    }
}
