//! Countdown state machine
//!
//! Pure and synchronous: it knows nothing about tasks or clocks. The host in
//! [`super::AppState`] drives [`Countdown::tick`] once per second while the
//! machine is [`ActivityState::Running`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DurationError;

/// Idle, running or paused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityState {
    #[default]
    Idle,
    Running,
    Paused,
}

impl ActivityState {
    /// A tick callback is registered only in this state
    pub fn is_active(&self) -> bool {
        matches!(self, ActivityState::Running)
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, ActivityState::Paused)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityState::Idle => "idle",
            ActivityState::Running => "running",
            ActivityState::Paused => "paused",
        }
    }
}

impl fmt::Display for ActivityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse user input into a positive number of seconds.
///
/// Any finite decimal form is accepted (`10`, `1.5`, `1e3`, `10.`); fractions
/// round up so a positive input never becomes zero.
pub fn parse_duration(input: &str) -> Result<u64, DurationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DurationError::Empty);
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| DurationError::NotANumber(trimmed.to_string()))?;

    if !value.is_finite() {
        return Err(DurationError::NotANumber(trimmed.to_string()));
    }
    if value <= 0.0 {
        return Err(DurationError::NotPositive(trimmed.to_string()));
    }

    let seconds = value.ceil();
    if seconds >= u64::MAX as f64 {
        return Err(DurationError::OutOfRange(trimmed.to_string()));
    }

    Ok(seconds as u64)
}

/// The countdown itself: committed duration, remaining time and activity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Countdown {
    duration: Option<u64>,
    time_left: u64,
    activity: ActivityState,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last validly committed duration, if any
    pub fn duration(&self) -> Option<u64> {
        self.duration
    }

    pub fn time_left(&self) -> u64 {
        self.time_left
    }

    pub fn activity(&self) -> ActivityState {
        self.activity
    }

    /// Commit `value` as both duration and time left and go idle.
    ///
    /// Invalid input leaves the countdown untouched; the error is returned
    /// only so the caller can log it.
    pub fn set_duration(&mut self, value: &str) -> Result<u64, DurationError> {
        let seconds = parse_duration(value)?;
        self.duration = Some(seconds);
        self.time_left = seconds;
        self.activity = ActivityState::Idle;
        Ok(seconds)
    }

    /// Returns true if the countdown started running
    pub fn start(&mut self) -> bool {
        if self.time_left == 0 || self.activity.is_active() {
            return false;
        }
        self.activity = ActivityState::Running;
        true
    }

    /// Returns true if a running countdown was paused
    pub fn pause(&mut self) -> bool {
        if !self.activity.is_active() {
            return false;
        }
        self.activity = ActivityState::Paused;
        true
    }

    /// The Pause/Resume button: resumes when paused, pauses otherwise
    pub fn toggle_pause(&mut self) -> bool {
        if self.activity.is_paused() {
            self.start()
        } else {
            self.pause()
        }
    }

    pub fn reset(&mut self) {
        self.activity = ActivityState::Idle;
        self.time_left = self.duration.unwrap_or(0);
    }

    /// One elapsed second. Reaching zero leaves the activity untouched.
    pub fn tick(&mut self) {
        if !self.activity.is_active() {
            return;
        }
        self.time_left = self.time_left.saturating_sub(1);
    }
}
