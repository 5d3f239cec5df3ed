//! Presentation layer: the rendered surface of the countdown widget

use serde::{Deserialize, Serialize};

use crate::state::{ActivityState, TimerState};

pub const TITLE: &str = "Countdown Timer";
pub const INPUT_PLACEHOLDER: &str = "Enter time in seconds";

/// Format seconds as `MM:SS`. Minutes are not wrapped into hours.
pub fn format_time(time: u64) -> String {
    format!("{:02}:{:02}", time / 60, time % 60)
}

/// Label of the Pause/Resume button
pub fn pause_label(activity: ActivityState) -> &'static str {
    if activity.is_paused() { "Resume" } else { "Pause" }
}

/// The numeric duration input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputView {
    pub value: String,
    pub placeholder: String,
}

/// Everything the widget renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownView {
    pub title: String,
    pub input: InputView,
    pub set_label: String,
    pub display: String,
    pub time_left: u64,
    pub duration: Option<u64>,
    pub activity: ActivityState,
    pub start_label: String,
    pub pause_label: String,
    pub reset_label: String,
}

impl From<&TimerState> for CountdownView {
    fn from(state: &TimerState) -> Self {
        Self {
            title: TITLE.to_string(),
            input: InputView {
                value: state.input.clone(),
                placeholder: INPUT_PLACEHOLDER.to_string(),
            },
            set_label: "Set".to_string(),
            display: format_time(state.time_left),
            time_left: state.time_left,
            duration: state.duration,
            activity: state.activity,
            start_label: "Start".to_string(),
            pause_label: pause_label(state.activity).to_string(),
            reset_label: "Reset".to_string(),
        }
    }
}
