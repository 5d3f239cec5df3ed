//! Component host: owns the countdown, the draft input and the tick handle

use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::{Countdown, TimerState};
use crate::{
    error::TimerError,
    tasks::ticker::{spawn_ticker, TickHandle},
};

/// Everything the lock protects
#[derive(Debug, Default)]
struct Component {
    countdown: Countdown,
    input: String,
    ticker: Option<TickHandle>,
    generation: u64,
}

impl Component {
    fn snapshot(&self) -> TimerState {
        TimerState::capture(&self.countdown, &self.input)
    }
}

/// Main application state wrapping the single countdown component
#[derive(Debug)]
pub struct AppState {
    component: Mutex<Component>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Mutex<Option<String>>,
    pub last_action_time: Mutex<Option<DateTime<Utc>>>,
    /// Channel for timer updates
    pub timer_update_tx: watch::Sender<TimerState>,
    /// Keep the receiver alive to prevent channel closure
    pub _timer_update_rx: watch::Receiver<TimerState>,
}

impl AppState {
    /// Create a new AppState with an unconfigured, idle countdown
    pub fn new(port: u16, host: String) -> Self {
        let (timer_update_tx, timer_update_rx) = watch::channel(TimerState::new());

        Self {
            component: Mutex::new(Component::default()),
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
            timer_update_tx,
            _timer_update_rx: timer_update_rx,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Component>, TimerError> {
        self.component
            .lock()
            .map_err(|e| TimerError::LockPoisoned(e.to_string()))
    }

    /// Apply a UI event, reconcile the tick handle and notify watchers
    fn update<F>(self: &Arc<Self>, action: &str, updater: F) -> Result<TimerState, TimerError>
    where
        F: FnOnce(&mut Component),
    {
        let mut component = self.lock()?;
        updater(&mut *component);
        self.reconcile(&mut *component);
        let snapshot = component.snapshot();
        drop(component);

        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }

        self.publish(snapshot.clone());
        Ok(snapshot)
    }

    /// Hold a tick handle exactly while the countdown is running
    fn reconcile(self: &Arc<Self>, component: &mut Component) {
        if component.countdown.activity().is_active() {
            if component.ticker.is_none() {
                component.generation += 1;
                component.ticker = Some(spawn_ticker(Arc::downgrade(self), component.generation));
                debug!("Registered tick {}", component.generation);
            }
        } else if let Some(ticker) = component.ticker.take() {
            debug!("Released tick {}", ticker.generation());
        }
    }

    fn publish(&self, snapshot: TimerState) {
        if let Err(e) = self.timer_update_tx.send(snapshot) {
            warn!("Failed to send timer update: {}", e);
        }
    }

    /// Replace the text in the duration input
    pub fn set_input(self: &Arc<Self>, value: impl Into<String>) -> Result<TimerState, TimerError> {
        let value = value.into();
        self.update("input", |component| component.input = value)
    }

    /// The Set button: commit the draft input as the duration
    pub fn set_duration(self: &Arc<Self>) -> Result<TimerState, TimerError> {
        self.update("set", |component| {
            match component.countdown.set_duration(&component.input) {
                Ok(seconds) => info!("Duration set to {}s", seconds),
                Err(e) => debug!("Ignoring duration input: {}", e),
            }
        })
    }

    pub fn start(self: &Arc<Self>) -> Result<TimerState, TimerError> {
        self.update("start", |component| {
            if component.countdown.start() {
                info!("Countdown started with {}s left", component.countdown.time_left());
            }
        })
    }

    pub fn pause(self: &Arc<Self>) -> Result<TimerState, TimerError> {
        self.update("pause", |component| {
            if component.countdown.pause() {
                info!("Countdown paused with {}s left", component.countdown.time_left());
            }
        })
    }

    /// The Pause/Resume button
    pub fn toggle_pause(self: &Arc<Self>) -> Result<TimerState, TimerError> {
        self.update("toggle", |component| {
            if component.countdown.toggle_pause() {
                info!("Countdown is now {}", component.countdown.activity());
            }
        })
    }

    pub fn reset(self: &Arc<Self>) -> Result<TimerState, TimerError> {
        self.update("reset", |component| {
            component.countdown.reset();
            info!("Countdown reset to {}s", component.countdown.time_left());
        })
    }

    /// Apply one tick from the task registered as `generation`.
    ///
    /// Returns false when that task no longer owns the tick handle.
    pub fn on_tick(&self, generation: u64) -> Result<bool, TimerError> {
        let mut component = self.lock()?;
        let current = component.ticker.as_ref().map(TickHandle::generation);
        if current != Some(generation) {
            return Ok(false);
        }

        component.countdown.tick();
        debug!("Tick {}: {}s left", generation, component.countdown.time_left());
        let snapshot = component.snapshot();
        drop(component);

        self.publish(snapshot);
        Ok(true)
    }

    /// Tear the component down, releasing any outstanding tick
    pub fn shutdown(&self) -> Result<(), TimerError> {
        let mut component = self.lock()?;
        if let Some(ticker) = component.ticker.take() {
            info!("Released tick {} on shutdown", ticker.generation());
        }
        Ok(())
    }

    /// Whether a tick task is currently registered
    pub fn has_ticker(&self) -> Result<bool, TimerError> {
        Ok(self.lock()?.ticker.is_some())
    }

    /// Get current timer state
    pub fn get_timer_state(&self) -> Result<TimerState, TimerError> {
        Ok(self.lock()?.snapshot())
    }

    /// Watch every change of the timer state
    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.timer_update_tx.subscribe()
    }

    /// Time since startup, e.g. `2h 5m 9s`, `5m 9s` or `9s`
    pub fn get_uptime(&self) -> String {
        let secs = self.start_time.elapsed().as_secs();
        match (secs / 3600, secs % 3600 / 60, secs % 60) {
            (0, 0, s) => format!("{s}s"),
            (0, m, s) => format!("{m}m {s}s"),
            (h, m, s) => format!("{h}h {m}m {s}s"),
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
