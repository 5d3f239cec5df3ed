//! One-second tick task backing a running countdown

use std::{sync::Weak, time::Duration};
use tokio::{
    task::JoinHandle,
    time::{interval_at, Instant},
};
use tracing::{debug, error};

use crate::state::AppState;

/// Spacing between two ticks
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Ownership of the single outstanding tick task.
///
/// Dropping the handle aborts the task. The generation lets the host reject a
/// tick from a task that was released while it was already running.
#[derive(Debug)]
pub struct TickHandle {
    generation: u64,
    task: JoinHandle<()>,
}

impl TickHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawn the repeating tick for `generation`.
///
/// The first tick fires one period after spawning. The task only holds a weak
/// reference, so it never keeps a torn down component alive.
pub fn spawn_ticker(state: Weak<AppState>, generation: u64) -> TickHandle {
    let task = tokio::spawn(async move {
        let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);

        loop {
            interval.tick().await;

            let Some(host) = state.upgrade() else {
                debug!("Timer component dropped, stopping tick {}", generation);
                break;
            };

            match host.on_tick(generation) {
                Ok(true) => {}
                Ok(false) => {
                    debug!("Tick {} is stale, stopping", generation);
                    break;
                }
                Err(e) => {
                    error!("Failed to apply tick: {}", e);
                    break;
                }
            }
        }
    });

    TickHandle { generation, task }
}
