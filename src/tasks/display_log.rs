//! Logs every change of the rendered readout

use std::sync::Arc;
use tracing::{debug, info};

use crate::{state::AppState, view::format_time};

/// Background task that follows timer updates and logs the readout.
///
/// Runs until the component is dropped and returns how many distinct
/// readouts it logged.
pub async fn display_log_task(state: Arc<AppState>) -> usize {
    let mut timer_rx = state.subscribe();
    drop(state);

    let mut last_readout: Option<String> = None;
    let mut logged = 0;
    while timer_rx.changed().await.is_ok() {
        let timer_state = timer_rx.borrow_and_update().clone();
        let readout = format_time(timer_state.time_left);

        if last_readout.as_deref() == Some(readout.as_str()) {
            continue;
        }
        if timer_state.time_left == 0 && timer_state.is_active() {
            info!("Countdown reached {}", readout);
        } else {
            debug!("Display: {} ({})", readout, timer_state.activity);
        }
        last_readout = Some(readout);
        logged += 1;
    }

    debug!("Timer updates closed, display log task stopping");
    logged
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::{sleep, timeout};

    #[tokio::test(start_paused = true)]
    async fn logs_each_readout_once_and_stops_with_the_component() {
        let state = Arc::new(AppState::new(0, "127.0.0.1".to_string()));
        let task = tokio::spawn(display_log_task(Arc::clone(&state)));
        tokio::task::yield_now().await;

        // Coalesced into one update: 00:02 running
        state.set_input("2").unwrap();
        state.set_duration().unwrap();
        state.start().unwrap();

        // Ticks at 1s, 2s and 3s: 00:01, 00:00, 00:00 again
        sleep(Duration::from_millis(3500)).await;
        drop(state);

        let logged = timeout(Duration::from_secs(1), task)
            .await
            .expect("task should stop once the component is gone")
            .unwrap();
        assert_eq!(logged, 3);
    }
}
