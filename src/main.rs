//! Countdown Timer - a single countdown component controlled over HTTP
//!
//! This is the main entry point for the countdown-timer application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use countdown_timer::{
    api::create_router,
    config::Config,
    state::AppState,
    tasks::display_log_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("countdown_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting countdown-timer v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, duration={:?}",
          config.host, config.port, config.duration);

    let state = Arc::new(AppState::new(config.port, config.host.clone()));

    tokio::spawn(display_log_task(Arc::clone(&state)));

    // Type the configured duration in and press Set
    if let Some(duration) = &config.duration {
        state.set_input(duration.as_str())?;
        state.set_duration()?;
    }

    let app = create_router(Arc::clone(&state));

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  PUT  /input  - Type into the duration input");
    info!("  POST /set    - Commit the duration input");
    info!("  POST /start  - Start the countdown");
    info!("  POST /pause  - Pause the countdown");
    info!("  POST /toggle - Pause/Resume button");
    info!("  POST /reset  - Reset to the last set duration");
    info!("  GET  /status - Current display and state");
    info!("  GET  /health - Health check");

    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    state.shutdown()?;
    info!("Server shutdown complete");
    Ok(())
}
