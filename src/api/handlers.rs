//! HTTP endpoint handlers, one per widget control

use std::sync::Arc;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, info, warn};

use crate::{
    error::TimerError,
    state::{AppState, TimerState},
    view::CountdownView,
};
use super::responses::{ApiResponse, HealthResponse, InputRequest, StatusResponse};

fn respond(action: &str, result: Result<TimerState, TimerError>) -> Result<Json<ApiResponse>, StatusCode> {
    match result {
        Ok(timer_state) => Ok(Json(ApiResponse::new(action, CountdownView::from(&timer_state)))),
        Err(e) => {
            error!("Failed to handle {}: {}", action, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle PUT /input - Change the text in the duration input
pub async fn input_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<InputRequest>,
) -> Result<Json<ApiResponse>, StatusCode> {
    respond("input", state.set_input(request.value))
}

/// Handle POST /set - Commit the duration input
///
/// A JSON body `{"value": ...}` types into the input first. A request without
/// a JSON content type just clicks Set; any other bad body is rejected.
pub async fn set_handler(
    State(state): State<Arc<AppState>>,
    request: Result<Json<InputRequest>, JsonRejection>,
) -> Result<Json<ApiResponse>, StatusCode> {
    match request {
        Ok(Json(request)) => {
            if let Err(e) = state.set_input(request.value) {
                return respond("set", Err(e));
            }
        }
        Err(JsonRejection::MissingJsonContentType(_)) => {}
        Err(rejection) => {
            warn!("Rejected set request body: {}", rejection);
            return Err(StatusCode::BAD_REQUEST);
        }
    }
    info!("Set clicked");
    respond("set", state.set_duration())
}

/// Handle POST /start
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    info!("Start clicked");
    respond("start", state.start())
}

/// Handle POST /pause
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    info!("Pause clicked");
    respond("pause", state.pause())
}

/// Handle POST /toggle - The Pause/Resume button
pub async fn toggle_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    info!("Pause/Resume clicked");
    respond("toggle", state.toggle_pause())
}

/// Handle POST /reset
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    info!("Reset clicked");
    respond("reset", state.reset())
}

/// Handle GET /status - Return the rendered timer and server metadata
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let timer_state = match state.get_timer_state() {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to get timer state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        timer: CountdownView::from(&timer_state),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
