//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::view::CountdownView;

/// Body of `PUT /input` and the optional body of `POST /set`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputRequest {
    pub value: String,
}

/// Response to every control event, including ones that changed nothing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub action: String,
    pub timestamp: DateTime<Utc>,
    pub timer: CountdownView,
}

impl ApiResponse {
    pub fn new(action: &str, timer: CountdownView) -> Self {
        Self {
            action: action.to_string(),
            timestamp: Utc::now(),
            timer,
        }
    }
}

/// Status response with server metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer: CountdownView,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
