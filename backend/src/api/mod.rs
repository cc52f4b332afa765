pub mod attendance;
pub mod holidays;

use axum::{routing::{get, post}, Json, Router};
use crate::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/api/health", get(health))
        // Attendance grid
        .route("/api/attendance/grid", post(attendance::grid))
        .route("/api/attendance/window", get(attendance::window))
        .route("/api/attendance/status-kinds", get(attendance::status_kinds))
        // Holidays
        .route("/api/holidays", get(holidays::list))
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}
