use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use crate::startup::AppState;

/// Reachability route; answers unconditionally and never touches the store.
pub async fn liveness() -> &'static str {
    "Servidor online."
}

/// Health probe. Reports `degraded` when the process started without a
/// configured store (database routes are answering 500 in that state).
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let status = if state.store.is_some() {
        "ok"
    } else {
        "degraded"
    };

    Json(json!({
        "status": status,
        "service": "menu-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
