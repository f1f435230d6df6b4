//! Operational status -- `/api/health`
//!
//! Gated like every page; reports whether logins can work and whether the
//! inventory backend answered a probe fetch.

use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Json};
use axum::routing::get;
use axum::Router;
use serde_json::json;

use crate::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/health", get(api_health))
}

async fn api_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let backend_ok = state.inventory.probe().await;

    Json(json!({
        "backend": backend_ok,
        "password_set": state.config.password.is_some(),
    }))
}
