//! showroom-web -- password-gated dashboard over a vehicle-inventory backend.
//!
//! Every request passes the access gate middleware first; the page handlers
//! fetch fresh listing data per view and derive the displayed values with
//! fixed fallback rules.

pub mod config;
pub mod inventory;
pub mod middleware;
pub mod routes;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use config::Config;
use inventory::client::InventoryClient;

pub struct AppState {
    pub config: Config,
    pub inventory: InventoryClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let inventory = InventoryClient::new(&config.api_base);
        Self { config, inventory }
    }
}

/// Assemble the full router: pages, login, health, static assets, all
/// behind the access gate.
pub fn app(state: Arc<AppState>) -> Router {
    let static_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static");

    Router::new()
        .merge(routes::pages::router())
        .merge(routes::car::router())
        .merge(routes::login::router())
        .merge(routes::health::router())
        .nest_service("/static", ServeDir::new(&static_dir))
        .route_service("/robots.txt", ServeFile::new(static_dir.join("robots.txt")))
        .layer(axum::middleware::from_fn(
            middleware::access_gate::require_auth,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
