use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use showroom_web::config::Config;
use showroom_web::{app, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("showroom_web=info,tower_http=info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    if config.password.is_none() {
        tracing::warn!("SHOWROOM_PASSWORD is not set; all logins will fail until it is configured");
    }

    let bind = config.bind.clone();
    let state = Arc::new(AppState::new(config));
    let app = app(state);

    let listener = match tokio::net::TcpListener::bind(&bind).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to bind to {bind}: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!("showroom-web listening on {bind}");
    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("Server error: {e}");
        std::process::exit(1);
    }
}
