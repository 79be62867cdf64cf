mod api;
mod config;
mod dto;
mod state;

use crate::{config::Config, state::AppState};
use std::{sync::Arc, time::Instant};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let config = Config::load();

    info!("Loading fare table from {}...", config.table_path.display());
    let now = Instant::now();
    let table = match state::load_table(&config.table_path) {
        Ok(table) => Some(table),
        Err(err) => {
            warn!("No fare table loaded, waiting for /reload: {err}");
            None
        }
    };
    info!("Loading data took {:?}", now.elapsed());
    let state = Arc::new(AppState::new(config.table_path, table));

    let app = api::router(state);
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {}: {err}", config.port);
            std::process::exit(1);
        }
    };
    info!("Listening to port {}", config.port);
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
        std::process::exit(1);
    }
}
