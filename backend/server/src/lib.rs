//! Community place-sharing service for Stockholm.
//!
//! Users submit points of interest (name, description, category, address and
//! coordinates). Places are stored as JSON documents in Redis and served to
//! the map and card views as JSON.
//!
//!
//!
//! # Routes
//! - `GET /places?category=&search=`: every matching place, newest first
//! - `POST /places`: create a place, 400 when name/description/category/location is missing
//! - `GET /places/{id}`, `DELETE /places/{id}`: 404 when the id is unknown
//! - `GET /categories`: the fixed category set
//! - `GET /debug`: raw sample of what the store holds
//! - `GET /maps.js`, `GET /maps/status`: the mapping script, fetched once per process
//!
//!
//!
//! # Environment
//! - `RUST_PORT` (default 8080)
//! - `REDIS_URL` (required)
//! - `PLACES_KEY` (default `stockholm-places:places`)
//! - `MAPS_API_KEY` (required, env or `/run/secrets/MAPS_API_KEY`)
//! - `MAPS_SCRIPT_URL`, `MAPS_SCRIPT_PATH` (optional)
//!
//! Logging goes through `tracing`, filtered by `RUST_LOG`.
//! ```sh
//! RUST_LOG=server=debug REDIS_URL=redis://localhost:6379 MAPS_API_KEY=... cargo run
//! ```
use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod database;
pub mod error;
pub mod loader;
pub mod routes;
pub mod search;
pub mod state;
pub mod utils;

use routes::{
    categories_handler, create_place_handler, debug_handler, delete_place_handler,
    get_place_handler, list_places_handler, maps_script_handler, maps_status_handler,
};
use state::State;

pub fn router(state: Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route(
            "/places",
            get(list_places_handler).post(create_place_handler),
        )
        .route(
            "/places/{id}",
            get(get_place_handler).delete(delete_place_handler),
        )
        .route("/categories", get(categories_handler))
        .route("/debug", get(debug_handler))
        .route("/maps.js", get(maps_script_handler))
        .route("/maps/status", get(maps_status_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = State::new().await?;

    info!("Starting server...");

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let app = router(state);

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutting down...");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
