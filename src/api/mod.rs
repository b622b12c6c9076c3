//! REST API over the demand engine.
//!
//! Provides three endpoints:
//! - `GET /result` — parameters, seed, and the full simulation result
//! - `GET /statistics` — derived statistics only
//! - `POST /simulate` — validate a candidate parameter set and simulate it

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use crate::params::SimulationParameters;
use crate::sim::SimulationResult;

/// Immutable application state shared across all request handlers.
///
/// Constructed once from the CLI run and wrapped in `Arc` — no locks needed
/// since all data is read-only; `POST /simulate` computes fresh results
/// without touching it.
pub struct AppState {
    /// Parameters of the CLI run.
    pub params: SimulationParameters,
    /// Seed used for the CLI run.
    pub seed: u64,
    /// Result of the CLI run.
    pub result: SimulationResult,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/result", get(handlers::get_result))
        .route("/statistics", get(handlers::get_statistics))
        .route("/simulate", post(handlers::post_simulate))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Panics
///
/// Panics if the TCP listener cannot bind to `addr`.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    eprintln!("API server listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("server error: {e}"));
}
