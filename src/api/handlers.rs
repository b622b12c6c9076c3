//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::sim::simulate;

use super::AppState;
use super::types::{ErrorResponse, ResultResponse, SimulateRequest, ValidationResponse};

/// Returns the CLI run's parameters and full result.
///
/// `GET /result` → 200 + `ResultResponse` JSON
pub async fn get_result(State(state): State<Arc<AppState>>) -> Json<ResultResponse> {
    Json(ResultResponse {
        params: state.params,
        seed: state.seed,
        result: state.result.clone(),
    })
}

/// Returns the derived statistics of the CLI run.
///
/// `GET /statistics` → 200 + `DerivedStatistics` JSON
pub async fn get_statistics(
    State(state): State<Arc<AppState>>,
) -> Json<crate::sim::DerivedStatistics> {
    Json(state.result.statistics)
}

/// Validates a candidate parameter set and simulates it when valid.
///
/// `POST /simulate` → 200 + `SimulationResult` JSON
/// Invalid fields → 422 + `ValidationResponse` with per-field messages.
pub async fn post_simulate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SimulateRequest>,
) -> impl IntoResponse {
    let params = match request.input().resolve() {
        Ok(params) => params,
        Err(errors) => {
            return Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationResponse { errors }).into_response(),
            ));
        }
    };

    let seed = request.seed.unwrap_or(state.seed);
    match simulate(&params, seed) {
        Ok(result) => Ok(Json(result)),
        // Unreachable after validation, but the handler must not panic.
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            })
            .into_response(),
        )),
    }
}
