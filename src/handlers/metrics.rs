use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tracing::debug;

use crate::{handlers::status_text, state::AppState};

/// `GET /api/metrics`
///
/// Renders the number of hits on the file route as `Hits: N`.
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let hits = state.hits().read();
    (StatusCode::OK, format!("Hits: {hits}"))
}

/// `POST /api/reset`
pub async fn reset(State(state): State<AppState>) -> impl IntoResponse {
    state.hits().reset();
    debug!("Hit counter reset.");
    (StatusCode::OK, status_text(StatusCode::OK))
}
