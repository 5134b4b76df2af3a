use axum::{http::StatusCode, response::IntoResponse};

use crate::handlers::status_text;

/// `GET /api/healthz`
///
/// Liveness probe. Always answers `200 OK`, whatever the state of the server.
pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, status_text(StatusCode::OK))
}
