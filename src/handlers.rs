// web server response handler modules
pub(crate) mod file_hits;
pub(crate) mod health;
pub(crate) mod metrics;

use axum::http::StatusCode;

/// Textual name of a status code, e.g. `OK` for 200.
pub(crate) fn status_text(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or_default()
}
