use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// Logs every request with its response status and how long it took.
pub async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    let res = next.run(req).await;

    tracing::info!(
        "{method} {uri} -> {} ({:?})",
        res.status(),
        start.elapsed()
    );

    res
}
