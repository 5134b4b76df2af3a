use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

/// Counts one hit, then hands the request to the file service.
///
/// Neither the request nor the response is looked at: every request routed
/// through the file service is a hit, including the ones answered with 404.
pub async fn count_hit(State(state): State<AppState>, request: Request, next: Next) -> Response {
    state.hits().increment();
    next.run(request).await
}
