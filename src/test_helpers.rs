use std::{
    path::PathBuf,
    sync::{Mutex, OnceLock},
};

use axum::{
    body::Body,
    http::{Method, Request},
    response::Response,
};
use http_body_util::BodyExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// ------------------------------------------------
// test facility for requests
// ------------------------------------------------

pub fn request_uri_for_test(uri: &str, method: Method) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(method)
        .body(Body::empty())
        .unwrap()
}

/// Collects the whole response body into a string.
pub async fn body_string(resp: Response) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Directory with the static files used in tests.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("site")
}

// ------------------------------------------------
// test facility for tracing
// ------------------------------------------------

/// The global tracing subscriber can only be installed once per process,
/// while every test calls this to make sure there is one.
static TRACER: OnceLock<Mutex<usize>> = OnceLock::new();

pub(crate) fn init_tracing() {
    let _ = TRACER.get_or_init(|| {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "hits_server=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .init();
        Mutex::new(0)
    });
}
