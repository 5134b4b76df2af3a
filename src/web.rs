use std::{path::Path, sync::Arc};

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tracing::{info, level_filters::LevelFilter};

use crate::{
    context::{FileMount, ServerRuntimeContext},
    error::{AppResult, ErrorKind},
    handlers::{
        file_hits::count_hit,
        health::healthz,
        metrics::{metrics, reset},
    },
    hits::HitCounter,
    log::log_request,
    state::AppState,
};

/// Build the routing table.
///
/// | Method | Path            | Handler               |
/// |--------|-----------------|-----------------------|
/// | any    | `<mount>/*`     | static files, counted |
/// | GET    | `/api/healthz`  | [`healthz`]           |
/// | GET    | `/api/metrics`  | [`metrics`]           |
/// | POST   | `/api/reset`    | [`reset`]             |
///
/// Only requests that reach the static file service are counted.
pub fn router(state: AppState, root: impl AsRef<Path>, mount: &FileMount) -> Router {
    let files = ServiceBuilder::new()
        .layer(middleware::from_fn_with_state(state.clone(), count_hit))
        .service(ServeDir::new(root));

    let app = Router::new()
        .route("/api/healthz", get(healthz))
        .route("/api/metrics", get(metrics))
        .route("/api/reset", post(reset))
        .with_state(state);

    match mount {
        FileMount::Root => app.fallback_service(files),
        FileMount::Nested(prefix) => app.nest_service(prefix, files),
    }
}

pub async fn start_web_server(runtime_ctx: ServerRuntimeContext) -> AppResult<()> {
    let state = AppState::new(Arc::new(HitCounter::new()));

    let mut app = router(state, runtime_ctx.root_path(), runtime_ctx.mount());

    match LevelFilter::current() {
        LevelFilter::TRACE | LevelFilter::DEBUG | LevelFilter::INFO => {
            app = app.layer(middleware::from_fn(log_request));
        }
        _ => {}
    }

    match runtime_ctx.mount() {
        FileMount::Root => info!("Static files are served under `/`."),
        FileMount::Nested(prefix) => info!("Static files are served under `{prefix}/`."),
    }

    info!("Starting web server ...");

    let socket_address = runtime_ctx.socket_address();
    let listener = TcpListener::bind(socket_address).await.map_err(|err| {
        ErrorKind::WebServer.context(format!("Could not bind to `{socket_address}`: `{err}`"))
    })?;

    info!("Listening on: `http://{}`", listener.local_addr()?);

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(|err| ErrorKind::WebServer.context(err))?;

    Ok(())
}
