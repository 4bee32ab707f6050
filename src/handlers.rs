pub mod download;

pub use download::download;

use crate::{di_container::AppState, errors::panic_response};

use axum::{routing::get, Router};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/download", get(download))
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
}
