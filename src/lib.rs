pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod secrets;

use axum::Router;
use axum::routing::get;
use tower_http::catch_panic::CatchPanicLayer;

pub use handler::AppState;

/// Builds the application router: the single connection-info route behind
/// panic recovery and the request-ID span. Shared by `main` and the
/// integration tests so both exercise the same middleware stack.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handler::connect::connect_handler))
        .layer(CatchPanicLayer::custom(middleware::recover_panic))
        .layer(axum::middleware::from_fn(middleware::request_id_layer))
        .with_state(state)
}
