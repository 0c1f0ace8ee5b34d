//! Echo server routing.
//!
//! Fixed-content GET endpoints used as a stable target for the load client.

use axum::{routing::get, Router};
use std::time::Duration;
use tokio::time::sleep;
use tower_http::trace::TraceLayer;

/// Artificial latency added by the `/slow` route.
pub const SLOW_ROUTE_DELAY: Duration = Duration::from_millis(50);

/// Build the application router.
pub fn router() -> Router {
    Router::new()
        .route("/", get(ok_handler))
        .route("/ping", get(ok_handler))
        .route("/slow", get(slow_handler))
        .layer(TraceLayer::new_for_http())
}

/// GET / and GET /ping - immediate fixed response
async fn ok_handler() -> &'static str {
    "ok"
}

/// GET /slow - fixed response after a fixed delay
async fn slow_handler() -> &'static str {
    sleep(SLOW_ROUTE_DELAY).await;
    "ok"
}

/// Normalize a configured URL into a `host:port` bind target.
///
/// Accepts both plain `host:port` values and `http://host:port[/]` URLs, so
/// `HTTPLEAK_URL` can hold the same value the client targets.
pub fn bind_target(url: &str) -> String {
    url.trim_start_matches("http://")
        .trim_start_matches("https://")
        .trim_end_matches('/')
        .to_string()
}
