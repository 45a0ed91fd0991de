//! HTTP middleware layers

use tower_http::cors::{Any, CorsLayer};

/// Permissive CORS for the loopback deployment; the app serves its own UI,
/// and the terminal consumer is not a browser.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
