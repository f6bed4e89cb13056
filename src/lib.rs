//! Shorty, a minimal in-memory URL-shortening HTTP service.
//!
//! `POST /` with a plain-text URL body returns a short URL; `GET /:id`
//! redirects back to the original. Mappings live in a process-wide
//! [`store::UrlStore`] and are lost on shutdown.

pub mod config;
pub mod error;
pub mod handlers;
pub mod id;
pub mod store;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use config::AppConfig;
use store::UrlStore;

// ── Shared application state ───────────────────────────────────────────────

pub struct AppState {
    pub config: AppConfig,
    pub store: UrlStore,
}

// ── Router ─────────────────────────────────────────────────────────────────

/// Build the application router.
///
/// Every route carries the shared method fallback so that any verb other
/// than the two the service understands is answered uniformly.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/",
            post(handlers::shorten::shorten).fallback(handlers::method_fallback),
        )
        .route(
            "/:id",
            get(handlers::redirect::redirect).fallback(handlers::method_fallback),
        )
        .fallback(handlers::method_fallback)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
