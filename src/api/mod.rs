// src/api/mod.rs

//! HTTP surface for the mesostic service.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::store::PoemStore;
use crate::tasks::ServiceMetrics;

pub mod error;
pub mod handlers;

pub use error::ApiError;
pub use handlers::{SubmitRequest, SubmitResponse};

/// Submissions are capped at 1 MiB; anything larger is refused before
/// the body is read.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Poem builds are CPU-bound and fast; anything hanging this long is a
/// stuck request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared state handed to every handler and to the fetch ticker.
///
/// Nothing here is per-request: config and store paths are immutable,
/// the HTTP client pools connections internally, and the metrics are
/// atomic counters. Each poem build constructs its own engine session.
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub store: PoemStore,
    pub http: reqwest::Client,
    pub metrics: ServiceMetrics,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = PoemStore::new(config.store_dir.clone());
        Self {
            config,
            store,
            http: crate::apod::create_shared_client(),
            metrics: ServiceMetrics::new(),
        }
    }
}

/// Build the router with all routes configured.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/ping", get(handlers::ping))
        .route("/app", post(handlers::submit_json))
        .route("/app/{spine}", post(handlers::submit_form))
        .route("/upload", post(handlers::upload))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
