//! Pricing and cancellation-refund engine for pandit bookings.
//!
//! The `pricing` module is the engine itself. `app` wraps it in a small
//! axum service for booking and cancellation handlers to call over JSON.

pub mod config;
pub mod error;
pub mod pricing;

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::pricing::TariffConstants;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Read-only after startup
    pub tariffs: Arc<TariffConstants>,
}

impl AppState {
    pub fn new(tariffs: TariffConstants) -> Self {
        Self {
            tariffs: Arc::new(tariffs),
        }
    }
}

/// Build the full application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/pricing", pricing::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
