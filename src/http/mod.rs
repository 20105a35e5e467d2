//! Axum HTTP layer exposing the aggregation operations as a small JSON API.
//!
//! Deliberately thin: handlers hand the decoded point to the SDK on the
//! blocking pool and return the summary map as JSON. Enabled by the
//! `http-server` feature and served by the `pricepaid-server` binary.

mod error;
mod routes;

pub use error::AppError;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::AsyncPricePaidSdk;

/// Shared state for route handlers.
pub struct AppState {
    /// Async wrapper around the SDK; dispatches blocking HTTP calls to a
    /// worker thread.
    pub sdk: AsyncPricePaidSdk,
}

/// Create the application router with all routes and middleware.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/api/prices", post(routes::average_prices))
        .route("/api/prices/by-year", post(routes::prices_by_year))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PricePaidSdk;

    #[test]
    fn router_creation() {
        let sdk = PricePaidSdk::builder().build().unwrap();
        let state = Arc::new(AppState {
            sdk: AsyncPricePaidSdk::new(sdk),
        });
        let _router = create_router(state);
    }
}
