//! Route handlers for the price paid HTTP API.
//!
//! Each handler corresponds to one endpoint and delegates to the async SDK
//! wrapper; no aggregation logic lives here.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use super::error::AppError;
use super::AppState;
use crate::models::{Point, PriceSummaryMap, YearSummaryMap};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Reject points outside WGS84 bounds before they reach the upstream
/// services; postcodes.io would answer 400 and that must not surface as
/// a gateway error.
fn check_bounds(point: &Point) -> Result<(), AppError> {
    let lat_ok = (-90.0..=90.0).contains(&point.latitude);
    let long_ok = (-180.0..=180.0).contains(&point.longitude);
    if lat_ok && long_ok {
        Ok(())
    } else {
        Err(AppError::bad_request(format!(
            "point ({}, {}) is outside WGS84 bounds",
            point.latitude, point.longitude
        )))
    }
}

/// GET /health
///
/// Liveness check. Does not touch the upstream services.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// POST /api/prices
///
/// Body: a point as `{"latitude": .., "longitude": ..}` (the abbreviated
/// `lat` / `long` keys are accepted too). Responds with the average sale
/// price per postcode around the point, keyed by postcode.
pub async fn average_prices(
    State(state): State<Arc<AppState>>,
    Json(point): Json<Point>,
) -> HandlerResult<PriceSummaryMap> {
    check_bounds(&point)?;
    let summaries = state.sdk.average_by_postcode(point).await?;
    Ok(Json(summaries))
}

/// POST /api/prices/by-year
///
/// Same request body as `/api/prices`. Responds with every sale price per
/// postcode, grouped by transaction year.
pub async fn prices_by_year(
    State(state): State<Arc<AppState>>,
    Json(point): Json<Point>,
) -> HandlerResult<YearSummaryMap> {
    check_bounds(&point)?;
    let summaries = state.sdk.prices_by_year(point).await?;
    Ok(Json(summaries))
}
