//! Shared test fixtures for the price paid SDK integration tests.
//!
//! Builders for the two record shapes the aggregation pipeline consumes:
//! validated sale records and geocoded postcode coordinates.

use pricepaid_sdk::models::{NearbyPostcode, SaleRecord};

/// A validated sale record.
pub fn sale(postcode: &str, amount: u64, date: &str) -> SaleRecord {
    SaleRecord {
        postcode: postcode.to_string(),
        amount,
        date: date.to_string(),
    }
}

/// A geocoded postcode with its centroid.
pub fn coord(postcode: &str, latitude: f64, longitude: f64) -> NearbyPostcode {
    NearbyPostcode {
        postcode: postcode.to_string(),
        latitude,
        longitude,
    }
}
