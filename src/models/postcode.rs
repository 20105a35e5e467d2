use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// NearbyPostcode
// ---------------------------------------------------------------------------

/// A postcode returned by the reverse geocoder, with its centroid.
///
/// The service reports many more attributes per postcode; only the fields
/// the aggregation pipeline needs are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyPostcode {
    pub postcode: String,
    pub latitude: f64,
    pub longitude: f64,
}

// ---------------------------------------------------------------------------
// GeocodeResponse
// ---------------------------------------------------------------------------

/// Envelope returned by the postcodes.io `/postcodes?lon=..&lat=..` endpoint.
///
/// `result` is JSON `null` when no postcode lies within the search radius.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub result: Option<Vec<NearbyPostcode>>,
}

impl GeocodeResponse {
    /// The returned postcodes, treating a `null` result as empty.
    pub fn into_postcodes(self) -> Vec<NearbyPostcode> {
        self.result.unwrap_or_default()
    }
}
