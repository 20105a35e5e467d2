use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Per-postcode average price summaries, keyed by postcode in first-seen
/// order.
pub type PriceSummaryMap = IndexMap<String, PriceSummary>;

/// Per-postcode yearly price summaries, keyed by postcode in first-seen
/// order.
pub type YearSummaryMap = IndexMap<String, YearSummary>;

// ---------------------------------------------------------------------------
// PriceSummary
// ---------------------------------------------------------------------------

/// Average sale price for one postcode.
///
/// Coordinates are `0.0` until
/// [`attach_coordinates`](crate::aggregate::attach_coordinates) fills them
/// in from the geocoder output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSummary {
    pub lat: f64,
    pub long: f64,
    pub avg_price: f64,
}

// ---------------------------------------------------------------------------
// YearSummary
// ---------------------------------------------------------------------------

/// Sale prices for one postcode grouped by transaction year.
///
/// `years` maps the four-digit year to the prices recorded in it; year keys
/// and the prices within a year both keep first-seen order. Coordinates are
/// `0.0` until attachment, as with [`PriceSummary`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearSummary {
    pub lat: f64,
    pub long: f64,
    pub years: IndexMap<String, Vec<u64>>,
}

// ---------------------------------------------------------------------------
// HasCoordinates
// ---------------------------------------------------------------------------

/// Seam shared by the summary types so coordinate attachment is written
/// once for both aggregation modes.
pub trait HasCoordinates {
    /// Overwrite the entry's coordinates.
    fn set_coordinates(&mut self, latitude: f64, longitude: f64);
}

impl HasCoordinates for PriceSummary {
    fn set_coordinates(&mut self, latitude: f64, longitude: f64) {
        self.lat = latitude;
        self.long = longitude;
    }
}

impl HasCoordinates for YearSummary {
    fn set_coordinates(&mut self, latitude: f64, longitude: f64) {
        self.lat = latitude;
        self.long = longitude;
    }
}
