use serde::{Deserialize, Serialize};

/// A WGS84 coordinate pair marking the centre of a search.
///
/// Deserialization accepts the abbreviated `lat` / `long` keys as well as
/// the full field names; serialization always emits the full names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "long")]
    pub longitude: f64,
}

impl Point {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}
