//! Reverse geocode client for the postcodes.io API.
//!
//! Given a WGS84 point, fetches every postcode within a configured radius
//! together with its centroid. The output doubles as the coordinate list
//! for [`attach_coordinates`](crate::aggregate::attach_coordinates).

use reqwest::blocking::Client;

use crate::error::{PricePaidError, Result};
use crate::models::{GeocodeResponse, NearbyPostcode, Point};

const SERVICE: &str = "postcodes.io";

/// Client for a postcodes.io-compatible reverse geocode endpoint.
pub struct Geocoder {
    client: Client,
    base_url: String,
    radius_m: u32,
    postcode_limit: u32,
}

impl Geocoder {
    /// Create a geocoder bound to the given HTTP client and base URL.
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        radius_m: u32,
        postcode_limit: u32,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            radius_m,
            postcode_limit,
        }
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The search radius in metres.
    pub fn radius_m(&self) -> u32 {
        self.radius_m
    }

    /// The maximum number of postcodes requested per geocode.
    pub fn postcode_limit(&self) -> u32 {
        self.postcode_limit
    }

    /// Every postcode within the configured radius of `point`, nearest
    /// first (the service's ordering).
    ///
    /// An area without postcodes is not an error: the result is an empty
    /// list. Transport, HTTP status and decode failures all map to
    /// [`PricePaidError::DependencyUnavailable`].
    pub fn nearby(&self, point: &Point) -> Result<Vec<NearbyPostcode>> {
        let url = format!(
            "{}/postcodes?lon={}&lat={}&limit={}&radius={}",
            self.base_url, point.longitude, point.latitude, self.postcode_limit, self.radius_m
        );

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| PricePaidError::unavailable(SERVICE, e))?;

        if !response.status().is_success() {
            return Err(PricePaidError::unavailable(
                SERVICE,
                format!("HTTP {}", response.status()),
            ));
        }

        let envelope: GeocodeResponse = response
            .json()
            .map_err(|e| PricePaidError::unavailable(SERVICE, e))?;

        Ok(envelope.into_postcodes())
    }
}
