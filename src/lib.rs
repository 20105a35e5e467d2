//! Price paid SDK for Rust.
//!
//! Provides a high-level client for aggregating UK property sale prices
//! around a geographic point. Postcodes near the point come from the
//! postcodes.io API; their transactions come from the HM Land Registry
//! price paid SPARQL endpoint; the SDK groups and averages them in
//! process.
//!
//! # Quick start
//!
//! ```no_run
//! use pricepaid_sdk::models::Point;
//! use pricepaid_sdk::PricePaidSdk;
//!
//! let sdk = PricePaidSdk::builder().build().unwrap();
//! let point = Point::new(50.8412, -0.1369);
//!
//! // Average sale price per postcode within the search radius
//! let averages = sdk.prices().average_by_postcode(&point).unwrap();
//!
//! // Every sale price per postcode, grouped by year
//! let by_year = sdk.prices().by_year(&point).unwrap();
//! ```

pub mod aggregate;
#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod error;
pub mod geocoder;
#[cfg(feature = "http-server")]
pub mod http;
pub mod models;
pub mod queries;
pub mod registry;
pub mod sparql;

#[cfg(feature = "async")]
pub use async_client::AsyncPricePaidSdk;
pub use error::{PricePaidError, Result};
pub use geocoder::Geocoder;
pub use registry::LandRegistry;
pub use sparql::SparqlBuilder;

use std::fmt;
use std::time::Duration;

use reqwest::blocking::Client;

// ---------------------------------------------------------------------------
// PricePaidSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`PricePaidSdk`] instance.
///
/// Use [`PricePaidSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](PricePaidSdkBuilder::build) to create the
/// SDK.
pub struct PricePaidSdkBuilder {
    registry_endpoint: String,
    geocoder_base_url: String,
    radius_m: u32,
    postcode_limit: u32,
    timeout: Duration,
}

impl Default for PricePaidSdkBuilder {
    fn default() -> Self {
        Self {
            registry_endpoint: config::LAND_REGISTRY_ENDPOINT.to_string(),
            geocoder_base_url: config::POSTCODES_IO_BASE.to_string(),
            radius_m: config::DEFAULT_RADIUS_M,
            postcode_limit: config::DEFAULT_POSTCODE_LIMIT,
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl PricePaidSdkBuilder {
    /// Set a custom SPARQL endpoint for the price paid dataset.
    ///
    /// Defaults to the public HM Land Registry endpoint. Point this at a
    /// local stand-in for testing.
    pub fn registry_endpoint(mut self, url: impl Into<String>) -> Self {
        self.registry_endpoint = url.into();
        self
    }

    /// Set a custom base URL for the reverse geocoder.
    ///
    /// Defaults to the public postcodes.io API.
    pub fn geocoder_base_url(mut self, url: impl Into<String>) -> Self {
        self.geocoder_base_url = url.into();
        self
    }

    /// Set the search radius around the query point, in metres.
    ///
    /// Defaults to 2000.
    pub fn radius_m(mut self, metres: u32) -> Self {
        self.radius_m = metres;
        self
    }

    /// Cap the number of postcodes fetched per reverse geocode.
    ///
    /// Defaults to 99, the most postcodes.io allows.
    pub fn postcode_limit(mut self, limit: u32) -> Self {
        self.postcode_limit = limit;
        self
    }

    /// Set the HTTP request timeout for both upstream services.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the SDK, constructing the shared HTTP client.
    ///
    /// No network traffic happens here; requests are made per query.
    pub fn build(self) -> Result<PricePaidSdk> {
        let client = Client::builder().timeout(self.timeout).build()?;
        Ok(PricePaidSdk {
            geocoder: Geocoder::new(
                client.clone(),
                self.geocoder_base_url,
                self.radius_m,
                self.postcode_limit,
            ),
            registry: LandRegistry::new(client, self.registry_endpoint),
        })
    }
}

// ---------------------------------------------------------------------------
// PricePaidSdk
// ---------------------------------------------------------------------------

/// The main entry point for the price paid SDK.
///
/// Owns the two upstream clients (reverse geocoder and land registry) and
/// exposes the aggregation operations as lightweight borrowing wrappers.
///
/// Created via [`PricePaidSdk::builder()`].
pub struct PricePaidSdk {
    geocoder: Geocoder,
    registry: LandRegistry,
}

impl PricePaidSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> PricePaidSdkBuilder {
        PricePaidSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the price aggregation query interface.
    ///
    /// Returns a lightweight wrapper that borrows the SDK's upstream
    /// clients and provides the aggregation operations.
    pub fn prices(&self) -> queries::prices::PriceQuery<'_> {
        queries::prices::PriceQuery::new(&self.geocoder, &self.registry)
    }

    // -- Collaborator access and utility methods ---------------------------

    /// Return a reference to the reverse geocoder client.
    pub fn geocoder(&self) -> &Geocoder {
        &self.geocoder
    }

    /// Return a reference to the land registry client.
    pub fn registry(&self) -> &LandRegistry {
        &self.registry
    }

    /// Execute a raw SPARQL query against the price paid endpoint.
    ///
    /// Provides escape-hatch access for queries not covered by
    /// [`prices()`](Self::prices). The decoded JSON results envelope is
    /// returned as-is.
    pub fn sparql(&self, query: &str) -> Result<sparql::SparqlResults> {
        self.registry.execute(query)
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for PricePaidSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PricePaidSdk(registry={}, geocoder={}, radius_m={}, postcode_limit={})",
            self.registry.endpoint(),
            self.geocoder.base_url(),
            self.geocoder.radius_m(),
            self.geocoder.postcode_limit()
        )
    }
}
