//! Async wrapper around [`PricePaidSdk`] for use in async runtimes (Tokio,
//! etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the blocking HTTP client waits on the upstream services.
//!
//! # Example
//!
//! ```no_run
//! # async fn example() -> pricepaid_sdk::Result<()> {
//! use pricepaid_sdk::models::Point;
//! use pricepaid_sdk::AsyncPricePaidSdk;
//!
//! let sdk = AsyncPricePaidSdk::builder().build().await?;
//! let averages = sdk.average_by_postcode(Point::new(50.8412, -0.1369)).await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::error::{PricePaidError, Result};
use crate::models::{Point, PriceSummaryMap, YearSummaryMap};
use crate::sparql::SparqlResults;
use crate::{PricePaidSdk, PricePaidSdkBuilder};

// ---------------------------------------------------------------------------
// AsyncPricePaidSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncPricePaidSdk`]
/// instance. Wraps [`PricePaidSdkBuilder`] and accepts the same options.
#[derive(Default)]
pub struct AsyncPricePaidSdkBuilder {
    inner: PricePaidSdkBuilder,
}

impl AsyncPricePaidSdkBuilder {
    /// Set a custom SPARQL endpoint for the price paid dataset.
    pub fn registry_endpoint(mut self, url: impl Into<String>) -> Self {
        self.inner = self.inner.registry_endpoint(url);
        self
    }

    /// Set a custom base URL for the reverse geocoder.
    pub fn geocoder_base_url(mut self, url: impl Into<String>) -> Self {
        self.inner = self.inner.geocoder_base_url(url);
        self
    }

    /// Set the search radius around the query point, in metres.
    pub fn radius_m(mut self, metres: u32) -> Self {
        self.inner = self.inner.radius_m(metres);
        self
    }

    /// Cap the number of postcodes fetched per reverse geocode.
    pub fn postcode_limit(mut self, limit: u32) -> Self {
        self.inner = self.inner.postcode_limit(limit);
        self
    }

    /// Set the HTTP request timeout for both upstream services.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    /// Build the async SDK.
    ///
    /// Construction runs on the blocking thread pool because the blocking
    /// HTTP client spawns its worker thread there.
    pub async fn build(self) -> Result<AsyncPricePaidSdk> {
        tokio::task::spawn_blocking(move || Ok(AsyncPricePaidSdk::new(self.inner.build()?)))
            .await
            .map_err(|e| PricePaidError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncPricePaidSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`PricePaidSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying SDK is immutable and
/// shared behind an [`Arc`], so concurrent calls need no locking.
///
/// # Usage
///
/// Use [`run()`](Self::run) to execute any sync SDK method:
///
/// ```no_run
/// # use pricepaid_sdk::AsyncPricePaidSdk;
/// # use pricepaid_sdk::models::Point;
/// # async fn example() -> pricepaid_sdk::Result<()> {
/// let sdk = AsyncPricePaidSdk::builder().build().await?;
/// let point = Point::new(50.8412, -0.1369);
/// let by_year = sdk.run(move |s| s.prices().by_year(&point)).await?;
/// # Ok(())
/// # }
/// ```
pub struct AsyncPricePaidSdk {
    inner: Arc<PricePaidSdk>,
}

impl AsyncPricePaidSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncPricePaidSdkBuilder {
        AsyncPricePaidSdkBuilder::default()
    }

    /// Wrap an already-built [`PricePaidSdk`].
    pub fn new(sdk: PricePaidSdk) -> Self {
        Self {
            inner: Arc::new(sdk),
        }
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives a `&PricePaidSdk` reference and should return
    /// a `Result<T>`. The operation runs on a dedicated blocking thread,
    /// keeping the async event loop free.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&PricePaidSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&sdk))
            .await
            .map_err(|e| PricePaidError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Average sale price per postcode near `point`, asynchronously.
    ///
    /// Convenience wrapper around [`run()`](Self::run) for
    /// [`PriceQuery::average_by_postcode`](crate::queries::prices::PriceQuery::average_by_postcode).
    pub async fn average_by_postcode(&self, point: Point) -> Result<PriceSummaryMap> {
        self.run(move |s| s.prices().average_by_postcode(&point)).await
    }

    /// Sale prices per postcode near `point` grouped by year,
    /// asynchronously.
    pub async fn prices_by_year(&self, point: Point) -> Result<YearSummaryMap> {
        self.run(move |s| s.prices().by_year(&point)).await
    }

    /// Execute a raw SPARQL query asynchronously.
    ///
    /// Convenience wrapper around [`run()`](Self::run) for
    /// [`PricePaidSdk::sparql()`].
    pub async fn sparql(&self, query: &str) -> Result<SparqlResults> {
        let query = query.to_string();
        self.run(move |s| s.sparql(&query)).await
    }
}
