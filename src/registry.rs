//! Client for the HM Land Registry price paid SPARQL endpoint.
//!
//! One form-encoded SELECT query covers a whole batch of postcodes. Each
//! result binding decodes into a [`SaleRecord`], failing fast on the first
//! malformed row.

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;

use crate::config;
use crate::error::{PricePaidError, Result};
use crate::models::SaleRecord;
use crate::sparql::{SparqlBuilder, SparqlResults};

const SERVICE: &str = "land registry";

/// Media type of the SPARQL 1.1 JSON results format.
const SPARQL_JSON: &str = "application/sparql-results+json";

/// Client for a SPARQL 1.1 endpoint serving the price paid dataset.
pub struct LandRegistry {
    client: Client,
    endpoint: String,
}

impl LandRegistry {
    /// Create a client bound to the given HTTP client and endpoint URL.
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// The SPARQL endpoint queries are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Every recorded transaction for the given postcodes, in the
    /// endpoint's row order.
    ///
    /// Row order is passed through untouched; downstream grouping depends
    /// on it. An empty postcode slice yields an empty list without a
    /// network call. A row with an unbound variable, a non-integer amount
    /// or a date without a four-digit year prefix fails the whole call
    /// with [`PricePaidError::MalformedRecord`].
    pub fn sales_for(&self, postcodes: &[&str]) -> Result<Vec<SaleRecord>> {
        if postcodes.is_empty() {
            return Ok(Vec::new());
        }

        let results = self.execute(&price_paid_query(postcodes))?;
        results
            .results
            .bindings
            .iter()
            .map(SaleRecord::from_binding)
            .collect()
    }

    /// Execute an arbitrary SPARQL query and decode the JSON results
    /// envelope.
    ///
    /// Transport, HTTP status and decode failures all map to
    /// [`PricePaidError::DependencyUnavailable`].
    pub fn execute(&self, query: &str) -> Result<SparqlResults> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, SPARQL_JSON)
            .form(&[("query", query)])
            .send()
            .map_err(|e| PricePaidError::unavailable(SERVICE, e))?;

        if !response.status().is_success() {
            return Err(PricePaidError::unavailable(
                SERVICE,
                format!("HTTP {}", response.status()),
            ));
        }

        response
            .json()
            .map_err(|e| PricePaidError::unavailable(SERVICE, e))
    }
}

// ---------------------------------------------------------------------------
// Query construction
// ---------------------------------------------------------------------------

/// The price paid SELECT query for a batch of postcodes: every transaction
/// whose address carries one of the postcodes, with its amount, date and
/// category label.
pub fn price_paid_query(postcodes: &[&str]) -> String {
    let mut builder = SparqlBuilder::new();
    for (name, iri) in config::sparql_prefixes() {
        builder.prefix(name, iri);
    }
    builder
        .select(&["?postcode", "?amount", "?date", "?category"])
        .values("?postcode", postcodes)
        .triple("?addr", "lrcommon:postcode", "?postcode")
        .triple("?transx", "lrppi:propertyAddress", "?addr")
        .triple("?transx", "lrppi:pricePaid", "?amount")
        .triple("?transx", "lrppi:transactionDate", "?date")
        .triple("?transx", "lrppi:transactionCategory/skos:prefLabel", "?category")
        .build()
}
