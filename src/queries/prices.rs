//! Price aggregation queries: the entry points that chain the geocoder,
//! the land registry client and the grouping transforms.

use crate::aggregate;
use crate::error::Result;
use crate::geocoder::Geocoder;
use crate::models::{NearbyPostcode, Point, PriceSummaryMap, SaleRecord, YearSummaryMap};
use crate::registry::LandRegistry;

// ---------------------------------------------------------------------------
// PriceQuery
// ---------------------------------------------------------------------------

/// Query interface for sale price aggregation around a point.
pub struct PriceQuery<'a> {
    geocoder: &'a Geocoder,
    registry: &'a LandRegistry,
}

impl<'a> PriceQuery<'a> {
    /// Create a new `PriceQuery` bound to the given collaborators.
    pub fn new(geocoder: &'a Geocoder, registry: &'a LandRegistry) -> Self {
        Self { geocoder, registry }
    }

    /// Average sale price per postcode near `point`.
    ///
    /// Covers every postcode within the configured radius that has
    /// recorded sales, with the postcode centroid attached to each entry.
    /// Postcodes without sales do not appear; a point with no nearby
    /// postcodes yields an empty map without touching the land registry.
    pub fn average_by_postcode(&self, point: &Point) -> Result<PriceSummaryMap> {
        let (nearby, sales) = self.fetch_sales(point)?;
        Ok(aggregate::attach_coordinates(
            &nearby,
            aggregate::group_and_average(&sales),
        ))
    }

    /// Sale prices per postcode near `point`, grouped by transaction year.
    ///
    /// Same pipeline as [`average_by_postcode`](Self::average_by_postcode)
    /// but every transaction is kept, bucketed under its four-digit year.
    pub fn by_year(&self, point: &Point) -> Result<YearSummaryMap> {
        let (nearby, sales) = self.fetch_sales(point)?;
        Ok(aggregate::attach_coordinates(
            &nearby,
            aggregate::group_by_year(&sales),
        ))
    }

    /// Shared front half of both operations: geocode, then fetch sales
    /// for whatever postcodes came back.
    fn fetch_sales(&self, point: &Point) -> Result<(Vec<NearbyPostcode>, Vec<SaleRecord>)> {
        let nearby = self.geocoder.nearby(point)?;
        if nearby.is_empty() {
            return Ok((nearby, Vec::new()));
        }

        let postcodes: Vec<&str> = nearby.iter().map(|n| n.postcode.as_str()).collect();
        let sales = self.registry.sales_for(&postcodes)?;
        Ok((nearby, sales))
    }
}
