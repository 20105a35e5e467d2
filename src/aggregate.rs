//! Grouping transforms that reshape flat sale records into per-postcode
//! summaries.
//!
//! These are pure functions: one pass over the input, no I/O. They sit
//! between the Land Registry fetch and coordinate attachment, and they
//! assume records already validated by
//! [`SaleRecord::from_binding`](crate::models::SaleRecord::from_binding).

use indexmap::IndexMap;

use crate::models::{
    HasCoordinates, NearbyPostcode, PriceSummary, PriceSummaryMap, SaleRecord, YearSummaryMap,
};

// ---------------------------------------------------------------------------
// group_and_average
// ---------------------------------------------------------------------------

/// Accumulator for [`group_and_average`]: the postcode of the previous
/// record and the amounts of the contiguous run it belongs to.
#[derive(Default)]
struct ContiguousRun {
    postcode: Option<String>,
    amounts: Vec<u64>,
}

impl ContiguousRun {
    /// Feed one record through the accumulator and return the mean of the
    /// run up to and including it. A postcode change restarts the run.
    fn push(&mut self, sale: &SaleRecord) -> f64 {
        if self.postcode.as_deref() != Some(sale.postcode.as_str()) {
            self.amounts.clear();
            self.postcode = Some(sale.postcode.clone());
        }
        self.amounts.push(sale.amount);
        mean(&self.amounts)
    }
}

fn mean(amounts: &[u64]) -> f64 {
    // A run's total can exceed u64::MAX even though every amount fits.
    let total: f64 = amounts.iter().map(|&a| a as f64).sum();
    total / amounts.len() as f64
}

/// Group sale records by postcode and compute an average price for each,
/// keyed in first-seen order. Coordinates start at `0.0`.
///
/// The average covers only the last contiguous run of records for a
/// postcode: a postcode that reappears later in the sequence restarts its
/// accumulator, and the rewritten entry keeps the earlier position but
/// only the later run's mean. Input order therefore matters. Callers who
/// need every occurrence counted regardless of position should derive
/// averages from [`group_by_year`] output instead.
pub fn group_and_average(sales: &[SaleRecord]) -> PriceSummaryMap {
    let mut summaries = PriceSummaryMap::new();
    let mut run = ContiguousRun::default();

    for sale in sales {
        let avg_price = run.push(sale);
        summaries.insert(
            sale.postcode.clone(),
            PriceSummary {
                lat: 0.0,
                long: 0.0,
                avg_price,
            },
        );
    }

    summaries
}

// ---------------------------------------------------------------------------
// group_by_year
// ---------------------------------------------------------------------------

/// Group every sale record by postcode and transaction year.
///
/// Unlike [`group_and_average`], every occurrence of a postcode
/// contributes no matter where it sits in the sequence. Year keys are the
/// four-digit date prefix; both postcodes and years keep first-seen order,
/// and prices within a year keep encounter order.
pub fn group_by_year(sales: &[SaleRecord]) -> YearSummaryMap {
    let mut summaries = YearSummaryMap::new();

    for sale in sales {
        summaries
            .entry(sale.postcode.clone())
            .or_default()
            .years
            .entry(sale.year().to_string())
            .or_default()
            .push(sale.amount);
    }

    summaries
}

// ---------------------------------------------------------------------------
// attach_coordinates
// ---------------------------------------------------------------------------

/// Copy geocoder coordinates onto every summary whose postcode appears in
/// `coords`.
///
/// Summaries without a matching coordinate record keep their `0.0`
/// defaults; coordinate records for postcodes absent from the map are
/// ignored rather than inserted. Map size and key order never change, and
/// applying the same coordinates twice is a no-op.
pub fn attach_coordinates<S: HasCoordinates>(
    coords: &[NearbyPostcode],
    mut summaries: IndexMap<String, S>,
) -> IndexMap<String, S> {
    for coord in coords {
        if let Some(summary) = summaries.get_mut(&coord.postcode) {
            summary.set_coordinates(coord.latitude, coord.longitude);
        }
    }
    summaries
}
