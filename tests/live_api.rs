//! Live smoke test for the price paid SDK.
//!
//! Hits the real postcodes.io and HM Land Registry services and exercises
//! the public SDK surface end to end.
//!
//! Run with:
//! ```sh
//! cargo test -- --ignored --nocapture
//! ```

use pricepaid_sdk::models::Point;
use pricepaid_sdk::PricePaidSdk;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Print a section header to stderr.
fn section(name: &str) {
    eprintln!("\n{}", "=".repeat(60));
    eprintln!("  {}", name);
    eprintln!("{}", "=".repeat(60));
}

/// Counters for pass/fail reporting.
struct Counters {
    pass: usize,
    fail: usize,
}

impl Counters {
    fn new() -> Self {
        Self { pass: 0, fail: 0 }
    }

    fn check(&mut self, label: &str, condition: bool, detail: &str) {
        let status = if condition { "PASS" } else { "FAIL" };
        if condition {
            self.pass += 1;
        } else {
            self.fail += 1;
        }
        if detail.is_empty() {
            eprintln!("  [{}] {}", status, label);
        } else {
            eprintln!("  [{}] {} -- {}", status, label, detail);
        }
    }
}

// ---------------------------------------------------------------------------
// Main smoke test
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn smoke_test() {
    // Central Brighton; a dense area with plenty of recorded sales.
    let point = Point::new(50.8412068, -0.1369175);
    let sdk = PricePaidSdk::builder().build().unwrap();
    let mut c = Counters::new();

    // ================================================================
    // 1. GEOCODER
    // ================================================================
    section("Geocoder");

    let nearby = sdk.geocoder().nearby(&point).unwrap();
    c.check(
        "nearby returns postcodes",
        !nearby.is_empty(),
        &format!("found {}", nearby.len()),
    );
    c.check(
        "nearby respects the limit",
        nearby.len() <= sdk.geocoder().postcode_limit() as usize,
        "",
    );
    if let Some(first) = nearby.first() {
        c.check(
            "postcodes carry coordinates",
            first.latitude != 0.0 && first.longitude != 0.0,
            &format!(
                "{} at ({}, {})",
                first.postcode, first.latitude, first.longitude
            ),
        );
    }

    // A point in the middle of the North Sea has no postcodes.
    let offshore = sdk.geocoder().nearby(&Point::new(56.0, 3.0)).unwrap();
    c.check("offshore point yields none", offshore.is_empty(), "");

    // ================================================================
    // 2. AVERAGE PRICES
    // ================================================================
    section("Average prices");

    let averages = sdk.prices().average_by_postcode(&point).unwrap();
    c.check(
        "averages cover some postcodes",
        !averages.is_empty(),
        &format!("found {}", averages.len()),
    );
    c.check(
        "every summarized postcode was geocoded",
        averages
            .keys()
            .all(|pc| nearby.iter().any(|n| &n.postcode == pc)),
        "",
    );
    c.check(
        "averages are positive",
        averages.values().all(|s| s.avg_price > 0.0),
        "",
    );
    c.check(
        "coordinates were attached",
        averages.values().all(|s| s.lat != 0.0 && s.long != 0.0),
        "",
    );

    // ================================================================
    // 3. PRICES BY YEAR
    // ================================================================
    section("Prices by year");

    let by_year = sdk.prices().by_year(&point).unwrap();
    c.check(
        "yearly summaries cover some postcodes",
        !by_year.is_empty(),
        &format!("found {}", by_year.len()),
    );
    c.check(
        "year keys are four digits",
        by_year
            .values()
            .flat_map(|s| s.years.keys())
            .all(|y| y.len() == 4 && y.bytes().all(|b| b.is_ascii_digit())),
        "",
    );
    c.check(
        "no year bucket is empty",
        by_year
            .values()
            .flat_map(|s| s.years.values())
            .all(|prices| !prices.is_empty()),
        "",
    );

    // The yearly grouping keeps everything, so it never has fewer
    // postcodes than the averaging pass.
    c.check(
        "by-year covers at least the averaged postcodes",
        by_year.len() >= averages.len(),
        &format!("by_year={}, averages={}", by_year.len(), averages.len()),
    );

    // ================================================================
    // 4. RAW SPARQL
    // ================================================================
    section("Raw SPARQL");

    let results = sdk
        .sparql("SELECT ?s WHERE { ?s ?p ?o } LIMIT 1")
        .unwrap();
    c.check(
        "escape hatch runs a raw query",
        results.results.bindings.len() == 1,
        &format!("rows={}", results.results.bindings.len()),
    );

    // ================================================================
    // 5. DISPLAY
    // ================================================================
    section("Display");

    let display = format!("{}", sdk);
    c.check(
        "Display impl",
        display.contains("PricePaidSdk"),
        &format!("display={}", display),
    );

    // ================================================================
    // SUMMARY
    // ================================================================
    section("SMOKE TEST COMPLETE");

    eprintln!("  Passed:  {}", c.pass);
    eprintln!("  Failed:  {}", c.fail);
    eprintln!();

    assert_eq!(c.fail, 0, "{} smoke test checks failed", c.fail);
}
