//! Tests for record decoding and validation: SPARQL bindings to sale
//! records, geocode envelopes and query points.

mod common;

use common::{coord, sale};
use pricepaid_sdk::models::{GeocodeResponse, Point, SaleRecord};
use pricepaid_sdk::sparql::{Binding, SparqlResults, SparqlTerm};
use pricepaid_sdk::PricePaidError;

fn term(value: &str) -> SparqlTerm {
    SparqlTerm {
        value: value.to_string(),
        term_type: Some("literal".to_string()),
        datatype: None,
    }
}

fn binding(vars: &[(&str, &str)]) -> Binding {
    vars.iter()
        .map(|(var, value)| (var.to_string(), term(value)))
        .collect()
}

fn sale_binding(postcode: &str, amount: &str, date: &str) -> Binding {
    binding(&[
        ("postcode", postcode),
        ("amount", amount),
        ("date", date),
        ("category", "full market value"),
    ])
}

// ---------------------------------------------------------------------------
// SaleRecord::from_binding
// ---------------------------------------------------------------------------

#[test]
fn decodes_a_well_formed_binding() {
    let record = SaleRecord::from_binding(&sale_binding("BN1 9RU", "52000", "2019-03-29")).unwrap();
    assert_eq!(record, sale("BN1 9RU", 52000, "2019-03-29"));
}

#[test]
fn rejects_a_binding_without_postcode() {
    let err = SaleRecord::from_binding(&binding(&[("amount", "100"), ("date", "2020-01-01")]))
        .unwrap_err();
    assert!(matches!(err, PricePaidError::MalformedRecord(_)));
}

#[test]
fn rejects_a_binding_without_amount() {
    let err = SaleRecord::from_binding(&binding(&[("postcode", "X"), ("date", "2020-01-01")]))
        .unwrap_err();
    assert!(matches!(err, PricePaidError::MalformedRecord(_)));
}

#[test]
fn rejects_a_binding_without_date() {
    let err =
        SaleRecord::from_binding(&binding(&[("postcode", "X"), ("amount", "100")])).unwrap_err();
    assert!(matches!(err, PricePaidError::MalformedRecord(_)));
}

#[test]
fn rejects_a_non_integer_amount() {
    let err = SaleRecord::from_binding(&sale_binding("X", "ten", "2020-01-01")).unwrap_err();
    assert!(matches!(err, PricePaidError::MalformedRecord(_)));
    assert!(err.to_string().contains("ten"));
}

#[test]
fn rejects_a_fractional_amount() {
    let err = SaleRecord::from_binding(&sale_binding("X", "52000.50", "2020-01-01")).unwrap_err();
    assert!(matches!(err, PricePaidError::MalformedRecord(_)));
}

#[test]
fn rejects_a_negative_amount() {
    let err = SaleRecord::from_binding(&sale_binding("X", "-5", "2020-01-01")).unwrap_err();
    assert!(matches!(err, PricePaidError::MalformedRecord(_)));
}

#[test]
fn rejects_a_date_shorter_than_a_year() {
    let err = SaleRecord::from_binding(&sale_binding("X", "100", "20")).unwrap_err();
    assert!(matches!(err, PricePaidError::MalformedRecord(_)));
}

#[test]
fn rejects_a_date_without_a_numeric_year() {
    let err = SaleRecord::from_binding(&sale_binding("X", "100", "20x0-01-01")).unwrap_err();
    assert!(matches!(err, PricePaidError::MalformedRecord(_)));
}

#[test]
fn year_is_the_first_four_characters_of_the_date() {
    assert_eq!(sale("X", 1, "2020-06-15").year(), "2020");
}

#[test]
fn year_of_a_bare_year_date_is_the_date_itself() {
    assert_eq!(sale("X", 1, "2020").year(), "2020");
}

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

#[test]
fn point_deserializes_full_field_names() {
    let point: Point =
        serde_json::from_str(r#"{"latitude": 50.8412, "longitude": -0.1369}"#).unwrap();
    assert_eq!(point, Point::new(50.8412, -0.1369));
}

#[test]
fn point_deserializes_short_aliases() {
    let point: Point = serde_json::from_str(r#"{"lat": 50.8412, "long": -0.1369}"#).unwrap();
    assert_eq!(point, Point::new(50.8412, -0.1369));
}

#[test]
fn point_serializes_full_field_names() {
    let value = serde_json::to_value(Point::new(50.0, -1.0)).unwrap();
    assert_eq!(value["latitude"], 50.0);
    assert_eq!(value["longitude"], -1.0);
}

// ---------------------------------------------------------------------------
// GeocodeResponse
// ---------------------------------------------------------------------------

#[test]
fn geocode_null_result_decodes_to_no_postcodes() {
    let envelope: GeocodeResponse =
        serde_json::from_str(r#"{"status": 200, "result": null}"#).unwrap();
    assert!(envelope.into_postcodes().is_empty());
}

#[test]
fn geocode_result_keeps_postcode_and_centroid_only() {
    // Real responses carry many more attributes per postcode.
    let body = r#"{
        "status": 200,
        "result": [
            {
                "postcode": "BN1 9RU",
                "quality": 1,
                "eastings": 531019,
                "northings": 106602,
                "country": "England",
                "longitude": -0.136924,
                "latitude": 50.841804,
                "region": "South East",
                "distance": 12.44
            }
        ]
    }"#;

    let envelope: GeocodeResponse = serde_json::from_str(body).unwrap();
    assert_eq!(
        envelope.into_postcodes(),
        vec![coord("BN1 9RU", 50.841804, -0.136924)]
    );
}

// ---------------------------------------------------------------------------
// SparqlResults
// ---------------------------------------------------------------------------

#[test]
fn sparql_results_decode_from_wire_json() {
    let body = r#"{
        "head": {"vars": ["postcode", "amount", "date", "category"]},
        "results": {
            "bindings": [
                {
                    "postcode": {"type": "literal", "value": "BN1 9RU"},
                    "amount": {
                        "type": "literal",
                        "datatype": "http://www.w3.org/2001/XMLSchema#integer",
                        "value": "52000"
                    },
                    "date": {
                        "type": "literal",
                        "datatype": "http://www.w3.org/2001/XMLSchema#date",
                        "value": "2019-03-29"
                    },
                    "category": {"type": "literal", "value": "full market value"}
                }
            ]
        }
    }"#;

    let results: SparqlResults = serde_json::from_str(body).unwrap();
    assert_eq!(results.results.bindings.len(), 1);

    let record = SaleRecord::from_binding(&results.results.bindings[0]).unwrap();
    assert_eq!(record, sale("BN1 9RU", 52000, "2019-03-29"));
}

#[test]
fn sparql_results_without_results_member_are_empty() {
    let results: SparqlResults = serde_json::from_str(r#"{"head": {"vars": []}}"#).unwrap();
    assert!(results.results.bindings.is_empty());
}
