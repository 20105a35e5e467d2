use std::time::Duration;

/// HM Land Registry open data SPARQL endpoint.
pub const LAND_REGISTRY_ENDPOINT: &str = "https://landregistry.data.gov.uk/landregistry/query";

/// postcodes.io API base URL.
pub const POSTCODES_IO_BASE: &str = "https://api.postcodes.io";

/// Default search radius around the query point, in metres.
pub const DEFAULT_RADIUS_M: u32 = 2000;

/// Default cap on postcodes returned per reverse geocode.
/// postcodes.io refuses `limit` values above 99.
pub const DEFAULT_POSTCODE_LIMIT: u32 = 99;

/// Default timeout applied to every outbound HTTP request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Namespace prefixes declared by the price paid queries, in the order
/// they are emitted.
pub fn sparql_prefixes() -> Vec<(&'static str, &'static str)> {
    vec![
        ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
        ("owl", "http://www.w3.org/2002/07/owl#"),
        ("xsd", "http://www.w3.org/2001/XMLSchema#"),
        ("sr", "http://data.ordnancesurvey.co.uk/ontology/spatialrelations/"),
        ("ukhpi", "http://landregistry.data.gov.uk/def/ukhpi/"),
        ("lrppi", "http://landregistry.data.gov.uk/def/ppi/"),
        ("skos", "http://www.w3.org/2004/02/skos/core#"),
        ("lrcommon", "http://landregistry.data.gov.uk/def/common/"),
    ]
}
