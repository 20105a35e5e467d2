//! SPARQL query construction and the SPARQL 1.1 JSON results format.
//!
//! SPARQL endpoints have no parameter binding, so every user-supplied value
//! is embedded as a quoted literal run through [`escape_literal`]. Builder
//! methods return `&mut Self` for chaining.
//!
//! # Example
//!
//! ```rust
//! use pricepaid_sdk::SparqlBuilder;
//! let query = SparqlBuilder::new()
//!     .prefix("lrcommon", "http://landregistry.data.gov.uk/def/common/")
//!     .select(&["?postcode", "?amount"])
//!     .values("?postcode", &["BN1 9RU", "HF4 8JB"])
//!     .triple("?addr", "lrcommon:postcode", "?postcode")
//!     .build();
//! assert!(query.contains("VALUES ?postcode { \"BN1 9RU\" \"HF4 8JB\" }"));
//! ```

use std::collections::HashMap;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Query construction
// ---------------------------------------------------------------------------

/// Escape a string for use inside a double-quoted SPARQL literal.
pub fn escape_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// Builds SPARQL SELECT queries safely.
///
/// Literal values go through [`escape_literal`], never raw interpolation.
/// Variables, prefixes and triple patterns are trusted input supplied by
/// the crate itself. Methods return `&mut Self` for chaining.
pub struct SparqlBuilder {
    prefixes: Vec<(String, String)>,
    select_vars: Vec<String>,
    values_blocks: Vec<(String, Vec<String>)>,
    triples: Vec<String>,
}

impl SparqlBuilder {
    /// Create an empty builder. With no `select` call the query selects `*`.
    pub fn new() -> Self {
        Self {
            prefixes: Vec::new(),
            select_vars: Vec::new(),
            values_blocks: Vec::new(),
            triples: Vec::new(),
        }
    }

    /// Declare a namespace prefix: `PREFIX {name}: <{iri}>`.
    pub fn prefix(&mut self, name: &str, iri: &str) -> &mut Self {
        self.prefixes.push((name.to_string(), iri.to_string()));
        self
    }

    /// Set the variables to project (replaces the default `*`).
    pub fn select(&mut self, vars: &[&str]) -> &mut Self {
        self.select_vars = vars.iter().map(|v| v.to_string()).collect();
        self
    }

    /// Bind a variable to an inline set of string literals.
    ///
    /// Generates: `VALUES {var} { "a" "b" ... }`. An empty set produces
    /// `VALUES {var} { }`, which matches nothing.
    pub fn values(&mut self, var: &str, literals: &[&str]) -> &mut Self {
        self.values_blocks.push((
            var.to_string(),
            literals.iter().map(|v| v.to_string()).collect(),
        ));
        self
    }

    /// Add a triple pattern to the WHERE clause.
    ///
    /// The three terms are emitted as given, e.g.
    /// `triple("?transx", "lrppi:pricePaid", "?amount")`.
    pub fn triple(&mut self, subject: &str, predicate: &str, object: &str) -> &mut Self {
        self.triples
            .push(format!("{} {} {}", subject, predicate, object));
        self
    }

    /// Build the final query string.
    pub fn build(&self) -> String {
        let mut parts = Vec::new();

        for (name, iri) in &self.prefixes {
            parts.push(format!("PREFIX {}: <{}>", name, iri));
        }

        let vars = if self.select_vars.is_empty() {
            "*".to_string()
        } else {
            self.select_vars.join(" ")
        };
        parts.push(format!("SELECT {}", vars));
        parts.push("WHERE {".to_string());

        for (var, literals) in &self.values_blocks {
            let block = if literals.is_empty() {
                "{ }".to_string()
            } else {
                let quoted: Vec<String> = literals
                    .iter()
                    .map(|v| format!("\"{}\"", escape_literal(v)))
                    .collect();
                format!("{{ {} }}", quoted.join(" "))
            };
            parts.push(format!("  VALUES {} {}", var, block));
        }

        for t in &self.triples {
            parts.push(format!("  {} .", t));
        }

        parts.push("}".to_string());
        parts.join("\n")
    }
}

impl Default for SparqlBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// SPARQL 1.1 JSON results
// ---------------------------------------------------------------------------

/// One RDF term in a result row, e.g. `{"type": "literal", "value": "52000"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SparqlTerm {
    pub value: String,
    #[serde(rename = "type", default)]
    pub term_type: Option<String>,
    #[serde(default)]
    pub datatype: Option<String>,
}

/// One result row: variable name to bound term.
pub type Binding = HashMap<String, SparqlTerm>;

/// The `results` member of a SELECT response.
#[derive(Debug, Default, Deserialize)]
pub struct SparqlBindings {
    #[serde(default)]
    pub bindings: Vec<Binding>,
}

/// A SPARQL 1.1 SELECT response in JSON format.
///
/// The `head` member is not modelled; only the bindings are of interest.
#[derive(Debug, Deserialize)]
pub struct SparqlResults {
    #[serde(default)]
    pub results: SparqlBindings,
}
