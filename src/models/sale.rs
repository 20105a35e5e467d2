use serde::{Deserialize, Serialize};

use crate::error::{PricePaidError, Result};
use crate::sparql::Binding;

// ---------------------------------------------------------------------------
// SaleRecord
// ---------------------------------------------------------------------------

/// One property transaction from the price paid dataset.
///
/// Produced by decoding a SPARQL result binding. `amount` is a whole number
/// of pounds and `date` always starts with a four-digit year; both are
/// enforced at decode time so the aggregation transforms never re-validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub postcode: String,
    pub amount: u64,
    pub date: String,
}

impl SaleRecord {
    /// Decode one SPARQL result binding into a `SaleRecord`.
    ///
    /// Fails with [`PricePaidError::MalformedRecord`] when a variable is
    /// unbound, the amount is not a non-negative integer, or the date does
    /// not start with a four-digit year.
    pub fn from_binding(binding: &Binding) -> Result<Self> {
        let postcode = required(binding, "postcode")?;
        let amount_raw = required(binding, "amount")?;
        let date = required(binding, "date")?;

        let amount: u64 = amount_raw.parse().map_err(|_| {
            PricePaidError::malformed(format!(
                "amount {:?} for postcode {:?} is not a non-negative integer",
                amount_raw, postcode
            ))
        })?;

        if !has_year_prefix(date) {
            return Err(PricePaidError::malformed(format!(
                "date {:?} for postcode {:?} does not start with a four-digit year",
                date, postcode
            )));
        }

        Ok(Self {
            postcode: postcode.to_string(),
            amount,
            date: date.to_string(),
        })
    }

    /// The four-digit year prefix of the transaction date.
    pub fn year(&self) -> &str {
        // from_binding guarantees an all-ASCII four-digit prefix.
        self.date.get(..4).unwrap_or(&self.date)
    }
}

fn required<'a>(binding: &'a Binding, var: &str) -> Result<&'a str> {
    binding
        .get(var)
        .map(|term| term.value.as_str())
        .ok_or_else(|| PricePaidError::malformed(format!("binding has no {:?} variable", var)))
}

fn has_year_prefix(date: &str) -> bool {
    date.len() >= 4 && date.as_bytes()[..4].iter().all(|b| b.is_ascii_digit())
}
