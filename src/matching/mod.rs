//! Exact-match customer filtering
//!
//! The data source always returns the full customer collection; filtering is
//! done here on the client. A customer matches only when first name, last name
//! and date of birth are all equal after normalization:
//!
//! - names are trimmed and lower-cased
//! - dates are reduced to their calendar date (`yyyy-mm-dd`), dropping any
//!   time-of-day and offset; a search date that does not parse normalizes
//!   to `""`
//!
//! There is no partial, prefix or fuzzy matching. An empty criterion only
//! matches customers whose own field is empty too. A customer whose stored
//! date of birth is present but unparsable never matches.

mod normalize;

pub use normalize::{DATE_FORMAT, normalize_date, normalize_name, parse_calendar_date};

use crate::model::{Customer, SearchParams};

/// Search criteria after normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedParams {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
}

impl From<&SearchParams> for NormalizedParams {
    fn from(params: &SearchParams) -> Self {
        Self {
            first_name: normalize_name(&params.first_name),
            last_name: normalize_name(&params.last_name),
            date_of_birth: normalize_date(&params.date_of_birth),
        }
    }
}

impl NormalizedParams {
    /// Whether a single customer satisfies all three equalities
    #[must_use]
    pub fn matches(&self, customer: &Customer) -> bool {
        normalize_name(&customer.first_name) == self.first_name
            && normalize_name(&customer.last_name) == self.last_name
            && self.date_matches(customer)
    }

    fn date_matches(&self, customer: &Customer) -> bool {
        let raw = customer.date_of_birth.trim();
        if raw.is_empty() {
            return self.date_of_birth.is_empty();
        }
        match parse_calendar_date(raw) {
            Some(date) => date.format(DATE_FORMAT).to_string() == self.date_of_birth,
            None => {
                tracing::warn!(
                    id = %customer.id,
                    date_of_birth = %customer.date_of_birth,
                    "customer has an unparsable date of birth"
                );
                false
            }
        }
    }
}

/// Return the customers that exactly match `params`
///
/// The result is a subsequence of `customers`: relative order is preserved and
/// no record is altered.
#[must_use]
pub fn search(customers: &[Customer], params: &SearchParams) -> Vec<Customer> {
    let normalized = NormalizedParams::from(params);
    tracing::debug!(
        first_name = %normalized.first_name,
        last_name = %normalized.last_name,
        date_of_birth = %normalized.date_of_birth,
        candidates = customers.len(),
        "matching customers"
    );

    customers
        .iter()
        .filter(|c| normalized.matches(c))
        .cloned()
        .collect()
}
