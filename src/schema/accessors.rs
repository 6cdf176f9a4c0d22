//! Column value projections
//!
//! Result columns are plain data; the function that turns a customer into a
//! cell lives here, keyed by column key. Every projection is total: it never
//! fails on a well-formed customer, including one without contacts.

use std::collections::HashMap;

use super::types::SearchSchema;
use crate::matching::normalize_date;
use crate::model::Customer;

/// Cell value shown when a customer has no primary contact of a kind
pub const NOT_AVAILABLE: &str = "N/A";

/// Pure projection from a customer to a display string
pub type Accessor = fn(&Customer) -> String;

fn full_name(c: &Customer) -> String {
    format!("{} {}", c.first_name, c.last_name)
}

fn date_of_birth(c: &Customer) -> String {
    normalize_date(&c.date_of_birth)
}

fn primary_phone(c: &Customer) -> String {
    c.primary_phone()
        .map_or_else(|| NOT_AVAILABLE.to_string(), |p| p.number.clone())
}

fn primary_email(c: &Customer) -> String {
    c.primary_email()
        .map_or_else(|| NOT_AVAILABLE.to_string(), |e| e.address.clone())
}

fn marital_status(c: &Customer) -> String {
    c.marital_status.as_str().to_string()
}

fn first_address(c: &Customer) -> String {
    c.addresses
        .first()
        .map_or_else(|| NOT_AVAILABLE.to_string(), crate::model::Address::one_line)
}

/// Registry mapping column keys to projections
#[derive(Debug, Clone)]
pub struct AccessorRegistry {
    accessors: HashMap<String, Accessor>,
}

impl Default for AccessorRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("name", full_name);
        registry.register("dateOfBirth", date_of_birth);
        registry.register("primaryPhone", primary_phone);
        registry.register("primaryEmail", primary_email);
        registry.register("firstName", |c| c.first_name.clone());
        registry.register("lastName", |c| c.last_name.clone());
        registry.register("maritalStatus", marital_status);
        registry.register("address", first_address);
        registry
    }
}

impl AccessorRegistry {
    /// Registry with no projections
    #[must_use]
    pub fn empty() -> Self {
        Self {
            accessors: HashMap::new(),
        }
    }

    /// Add or replace the projection for `key`
    pub fn register(&mut self, key: impl Into<String>, accessor: Accessor) {
        self.accessors.insert(key.into(), accessor);
    }

    /// Projection registered for `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Accessor> {
        self.accessors.get(key).copied()
    }

    /// Cell value for `key`; unknown columns yield an empty cell
    #[must_use]
    pub fn project(&self, key: &str, customer: &Customer) -> String {
        self.get(key).map(|f| f(customer)).unwrap_or_default()
    }

    /// Result columns of `schema` that have no projection
    #[must_use]
    pub fn unmapped_columns<'a>(&self, schema: &'a SearchSchema) -> Vec<&'a str> {
        schema
            .results
            .iter()
            .filter(|c| !self.accessors.contains_key(&c.key))
            .map(|c| c.key.as_str())
            .collect()
    }

    /// Registered keys, sorted
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<_> = self.accessors.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}
