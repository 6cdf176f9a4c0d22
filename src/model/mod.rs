//! Customer records and search requests
//!
//! These types mirror the JSON documents served by the customer data source.
//! Field names are camelCase on the wire; contact lists default to empty so a
//! record that omits them still deserializes.

use serde::{Deserialize, Serialize};

/// Marital status of a customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MaritalStatus {
    #[default]
    Single,
    Married,
    Divorced,
    Widowed,
}

impl MaritalStatus {
    /// Display name, identical to the wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Married => "Married",
            Self::Divorced => "Divorced",
            Self::Widowed => "Widowed",
        }
    }
}

/// Kind of postal address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressType {
    Home,
    Business,
    Mailing,
}

/// Kind of phone number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhoneType {
    Mobile,
    Home,
    Work,
}

/// Kind of email address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmailType {
    Personal,
    Work,
}

/// Postal address of a customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AddressType,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl Address {
    /// Single-line rendering, e.g. `12 Elm St, Springfield, IL 62704`
    #[must_use]
    pub fn one_line(&self) -> String {
        format!("{}, {}, {} {}", self.street, self.city, self.state, self.zip_code)
    }
}

/// Phone contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phone {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: PhoneType,
    pub number: String,
    #[serde(default)]
    pub is_primary: bool,
}

/// Email contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Email {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EmailType,
    pub address: String,
    #[serde(default)]
    pub is_primary: bool,
}

/// A customer record as served by the data source
///
/// `date_of_birth` keeps the raw ISO-8601 string; normalization to a calendar
/// date happens in [`crate::matching`] and in the column accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub marital_status: MaritalStatus,
    #[serde(default)]
    pub secure_id: String,
    #[serde(default)]
    pub addresses: Vec<Address>,
    #[serde(default)]
    pub phones: Vec<Phone>,
    #[serde(default)]
    pub emails: Vec<Email>,
}

impl Customer {
    /// First phone flagged as primary
    #[must_use]
    pub fn primary_phone(&self) -> Option<&Phone> {
        self.phones.iter().find(|p| p.is_primary)
    }

    /// First email flagged as primary
    #[must_use]
    pub fn primary_email(&self) -> Option<&Email> {
        self.emails.iter().find(|e| e.is_primary)
    }
}

/// Exact-match search criteria
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
}

impl SearchParams {
    /// Form field keys that feed a search request, in wire order
    pub const KEYS: [&'static str; 3] = ["firstName", "lastName", "dateOfBirth"];

    /// Create a new set of search criteria
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_birth: date_of_birth.into(),
        }
    }

    /// True when at least one criterion carries a non-blank value
    #[must_use]
    pub fn has_criteria(&self) -> bool {
        [&self.first_name, &self.last_name, &self.date_of_birth]
            .iter()
            .any(|v| !v.trim().is_empty())
    }
}
