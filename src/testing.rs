//! Testing utilities for custfind
//!
//! Customer fixtures, in-memory data sources and a recording notifier.
//!
//! Only available when compiled with `cfg(test)`.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};

use crate::model::{Customer, Email, EmailType, MaritalStatus, Phone, PhoneType};
use crate::source::{CustomerSource, Result, SourceError};
use crate::ui::output::{Notifier, Toast};

/// Customer with the given identity fields and no contacts
#[must_use]
pub fn customer(id: &str, first: &str, last: &str, dob: &str) -> Customer {
    Customer {
        id: id.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        date_of_birth: dob.to_string(),
        marital_status: MaritalStatus::Single,
        secure_id: format!("secure-{id}"),
        addresses: Vec::new(),
        phones: Vec::new(),
        emails: Vec::new(),
    }
}

/// Jane Doe, born 1990-05-01, with one primary phone and email
#[must_use]
pub fn jane_doe() -> Customer {
    let mut jane = customer("1", "Jane", "Doe", "1990-05-01T00:00:00Z");
    jane.phones = vec![
        Phone {
            id: "p0".to_string(),
            kind: PhoneType::Work,
            number: "555-0000".to_string(),
            is_primary: false,
        },
        Phone {
            id: "p1".to_string(),
            kind: PhoneType::Mobile,
            number: "555-1111".to_string(),
            is_primary: true,
        },
    ];
    jane.emails = vec![Email {
        id: "e1".to_string(),
        kind: EmailType::Personal,
        address: "jane@x.com".to_string(),
        is_primary: true,
    }];
    jane
}

/// Source serving a fixed list
pub struct StaticSource(pub Vec<Customer>);

#[async_trait]
impl CustomerSource for StaticSource {
    async fn fetch_all(&self) -> Result<Vec<Customer>> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

/// Source that always fails with HTTP 500
pub struct FailingSource;

#[async_trait]
impl CustomerSource for FailingSource {
    async fn fetch_all(&self) -> Result<Vec<Customer>> {
        Err(SourceError::Status {
            url: "http://localhost:3001/customers".to_string(),
            status: 500,
        })
    }

    fn describe(&self) -> String {
        "failing".to_string()
    }
}

/// Notifier that records every toast
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything raised so far
    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Titles raised so far
    #[must_use]
    pub fn titles(&self) -> Vec<String> {
        self.toasts().into_iter().map(|t| t.title).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(toast);
    }
}
