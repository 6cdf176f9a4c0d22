//! Customer data sources
//!
//! The portal never filters on the server: a source returns the whole
//! collection and [`crate::matching`] narrows it down. Two implementations
//! exist:
//!
//! - [`HttpSource`]: `GET {base_url}/customers`, no query parameters,
//!   non-2xx is a failure
//! - [`FileSource`]: a local JSON file holding the same array, or a
//!   json-server style document with a top-level `customers` key
//!
//! Sources are constructed once at startup and handed to the
//! [`crate::page::PageController`] as `Arc<dyn CustomerSource>`.

mod error;

pub use error::{Result, SourceError};

use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::model::Customer;

/// Default base location of the customer service
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Path of the list endpoint below the base location
pub const CUSTOMERS_ENDPOINT: &str = "customers";

/// Provider of the full customer collection
#[async_trait]
pub trait CustomerSource: Send + Sync {
    /// Fetch every customer record
    ///
    /// # Errors
    /// Returns `SourceError` if the collection cannot be obtained or decoded
    async fn fetch_all(&self) -> Result<Vec<Customer>>;

    /// Human-readable location, used in logs and status lines
    fn describe(&self) -> String;
}

/// Accepted payload layouts
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    List(Vec<Customer>),
    Document { customers: Vec<Customer> },
}

impl Payload {
    fn into_customers(self) -> Vec<Customer> {
        match self {
            Self::List(customers) | Self::Document { customers } => customers,
        }
    }
}

fn decode(body: &str) -> Result<Vec<Customer>> {
    let payload: Payload = serde_json::from_str(body)?;
    Ok(payload.into_customers())
}

/// Customer service reached over HTTP
///
/// No timeout or retry is configured; the transport defaults apply.
pub struct HttpSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSource {
    /// Create a source for the service at `base_url`
    ///
    /// # Errors
    /// Returns `SourceError::Request` if the HTTP client cannot be built
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let client = reqwest::Client::builder()
            .user_agent(concat!("custfind/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| SourceError::Request {
                url: base_url.clone(),
                source,
            })?;
        Ok(Self { base_url, client })
    }

    /// Full URL of the list endpoint
    #[must_use]
    pub fn list_url(&self) -> String {
        format!(
            "{}/{CUSTOMERS_ENDPOINT}",
            self.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl CustomerSource for HttpSource {
    async fn fetch_all(&self) -> Result<Vec<Customer>> {
        let url = self.list_url();
        tracing::debug!(%url, "fetching customers");

        let request_error = |source| SourceError::Request {
            url: url.clone(),
            source,
        };
        let response = self.client.get(&url).send().await.map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "customer service returned an error status");
            return Err(SourceError::Status {
                url: url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(request_error)?;
        let customers = decode(&body)?;
        tracing::info!(%url, count = customers.len(), "fetched customers");
        Ok(customers)
    }

    fn describe(&self) -> String {
        self.list_url()
    }
}

/// Customer collection stored in a local JSON file
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CustomerSource for FileSource {
    async fn fetch_all(&self) -> Result<Vec<Customer>> {
        tracing::debug!(path = %self.path.display(), "reading customers");
        let body = tokio::fs::read_to_string(&self.path).await?;
        let customers = decode(&body)?;
        tracing::info!(path = %self.path.display(), count = customers.len(), "read customers");
        Ok(customers)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
