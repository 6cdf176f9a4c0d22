//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args. Commands that search share a [`Context`] built from configuration
//! and global flags.

pub mod browse;
pub mod config;
pub mod schema;
pub mod search;

// Re-export execute functions for convenience
pub use browse::execute as browse;
pub use self::config::execute as config;
pub use schema::execute as schema;
pub use search::execute as search;

use crate::{
    CustfindError,
    cli::SourceArgs,
    config::CustfindConfig,
    schema::{AccessorRegistry, SearchSchema},
    source::{CustomerSource, FileSource, HttpSource},
};
use std::sync::Arc;

type Result<T> = std::result::Result<T, CustfindError>;

/// Everything a search needs: schema, projections and the data source
pub struct Context {
    pub config: CustfindConfig,
    pub schema: Arc<SearchSchema>,
    pub registry: AccessorRegistry,
    pub source: Arc<dyn CustomerSource>,
    pub quiet: bool,
}

impl Context {
    /// Resolve schema and source; flags win over configuration
    ///
    /// # Errors
    /// Returns an error if the schema cannot be loaded or the HTTP client
    /// cannot be built
    pub fn new(config: CustfindConfig, args: &SourceArgs, quiet: bool) -> Result<Self> {
        let registry = AccessorRegistry::default();
        let schema_path = args.schema.as_deref().or(config.schema_path.as_deref());
        let schema = crate::schema::load_or_default(schema_path, &registry)?;

        let source: Arc<dyn CustomerSource> = match &args.data {
            Some(path) => Arc::new(FileSource::new(path)),
            None => {
                let base_url = args.base_url.as_deref().unwrap_or(&config.base_url);
                Arc::new(HttpSource::new(base_url)?)
            }
        };
        tracing::debug!(source = %source.describe(), "data source selected");

        Ok(Self {
            quiet: quiet || config.quiet,
            config,
            schema: Arc::new(schema),
            registry,
            source,
        })
    }

    /// The active schema, without touching the data source
    ///
    /// # Errors
    /// Returns an error if the schema file cannot be loaded
    pub fn load_schema(config: &CustfindConfig, args: &SourceArgs) -> Result<SearchSchema> {
        let schema_path = args.schema.as_deref().or(config.schema_path.as_deref());
        Ok(crate::schema::load_or_default(
            schema_path,
            &AccessorRegistry::default(),
        )?)
    }
}
