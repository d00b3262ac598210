//! Unified service container for Acervo
//!
//! Provides shared access to all core services.

use crate::core::catalog::Catalog;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::search::{SearchEngine, SearchService};
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// In-memory collections
    pub catalog: Arc<Catalog>,

    /// Search and suggest entry point
    pub search: Arc<SearchService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration and an already loaded catalog
    pub fn new(config: Config, catalog: Catalog) -> Self {
        let catalog = Arc::new(catalog);

        let engine = SearchEngine::new(
            config.routes.clone(),
            config.search.description_max_chars,
            config.search.parallel_scan,
        );

        let search = Arc::new(SearchService::new(
            Arc::clone(&catalog),
            engine,
            config.search.clone(),
            config.suggest.clone(),
        ));

        Self {
            catalog,
            search,
            config: Arc::new(config),
        }
    }

    /// Load the catalog named by the configuration and build services
    pub fn load(config: Config) -> Result<Self> {
        let catalog = Catalog::from_file(&config.catalog.path)?;
        Ok(Self::new(config, catalog))
    }
}
