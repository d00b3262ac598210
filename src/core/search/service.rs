//! Search service: the validated entry point used by adapters.
//!
//! Wraps the stateless engine and suggester with request defaults,
//! limit clamping, query validation, timing and logging.

use crate::core::catalog::Catalog;
use crate::core::config::{SearchConfig, SuggestConfig};
use crate::core::error::{AcervoError, Result};
use crate::core::search::engine::SearchEngine;
use crate::core::search::suggest::Suggester;
use crate::core::types::{SearchRequest, SearchResponse, SuggestRequest, SuggestResponse};
use std::sync::Arc;
use std::time::Instant;

/// Search service over a shared catalog
pub struct SearchService {
    catalog: Arc<Catalog>,
    engine: SearchEngine,
    suggester: Suggester,
    search_config: SearchConfig,
    suggest_config: SuggestConfig,
}

impl SearchService {
    /// Create a new search service
    pub fn new(
        catalog: Arc<Catalog>,
        engine: SearchEngine,
        search_config: SearchConfig,
        suggest_config: SuggestConfig,
    ) -> Self {
        let suggester = Suggester::new(
            suggest_config.vocabulary.clone(),
            suggest_config.min_query_chars,
        );
        Self {
            catalog,
            engine,
            suggester,
            search_config,
            suggest_config,
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Execute a search request
    pub fn search(&self, request: SearchRequest) -> Result<SearchResponse> {
        let start = Instant::now();

        self.validate_query(&request.query)?;

        let limit = match request.limit {
            Some(requested) if requested > self.search_config.max_limit => {
                tracing::warn!(
                    requested,
                    max = self.search_config.max_limit,
                    "Search limit clamped"
                );
                self.search_config.max_limit
            }
            Some(requested) => requested,
            None => self.search_config.default_limit,
        };
        let offset = request.offset;

        let page = self.engine.search(
            &self.catalog.sources(),
            &request.query,
            &request.filters,
            limit,
            offset,
        );

        let duration_ms = start.elapsed().as_millis() as u64;
        let has_more = offset.saturating_add(page.results.len()) < page.total;

        tracing::debug!(
            query = %request.query,
            total = page.total,
            returned = page.results.len(),
            limit,
            offset,
            duration_ms,
            "Search completed"
        );

        Ok(SearchResponse {
            query: request.query,
            results: page.results,
            total: page.total,
            limit,
            offset,
            has_more,
            duration_ms,
        })
    }

    /// Execute a suggest request
    pub fn suggest(&self, request: SuggestRequest) -> Result<SuggestResponse> {
        self.validate_query(&request.query)?;

        let limit = request
            .limit
            .unwrap_or(self.suggest_config.default_limit)
            .min(self.suggest_config.max_limit);

        let suggestions = self
            .suggester
            .suggest(&self.catalog.sources(), &request.query, limit);

        tracing::debug!(
            query = %request.query,
            count = suggestions.len(),
            limit,
            "Suggest completed"
        );

        Ok(SuggestResponse {
            query: request.query,
            suggestions,
        })
    }

    fn validate_query(&self, query: &str) -> Result<()> {
        let length = query.chars().count();
        if length > self.search_config.max_query_length {
            return Err(AcervoError::InvalidQuery(format!(
                "Query is {length} characters long (max {})",
                self.search_config.max_query_length
            )));
        }
        Ok(())
    }
}
