//! Federated search over every collection.
//!
//! The engine adapts and scores each record of each collection,
//! drops zero-score records, applies filters, then ranks and slices
//! the requested page. Collections are scanned in the order they are
//! given; that order only matters for breaking score ties.

use crate::core::records::{CollectionSource, SearchableRecord};
use crate::core::search::filter::apply_filters;
use crate::core::search::routes::RouteTemplates;
use crate::core::search::scorer::{score_tokens, tokenize};
use crate::core::types::{SearchFilters, SearchPage, SearchResult};
use rayon::prelude::*;

/// Default cap on result description length, in characters
pub const DEFAULT_DESCRIPTION_MAX_CHARS: usize = 300;

const ELLIPSIS: char = '…';

/// Stateless ranking engine
#[derive(Debug, Clone)]
pub struct SearchEngine {
    routes: RouteTemplates,
    description_max_chars: usize,
    parallel_scan: bool,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(RouteTemplates::default(), DEFAULT_DESCRIPTION_MAX_CHARS, false)
    }
}

impl SearchEngine {
    /// Create a new search engine
    pub fn new(routes: RouteTemplates, description_max_chars: usize, parallel_scan: bool) -> Self {
        Self {
            routes,
            description_max_chars,
            parallel_scan,
        }
    }

    /// Full query pipeline: score, filter, rank, paginate
    pub fn search(
        &self,
        sources: &[&dyn CollectionSource],
        query: &str,
        filters: &SearchFilters,
        limit: usize,
        offset: usize,
    ) -> SearchPage {
        let candidates = self.collect(sources, query);
        let filtered = apply_filters(candidates, filters);
        rank_and_paginate(filtered, limit, offset)
    }

    /// Every record with a positive score, in scan order.
    ///
    /// An empty or whitespace-only query yields nothing without scoring.
    pub fn collect(&self, sources: &[&dyn CollectionSource], query: &str) -> Vec<SearchResult> {
        let tokens = tokenize(query);
        if tokens.is_empty() {
            return Vec::new();
        }

        // Per-source vectors keep source order under both strategies
        let per_source: Vec<Vec<SearchResult>> = if self.parallel_scan {
            sources
                .par_iter()
                .map(|source| self.scan(*source, &tokens))
                .collect()
        } else {
            sources
                .iter()
                .map(|source| self.scan(*source, &tokens))
                .collect()
        };

        let results: Vec<SearchResult> = per_source.into_iter().flatten().collect();
        tracing::trace!(
            sources = sources.len(),
            matches = results.len(),
            "Scanned collections"
        );
        results
    }

    fn scan(&self, source: &dyn CollectionSource, tokens: &[String]) -> Vec<SearchResult> {
        source
            .searchable_records()
            .into_iter()
            .filter_map(|record| {
                let score = score_tokens(&record, tokens);
                (score > 0.0).then(|| self.build_result(record, score))
            })
            .collect()
    }

    fn build_result(&self, record: SearchableRecord, score: f64) -> SearchResult {
        let metadata = record.metadata();
        SearchResult {
            url: self.routes.url_for(record.kind, &record.id),
            description: summarize(&record.body, self.description_max_chars),
            id: record.id,
            title: record.title,
            kind: record.kind,
            image_url: record.image_url,
            metadata,
            relevance_score: score,
        }
    }
}

/// Stable sort by descending score, then slice one page.
///
/// `total` is the length before slicing. Ties keep their input order.
pub fn rank_and_paginate(mut results: Vec<SearchResult>, limit: usize, offset: usize) -> SearchPage {
    results.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));

    let total = results.len();
    let results = results.into_iter().skip(offset).take(limit).collect();

    SearchPage { results, total }
}

/// First paragraph of `body`, cut to at most `max_chars` characters.
///
/// Truncation happens on character boundaries and appends an ellipsis.
pub fn summarize(body: &str, max_chars: usize) -> String {
    let paragraph = body
        .trim()
        .lines()
        .take_while(|line| !line.trim().is_empty())
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ");

    if paragraph.chars().count() <= max_chars {
        return paragraph;
    }

    let mut cut: String = paragraph.chars().take(max_chars).collect();
    cut.truncate(cut.trim_end().len());
    cut.push(ELLIPSIS);
    cut
}
