//! Post-scoring result filters.
//!
//! Evaluates [`SearchFilters`] against scored results. Dimensions are
//! AND-ed, values inside a dimension are OR-ed. Matching is exact and
//! case-sensitive. An active `specialty` or `category` dimension
//! rejects results whose metadata lacks that field, so courses and
//! archive entries never pass a specialty filter.

use crate::core::types::{SearchFilters, SearchResult};

/// Check if a result passes every active filter dimension
pub fn matches_filters(result: &SearchResult, filters: &SearchFilters) -> bool {
    dimension_accepts(filters.kinds.as_deref(), Some(result.kind.as_str()))
        && dimension_accepts(
            filters.specialty.as_deref(),
            result.metadata.specialty.as_deref(),
        )
        && dimension_accepts(
            filters.category.as_deref(),
            result.metadata.category.as_deref(),
        )
}

/// Keep only results that pass the filters, preserving order
pub fn apply_filters(results: Vec<SearchResult>, filters: &SearchFilters) -> Vec<SearchResult> {
    if filters.is_empty() {
        return results;
    }
    results
        .into_iter()
        .filter(|result| matches_filters(result, filters))
        .collect()
}

fn dimension_accepts(allowed: Option<&[String]>, value: Option<&str>) -> bool {
    match allowed {
        None => true,
        Some(allowed) => value.is_some_and(|v| allowed.iter().any(|a| a == v)),
    }
}
