//! Core data types for the Acervo search engine.
//!
//! This module defines the structures exchanged with callers:
//! record kinds, search results, filters, requests and responses.
//! JSON field names follow the camelCase contract of the UI layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Origin collection of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Case,
    Article,
    Course,
    Archive,
}

/// Which metadata slot a record's facet is reported under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetField {
    Specialty,
    Category,
}

impl RecordKind {
    /// All kinds in scan order
    pub const ALL: [RecordKind; 4] = [
        RecordKind::Case,
        RecordKind::Article,
        RecordKind::Course,
        RecordKind::Archive,
    ];

    /// Wire name used by the `type` filter
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Case => "case",
            RecordKind::Article => "article",
            RecordKind::Course => "course",
            RecordKind::Archive => "archive",
        }
    }

    /// Cases and articles are classified by specialty, the rest by category
    pub fn facet_field(&self) -> FacetField {
        match self {
            RecordKind::Case | RecordKind::Article => FacetField::Specialty,
            RecordKind::Course | RecordKind::Archive => FacetField::Category,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific metadata attached to a search result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

/// A single ranked hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Identifier, unique only within its collection
    pub id: String,

    pub title: String,

    /// First paragraph of the record body, possibly truncated
    pub description: String,

    #[serde(rename = "type")]
    pub kind: RecordKind,

    /// Route built from the kind's URL template
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    pub metadata: ResultMetadata,

    /// Always strictly positive
    pub relevance_score: f64,
}

/// Optional post-scoring filters.
///
/// Dimensions are AND-ed; values within a dimension are OR-ed.
/// `None` leaves a dimension inactive; a present dimension rejects
/// results lacking the field, so an empty list rejects everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kinds: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<String>>,
}

impl SearchFilters {
    /// True when no dimension is present
    pub fn is_empty(&self) -> bool {
        self.kinds.is_none() && self.specialty.is_none() && self.category.is_none()
    }
}

/// One page of ranked results plus the pre-pagination count
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPage {
    pub results: Vec<SearchResult>,

    /// Post-filter, pre-pagination result count
    pub total: usize,
}

/// Request to search the catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text query
    pub query: String,

    #[serde(default)]
    pub filters: SearchFilters,

    /// Page size (optional, falls back to the configured default)
    #[serde(default)]
    pub limit: Option<usize>,

    #[serde(default)]
    pub offset: usize,
}

/// Response from a search operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Original query string
    pub query: String,

    pub results: Vec<SearchResult>,

    /// Matches across all pages
    pub total: usize,

    pub limit: usize,
    pub offset: usize,
    pub has_more: bool,

    /// Query duration in milliseconds
    pub duration_ms: u64,
}

/// Request for type-ahead suggestions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuggestRequest {
    /// Partial query typed so far
    pub query: String,

    #[serde(default)]
    pub limit: Option<usize>,
}

/// Response from a suggest operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestResponse {
    pub query: String,
    pub suggestions: Vec<String>,
}
