//! Term-presence relevance scoring.
//!
//! Every query token is matched independently against the lowercased
//! fields of a [`SearchableRecord`] and the points are summed. Matching
//! is a raw case-insensitive substring test: no stemming, no fuzzy
//! matching and no diacritic folding.

use crate::core::records::{Popularity, SearchableRecord};

/// Token equals the whole title
pub const TITLE_EXACT: f64 = 100.0;
/// Title starts with the token
pub const TITLE_PREFIX: f64 = 80.0;
/// Title contains the token elsewhere
pub const TITLE_CONTAINS: f64 = 60.0;
pub const BODY_CONTAINS: f64 = 30.0;
pub const AUTHOR_CONTAINS: f64 = 25.0;
pub const FACET_CONTAINS: f64 = 40.0;
/// Per matching tag
pub const TAG_CONTAINS: f64 = 20.0;

/// Cap on the views boost
pub const MAX_VIEWS_BOOST: f64 = 10.0;
const VIEWS_DIVISOR: f64 = 100.0;
const RATING_WEIGHT: f64 = 2.0;

/// Split on whitespace and lowercase, dropping empty tokens
pub fn tokenize(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

/// Score a record against a raw query string
pub fn score(record: &SearchableRecord, query: &str) -> f64 {
    score_tokens(record, &tokenize(query))
}

/// Score a record against pre-tokenized, lowercased query tokens.
///
/// Returns exactly 0.0 when no token hits any field and the record has
/// no popularity signals.
pub fn score_tokens(record: &SearchableRecord, tokens: &[String]) -> f64 {
    let title = record.title.to_lowercase();
    let body = record.body.to_lowercase();
    let author = record.author.to_lowercase();
    let facet = record.facet.to_lowercase();
    let tags: Vec<String> = record.tags.iter().map(|t| t.to_lowercase()).collect();

    let mut total = 0.0;

    for token in tokens {
        total += title_points(&title, token);

        if body.contains(token.as_str()) {
            total += BODY_CONTAINS;
        }
        if author.contains(token.as_str()) {
            total += AUTHOR_CONTAINS;
        }
        if facet.contains(token.as_str()) {
            total += FACET_CONTAINS;
        }

        let tag_hits = tags.iter().filter(|tag| tag.contains(token.as_str())).count();
        total += TAG_CONTAINS * tag_hits as f64;
    }

    total + popularity_boost(&record.popularity)
}

/// Only the highest tier fires for a given token
fn title_points(title: &str, token: &str) -> f64 {
    if title == token {
        TITLE_EXACT
    } else if title.starts_with(token) {
        TITLE_PREFIX
    } else if title.contains(token) {
        TITLE_CONTAINS
    } else {
        0.0
    }
}

/// Applied once per record, independent of the query
pub fn popularity_boost(popularity: &Popularity) -> f64 {
    let mut boost = 0.0;
    if let Some(views) = popularity.views {
        boost += (views as f64 / VIEWS_DIVISOR).min(MAX_VIEWS_BOOST);
    }
    if let Some(rating) = popularity.rating {
        boost += rating * RATING_WEIGHT;
    }
    boost
}
