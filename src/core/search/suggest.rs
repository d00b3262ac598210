//! Type-ahead suggestions.
//!
//! A cheap substring lookup, independent of the scorer: record titles
//! are collected first (in scan order), then facet labels from a fixed
//! vocabulary. Collection stops as soon as `limit` distinct strings
//! have been found.

use crate::core::records::CollectionSource;
use std::collections::HashSet;

/// Minimum partial query length, in characters
pub const DEFAULT_MIN_QUERY_CHARS: usize = 2;

/// Known specialty and category labels offered as suggestions
pub fn default_vocabulary() -> Vec<String> {
    [
        "Rinoplastia",
        "Blefaroplastia",
        "Otoplastia",
        "Ritidoplastia",
        "Mamoplastia",
        "Abdominoplastia",
        "Lipoaspiração",
        "Cirurgia Plástica",
        "Cirurgia Reparadora",
        "Dermatologia",
        "Estética Facial",
        "Anatomia",
    ]
    .iter()
    .map(|label| label.to_string())
    .collect()
}

/// Suggestion lookup over titles and a label vocabulary
#[derive(Debug, Clone)]
pub struct Suggester {
    vocabulary: Vec<String>,
    min_query_chars: usize,
}

impl Default for Suggester {
    fn default() -> Self {
        Self::new(default_vocabulary(), DEFAULT_MIN_QUERY_CHARS)
    }
}

impl Suggester {
    pub fn new(vocabulary: Vec<String>, min_query_chars: usize) -> Self {
        Self {
            vocabulary,
            min_query_chars,
        }
    }

    /// Up to `limit` distinct strings containing `partial`, case-insensitively.
    ///
    /// Queries shorter than the minimum length (after trimming) return
    /// nothing.
    pub fn suggest(
        &self,
        sources: &[&dyn CollectionSource],
        partial: &str,
        limit: usize,
    ) -> Vec<String> {
        let needle = partial.trim().to_lowercase();
        if needle.chars().count() < self.min_query_chars || limit == 0 {
            return Vec::new();
        }

        let mut collector = Collector::new(limit);

        'titles: for source in sources {
            for title in source.titles() {
                if title.to_lowercase().contains(&needle) && collector.push(title) {
                    break 'titles;
                }
            }
        }

        for label in &self.vocabulary {
            if collector.is_full() {
                break;
            }
            if label.to_lowercase().contains(&needle) {
                collector.push(label);
            }
        }

        collector.into_inner()
    }
}

/// Ordered, de-duplicated, bounded accumulator
struct Collector<'a> {
    seen: HashSet<&'a str>,
    items: Vec<String>,
    limit: usize,
}

impl<'a> Collector<'a> {
    fn new(limit: usize) -> Self {
        Self {
            seen: HashSet::new(),
            items: Vec::new(),
            limit,
        }
    }

    fn is_full(&self) -> bool {
        self.items.len() >= self.limit
    }

    /// Returns true once the limit has been reached
    fn push(&mut self, value: &'a str) -> bool {
        if !self.is_full() && self.seen.insert(value) {
            self.items.push(value.to_string());
        }
        self.is_full()
    }

    fn into_inner(self) -> Vec<String> {
        self.items
    }
}
