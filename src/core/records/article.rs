//! Scientific article records.

use super::{first_present, Popularity, SearchableRecord, ToSearchable};
use crate::core::types::RecordKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published article
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,

    #[serde(default, alias = "abstract")]
    pub summary: Option<String>,

    /// Full text, used when the article has no summary
    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default)]
    pub specialty: Option<String>,

    #[serde(default)]
    pub cover_image: Option<String>,

    #[serde(default, alias = "createdAt")]
    pub published_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub views: Option<u64>,

    #[serde(default)]
    pub rating: Option<f64>,
}

impl Article {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }
}

impl ToSearchable for Article {
    const KIND: RecordKind = RecordKind::Article;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn to_searchable(&self) -> SearchableRecord {
        SearchableRecord {
            id: self.id.clone(),
            kind: Self::KIND,
            title: self.title.clone(),
            body: first_present(&[self.summary.as_ref(), self.content.as_ref()]),
            author: self.author.clone().unwrap_or_default(),
            facet: self.specialty.clone().unwrap_or_default(),
            tags: Vec::new(),
            popularity: Popularity {
                views: self.views,
                rating: self.rating,
            },
            image_url: self.cover_image.clone(),
            created_at: self.published_at,
        }
    }
}
