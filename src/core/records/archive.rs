//! Archive entries (reference material, documents, media).

use super::{first_present, Popularity, SearchableRecord, ToSearchable};
use crate::core::types::RecordKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An entry in the reference archive
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveEntry {
    pub id: String,
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,

    /// Where the material came from
    #[serde(default)]
    pub source: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub file_url: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub views: Option<u64>,

    #[serde(default)]
    pub rating: Option<f64>,
}

impl ArchiveEntry {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }
}

impl ToSearchable for ArchiveEntry {
    const KIND: RecordKind = RecordKind::Archive;

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
            body: first_present(&[self.description.as_ref(), self.notes.as_ref()]),
            author: self.source.clone().unwrap_or_default(),
            facet: self.category.clone().unwrap_or_default(),
            tags: self.tags.clone(),
            popularity: Popularity {
                views: self.views,
                rating: self.rating,
            },
            image_url: None,
            created_at: self.created_at,
        }
    }
}
