//! Course records.

use super::{Popularity, SearchableRecord, ToSearchable};
use crate::core::types::RecordKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A training course
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub instructor: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub thumbnail: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub views: Option<u64>,

    #[serde(default)]
    pub rating: Option<f64>,
}

impl Course {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }
}

impl ToSearchable for Course {
    const KIND: RecordKind = RecordKind::Course;

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
            body: self.description.clone().unwrap_or_default(),
            author: self.instructor.clone().unwrap_or_default(),
            facet: self.category.clone().unwrap_or_default(),
            tags: Vec::new(),
            popularity: Popularity {
                views: self.views,
                rating: self.rating,
            },
            image_url: self.thumbnail.clone(),
            created_at: self.created_at,
        }
    }
}
