//! Clinical case records.

use super::{first_present, Popularity, SearchableRecord, ToSearchable};
use crate::core::types::RecordKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A submitted clinical case
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub id: String,
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Free-text clinical analysis, used when no description exists
    #[serde(default)]
    pub analysis: Option<String>,

    #[serde(default)]
    pub specialty: Option<String>,

    #[serde(default)]
    pub submitted_by: Option<String>,

    /// Image URLs; the first one is used as the result thumbnail
    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub views: Option<u64>,

    #[serde(default)]
    pub rating: Option<f64>,
}

impl Case {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }
}

impl ToSearchable for Case {
    const KIND: RecordKind = RecordKind::Case;

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
            body: first_present(&[self.description.as_ref(), self.analysis.as_ref()]),
            author: self.submitted_by.clone().unwrap_or_default(),
            facet: self.specialty.clone().unwrap_or_default(),
            tags: Vec::new(),
            popularity: Popularity {
                views: self.views,
                rating: self.rating,
            },
            image_url: self.images.first().cloned(),
            created_at: self.created_at,
        }
    }
}
