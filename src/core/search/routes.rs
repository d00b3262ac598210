//! Per-kind URL templates for result links.
//!
//! Templates are a presentation contract with the UI layer. Each one
//! must contain an `{id}` placeholder that is replaced by the record id.

use crate::core::error::{AcervoError, Result};
use crate::core::types::RecordKind;
use serde::{Deserialize, Serialize};

/// Placeholder substituted with the record id
pub const ID_PLACEHOLDER: &str = "{id}";

/// URL template for each record kind
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RouteTemplates {
    #[serde(default = "default_case_route")]
    pub case: String,

    #[serde(default = "default_article_route")]
    pub article: String,

    #[serde(default = "default_course_route")]
    pub course: String,

    #[serde(default = "default_archive_route")]
    pub archive: String,
}

fn default_case_route() -> String {
    "/cases/{id}".to_string()
}

fn default_article_route() -> String {
    "/articles/{id}".to_string()
}

fn default_course_route() -> String {
    "/courses/{id}".to_string()
}

fn default_archive_route() -> String {
    "/archive/{id}".to_string()
}

impl Default for RouteTemplates {
    fn default() -> Self {
        Self {
            case: default_case_route(),
            article: default_article_route(),
            course: default_course_route(),
            archive: default_archive_route(),
        }
    }
}

impl RouteTemplates {
    /// Template registered for a kind
    pub fn template(&self, kind: RecordKind) -> &str {
        match kind {
            RecordKind::Case => &self.case,
            RecordKind::Article => &self.article,
            RecordKind::Course => &self.course,
            RecordKind::Archive => &self.archive,
        }
    }

    /// Build the URL for a record
    pub fn url_for(&self, kind: RecordKind, id: &str) -> String {
        self.template(kind).replace(ID_PLACEHOLDER, id)
    }

    /// Every template must carry the id placeholder
    pub fn validate(&self) -> Result<()> {
        for kind in RecordKind::ALL {
            if !self.template(kind).contains(ID_PLACEHOLDER) {
                return Err(AcervoError::ConfigError(format!(
                    "Route template for '{kind}' must contain {ID_PLACEHOLDER}"
                )));
            }
        }
        Ok(())
    }
}
