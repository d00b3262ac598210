//! Domain records and their searchable projection.
//!
//! Each collection kind has its own record type with kind-specific
//! fields. Adapters project them onto the uniform [`SearchableRecord`]
//! that the scorer works against; the raw records are never mutated.
//!
//! # Architecture
//!
//! - **ToSearchable**: per-kind adapter trait (implemented by each record)
//! - **CollectionSource**: a scannable collection of one kind
//! - **Record**: tagged union over the four record kinds

mod archive;
mod article;
mod case;
mod course;

pub use archive::ArchiveEntry;
pub use article::Article;
pub use case::Case;
pub use course::Course;

use crate::core::types::{FacetField, RecordKind, ResultMetadata};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Popularity signals that bias ranking
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Popularity {
    pub views: Option<u64>,
    pub rating: Option<f64>,
}

/// Uniform view of a domain record, derived per query
#[derive(Debug, Clone, PartialEq)]
pub struct SearchableRecord {
    pub id: String,
    pub kind: RecordKind,
    pub title: String,

    /// Best-effort description text, may be empty
    pub body: String,

    /// Submitter, instructor or source; may be empty
    pub author: String,

    /// Specialty or category, depending on kind; may be empty
    pub facet: String,

    pub tags: Vec<String>,
    pub popularity: Popularity,

    pub image_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl SearchableRecord {
    /// Record with only a title; every other field empty
    pub fn new(kind: RecordKind, id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            body: String::new(),
            author: String::new(),
            facet: String::new(),
            tags: Vec::new(),
            popularity: Popularity::default(),
            image_url: None,
            created_at: None,
        }
    }

    /// Result metadata for this record.
    ///
    /// The facet lands in `specialty` or `category` according to the
    /// record kind; blank fields are reported as absent.
    pub fn metadata(&self) -> ResultMetadata {
        let facet = non_empty(&self.facet);
        let (specialty, category) = match self.kind.facet_field() {
            FacetField::Specialty => (facet, None),
            FacetField::Category => (None, facet),
        };

        ResultMetadata {
            author: non_empty(&self.author),
            specialty,
            category,
            tags: (!self.tags.is_empty()).then(|| self.tags.clone()),
            created_at: self.created_at,
            views: self.popularity.views,
            rating: self.popularity.rating,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.trim().is_empty()).then(|| value.to_string())
}

/// Per-kind adapter onto [`SearchableRecord`].
///
/// Adapters never fail: missing optional fields degrade to empty
/// strings, empty collections or `None`.
pub trait ToSearchable {
    /// Collection this record type belongs to
    const KIND: RecordKind;

    fn id(&self) -> &str;

    fn title(&self) -> &str;

    fn to_searchable(&self) -> SearchableRecord;
}

/// A scannable in-memory collection of a single kind.
///
/// The engine receives collections through this trait instead of
/// reaching into global state, so each kind can be tested alone.
pub trait CollectionSource: Sync {
    fn kind(&self) -> RecordKind;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Project every record, in natural enumeration order
    fn searchable_records(&self) -> Vec<SearchableRecord>;

    /// Record titles, in natural enumeration order
    fn titles(&self) -> Vec<&str>;
}

impl<T: ToSearchable + Sync> CollectionSource for Vec<T> {
    fn kind(&self) -> RecordKind {
        T::KIND
    }

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn searchable_records(&self) -> Vec<SearchableRecord> {
        self.iter().map(ToSearchable::to_searchable).collect()
    }

    fn titles(&self) -> Vec<&str> {
        self.iter().map(ToSearchable::title).collect()
    }
}

/// Any record, tagged by its collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Record {
    Case(Case),
    Article(Article),
    Course(Course),
    Archive(ArchiveEntry),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Case(_) => RecordKind::Case,
            Record::Article(_) => RecordKind::Article,
            Record::Course(_) => RecordKind::Course,
            Record::Archive(_) => RecordKind::Archive,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Record::Case(r) => r.id(),
            Record::Article(r) => r.id(),
            Record::Course(r) => r.id(),
            Record::Archive(r) => r.id(),
        }
    }

    pub fn to_searchable(&self) -> SearchableRecord {
        match self {
            Record::Case(r) => r.to_searchable(),
            Record::Article(r) => r.to_searchable(),
            Record::Course(r) => r.to_searchable(),
            Record::Archive(r) => r.to_searchable(),
        }
    }
}

/// First non-blank candidate, or an empty string
pub(crate) fn first_present(candidates: &[Option<&String>]) -> String {
    candidates
        .iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
        .map(|s| s.to_string())
        .unwrap_or_default()
}
