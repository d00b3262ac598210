//! In-memory catalog of the four searchable collections.
//!
//! The catalog owns the records and hands them to the engine as
//! [`CollectionSource`]s in the fixed scan order
//! Cases -> Articles -> Courses -> Archive.

use crate::core::error::{AcervoError, Result};
use crate::core::records::{
    ArchiveEntry, Article, Case, CollectionSource, Course, Record, ToSearchable,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

/// All searchable collections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub cases: Vec<Case>,

    #[serde(default)]
    pub articles: Vec<Article>,

    #[serde(default)]
    pub courses: Vec<Course>,

    #[serde(default)]
    pub archive: Vec<ArchiveEntry>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from a JSON document
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AcervoError::CatalogNotFound(path.display().to_string()));
        }

        let contents = fs::read_to_string(path)?;
        let catalog = Self::from_json(&contents)?;

        tracing::info!(
            path = %path.display(),
            cases = catalog.cases.len(),
            articles = catalog.articles.len(),
            courses = catalog.courses.len(),
            archive = catalog.archive.len(),
            "Catalog loaded"
        );

        Ok(catalog)
    }

    /// Parse and validate a JSON catalog document
    pub fn from_json(contents: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(contents)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Build a catalog from tagged records, keeping their relative order
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut catalog = Self::new();
        for record in records {
            catalog.insert(record);
        }
        catalog
    }

    /// Append a record to the collection matching its kind
    pub fn insert(&mut self, record: Record) {
        match record {
            Record::Case(r) => self.cases.push(r),
            Record::Article(r) => self.articles.push(r),
            Record::Course(r) => self.courses.push(r),
            Record::Archive(r) => self.archive.push(r),
        }
    }

    /// Collections in scan order
    pub fn sources(&self) -> [&dyn CollectionSource; 4] {
        [&self.cases, &self.articles, &self.courses, &self.archive]
    }

    /// Number of records per kind
    pub fn counts(&self) -> BTreeMap<&'static str, usize> {
        self.sources()
            .iter()
            .map(|source| (source.kind().as_str(), source.len()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.sources().iter().map(|source| source.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ids must be unique within each collection and titles non-blank
    pub fn validate(&self) -> Result<()> {
        check_collection(&self.cases)?;
        check_collection(&self.articles)?;
        check_collection(&self.courses)?;
        check_collection(&self.archive)?;
        Ok(())
    }
}

fn check_collection<T: ToSearchable>(records: &[T]) -> Result<()> {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.id()) {
            return Err(AcervoError::CatalogError(format!(
                "Duplicate {} id: {}",
                T::KIND,
                record.id()
            )));
        }
        if record.title().trim().is_empty() {
            tracing::warn!(kind = %T::KIND, id = record.id(), "Record has an empty title");
        }
    }
    Ok(())
}
