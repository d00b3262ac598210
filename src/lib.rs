//! Acervo - federated search over a medical education catalog
//!
//! Answers free-text queries over clinical cases, articles, courses
//! and archive entries with a single relevance-ordered result list,
//! and serves type-ahead suggestions. Collections are held in memory
//! and scanned on every query.
//!
//! # Architecture
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, xdg
//!   - records (per-kind adapters)
//!   - catalog (in-memory collections)
//!   - search (scoring, filters, ranking, suggestions)
//!   - services (unified service container)
//!
//! - **cli**: Command-line adapter (depends on core)
//!
//! # Example
//!
//! ```
//! use acervo::core::records::Case;
//! use acervo::core::search::SearchEngine;
//! use acervo::{Catalog, SearchFilters};
//!
//! let mut catalog = Catalog::new();
//! catalog.cases.push(Case::new("1", "Rinoplastia"));
//!
//! let page = SearchEngine::default().search(
//!     &catalog.sources(),
//!     "rinoplastia",
//!     &SearchFilters::default(),
//!     20,
//!     0,
//! );
//! assert_eq!(page.total, 1);
//! assert_eq!(page.results[0].url, "/cases/1");
//! ```

// Core domain logic (protocol-agnostic)
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::catalog::Catalog;
pub use core::config::Config;
pub use core::error::{AcervoError, Result};
pub use core::services::Services;
pub use core::types::*;
