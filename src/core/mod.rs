//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of the command-line adapter.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Request, response and result structures
//! - **xdg**: XDG directory handling
//! - **records**: Domain records and their searchable projection
//! - **catalog**: In-memory collections, loaded from JSON
//! - **search**: Scoring, filtering, ranking and suggestions
//! - **services**: Unified service container

pub mod catalog;
pub mod config;
pub mod error;
pub mod records;
pub mod search;
pub mod services;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use catalog::Catalog;
pub use config::Config;
pub use error::{AcervoError, Result};
pub use services::Services;
