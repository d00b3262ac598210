//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod catalog;
pub mod completions;
pub mod config;
pub mod search;
pub mod suggest;

// Re-export argument types for use in mod.rs
pub use catalog::CatalogArgs;
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use search::SearchArgs;
pub use suggest::SuggestArgs;
