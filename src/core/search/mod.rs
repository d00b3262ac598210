//! Federated search module.
//!
//! This module scores every record of every collection against a
//! free-text query, filters and ranks the hits, and serves type-ahead
//! suggestions.

pub mod engine;
pub mod filter;
pub mod routes;
pub mod scorer;
mod service;
pub mod suggest;

pub use engine::SearchEngine;
pub use filter::matches_filters;
pub use routes::RouteTemplates;
pub use scorer::{score, tokenize};
pub use service::SearchService;
pub use suggest::Suggester;
