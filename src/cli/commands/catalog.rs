//! Catalog command - show what is loaded

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Arguments for the catalog command
#[derive(Args, Debug)]
pub struct CatalogArgs {}

/// Catalog summary
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub path: String,
    pub total: usize,
    pub collections: BTreeMap<&'static str, usize>,
}

/// Execute the catalog command
pub async fn execute(
    _args: CatalogArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = &services.catalog;

    let response = CatalogResponse {
        path: services.config.catalog.path.to_string_lossy().into_owned(),
        total: catalog.len(),
        collections: catalog.counts(),
    };

    match format {
        OutputFormat::Human => {
            println!("Catalog: {}", colors::url(&response.path));
            for source in catalog.sources() {
                let kind = source.kind().as_str();
                println!(
                    "  {:<8} {}",
                    kind,
                    colors::number(&response.collections[kind].to_string())
                );
            }
            println!("  {:<8} {}", "total", colors::number(&response.total.to_string()));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
