//! Suggest command - type-ahead lookup

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::SuggestRequest;
use clap::Args;
use std::sync::Arc;

/// Arguments for the suggest command
#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// Partial query typed so far (at least 2 characters)
    pub query: String,

    /// Maximum number of suggestions
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

/// Execute the suggest command
pub async fn execute(
    args: SuggestArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = services.search.suggest(SuggestRequest {
        query: args.query,
        limit: args.limit,
    })?;

    match format {
        OutputFormat::Human => {
            if response.suggestions.is_empty() {
                println!("No suggestions for '{}'", colors::label(&response.query));
            } else {
                for suggestion in &response.suggestions {
                    println!("{suggestion}");
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
