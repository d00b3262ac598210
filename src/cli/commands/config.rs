//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Include the suggestion vocabulary
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = &services.config;

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  catalog: {}", config.catalog.path.display());
            println!("  search:");
            println!("    default_limit: {}", config.search.default_limit);
            println!("    max_limit: {}", config.search.max_limit);
            println!("    max_query_length: {}", config.search.max_query_length);
            println!(
                "    description_max_chars: {}",
                config.search.description_max_chars
            );
            println!("    parallel_scan: {}", config.search.parallel_scan);
            println!("  suggest:");
            println!("    default_limit: {}", config.suggest.default_limit);
            println!("    max_limit: {}", config.suggest.max_limit);
            println!("    min_query_chars: {}", config.suggest.min_query_chars);
            if args.all {
                println!("    vocabulary: {:?}", config.suggest.vocabulary);
            }
            println!("  routes:");
            println!("    case: {}", config.routes.case);
            println!("    article: {}", config.routes.article);
            println!("    course: {}", config.routes.course);
            println!("    archive: {}", config.routes.archive);
        }
        OutputFormat::Json => {
            let mut value = serde_json::to_value(config.as_ref())?;
            if !args.all {
                if let Some(suggest) = value.get_mut("suggest").and_then(|v| v.as_object_mut()) {
                    suggest.remove("vocabulary");
                }
            }
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}
