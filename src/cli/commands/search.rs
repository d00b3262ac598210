//! Search command - ranked search across every collection

use crate::cli::output::{colors, format_relative_time, truncate_chars};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::{SearchFilters, SearchRequest};
use clap::Args;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Free-text query (whitespace-separated terms)
    pub query: String,

    /// Only include these kinds (case, article, course, archive)
    #[arg(long = "type", short = 't', value_delimiter = ',')]
    pub kinds: Vec<String>,

    /// Only include results with one of these specialties
    #[arg(long, value_delimiter = ',')]
    pub specialty: Vec<String>,

    /// Only include results with one of these categories
    #[arg(long, value_delimiter = ',')]
    pub category: Vec<String>,

    /// Page size (defaults to the configured limit)
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Number of results to skip
    #[arg(long, default_value = "0")]
    pub offset: usize,

    /// Only show result URLs
    #[arg(long)]
    pub urls_only: bool,
}

impl SearchArgs {
    /// Filters built from the repeated/comma-separated flags
    pub fn filters(&self) -> SearchFilters {
        fn dimension(values: &[String]) -> Option<Vec<String>> {
            (!values.is_empty()).then(|| values.to_vec())
        }

        SearchFilters {
            kinds: dimension(&self.kinds),
            specialty: dimension(&self.specialty),
            category: dimension(&self.category),
        }
    }
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = SearchRequest {
        query: args.query.clone(),
        filters: args.filters(),
        limit: args.limit,
        offset: args.offset,
    };

    let response = services.search.search(request)?;

    match format {
        OutputFormat::Human => {
            if response.results.is_empty() {
                println!("No results found for '{}'", colors::label(&args.query));
                if let Some(note) = empty_page_note(response.total, response.offset) {
                    println!("{}", colors::dim(&note));
                }
                return Ok(());
            }

            println!(
                "Found {} result(s), showing {}-{}:\n",
                colors::number(&response.total.to_string()),
                response.offset + 1,
                response.offset + response.results.len()
            );

            for (i, result) in response.results.iter().enumerate() {
                if args.urls_only {
                    println!("{}", colors::url(&result.url));
                    continue;
                }

                println!(
                    "[{}] {} {} {}",
                    colors::rank(&(response.offset + i + 1).to_string()),
                    colors::label(&result.title),
                    colors::kind(result.kind.as_str()),
                    colors::score(&format!("(score: {:.2})", result.relevance_score))
                );
                println!("    {}", colors::url(&result.url));

                let meta = &result.metadata;
                let mut details = Vec::new();
                if let Some(author) = &meta.author {
                    details.push(author.clone());
                }
                if let Some(facet) = meta.specialty.as_ref().or(meta.category.as_ref()) {
                    details.push(facet.clone());
                }
                if let Some(created_at) = &meta.created_at {
                    details.push(format_relative_time(created_at));
                }
                if !details.is_empty() {
                    println!("    {}", colors::dim(&details.join(" | ")));
                }
                if !result.description.is_empty() {
                    println!("    {}", colors::dim(&truncate_chars(&result.description, 100)));
                }
                println!();
            }

            if response.has_more {
                println!(
                    "{}",
                    colors::dim(&format!(
                        "More results available: --offset {}",
                        response.offset + response.results.len()
                    ))
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

/// Explain an empty page when the query did match something
fn empty_page_note(total: usize, offset: usize) -> Option<String> {
    if total == 0 {
        None
    } else if offset >= total {
        Some(format!(
            "({total} match(es) in total, offset {offset} is past the end)"
        ))
    } else {
        Some(format!("({total} match(es) in total, page size is 0)"))
    }
}
