//! CLI adapter for Acervo
//!
//! Provides a command-line interface over the search and suggest
//! operations. Depends on `core/` only.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |     core/        |
//! |  (domain logic)  |
//! +--------+---------+
//!          |
//!          v
//! +------------------+
//! |      cli/        |
//! | (clap adapter)   |
//! +------------------+
//! ```

pub mod commands;
pub mod output;

use crate::core::config::LoggingConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Acervo - federated catalog search
///
/// Search clinical cases, articles, courses and archive entries with a
/// single ranked result list, or get type-ahead suggestions.
#[derive(Parser, Debug)]
#[command(name = "acervo")]
#[command(author = "RHOBIMD HEALTH")]
#[command(version)]
#[command(about = "Federated catalog search", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Catalog JSON document (overrides configuration)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search every collection with relevance ranking
    Search(commands::SearchArgs),

    /// Type-ahead suggestions for a partial query
    Suggest(commands::SuggestArgs),

    /// Show the loaded catalog and its collection sizes
    #[command(name = "show-catalog")]
    ShowCatalog(commands::CatalogArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  acervo completions bash > ~/.local/share/bash-completion/completions/acervo
    ///   zsh:   acervo completions zsh > ~/.zfunc/_acervo
    ///   fish:  acervo completions fish > ~/.config/fish/completions/acervo.fish
    Completions(commands::CompletionsArgs),
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level. Logs go to stderr so JSON
/// output on stdout stays machine-readable.
pub fn init_tracing(logging: &LoggingConfig) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("acervo={}", logging.level)));

    let registry = tracing_subscriber::registry().with(filter);
    // A subscriber may already be installed (tests, embedding callers)
    let _ = if logging.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let xdg = XdgDirs::new();

    let mut config = Config::load_with_xdg(&xdg)?;
    if let Some(path) = cli.catalog {
        config.catalog.path = path;
    }

    init_tracing(&config.logging);
    xdg.log_paths();
    config.log_config();

    let services = match Services::load(config) {
        Ok(services) => Arc::new(services),
        Err(e) if e.is_not_found() => {
            output::print_warning("Pass --catalog <path> or set ACERVO_CATALOG");
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };
    if services.catalog.is_empty() {
        output::print_warning("Catalog is empty; every search will return no results");
    }

    match cli.command {
        Commands::Search(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::Suggest(args) => commands::suggest::execute(args, &services, cli.format).await,
        Commands::ShowCatalog(args) => {
            commands::catalog::execute(args, &services, cli.format).await
        }
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
