//! Acervo CLI - command-line interface for catalog search
//!
//! # Examples
//!
//! ```bash
//! # Ranked search across every collection
//! acervo search "rinoplastia" --type case,article
//!
//! # Second page of ten
//! acervo search "enxerto" -n 10 --offset 10
//!
//! # Type-ahead suggestions
//! acervo suggest "rino"
//!
//! # Show configuration
//! acervo show-config
//! ```

use acervo::cli::{output, run, Cli};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
