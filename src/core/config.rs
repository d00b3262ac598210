//! Configuration management for the Acervo search engine.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{AcervoError, Result};
use crate::core::search::suggest::{default_vocabulary, DEFAULT_MIN_QUERY_CHARS};
use crate::core::search::RouteTemplates;
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub suggest: SuggestConfig,
    #[serde(default)]
    pub routes: RouteTemplates,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Page size when the caller gives none
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Upper bound applied to caller-supplied page sizes
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,

    /// Maximum query string length, in characters
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,

    /// Cap on result descriptions, in characters
    #[serde(default = "default_description_max_chars")]
    pub description_max_chars: usize,

    /// Scan collections on the rayon thread pool
    #[serde(default = "default_parallel_scan")]
    pub parallel_scan: bool,
}

/// Type-ahead configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SuggestConfig {
    #[serde(default = "default_suggest_limit")]
    pub default_limit: usize,

    #[serde(default = "default_suggest_max_limit")]
    pub max_limit: usize,

    /// Shorter partial queries get no suggestions
    #[serde(default = "default_min_query_chars")]
    pub min_query_chars: usize,

    /// Facet labels offered after matching titles
    #[serde(default = "default_vocabulary")]
    pub vocabulary: Vec<String>,
}

/// Catalog location
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// JSON document holding the four collections
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default level when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON log lines instead of human-readable ones
    #[serde(default)]
    pub json: bool,
}

// Default value functions
fn default_limit() -> usize {
    20
}

fn default_max_limit() -> usize {
    100
}

fn default_max_query_length() -> usize {
    500
}

fn default_description_max_chars() -> usize {
    300
}

fn default_parallel_scan() -> bool {
    true
}

fn default_suggest_limit() -> usize {
    5
}

fn default_suggest_max_limit() -> usize {
    20
}

fn default_min_query_chars() -> usize {
    DEFAULT_MIN_QUERY_CHARS
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("./catalog.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            max_query_length: default_max_query_length(),
            description_max_chars: default_description_max_chars(),
            parallel_scan: default_parallel_scan(),
        }
    }
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            default_limit: default_suggest_limit(),
            max_limit: default_suggest_max_limit(),
            min_query_chars: default_min_query_chars(),
            vocabulary: default_vocabulary(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| AcervoError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. ACERVO_CONFIG env var
    /// 2. XDG config file (~/.config/acervo/config.toml)
    /// 3. ./acervo.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("ACERVO_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("acervo.toml").exists() {
                Self::from_file("acervo.toml")?
            } else {
                Self::default()
            }
        };

        // Catalog lives in the XDG data directory unless set explicitly
        if config.catalog.path == default_catalog_path() {
            config.catalog.path = xdg.catalog_file();
        }

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Search configuration
        if let Ok(limit) = env::var("ACERVO_DEFAULT_LIMIT") {
            if let Ok(l) = limit.parse() {
                self.search.default_limit = l;
            }
        }
        if let Ok(max_limit) = env::var("ACERVO_MAX_LIMIT") {
            if let Ok(l) = max_limit.parse() {
                self.search.max_limit = l;
            }
        }
        if let Ok(max_query_len) = env::var("ACERVO_MAX_QUERY_LENGTH") {
            if let Ok(len) = max_query_len.parse() {
                self.search.max_query_length = len;
            }
        }
        if let Ok(parallel) = env::var("ACERVO_PARALLEL_SCAN") {
            if let Ok(p) = parallel.parse() {
                self.search.parallel_scan = p;
            }
        }

        // Suggest configuration
        if let Ok(limit) = env::var("ACERVO_SUGGEST_LIMIT") {
            if let Ok(l) = limit.parse() {
                self.suggest.default_limit = l;
            }
        }

        // Catalog configuration
        if let Ok(path) = env::var("ACERVO_CATALOG") {
            self.catalog.path = PathBuf::from(path);
        }

        // Logging configuration
        if let Ok(level) = env::var("ACERVO_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(json) = env::var("ACERVO_LOG_JSON") {
            if let Ok(j) = json.parse() {
                self.logging.json = j;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate search config
        if self.search.default_limit == 0 {
            return Err(AcervoError::ConfigError(
                "Default limit must be non-zero".to_string(),
            ));
        }

        if self.search.default_limit > self.search.max_limit {
            return Err(AcervoError::ConfigError(
                "Default limit cannot exceed max limit".to_string(),
            ));
        }

        if self.search.max_query_length == 0 {
            return Err(AcervoError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        if self.search.description_max_chars == 0 {
            return Err(AcervoError::ConfigError(
                "Description max chars must be non-zero".to_string(),
            ));
        }

        // Validate suggest config
        if self.suggest.default_limit == 0 {
            return Err(AcervoError::ConfigError(
                "Default suggest limit must be non-zero".to_string(),
            ));
        }

        if self.suggest.default_limit > self.suggest.max_limit {
            return Err(AcervoError::ConfigError(
                "Default suggest limit cannot exceed max suggest limit".to_string(),
            ));
        }

        if self.suggest.min_query_chars < DEFAULT_MIN_QUERY_CHARS {
            return Err(AcervoError::ConfigError(format!(
                "Min suggest query chars must be at least {DEFAULT_MIN_QUERY_CHARS}"
            )));
        }

        // Validate routes
        self.routes.validate()?;

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  Catalog: {:?}", self.catalog.path);
        tracing::debug!("  Default limit: {}", self.search.default_limit);
        tracing::debug!("  Max limit: {}", self.search.max_limit);
        tracing::debug!("  Max query length: {}", self.search.max_query_length);
        tracing::debug!("  Parallel scan: {}", self.search.parallel_scan);
        tracing::debug!("  Suggest limit: {}", self.suggest.default_limit);
        tracing::debug!(
            "  Suggest vocabulary: {} labels",
            self.suggest.vocabulary.len()
        );
    }
}
