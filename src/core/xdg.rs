//! XDG Base Directory Support
//!
//! Resolves where Acervo reads `config.toml` and, unless configured
//! otherwise, its `catalog.json`.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "acervo";

/// Config and data directories for Acervo
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl XdgDirs {
    /// Resolve both directories.
    ///
    /// `ACERVO_CONFIG_DIR`/`ACERVO_DATA_DIR` are used verbatim; otherwise
    /// `XDG_CONFIG_HOME`/`XDG_DATA_HOME` get an `acervo` suffix; otherwise
    /// `~/.config/acervo` and `~/.local/share/acervo`.
    pub fn new() -> Self {
        Self {
            config_dir: resolve("ACERVO_CONFIG_DIR", "XDG_CONFIG_HOME", &[".config"]),
            data_dir: resolve("ACERVO_DATA_DIR", "XDG_DATA_HOME", &[".local", "share"]),
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Catalog location used when the configuration names none
    pub fn catalog_file(&self) -> PathBuf {
        self.data_dir.join("catalog.json")
    }

    pub fn log_paths(&self) {
        tracing::debug!(
            config_file = %self.config_file().display(),
            catalog_file = %self.catalog_file().display(),
            "Resolved XDG paths"
        );
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve(app_var: &str, xdg_var: &str, home_segments: &[&str]) -> PathBuf {
    if let Some(dir) = env::var_os(app_var) {
        return PathBuf::from(dir);
    }
    let base = match env::var_os(xdg_var) {
        Some(xdg) => PathBuf::from(xdg),
        None => home_segments
            .iter()
            .fold(dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")), |path, seg| {
                path.join(seg)
            }),
    };
    base.join(APP_DIR)
}
