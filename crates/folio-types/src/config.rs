//! Terminal configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! working configuration.
//!
//! ```toml
//! prompt = "as@portfolio:~$"
//! default_theme = "dracula"
//! suggestion_limit = 5
//! highlight_ms = 300
//! storage_key = "terminal-storage"
//! storage_dir = "/home/me/.local/share/folio"
//! responder = true
//! theme_file = "themes.toml"
//! content_file = "portfolio.toml"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{FolioError, Result};

/// Top-level folio configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FolioConfig {
    /// Prompt printed before the input line.
    pub prompt: String,
    /// Theme key used when nothing has been persisted yet.
    pub default_theme: String,
    /// Maximum number of live suggestions shown while typing.
    pub suggestion_limit: usize,
    /// How long the welcome banner stays highlighted after a theme change.
    pub highlight_ms: u32,
    /// Key under which the session snapshot is stored.
    pub storage_key: String,
    /// Directory for the file-backed store (`None` = in-memory only).
    pub storage_dir: Option<PathBuf>,
    /// Answer unmatched input with the keyword responder.
    pub responder: bool,
    /// Extra `[[theme]]` definitions merged over the built-ins.
    pub theme_file: Option<PathBuf>,
    /// Portfolio content replacing the bundled sample.
    pub content_file: Option<PathBuf>,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            prompt: "as@portfolio:~$".to_string(),
            default_theme: "matrix".to_string(),
            suggestion_limit: 5,
            highlight_ms: 300,
            storage_key: "terminal-storage".to_string(),
            storage_dir: None,
            responder: true,
            theme_file: None,
            content_file: None,
        }
    }
}

impl FolioConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: FolioConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.default_theme.trim().is_empty() {
            return Err(FolioError::Config("default_theme must not be empty".into()));
        }
        if self.storage_key.trim().is_empty() {
            return Err(FolioError::Config("storage_key must not be empty".into()));
        }
        Ok(())
    }
}
