//! Theme lookup.

use std::path::Path;

use serde::Deserialize;

use folio_types::error::{FolioError, Result};

use crate::builtin;
use crate::theme::ThemeDescriptor;

/// Read-only theme lookup used by the terminal core.
pub trait ThemeRegistry {
    /// Resolve a theme by key, case-insensitively.
    fn resolve(&self, name: &str) -> Option<&ThemeDescriptor>;

    /// All theme keys in declaration order.
    fn names(&self) -> Vec<&str>;

    /// All themes in declaration order.
    fn themes(&self) -> Vec<&ThemeDescriptor>;

    /// The theme after `current` in declaration order, wrapping around.
    ///
    /// An unknown `current` yields the first theme.
    fn next(&self, current: &str) -> Option<&ThemeDescriptor> {
        let themes = self.themes();
        if themes.is_empty() {
            return None;
        }
        let pos = themes
            .iter()
            .position(|t| t.key.eq_ignore_ascii_case(current));
        let next = match pos {
            Some(i) => (i + 1) % themes.len(),
            None => 0,
        };
        Some(themes[next])
    }
}

/// An ordered set of themes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSet {
    themes: Vec<ThemeDescriptor>,
}

#[derive(Deserialize)]
struct ThemeFile {
    #[serde(default, rename = "theme")]
    themes: Vec<ThemeDescriptor>,
}

impl ThemeSet {
    /// The five built-in themes.
    pub fn builtin() -> Self {
        Self {
            themes: builtin::builtin_themes(),
        }
    }

    /// Parse a theme file:
    ///
    /// ```toml
    /// [[theme]]
    /// key = "solarized"
    /// name = "Solarized"
    /// tagline = "Low contrast classic"
    /// [theme.colors]
    /// bg = "#002b36"
    /// # ... every ThemeColors field
    /// [theme.effects]
    /// glow = false
    /// ```
    pub fn from_toml(text: &str) -> Result<Self> {
        let file: ThemeFile = toml::from_str(text)?;
        let mut set = Self { themes: Vec::new() };
        for theme in file.themes {
            set.insert(theme)?;
        }
        Ok(set)
    }

    /// Load a theme file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let set = Self::from_toml(&text)?;
        log::info!("Loaded {} theme(s) from {}", set.len(), path.display());
        Ok(set)
    }

    /// Add a theme, or replace the one with the same key in place.
    pub fn insert(&mut self, theme: ThemeDescriptor) -> Result<()> {
        theme.validate()?;
        match self.themes.iter_mut().find(|t| t.key == theme.key) {
            Some(slot) => {
                log::debug!("Replacing theme {}", theme.key);
                *slot = theme;
            },
            None => self.themes.push(theme),
        }
        Ok(())
    }

    /// Merge every theme of `other` into this set.
    pub fn extend(&mut self, other: ThemeSet) -> Result<()> {
        for theme in other.themes {
            self.insert(theme)?;
        }
        Ok(())
    }

    /// Number of themes.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Resolve a key, failing with a `Theme` error when it is unknown.
    pub fn require(&self, name: &str) -> Result<&ThemeDescriptor> {
        self.resolve(name)
            .ok_or_else(|| FolioError::Theme(format!("unknown theme: {name}")))
    }
}

impl Default for ThemeSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ThemeRegistry for ThemeSet {
    fn resolve(&self, name: &str) -> Option<&ThemeDescriptor> {
        self.themes
            .iter()
            .find(|t| t.key.eq_ignore_ascii_case(name))
    }

    fn names(&self) -> Vec<&str> {
        self.themes.iter().map(|t| t.key.as_str()).collect()
    }

    fn themes(&self) -> Vec<&ThemeDescriptor> {
        self.themes.iter().collect()
    }
}
