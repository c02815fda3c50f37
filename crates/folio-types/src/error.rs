//! Error types for folio.

use std::io;

/// Errors produced by folio.
///
/// The first two variants are the user-facing command errors: the dispatcher
/// turns them into an `error` output whose content is the `Display` text.
/// The remaining variants cover configuration, theme, content and storage
/// loading.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error(
        "Command not found: {0}\n\nType 'help' for available commands or try asking me a question!"
    )]
    UnknownCommand(String),

    /// Carries the literal usage/help text shown to the user.
    #[error("{0}")]
    InvalidArgument(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("theme error: {0}")]
    Theme(String),

    #[error("content error: {0}")]
    Content(String),

    #[error("store error: {0}")]
    Store(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FolioError {
    /// Whether this error is one the user can fix by retyping the command.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            FolioError::UnknownCommand(_) | FolioError::InvalidArgument(_)
        )
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;
