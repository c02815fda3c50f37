//! Foundation types for folio.
//!
//! This crate holds the pieces every other folio crate shares: the error
//! taxonomy, platform-agnostic key events, and the TOML configuration.

pub mod config;
pub mod error;
pub mod input;
