//! Theme registry for folio.
//!
//! A theme is a named color palette plus a handful of effect flags. The
//! terminal core only ever handles theme *keys*; it asks a `ThemeRegistry`
//! to resolve a typed name, list the valid names, or pick the next theme
//! when cycling. Renderers look the descriptor up again to get colors.

pub mod builtin;
mod registry;
pub mod theme;

pub use registry::{ThemeRegistry, ThemeSet};
pub use theme::{Color, ThemeColors, ThemeDescriptor, ThemeEffects, parse_hex_color};
