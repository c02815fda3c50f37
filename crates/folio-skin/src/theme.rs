//! Theme descriptors -- color palette and effect flags.

use serde::Deserialize;

use folio_types::error::{FolioError, Result};

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Terminal palette. Every value is a `#RRGGBB` or `#RRGGBBAA` string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ThemeColors {
    pub bg: String,
    pub bg_secondary: String,
    pub bg_tertiary: String,
    pub text: String,
    pub text_muted: String,
    pub text_dim: String,
    pub primary: String,
    pub accent: String,
    pub error: String,
    pub success: String,
    pub warning: String,
    pub info: String,
    pub border: String,
    pub border_hover: String,
}

impl ThemeColors {
    fn entries(&self) -> [(&'static str, &str); 14] {
        [
            ("bg", &self.bg),
            ("bg_secondary", &self.bg_secondary),
            ("bg_tertiary", &self.bg_tertiary),
            ("text", &self.text),
            ("text_muted", &self.text_muted),
            ("text_dim", &self.text_dim),
            ("primary", &self.primary),
            ("accent", &self.accent),
            ("error", &self.error),
            ("success", &self.success),
            ("warning", &self.warning),
            ("info", &self.info),
            ("border", &self.border),
            ("border_hover", &self.border_hover),
        ]
    }

    /// Parse the text color string to a `Color`.
    pub fn text_color(&self) -> Color {
        parse_hex_color(&self.text).unwrap_or(Color::WHITE)
    }

    /// Parse the background color string to a `Color`.
    pub fn bg_color(&self) -> Color {
        parse_hex_color(&self.bg).unwrap_or(Color::BLACK)
    }

    /// Parse the primary color string to a `Color`.
    pub fn primary_color(&self) -> Color {
        parse_hex_color(&self.primary).unwrap_or(Color::WHITE)
    }

    /// Parse the error color string to a `Color`.
    pub fn error_color(&self) -> Color {
        parse_hex_color(&self.error).unwrap_or(Color::rgb(255, 68, 68))
    }
}

/// Visual effect toggles a renderer may honor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeEffects {
    pub glow: bool,
    pub scanlines: bool,
    pub crt: bool,
    pub flicker: bool,
}

/// A complete theme as seen by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ThemeDescriptor {
    /// Lower-case lookup key (`matrix`, `dracula`, ...).
    pub key: String,
    /// Display name (`Matrix`).
    pub name: String,
    /// One-line description for the `themes` listing.
    #[serde(default)]
    pub tagline: String,
    pub colors: ThemeColors,
    #[serde(default)]
    pub effects: ThemeEffects,
}

impl ThemeDescriptor {
    /// Check the key shape and that every color parses.
    pub fn validate(&self) -> Result<()> {
        if self.key.is_empty()
            || !self
                .key
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(FolioError::Theme(format!(
                "theme key must be lower-case ascii: {:?}",
                self.key
            )));
        }
        if self.name.trim().is_empty() {
            return Err(FolioError::Theme(format!("theme {} has no name", self.key)));
        }
        for (field, value) in self.colors.entries() {
            if parse_hex_color(value).is_none() {
                return Err(FolioError::Theme(format!(
                    "theme {}: invalid color for {field}: {value}",
                    self.key
                )));
            }
        }
        Ok(())
    }
}

/// Parse "#RRGGBB" or "#RRGGBBAA" into a `Color`.
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#')?;
    if !s.is_ascii() {
        return None;
    }
    if s.len() == 6 {
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        Some(Color::rgb(r, g, b))
    } else if s.len() == 8 {
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        let a = u8::from_str_radix(&s[6..8], 16).ok()?;
        Some(Color::rgba(r, g, b, a))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;

    #[test]
    fn parse_hex_colors() {
        assert_eq!(parse_hex_color("#FF0000"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(
            parse_hex_color("#00ff0030"),
            Some(Color::rgba(0, 255, 0, 0x30))
        );
        assert_eq!(parse_hex_color("invalid"), None);
        assert_eq!(parse_hex_color("#GG0000"), None);
        assert_eq!(parse_hex_color("#fff"), None);
    }

    #[test]
    fn non_ascii_hex_rejected() {
        assert_eq!(parse_hex_color("#ééé"), None);
    }

    #[test]
    fn builtin_themes_validate() {
        for theme in builtin::builtin_themes() {
            theme.validate().unwrap();
        }
    }

    #[test]
    fn color_accessors() {
        let matrix = builtin::builtin_themes().remove(0);
        assert_eq!(matrix.colors.text_color(), Color::rgb(0x4a, 0xde, 0x80));
        assert_eq!(matrix.colors.bg_color(), Color::rgb(0x03, 0x07, 0x12));
    }

    #[test]
    fn bad_color_fails_validation() {
        let mut theme = builtin::builtin_themes().remove(0);
        theme.colors.accent = "purple".to_string();
        let err = theme.validate().unwrap_err();
        assert!(format!("{err}").contains("accent"));
    }

    #[test]
    fn upper_case_key_fails_validation() {
        let mut theme = builtin::builtin_themes().remove(0);
        theme.key = "Matrix".to_string();
        assert!(theme.validate().is_err());
    }

    #[test]
    fn effects_default_off() {
        let fx: ThemeEffects = toml::from_str("glow = true").unwrap();
        assert!(fx.glow);
        assert!(!fx.scanlines && !fx.crt && !fx.flicker);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn formatted_rgba_parses_back(r: u8, g: u8, b: u8, a: u8) {
                let hex = format!("#{r:02x}{g:02x}{b:02X}{a:02x}");
                prop_assert_eq!(parse_hex_color(&hex), Some(Color::rgba(r, g, b, a)));
            }

            #[test]
            fn parse_never_panics(s in "\\PC{0,12}") {
                let _ = parse_hex_color(&s);
            }
        }
    }
}
