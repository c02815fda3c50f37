//! Built-in themes compiled into the binary.

use crate::theme::{ThemeColors, ThemeDescriptor, ThemeEffects};

/// Keys of the built-in themes, in cycling order.
pub const BUILTIN_KEYS: [&str; 5] = ["matrix", "dracula", "monokai", "cyberpunk", "hacker"];

/// Palette in `ThemeColors` field order.
type Palette = [&'static str; 14];

fn theme(
    key: &str,
    name: &str,
    tagline: &str,
    palette: Palette,
    effects: ThemeEffects,
) -> ThemeDescriptor {
    let [
        bg,
        bg_secondary,
        bg_tertiary,
        text,
        text_muted,
        text_dim,
        primary,
        accent,
        error,
        success,
        warning,
        info,
        border,
        border_hover,
    ] = palette.map(str::to_string);
    ThemeDescriptor {
        key: key.to_string(),
        name: name.to_string(),
        tagline: tagline.to_string(),
        colors: ThemeColors {
            bg,
            bg_secondary,
            bg_tertiary,
            text,
            text_muted,
            text_dim,
            primary,
            accent,
            error,
            success,
            warning,
            info,
            border,
            border_hover,
        },
        effects,
    }
}

const fn effects(glow: bool, scanlines: bool, crt: bool, flicker: bool) -> ThemeEffects {
    ThemeEffects {
        glow,
        scanlines,
        crt,
        flicker,
    }
}

/// All built-in themes in declaration order.
pub fn builtin_themes() -> Vec<ThemeDescriptor> {
    vec![
        theme(
            "matrix",
            "Matrix",
            "Green hacker terminal",
            [
                "#030712", "#0a1628", "#111827", "#4ade80", "#6b7280", "#374151", "#4ade80",
                "#a855f7", "#f87171", "#4ade80", "#fbbf24", "#22d3ee", "#1f2937", "#374151",
            ],
            effects(true, true, false, false),
        ),
        theme(
            "dracula",
            "Dracula",
            "Purple and cyan",
            [
                "#282a36", "#1e1f29", "#343746", "#f8f8f2", "#6272a4", "#44475a", "#bd93f9",
                "#ff79c6", "#ff5555", "#50fa7b", "#f1fa8c", "#8be9fd", "#44475a", "#6272a4",
            ],
            effects(true, false, false, false),
        ),
        theme(
            "monokai",
            "Monokai",
            "Sublime inspired",
            [
                "#272822", "#1e1e1e", "#3e3d32", "#f8f8f2", "#75715e", "#49483e", "#ae81ff",
                "#f92672", "#f92672", "#a6e22e", "#e6db74", "#66d9ef", "#3e3d32", "#75715e",
            ],
            effects(false, false, false, false),
        ),
        theme(
            "cyberpunk",
            "Cyberpunk",
            "Neon pink and cyan",
            [
                "#0a0e27", "#05081d", "#141833", "#00ff9f", "#5b6ad0", "#2a3366", "#ff2a6d",
                "#00d9ff", "#ff2a6d", "#00ff9f", "#ffe66d", "#00d9ff", "#ff2a6d40", "#ff2a6d",
            ],
            effects(true, true, true, true),
        ),
        theme(
            "hacker",
            "Hacker",
            "Black & green retro",
            [
                "#000000", "#0a0a0a", "#141414", "#00ff00", "#008800", "#004400", "#00ff00",
                "#00ffff", "#ff0000", "#00ff00", "#ffff00", "#00ffff", "#00ff0030", "#00ff00",
            ],
            effects(true, true, true, true),
        ),
    ]
}
