//! Terminal commands for theme management.

use folio_types::error::{FolioError, Result};

use crate::content::header;
use crate::{Command, CommandContext, CommandRegistry, Output};

/// Register theme-related commands.
pub fn register_theme_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(ThemeCmd));
    reg.register(Box::new(ThemesCmd));
}

/// Show the current theme or switch to another.
struct ThemeCmd;

impl Command for ThemeCmd {
    fn name(&self) -> &str {
        "theme"
    }

    fn description(&self) -> &str {
        "Change terminal theme"
    }

    fn usage(&self) -> &str {
        "theme <name>"
    }

    fn execute(&self, args: &str, ctx: &mut CommandContext<'_>) -> Result<Option<Output>> {
        let themes = ctx.themes();
        let available = themes.names().join(", ");
        let requested = args.trim();

        if requested.is_empty() {
            let current = themes
                .resolve(ctx.theme())
                .map_or_else(|| ctx.theme().to_string(), |t| t.name.clone());
            return Ok(Some(Output::info(format!(
                "Current theme: {current}\n\nUsage: theme <name>\nAvailable themes: {available}\n\nOr type \"themes\" to see all options"
            ))));
        }

        match themes.resolve(requested) {
            Some(theme) => {
                let (key, name) = (theme.key.clone(), theme.name.clone());
                ctx.set_theme(key);
                Ok(Some(Output::success(format!("Theme changed to: {name}"))))
            },
            None => Err(FolioError::InvalidArgument(format!(
                "Theme not found. Available: {available}"
            ))),
        }
    }
}

/// List every theme with its tagline.
struct ThemesCmd;

impl Command for ThemesCmd {
    fn name(&self) -> &str {
        "themes"
    }

    fn description(&self) -> &str {
        "List all available themes"
    }

    fn execute(&self, _args: &str, ctx: &mut CommandContext<'_>) -> Result<Option<Output>> {
        let mut lines = vec![header("themes"), String::new()];
        for theme in ctx.themes().themes() {
            lines.push(format!("  {:<11} {}", theme.key, theme.tagline));
        }
        lines.push(String::new());
        lines.push("Usage: theme <name>".to_string());
        Ok(Some(Output::info(lines.join("\n"))))
    }
}
