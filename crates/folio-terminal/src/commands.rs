//! Built-in commands for the portfolio terminal.

use folio_types::error::{FolioError, Result};

use crate::content::{Portfolio, header};
use crate::interpreter::{Command, CommandContext, CommandRegistry, Output};

/// Keyboard shortcuts listed at the end of `help`.
const SHORTCUTS: [(&str, &str); 3] = [
    ("TAB", "Autocomplete"),
    ("Up/Down", "History navigation"),
    ("Ctrl+T", "Cycle theme"),
];

/// Register every built-in command, in the order `help` lists them.
pub fn register_builtins(reg: &mut CommandRegistry, portfolio: &Portfolio) {
    reg.register(Box::new(HelpCmd));
    crate::register_portfolio_commands(reg, portfolio);
    reg.register(Box::new(HistoryCmd));
    crate::register_theme_commands(reg);
    reg.register(Box::new(ClearCmd));
}

/// Fresh registry holding every built-in command.
pub fn builtin_registry(portfolio: &Portfolio) -> CommandRegistry {
    let mut reg = CommandRegistry::new();
    register_builtins(&mut reg, portfolio);
    reg
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

/// Lists every registered command in declaration order.
pub struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "Show available commands"
    }
    fn execute(&self, _args: &str, ctx: &mut CommandContext<'_>) -> Result<Option<Output>> {
        let mut lines = vec![header("commands"), String::new()];
        for cmd in ctx.registry().list_all() {
            lines.push(format!("  {:<13} {}", cmd.usage(), cmd.description()));
        }
        lines.push(String::new());
        lines.push("Shortcuts".to_string());
        lines.push("---------".to_string());
        for (key, action) in SHORTCUTS {
            lines.push(format!("  {key:<13} {action}"));
        }
        Ok(Some(Output::info(lines.join("\n"))))
    }
}

// ---------------------------------------------------------------------------
// history
// ---------------------------------------------------------------------------

/// Lists submitted commands or toggles history persistence.
pub struct HistoryCmd;
impl Command for HistoryCmd {
    fn name(&self) -> &str {
        "history"
    }
    fn description(&self) -> &str {
        "Show command history"
    }
    fn usage(&self) -> &str {
        "history"
    }
    fn execute(&self, args: &str, ctx: &mut CommandContext<'_>) -> Result<Option<Output>> {
        let mut tokens = args.split_whitespace();
        if tokens.next() == Some("persist") {
            let enable = match tokens.next().map(str::to_lowercase).as_deref() {
                Some("on") => true,
                Some("off") => false,
                _ => {
                    return Err(FolioError::InvalidArgument(
                        "Usage: history persist on|off".to_string(),
                    ));
                },
            };
            ctx.set_persist_history(enable);
            let state = if enable { "enabled" } else { "disabled" };
            return Ok(Some(Output::success(format!(
                "History persistence {state}."
            ))));
        }

        let history = ctx.command_history();
        let content = if !history.is_empty() {
            let lines: Vec<String> = history
                .iter()
                .enumerate()
                .map(|(i, cmd)| format!("  {}. {cmd}", i + 1))
                .collect();
            format!("Command History:\n\n{}", lines.join("\n"))
        } else if ctx.persist_history() {
            "No command history yet. Run some commands to persist them.".to_string()
        } else {
            "No command history yet. Start typing commands!".to_string()
        };
        Ok(Some(Output::info(content)))
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

/// Empties the visible history.
pub struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear the terminal"
    }
    fn execute(&self, _args: &str, ctx: &mut CommandContext<'_>) -> Result<Option<Output>> {
        ctx.clear_history();
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{Effect, OutputKind};
    use crate::session::SessionState;
    use folio_skin::ThemeSet;

    fn registry() -> CommandRegistry {
        builtin_registry(&Portfolio::bundled().unwrap())
    }

    fn run(
        reg: &CommandRegistry,
        session: &SessionState,
        name: &str,
        args: &str,
    ) -> (Result<Option<Output>>, Vec<Effect>) {
        let themes = ThemeSet::builtin();
        let mut ctx = CommandContext::new(reg, &themes, session);
        let out = reg.lookup(name).unwrap().execute(args, &mut ctx);
        (out, ctx.into_effects())
    }

    #[test]
    fn builtin_order() {
        assert_eq!(
            registry().names(),
            vec![
                "help",
                "about",
                "projects",
                "skills",
                "experience",
                "education",
                "achievements",
                "contact",
                "resume",
                "download",
                "social",
                "history",
                "theme",
                "themes",
                "clear",
            ]
        );
    }

    #[test]
    fn help_lists_in_declaration_order() {
        let reg = registry();
        let session = SessionState::new("matrix");
        let (out, effects) = run(&reg, &session, "help", "");
        let out = out.unwrap().unwrap();
        assert!(effects.is_empty());
        assert_eq!(out.kind(), OutputKind::Info);
        let text = out.content();
        assert!(text.starts_with(
            "=== COMMANDS ===\n\n  help          Show available commands\n  about         Learn about me\n"
        ));
        assert!(text.contains("  theme <name>  Change terminal theme\n  themes        List all available themes"));
        assert!(text.contains("  achievements  View accomplishments"));
        assert!(text.ends_with("  Ctrl+T        Cycle theme"));
    }

    #[test]
    fn history_lists_numbered() {
        let reg = registry();
        let mut session = SessionState::new("matrix");
        session.record_submission("about".into());
        session.record_submission("skills".into());
        let (out, _) = run(&reg, &session, "history", "");
        assert_eq!(
            out.unwrap().unwrap().content(),
            "Command History:\n\n  1. about\n  2. skills"
        );
    }

    #[test]
    fn history_empty_message_depends_on_persistence() {
        let reg = registry();
        let mut session = SessionState::new("matrix");
        let (out, _) = run(&reg, &session, "history", "");
        assert_eq!(
            out.unwrap().unwrap().content(),
            "No command history yet. Start typing commands!"
        );
        session.set_persist_history(true);
        let (out, _) = run(&reg, &session, "history", "");
        assert_eq!(
            out.unwrap().unwrap().content(),
            "No command history yet. Run some commands to persist them."
        );
    }

    #[test]
    fn history_persist_toggles() {
        let reg = registry();
        let session = SessionState::new("matrix");
        let (out, effects) = run(&reg, &session, "history", "persist ON");
        let out = out.unwrap().unwrap();
        assert_eq!(out.kind(), OutputKind::Success);
        assert_eq!(out.content(), "History persistence enabled.");
        assert_eq!(effects, vec![Effect::SetPersistHistory(true)]);

        let (out, effects) = run(&reg, &session, "history", "persist off");
        assert_eq!(out.unwrap().unwrap().content(), "History persistence disabled.");
        assert_eq!(effects, vec![Effect::SetPersistHistory(false)]);
    }

    #[test]
    fn history_persist_bad_arg() {
        let reg = registry();
        let session = SessionState::new("matrix");
        for args in ["persist", "persist maybe"] {
            let (out, effects) = run(&reg, &session, "history", args);
            let err = out.unwrap_err();
            assert_eq!(err.to_string(), "Usage: history persist on|off");
            assert!(effects.is_empty());
        }
    }

    #[test]
    fn clear_requests_clear_and_returns_nothing() {
        let reg = registry();
        let session = SessionState::new("matrix");
        let (out, effects) = run(&reg, &session, "clear", "");
        assert_eq!(out.unwrap(), None);
        assert_eq!(effects, vec![Effect::ClearHistory]);
    }
}
