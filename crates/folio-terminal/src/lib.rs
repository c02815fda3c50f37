//! Command dispatch and session state for the portfolio terminal.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name. The dispatcher parses input
//! lines, resolves the command name, runs `execute()`, applies the effects
//! the command requested, and appends the output to the session history.
//! Recall, completion, and the palette operate on the same session.

pub mod commands;
pub mod completion;
pub mod content;
pub mod dispatch;
mod interpreter;
pub mod palette;
pub mod persist;
mod portfolio_commands;
pub mod recall;
pub mod responder;
pub mod session;
pub mod terminal;
mod theme_commands;
pub mod usage;

/// Register every built-in command into a registry.
pub use commands::{builtin_registry, register_builtins};
/// Portfolio content rendered by the content commands.
pub use content::Portfolio;
/// Routes submitted lines to commands.
pub use dispatch::Dispatcher;
/// A single executable command trait.
pub use interpreter::Command;
/// Read access and effect requests passed to every command.
pub use interpreter::CommandContext;
/// Registry of available commands.
pub use interpreter::CommandRegistry;
/// State change requested by a command.
pub use interpreter::Effect;
/// Output produced by a command.
pub use interpreter::{Output, OutputKind};
/// Input line parsing.
pub use interpreter::{ParsedInput, parse_input};
/// Register the portfolio content commands into a registry.
pub use portfolio_commands::register_portfolio_commands;
/// Fallback answers for unknown commands.
pub use responder::{KeywordResponder, Responder};
/// Session state.
pub use session::{HistoryEntry, SessionState, TabCycle};
/// Keyboard-driven terminal facade.
pub use terminal::Terminal;
/// Register theme commands (theme, themes) into a registry.
pub use theme_commands::register_theme_commands;
/// Usage reporting.
pub use usage::{UsageCounter, UsageSink};
