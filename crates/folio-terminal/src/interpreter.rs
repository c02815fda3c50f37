//! Command trait, registry, and input parsing.
//!
//! Commands are registered by name into an ordered table. The dispatcher
//! parses an input line into a command token and an argument string, looks
//! the token up here, and calls `execute()` with a `CommandContext`.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use folio_skin::ThemeRegistry;
use folio_types::error::Result;

use crate::session::SessionState;

/// Display kind of an output. Renderers pick colors and layout from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    Info,
    List,
    Success,
    Error,
    Welcome,
    Progress,
    Ai,
    /// No visible output (only used when reporting usage).
    Noop,
}

impl OutputKind {
    /// Lower-case name, as used in storage and usage reports.
    pub fn as_str(self) -> &'static str {
        match self {
            OutputKind::Info => "info",
            OutputKind::List => "list",
            OutputKind::Success => "success",
            OutputKind::Error => "error",
            OutputKind::Welcome => "welcome",
            OutputKind::Progress => "progress",
            OutputKind::Ai => "ai",
            OutputKind::Noop => "noop",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output produced by a command, the fallback responder, or the dispatcher.
///
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    #[serde(rename = "type")]
    kind: OutputKind,
    content: String,
}

impl Output {
    pub fn new(kind: OutputKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self::new(OutputKind::Info, content)
    }

    pub fn list(content: impl Into<String>) -> Self {
        Self::new(OutputKind::List, content)
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::new(OutputKind::Success, content)
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::new(OutputKind::Error, content)
    }

    pub fn welcome(content: impl Into<String>) -> Self {
        Self::new(OutputKind::Welcome, content)
    }

    pub fn ai(content: impl Into<String>) -> Self {
        Self::new(OutputKind::Ai, content)
    }

    pub fn kind(&self) -> OutputKind {
        self.kind
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// A state change requested by a command.
///
/// Commands never mutate the session; they record effects on their context
/// and the dispatcher applies them after `execute()` returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Switch to the theme with this key.
    SetTheme(String),
    /// Enable or disable history persistence.
    SetPersistHistory(bool),
    /// Empty the visible history.
    ClearHistory,
}

/// Read access to the session plus effect requests, passed to every command.
pub struct CommandContext<'a> {
    registry: &'a CommandRegistry,
    themes: &'a dyn ThemeRegistry,
    command_history: &'a [String],
    theme: &'a str,
    persist_history: bool,
    effects: Vec<Effect>,
}

impl<'a> CommandContext<'a> {
    /// Build a context over the current session.
    pub fn new(
        registry: &'a CommandRegistry,
        themes: &'a dyn ThemeRegistry,
        session: &'a SessionState,
    ) -> Self {
        Self {
            registry,
            themes,
            command_history: session.command_history(),
            theme: session.theme(),
            persist_history: session.persist_history(),
            effects: Vec::new(),
        }
    }

    /// The registry the command was dispatched from.
    pub fn registry(&self) -> &'a CommandRegistry {
        self.registry
    }

    /// The theme registry.
    pub fn themes(&self) -> &'a dyn ThemeRegistry {
        self.themes
    }

    /// Previously submitted raw commands, oldest first.
    pub fn command_history(&self) -> &'a [String] {
        self.command_history
    }

    /// Active theme key.
    pub fn theme(&self) -> &'a str {
        self.theme
    }

    /// Whether history currently survives across sessions.
    pub fn persist_history(&self) -> bool {
        self.persist_history
    }

    /// Request a theme switch.
    pub fn set_theme(&mut self, key: impl Into<String>) {
        self.effects.push(Effect::SetTheme(key.into()));
    }

    /// Request a change of the persistence flag.
    pub fn set_persist_history(&mut self, persist: bool) {
        self.effects.push(Effect::SetPersistHistory(persist));
    }

    /// Request that the visible history be emptied.
    pub fn clear_history(&mut self) {
        self.effects.push(Effect::ClearHistory);
    }

    /// Effects requested so far.
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Consume the context, returning the requested effects in order.
    pub fn into_effects(self) -> Vec<Effect> {
        self.effects
    }
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types). Must be lower-case.
    fn name(&self) -> &str;

    /// One-line description for `help` and the palette.
    fn description(&self) -> &str;

    /// Usage string (e.g. "theme <name>").
    fn usage(&self) -> &str {
        self.name()
    }

    /// Execute the command.
    ///
    /// `Ok(None)` means the command leaves no history entry. An
    /// `InvalidArgument` error is shown to the user verbatim.
    fn execute(&self, args: &str, ctx: &mut CommandContext<'_>) -> Result<Option<Output>>;
}

/// An input line split into command token and argument string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// First token, lower-cased.
    pub command: String,
    /// Remaining tokens joined by single spaces, casing preserved.
    pub args: String,
}

/// Split a raw input line. Returns `None` for blank input.
///
/// There is no quoting: arguments are one opaque string and each command
/// tokenizes further if it needs to.
pub fn parse_input(raw: &str) -> Option<ParsedInput> {
    let mut tokens = raw.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    let args = tokens.collect::<Vec<_>>().join(" ");
    Some(ParsedInput { command, args })
}

/// Ordered registry of available commands.
///
/// Declaration order is preserved for `help`, the palette, and completion.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command. Replaces any existing command with the same name,
    /// keeping the original position.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let name = cmd.name().to_lowercase();
        match self.index.get(&name) {
            Some(&pos) => {
                log::debug!("Replacing command {name}");
                self.commands[pos] = cmd;
            },
            None => {
                self.index.insert(name, self.commands.len());
                self.commands.push(cmd);
            },
        }
    }

    /// Exact, case-insensitive lookup.
    pub fn lookup(&self, name: &str) -> Option<&dyn Command> {
        let pos = *self.index.get(&name.to_lowercase())?;
        self.commands.get(pos).map(|c| c.as_ref())
    }

    /// All commands in declaration order.
    pub fn list_all(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.iter().map(|c| c.as_ref())
    }

    /// Command names in declaration order.
    pub fn names(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.name()).collect()
    }

    /// Names starting with `partial` (case-insensitive), in declaration order.
    pub fn completions(&self, partial: &str) -> Vec<String> {
        let lower = partial.to_lowercase();
        self.commands
            .iter()
            .map(|c| c.name())
            .filter(|name| name.starts_with(&lower))
            .map(str::to_string)
            .collect()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
