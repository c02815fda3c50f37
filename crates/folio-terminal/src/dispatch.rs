//! The dispatcher: raw input line in, history entry and effects out.

use folio_skin::{ThemeDescriptor, ThemeRegistry};
use folio_types::error::FolioError;

use crate::interpreter::{CommandContext, CommandRegistry, Effect, Output, OutputKind, parse_input};
use crate::responder::Responder;
use crate::session::{HistoryEntry, SessionState};
use crate::usage::UsageSink;

/// Routes submitted lines to commands and applies their effects.
pub struct Dispatcher {
    registry: CommandRegistry,
    themes: Box<dyn ThemeRegistry>,
    responder: Option<Box<dyn Responder>>,
    usage: Option<Box<dyn UsageSink>>,
}

impl Dispatcher {
    pub fn new(registry: CommandRegistry, themes: impl ThemeRegistry + 'static) -> Self {
        Self {
            registry,
            themes: Box::new(themes),
            responder: None,
            usage: None,
        }
    }

    /// Answer unknown commands with `responder` before reporting an error.
    pub fn with_responder(mut self, responder: impl Responder + 'static) -> Self {
        self.responder = Some(Box::new(responder));
        self
    }

    /// Report every submission to `sink`.
    pub fn with_usage_sink(mut self, sink: impl UsageSink + 'static) -> Self {
        self.usage = Some(Box::new(sink));
        self
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn themes(&self) -> &dyn ThemeRegistry {
        self.themes.as_ref()
    }

    /// Display name of the session's theme, falling back to its key.
    pub fn theme_name(&self, session: &SessionState) -> String {
        self.themes
            .resolve(session.theme())
            .map_or_else(|| session.theme().to_string(), |t| t.name.clone())
    }

    /// Submit one input line.
    ///
    /// Blank input leaves the session untouched. Otherwise the trimmed line
    /// is recorded for recall, editing state is reset, and the output (if
    /// any) is appended to history and returned.
    pub fn run(&mut self, raw: &str, session: &mut SessionState) -> Option<Output> {
        let parsed = parse_input(raw)?;
        let submitted = raw.trim().to_string();

        let output = match self.registry.lookup(&parsed.command) {
            Some(cmd) => {
                let mut ctx = CommandContext::new(&self.registry, self.themes.as_ref(), session);
                let result = cmd.execute(&parsed.args, &mut ctx);
                let effects = ctx.into_effects();
                for effect in effects {
                    apply_effect(self.themes.as_ref(), effect, session);
                }
                match result {
                    Ok(out) => out,
                    Err(e) => {
                        if !e.is_user_error() {
                            log::warn!("Command {} failed: {e}", parsed.command);
                        }
                        Some(Output::error(e.to_string()))
                    },
                }
            },
            None => fallback(&mut self.responder, &parsed.command, &submitted),
        };

        session.record_submission(submitted.clone());
        if let Some(out) = &output {
            session.push_entry(HistoryEntry::new(Some(submitted), out.clone()));
        }

        let kind = output.as_ref().map_or(OutputKind::Noop, Output::kind);
        log::debug!("{} -> {kind}", parsed.command);
        if let Some(sink) = self.usage.as_mut() {
            sink.record(&parsed.command, kind);
        }
        output
    }

    /// Switch to the theme after the current one, wrapping around.
    pub fn cycle_theme(&self, session: &mut SessionState) -> Option<&ThemeDescriptor> {
        let next = self.themes.next(session.theme())?;
        session.apply_theme(&next.key, &next.name);
        log::info!("Theme cycled to {}", next.key);
        Some(next)
    }

    /// Switch to a named theme. Unknown names leave the session unchanged.
    pub fn set_theme(&self, session: &mut SessionState, name: &str) -> Option<&ThemeDescriptor> {
        let theme = self.themes.resolve(name)?;
        session.apply_theme(&theme.key, &theme.name);
        Some(theme)
    }
}

fn fallback(
    responder: &mut Option<Box<dyn Responder>>,
    command: &str,
    input: &str,
) -> Option<Output> {
    let answer = responder
        .as_mut()
        .and_then(|r| r.respond(&input.to_lowercase()));
    answer.or_else(|| {
        let err = FolioError::UnknownCommand(command.to_string());
        Some(Output::error(err.to_string()))
    })
}

fn apply_effect(themes: &dyn ThemeRegistry, effect: Effect, session: &mut SessionState) {
    match effect {
        Effect::SetTheme(key) => match themes.resolve(&key) {
            Some(theme) => {
                session.apply_theme(&theme.key, &theme.name);
                log::info!("Theme set to {}", theme.key);
            },
            None => log::warn!("Ignoring switch to unknown theme {key}"),
        },
        Effect::SetPersistHistory(persist) => session.set_persist_history(persist),
        Effect::ClearHistory => session.clear_history(),
    }
}
