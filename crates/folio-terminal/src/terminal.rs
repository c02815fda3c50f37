//! Keyboard-driven terminal: ties the dispatcher, session, completion,
//! recall, palette, and persistence together behind `handle_key`.

use folio_skin::ThemeSet;
use folio_store::KeyValueStore;
use folio_types::config::FolioConfig;
use folio_types::error::Result;
use folio_types::input::{Key, KeyEvent};

use crate::commands::builtin_registry;
use crate::completion::{dismiss, reset_tab_cycle, tab_complete, type_input};
use crate::content::Portfolio;
use crate::dispatch::Dispatcher;
use crate::interpreter::Output;
use crate::palette::CommandPalette;
use crate::persist::{SessionSnapshot, load_snapshot, save_session};
use crate::recall::{recall_down, recall_up};
use crate::responder::KeywordResponder;
use crate::session::SessionState;
use crate::usage::LogSink;

/// Where and under which key the session is saved.
struct Storage {
    store: Box<dyn KeyValueStore>,
    key: String,
}

pub struct Terminal {
    dispatcher: Dispatcher,
    session: SessionState,
    suggestion_limit: usize,
    palette: Option<CommandPalette>,
    storage: Option<Storage>,
}

impl Terminal {
    pub fn new(dispatcher: Dispatcher, session: SessionState) -> Self {
        Self {
            dispatcher,
            session,
            suggestion_limit: crate::completion::DEFAULT_SUGGESTION_LIMIT,
            palette: None,
            storage: None,
        }
    }

    /// Build a terminal with every built-in command.
    ///
    /// The keyword responder is attached when `config.responder` is set.
    /// Usage records go to the debug log.
    pub fn from_config(config: &FolioConfig, portfolio: &Portfolio, themes: ThemeSet) -> Result<Self> {
        themes.require(&config.default_theme)?;
        let registry = builtin_registry(portfolio);
        let mut dispatcher = Dispatcher::new(registry, themes).with_usage_sink(LogSink);
        if config.responder {
            dispatcher = dispatcher.with_responder(KeywordResponder::portfolio()?);
        }
        let session = SessionState::from_config(config);
        let mut terminal = Self::new(dispatcher, session);
        terminal.suggestion_limit = config.suggestion_limit;
        Ok(terminal)
    }

    /// Save after every submission and theme change.
    pub fn with_storage(mut self, store: impl KeyValueStore + 'static, key: impl Into<String>) -> Self {
        self.storage = Some(Storage {
            store: Box::new(store),
            key: key.into(),
        });
        self
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Restore any saved session, then show the welcome banner if history
    /// is empty. Returns whether a snapshot was restored.
    pub fn start(&mut self) -> Result<bool> {
        let snapshot = match &self.storage {
            Some(storage) => load_snapshot(storage.store.as_ref(), &storage.key)?,
            None => None,
        };
        let restored = snapshot.is_some();
        if let Some(snapshot) = snapshot {
            self.restore(snapshot);
        }
        let name = self.dispatcher.theme_name(&self.session);
        self.session.initialize_welcome(&name);
        Ok(restored)
    }

    fn restore(&mut self, snapshot: SessionSnapshot) {
        let fallback = self.session.theme().to_string();
        snapshot.apply_to(&mut self.session);
        if self.dispatcher.themes().resolve(self.session.theme()).is_none() {
            log::warn!(
                "Saved theme {} is unknown, using {fallback}",
                self.session.theme()
            );
            self.dispatcher.set_theme(&mut self.session, &fallback);
        }
        log::info!(
            "Restored session ({} history entries)",
            self.session.history().len()
        );
    }

    /// Handle one key event. Returns the output when Enter ran a command.
    ///
    /// Edits recompute suggestions and end any tab cycle.
    pub fn handle_key(&mut self, event: KeyEvent) -> Option<Output> {
        if event.is_edit() {
            let mut text = self.session.input().to_string();
            match event {
                KeyEvent::Char(c) => text.push(c),
                KeyEvent::Backspace => {
                    text.pop();
                },
                KeyEvent::Replace(replacement) => text = replacement,
                KeyEvent::Key(_) => {},
            }
            self.type_text(text);
            return None;
        }
        let KeyEvent::Key(key) = event else {
            return None;
        };
        match key {
            Key::Enter => return self.submit(),
            Key::Tab => tab_complete(&mut self.session, self.dispatcher.registry()),
            Key::Up => recall_up(&mut self.session),
            Key::Down => recall_down(&mut self.session),
            Key::Escape => dismiss(&mut self.session),
            Key::CycleTheme => {
                reset_tab_cycle(&mut self.session);
                self.cycle_theme();
            },
        }
        None
    }

    fn type_text(&mut self, text: String) {
        type_input(
            &mut self.session,
            self.dispatcher.registry(),
            text,
            self.suggestion_limit,
        );
    }

    /// Submit the current input line.
    pub fn submit(&mut self) -> Option<Output> {
        let line = self.session.input().to_string();
        self.run(&line)
    }

    /// Submit `line` as if typed.
    pub fn run(&mut self, line: &str) -> Option<Output> {
        if line.trim().is_empty() {
            return None;
        }
        let output = self.dispatcher.run(line, &mut self.session);
        self.persist();
        output
    }

    /// Switch to the next theme.
    pub fn cycle_theme(&mut self) {
        if self.dispatcher.cycle_theme(&mut self.session).is_some() {
            self.persist();
        }
    }

    /// Advance the welcome highlight timers.
    pub fn tick(&mut self, dt_ms: u32) {
        self.session.tick(dt_ms);
    }

    // -- Palette ---------------------------------------------------------

    pub fn open_palette(&mut self) {
        self.palette = Some(CommandPalette::new());
    }

    pub fn close_palette(&mut self) {
        self.palette = None;
    }

    pub fn palette(&self) -> Option<&CommandPalette> {
        self.palette.as_ref()
    }

    pub fn set_palette_query(&mut self, query: &str) {
        if let Some(p) = self.palette.as_mut() {
            p.set_query(query);
        }
    }

    pub fn palette_down(&mut self) {
        if let Some(p) = self.palette.as_mut() {
            p.move_down(self.dispatcher.registry());
        }
    }

    pub fn palette_up(&mut self) {
        if let Some(p) = self.palette.as_mut() {
            p.move_up();
        }
    }

    /// Run the selected palette command and close the palette.
    pub fn palette_select(&mut self) -> Option<Output> {
        let palette = self.palette.take()?;
        let name = palette.selected_name(self.dispatcher.registry())?;
        self.run(&name)
    }

    // -- Persistence -----------------------------------------------------

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(&self.session)
    }

    /// Write the snapshot now. A no-op without storage.
    pub fn save(&mut self) -> Result<()> {
        match self.storage.as_mut() {
            Some(storage) => save_session(storage.store.as_mut(), &storage.key, &self.session),
            None => Ok(()),
        }
    }

    fn persist(&mut self) {
        if let Err(e) = self.save() {
            log::warn!("Failed to save session: {e}");
        }
    }
}
