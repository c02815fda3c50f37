//! Session state: input line, visible history, recall index, theme, and
//! completion state.
//!
//! All mutation goes through the dispatcher and the navigation functions in
//! this crate; outside callers get read accessors plus `initialize_welcome`
//! and `tick`.

use serde::{Deserialize, Serialize};

use folio_types::config::FolioConfig;

use crate::interpreter::{Output, OutputKind};

/// Default time the welcome banner stays highlighted after a theme change.
pub const DEFAULT_HIGHLIGHT_MS: u32 = 300;

/// One item of visible history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Submitted input. `None` for system entries like the welcome banner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    command: Option<String>,
    output: Output,
    /// Wall-clock `HH:MM:SS` when the entry was created.
    timestamp: String,
    /// Transient highlight marker, never persisted.
    #[serde(skip)]
    updated: bool,
}

impl HistoryEntry {
    /// Entry for a submitted command, stamped with the local time.
    pub fn new(command: Option<String>, output: Output) -> Self {
        Self {
            command,
            output,
            timestamp: now_timestamp(),
            updated: false,
        }
    }

    /// Entry with an explicit timestamp.
    pub fn with_timestamp(command: Option<String>, output: Output, timestamp: impl Into<String>) -> Self {
        Self {
            command,
            output,
            timestamp: timestamp.into(),
            updated: false,
        }
    }

    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Whether the entry is highlighted after an in-place update.
    pub fn updated(&self) -> bool {
        self.updated
    }

    /// Whether this is the welcome banner.
    pub fn is_welcome(&self) -> bool {
        self.output.kind() == OutputKind::Welcome
    }
}

fn now_timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// Tab-completion cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TabCycle {
    #[default]
    Idle,
    /// Repeated Tab presses rotate through matches of the frozen `query`.
    Cycling { query: String, index: usize },
}

/// Pending clear of the welcome highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HighlightTimer {
    generation: u64,
    remaining_ms: u32,
}

/// The welcome banner text for a given theme display name.
pub fn welcome_banner(theme_name: &str) -> String {
    format!(
        "╔═══════════════════════════════════════════════════╗\n\
         ║     Welcome to Portfolio Terminal v2.0            ║\n\
         ║                                                   ║\n\
         ║  Type 'help' for commands                         ║\n\
         ║  Press TAB for autocomplete • Use ↑/↓ for history ║\n\
         ╚═══════════════════════════════════════════════════╝\n\
         \n\
         Current theme: {theme_name}\n\
         Type 'themes' to list color schemes."
    )
}

/// Mutable state of one terminal session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    input: String,
    history: Vec<HistoryEntry>,
    command_history: Vec<String>,
    history_index: Option<usize>,
    theme: String,
    suggestions: Vec<String>,
    tab_cycle: TabCycle,
    persist_history: bool,
    highlight_ms: u32,
    highlight_generation: u64,
    timers: Vec<HighlightTimer>,
}

impl SessionState {
    /// Fresh session with the given theme key.
    pub fn new(theme: impl Into<String>) -> Self {
        Self {
            input: String::new(),
            history: Vec::new(),
            command_history: Vec::new(),
            history_index: None,
            theme: theme.into(),
            suggestions: Vec::new(),
            tab_cycle: TabCycle::Idle,
            persist_history: false,
            highlight_ms: DEFAULT_HIGHLIGHT_MS,
            highlight_generation: 0,
            timers: Vec::new(),
        }
    }

    /// Fresh session using the configured default theme and highlight time.
    pub fn from_config(config: &FolioConfig) -> Self {
        Self::new(config.default_theme.as_str()).with_highlight_ms(config.highlight_ms)
    }

    /// Override how long the welcome highlight lasts.
    pub fn with_highlight_ms(mut self, ms: u32) -> Self {
        self.highlight_ms = ms;
        self
    }

    // -- Read accessors --------------------------------------------------

    /// Current contents of the input line.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Visible history, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Every submitted raw command, oldest first.
    pub fn command_history(&self) -> &[String] {
        &self.command_history
    }

    /// Recall position counted back from the most recent command.
    pub fn history_index(&self) -> Option<usize> {
        self.history_index
    }

    /// Active theme key.
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Completion candidates currently offered.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn tab_cycle(&self) -> &TabCycle {
        &self.tab_cycle
    }

    /// Whether a Tab cycle is in progress.
    pub fn is_cycling(&self) -> bool {
        matches!(self.tab_cycle, TabCycle::Cycling { .. })
    }

    /// Whether history survives across sessions.
    pub fn persist_history(&self) -> bool {
        self.persist_history
    }

    /// The welcome entry, if it is still at the top of history.
    pub fn welcome(&self) -> Option<&HistoryEntry> {
        self.history.first().filter(|e| e.is_welcome())
    }

    // -- Public mutation -------------------------------------------------

    /// Show the welcome banner when history is empty.
    pub fn initialize_welcome(&mut self, theme_name: &str) {
        if self.history.is_empty() {
            self.history
                .push(HistoryEntry::new(None, Output::welcome(welcome_banner(theme_name))));
        }
    }

    /// Advance highlight timers by `dt_ms` milliseconds.
    pub fn tick(&mut self, dt_ms: u32) {
        let mut fired = Vec::new();
        for timer in &mut self.timers {
            timer.remaining_ms = timer.remaining_ms.saturating_sub(dt_ms);
            if timer.remaining_ms == 0 {
                fired.push(timer.generation);
            }
        }
        self.timers.retain(|t| t.remaining_ms > 0);
        for generation in fired {
            self.clear_highlight(generation);
        }
    }

    /// Whether a highlight clear is still pending.
    pub fn has_pending_highlight(&self) -> bool {
        !self.timers.is_empty()
    }

    // -- Crate-internal mutation -----------------------------------------

    pub(crate) fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub(crate) fn set_suggestions(&mut self, suggestions: Vec<String>) {
        self.suggestions = suggestions;
    }

    pub(crate) fn set_tab_cycle(&mut self, cycle: TabCycle) {
        self.tab_cycle = cycle;
    }

    pub(crate) fn set_history_index(&mut self, index: Option<usize>) {
        self.history_index = index;
    }

    pub(crate) fn set_persist_history(&mut self, persist: bool) {
        self.persist_history = persist;
    }

    pub(crate) fn clear_history(&mut self) {
        self.history.clear();
    }

    pub(crate) fn push_entry(&mut self, entry: HistoryEntry) {
        self.history.push(entry);
    }

    /// Record a submitted line and reset the editing state.
    pub(crate) fn record_submission(&mut self, submitted: String) {
        self.command_history.push(submitted);
        self.history_index = None;
        self.input.clear();
        self.suggestions.clear();
        self.tab_cycle = TabCycle::Idle;
    }

    /// Switch theme and refresh the welcome banner if it is on top.
    pub(crate) fn apply_theme(&mut self, key: &str, display_name: &str) {
        self.theme = key.to_string();
        let Some(first) = self.history.first_mut() else {
            return;
        };
        if !first.is_welcome() {
            return;
        }
        first.output = Output::welcome(welcome_banner(display_name));
        first.updated = true;
        self.highlight_generation += 1;
        self.timers.push(HighlightTimer {
            generation: self.highlight_generation,
            remaining_ms: self.highlight_ms,
        });
    }

    /// Replace persisted fields wholesale.
    pub(crate) fn restore(
        &mut self,
        theme: String,
        persist_history: bool,
        history: Vec<HistoryEntry>,
        command_history: Vec<String>,
    ) {
        self.theme = theme;
        self.persist_history = persist_history;
        self.history = history;
        self.command_history = command_history;
        self.history_index = None;
    }

    fn clear_highlight(&mut self, generation: u64) {
        if generation != self.highlight_generation {
            return;
        }
        if let Some(first) = self.history.first_mut().filter(|e| e.is_welcome()) {
            first.updated = false;
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::from_config(&FolioConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn welcomed() -> SessionState {
        let mut s = SessionState::new("matrix");
        s.initialize_welcome("Matrix");
        s
    }

    #[test]
    fn new_session_is_empty() {
        let s = SessionState::default();
        assert_eq!(s.theme(), "matrix");
        assert!(s.history().is_empty());
        assert!(s.command_history().is_empty());
        assert_eq!(s.history_index(), None);
        assert!(!s.persist_history());
        assert!(!s.is_cycling());
    }

    #[test]
    fn welcome_added_once() {
        let mut s = welcomed();
        s.initialize_welcome("Matrix");
        assert_eq!(s.history().len(), 1);
        let entry = s.welcome().unwrap();
        assert_eq!(entry.command(), None);
        assert!(entry.output().content().contains("Current theme: Matrix"));
        assert!(!entry.updated());
    }

    #[test]
    fn welcome_skipped_when_history_exists() {
        let mut s = SessionState::new("matrix");
        s.push_entry(HistoryEntry::new(Some("about".into()), Output::info("hi")));
        s.initialize_welcome("Matrix");
        assert_eq!(s.history().len(), 1);
        assert!(s.welcome().is_none());
    }

    #[test]
    fn banner_layout() {
        let banner = welcome_banner("Dracula");
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines.len(), 9);
        assert!(lines[0].starts_with('╔'));
        assert_eq!(lines[1], "║     Welcome to Portfolio Terminal v2.0            ║");
        assert_eq!(lines[6], "");
        assert_eq!(lines[7], "Current theme: Dracula");
        assert_eq!(lines[8], "Type 'themes' to list color schemes.");
    }

    #[test]
    fn timestamp_shape() {
        let e = HistoryEntry::new(None, Output::info("x"));
        let ts = e.timestamp();
        assert_eq!(ts.len(), 8);
        assert_eq!(&ts[2..3], ":");
        assert_eq!(&ts[5..6], ":");
    }

    #[test]
    fn theme_change_highlights_then_clears() {
        let mut s = welcomed();
        s.apply_theme("dracula", "Dracula");
        assert_eq!(s.theme(), "dracula");
        let first = s.welcome().unwrap();
        assert!(first.updated());
        assert!(first.output().content().contains("Current theme: Dracula"));

        s.tick(299);
        assert!(s.welcome().unwrap().updated());
        s.tick(1);
        assert!(!s.welcome().unwrap().updated());
        assert!(!s.has_pending_highlight());
    }

    #[test]
    fn theme_change_without_welcome_only_sets_theme() {
        let mut s = SessionState::new("matrix");
        s.push_entry(HistoryEntry::new(Some("about".into()), Output::info("a")));
        s.apply_theme("monokai", "Monokai");
        assert_eq!(s.theme(), "monokai");
        assert_eq!(s.history()[0].output().content(), "a");
        assert!(!s.has_pending_highlight());
    }

    #[test]
    fn stale_timer_does_not_clear_newer_highlight() {
        let mut s = welcomed();
        s.apply_theme("dracula", "Dracula");
        s.tick(200);
        s.apply_theme("monokai", "Monokai");
        // First timer fires here; the second change is still highlighted.
        s.tick(100);
        assert!(s.welcome().unwrap().updated());
        s.tick(200);
        assert!(!s.welcome().unwrap().updated());
    }

    #[test]
    fn timer_ignores_replaced_welcome() {
        let mut s = welcomed();
        s.apply_theme("dracula", "Dracula");
        s.clear_history();
        s.push_entry(HistoryEntry::new(Some("about".into()), Output::info("a")));
        s.tick(300);
        assert!(!s.history()[0].updated());
    }

    #[test]
    fn record_submission_resets_editing_state() {
        let mut s = SessionState::new("matrix");
        s.set_input("hel");
        s.set_suggestions(vec!["help".into()]);
        s.set_history_index(Some(2));
        s.set_tab_cycle(TabCycle::Cycling {
            query: "h".into(),
            index: 1,
        });
        s.record_submission("help".into());
        assert_eq!(s.command_history(), ["help".to_string()]);
        assert_eq!(s.input(), "");
        assert!(s.suggestions().is_empty());
        assert_eq!(s.history_index(), None);
        assert_eq!(s.tab_cycle(), &TabCycle::Idle);
    }

    #[test]
    fn updated_flag_not_serialized() {
        let mut s = welcomed();
        s.apply_theme("hacker", "Hacker");
        let json = serde_json::to_string(&s.history()[0]).unwrap();
        assert!(!json.contains("updated"));
        assert!(!json.contains("\"command\""));
        let back: HistoryEntry = serde_json::from_str(&json).unwrap();
        assert!(!back.updated());
        assert!(back.is_welcome());
    }

    #[test]
    fn from_config_uses_defaults() {
        let cfg = FolioConfig {
            default_theme: "hacker".into(),
            highlight_ms: 50,
            ..FolioConfig::default()
        };
        let mut s = SessionState::from_config(&cfg);
        assert_eq!(s.theme(), "hacker");
        s.initialize_welcome("Hacker");
        s.apply_theme("matrix", "Matrix");
        s.tick(50);
        assert!(!s.welcome().unwrap().updated());
    }
}
