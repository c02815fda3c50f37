//! Line-mode driver: maps stdin lines to terminal key events and renders
//! outputs with the active theme's colors.
//!
//! A plain line is submitted as typed. An empty line submits whatever is in
//! the input buffer (useful after `:up`). Lines starting with `:` drive the
//! keys a line-based terminal cannot deliver:
//!
//! ```text
//! :tab <text>      type <text>, then press Tab
//! :up / :down      recall older / newer commands
//! :esc             dismiss suggestions
//! :palette <q>     filter the command palette and run the first match
//! :theme-next      cycle to the next theme (Ctrl+T)
//! :quit            exit
//! ```

use folio_skin::{Color, ThemeColors, parse_hex_color};
use folio_terminal::{Output, OutputKind, Terminal};
use folio_types::input::{Key, KeyEvent};

/// One parsed stdin line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Submit this text (empty = submit the current buffer).
    Submit(String),
    Tab(String),
    Up,
    Down,
    Escape,
    Palette(String),
    NextTheme,
    Quit,
    Unknown(String),
}

/// Parse a line read from stdin (without its trailing newline).
pub fn parse_line(line: &str) -> Line {
    let Some(meta) = line.strip_prefix(':') else {
        return Line::Submit(line.to_string());
    };
    let (word, rest) = match meta.split_once(' ') {
        Some((w, r)) => (w, r.trim_start()),
        None => (meta, ""),
    };
    match word {
        "tab" => Line::Tab(rest.to_string()),
        "up" => Line::Up,
        "down" => Line::Down,
        "esc" => Line::Escape,
        "palette" => Line::Palette(rest.to_string()),
        "theme-next" => Line::NextTheme,
        "quit" | "q" => Line::Quit,
        other => Line::Unknown(other.to_string()),
    }
}

/// What the driver should print after handling a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A command ran and produced output.
    Output(Output),
    /// The input buffer changed; show it with any suggestions.
    Buffer,
    /// Nothing to show.
    Nothing,
    Quit,
}

/// Apply one parsed line to the terminal.
pub fn apply(terminal: &mut Terminal, line: Line) -> Step {
    match line {
        Line::Submit(text) => {
            if !text.is_empty() {
                terminal.handle_key(KeyEvent::Replace(text));
            }
            match terminal.handle_key(KeyEvent::Key(Key::Enter)) {
                Some(out) => Step::Output(out),
                None => Step::Nothing,
            }
        },
        Line::Tab(text) => {
            terminal.handle_key(KeyEvent::Replace(text));
            terminal.handle_key(KeyEvent::Key(Key::Tab));
            Step::Buffer
        },
        Line::Up => {
            terminal.handle_key(KeyEvent::Key(Key::Up));
            Step::Buffer
        },
        Line::Down => {
            terminal.handle_key(KeyEvent::Key(Key::Down));
            Step::Buffer
        },
        Line::Escape => {
            terminal.handle_key(KeyEvent::Key(Key::Escape));
            Step::Buffer
        },
        Line::Palette(query) => {
            terminal.open_palette();
            terminal.set_palette_query(&query);
            match terminal.palette_select() {
                Some(out) => Step::Output(out),
                None => Step::Nothing,
            }
        },
        Line::NextTheme => {
            terminal.handle_key(KeyEvent::Key(Key::CycleTheme));
            Step::Nothing
        },
        Line::Quit => Step::Quit,
        Line::Unknown(word) => {
            log::warn!("Unknown meta command :{word}");
            Step::Nothing
        },
    }
}

/// 24-bit ANSI foreground escape.
fn fg(color: Color) -> String {
    format!("\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
}

const RESET: &str = "\x1b[0m";

/// Color an output by kind.
pub fn paint(output: &Output, colors: &ThemeColors) -> String {
    let color = match output.kind() {
        OutputKind::Error => colors.error_color(),
        OutputKind::Success => parse_hex_color(&colors.success).unwrap_or(Color::WHITE),
        OutputKind::Ai => parse_hex_color(&colors.accent).unwrap_or(Color::WHITE),
        OutputKind::Welcome | OutputKind::List => colors.primary_color(),
        OutputKind::Info | OutputKind::Progress | OutputKind::Noop => colors.text_color(),
    };
    format!("{}{}{RESET}", fg(color), output.content())
}
