//! Portfolio terminal entry point.
//!
//! Reads commands from stdin one line at a time. Configuration comes from
//! the path given as the first argument, `FOLIO_CONFIG`, or `./folio.toml`,
//! in that order; with none of them the defaults apply.

mod repl;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};

use folio_skin::ThemeSet;
use folio_store::{FileStore, MemoryStore};
use folio_terminal::{Portfolio, Terminal};
use folio_types::config::FolioConfig;

use repl::Step;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = load_config()?;
    let mut themes = ThemeSet::builtin();
    if let Some(path) = &config.theme_file {
        let extra = ThemeSet::load(path)
            .with_context(|| format!("loading themes from {}", path.display()))?;
        themes.extend(extra)?;
    }
    let portfolio = match &config.content_file {
        Some(path) => Portfolio::load(path)
            .with_context(|| format!("loading content from {}", path.display()))?,
        None => Portfolio::bundled()?,
    };

    let terminal = Terminal::from_config(&config, &portfolio, themes)?;
    let mut terminal = match &config.storage_dir {
        Some(dir) => {
            let store = FileStore::open(dir)
                .with_context(|| format!("opening store at {}", dir.display()))?;
            terminal.with_storage(store, config.storage_key.clone())
        },
        None => terminal.with_storage(MemoryStore::new(), config.storage_key.clone()),
    };
    if terminal.start()? {
        log::info!("Resumed saved session");
    }

    let mut out = io::stdout().lock();
    for entry in terminal.session().history() {
        writeln!(out, "{}", render(&terminal, entry.output()))?;
    }

    let mut last_tick = Instant::now();
    let stdin = io::stdin();
    loop {
        write!(out, "{} {}", config.prompt, terminal.session().input())?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let elapsed = last_tick.elapsed().as_millis();
        terminal.tick(u32::try_from(elapsed).unwrap_or(u32::MAX));
        last_tick = Instant::now();

        let line = line.trim_end_matches(['\r', '\n']);
        match repl::apply(&mut terminal, repl::parse_line(line)) {
            Step::Output(output) => writeln!(out, "{}\n", render(&terminal, &output))?,
            Step::Buffer => {
                let suggestions = terminal.session().suggestions();
                if !suggestions.is_empty() {
                    writeln!(out, "  [{}]", suggestions.join("  "))?;
                }
            },
            Step::Nothing => {},
            Step::Quit => break,
        }
    }

    terminal.save()?;
    Ok(())
}

fn render(terminal: &Terminal, output: &folio_terminal::Output) -> String {
    match terminal.dispatcher().themes().resolve(terminal.session().theme()) {
        Some(theme) => repl::paint(output, &theme.colors),
        None => output.content().to_string(),
    }
}

fn load_config() -> Result<FolioConfig> {
    let explicit = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("FOLIO_CONFIG").ok())
        .map(PathBuf::from);
    let path = match explicit {
        Some(path) => path,
        None if Path::new("folio.toml").exists() => PathBuf::from("folio.toml"),
        None => return Ok(FolioConfig::default()),
    };
    let config = FolioConfig::load(&path)
        .with_context(|| format!("loading config from {}", path.display()))?;
    log::info!("Using config {}", path.display());
    Ok(config)
}
