//! End-to-end behavior of dispatch, recall, and completion through the
//! public API.

use folio_skin::ThemeSet;
use folio_terminal::commands::{ClearCmd, HelpCmd};
use folio_terminal::completion::{dismiss, tab_complete, type_input};
use folio_terminal::recall::{recall_down, recall_up};
use folio_terminal::{
    Command, CommandContext, CommandRegistry, Dispatcher, OutputKind, Portfolio, SessionState,
    TabCycle, builtin_registry,
};
use folio_types::error::Result;
use proptest::prelude::*;

struct AboutCmd;
impl Command for AboutCmd {
    fn name(&self) -> &str {
        "about"
    }
    fn description(&self) -> &str {
        "Learn about me"
    }
    fn execute(
        &self,
        _args: &str,
        _ctx: &mut CommandContext<'_>,
    ) -> Result<Option<folio_terminal::Output>> {
        Ok(Some(folio_terminal::Output::info("hello")))
    }
}

fn full_dispatcher() -> Dispatcher {
    Dispatcher::new(
        builtin_registry(&Portfolio::bundled().unwrap()),
        ThemeSet::builtin(),
    )
}

fn welcomed() -> SessionState {
    let mut s = SessionState::new("matrix");
    s.initialize_welcome("Matrix");
    s
}

#[test]
fn help_lists_small_registry_in_order() {
    let mut reg = CommandRegistry::new();
    reg.register(Box::new(HelpCmd));
    reg.register(Box::new(AboutCmd));
    reg.register(Box::new(ClearCmd));
    let mut d = Dispatcher::new(reg, ThemeSet::builtin());
    let mut s = SessionState::new("matrix");

    let out = d.run("help", &mut s).unwrap();
    assert_eq!(out.kind(), OutputKind::Info);
    let text = out.content();
    let help = text.find("  help ").unwrap();
    let about = text.find("  about ").unwrap();
    let clear = text.find("  clear ").unwrap();
    assert!(help < about && about < clear);
}

#[test]
fn help_output_matches_direct_execution() {
    let mut d = full_dispatcher();
    let mut s = welcomed();
    d.run("about", &mut s);

    let expected = {
        let themes = ThemeSet::builtin();
        let mut ctx = CommandContext::new(d.registry(), &themes, &s);
        d.registry()
            .lookup("help")
            .unwrap()
            .execute("", &mut ctx)
            .unwrap()
            .unwrap()
    };
    d.run("help", &mut s);
    assert_eq!(s.history().last().unwrap().output(), &expected);
}

#[test]
fn unknown_command_is_deterministic() {
    let mut d = full_dispatcher();
    let mut s = SessionState::new("matrix");
    let first = d.run("frobnicate now", &mut s).unwrap();
    let second = d.run("frobnicate now", &mut s).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.kind(), OutputKind::Error);
}

#[test]
fn theme_round_trip() {
    let mut d = full_dispatcher();
    let mut s = welcomed();
    d.run("theme cyberpunk", &mut s);
    let out = d.run("theme", &mut s).unwrap();
    assert!(out.content().starts_with("Current theme: Cyberpunk\n"));

    let out = d.run("theme nope", &mut s).unwrap();
    assert_eq!(out.kind(), OutputKind::Error);
    for name in ["matrix", "dracula", "monokai", "cyberpunk", "hacker"] {
        assert!(out.content().contains(name));
    }
    assert_eq!(s.theme(), "cyberpunk");
}

#[test]
fn persist_toggle_does_not_touch_history() {
    let mut d = full_dispatcher();
    let mut s = welcomed();
    d.run("about", &mut s);
    let on = d.run("history persist on", &mut s).unwrap();
    let off = d.run("history persist off", &mut s).unwrap();
    assert_eq!(on.kind(), OutputKind::Success);
    assert_eq!(off.kind(), OutputKind::Success);
    assert!(!s.persist_history());
    // Welcome, about, and the two toggle confirmations.
    assert_eq!(s.history().len(), 4);
}

#[test]
fn clear_leaves_history_empty() {
    let mut d = full_dispatcher();
    let mut s = welcomed();
    d.run("skills", &mut s);
    d.run("projects", &mut s);
    assert_eq!(d.run("clear", &mut s), None);
    assert!(s.history().is_empty());
    assert_eq!(d.run("CLEAR", &mut s), None);
    assert!(s.history().is_empty());
}

#[test]
fn tab_cycle_visits_every_match() {
    let reg = builtin_registry(&Portfolio::bundled().unwrap());
    let mut s = SessionState::new("matrix");
    type_input(&mut s, &reg, "th", 5);
    let mut seen = Vec::new();
    for _ in 0..4 {
        tab_complete(&mut s, &reg);
        seen.push(s.input().to_string());
    }
    assert_eq!(seen, vec!["theme ", "themes ", "theme ", "themes "]);
    dismiss(&mut s);
    assert_eq!(s.tab_cycle(), &TabCycle::Idle);
}

#[test]
fn recall_clamps_at_oldest() {
    let mut d = full_dispatcher();
    let mut s = SessionState::new("matrix");
    for cmd in ["about", "skills", "contact"] {
        d.run(cmd, &mut s);
    }
    for _ in 0..10 {
        recall_up(&mut s);
    }
    assert_eq!(s.input(), "about");
    assert_eq!(s.history_index(), Some(2));
    recall_down(&mut s);
    assert_eq!(s.input(), "skills");
}

proptest! {
    #[test]
    fn blank_input_never_mutates(ws in "[ \t]{0,8}", prior in proptest::collection::vec("about|skills|xyz", 0..4)) {
        let mut d = full_dispatcher();
        let mut s = welcomed();
        for cmd in &prior {
            d.run(cmd, &mut s);
        }
        let before = s.clone();
        prop_assert_eq!(d.run(&ws, &mut s), None);
        prop_assert_eq!(s, before);
    }

    #[test]
    fn every_submission_is_recorded(lines in proptest::collection::vec("[a-z]{1,8}( [a-z]{1,5})?", 1..10)) {
        let mut d = full_dispatcher();
        let mut s = welcomed();
        for (i, line) in lines.iter().enumerate() {
            d.run(line, &mut s);
            prop_assert_eq!(s.command_history().len(), i + 1);
            prop_assert_eq!(s.input(), "");
            prop_assert_eq!(s.history_index(), None);
        }
    }

    #[test]
    fn tab_cycle_covers_all_candidates(
        prefix in prop::sample::select(vec!["a", "c", "e", "h", "s", "t", "th", "the", "H"]),
    ) {
        let reg = builtin_registry(&Portfolio::bundled().unwrap());
        let matches = reg.completions(prefix);
        prop_assert!(matches.len() > 1);
        let mut s = SessionState::new("matrix");
        type_input(&mut s, &reg, prefix, 5);
        let mut seen = Vec::new();
        for _ in 0..matches.len() {
            tab_complete(&mut s, &reg);
            seen.push(s.input().trim_end().to_string());
        }
        prop_assert_eq!(seen, matches);
    }
}
