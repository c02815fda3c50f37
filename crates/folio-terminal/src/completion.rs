//! Live suggestions while typing and Tab completion with cycling.

use crate::interpreter::CommandRegistry;
use crate::session::{SessionState, TabCycle};

/// Default number of live suggestions shown while typing.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Command names starting with `prefix`, at most `limit` of them.
///
/// An empty prefix offers nothing.
pub fn suggestions_for(registry: &CommandRegistry, prefix: &str, limit: usize) -> Vec<String> {
    if prefix.is_empty() {
        return Vec::new();
    }
    let mut matches = registry.completions(prefix);
    matches.truncate(limit);
    matches
}

/// Replace the input line, refresh suggestions, and end any Tab cycle.
pub fn type_input(
    session: &mut SessionState,
    registry: &CommandRegistry,
    text: impl Into<String>,
    limit: usize,
) {
    let text = text.into();
    let suggestions = suggestions_for(registry, &text, limit);
    session.set_input(text);
    session.set_suggestions(suggestions);
    session.set_tab_cycle(TabCycle::Idle);
}

/// Handle a Tab press.
///
/// The first press completes to the first match and, when there are several,
/// starts a cycle over all of them. Further presses rotate through that same
/// match list even though the input no longer equals the original prefix.
pub fn tab_complete(session: &mut SessionState, registry: &CommandRegistry) {
    let trimmed = session.input().trim();
    if trimmed.is_empty() {
        return;
    }
    let (query, cycling_index) = match session.tab_cycle() {
        TabCycle::Cycling { query, index } => (query.clone(), Some(*index)),
        TabCycle::Idle => (trimmed.to_string(), None),
    };

    let matches = registry.completions(&query);
    if matches.is_empty() {
        session.set_suggestions(Vec::new());
        session.set_tab_cycle(TabCycle::Idle);
        return;
    }

    match cycling_index {
        Some(index) => {
            let next = (index + 1) % matches.len();
            session.set_input(format!("{} ", matches[next]));
            session.set_tab_cycle(TabCycle::Cycling { query, index: next });
        },
        None if matches.len() == 1 => {
            session.set_input(format!("{} ", matches[0]));
            session.set_suggestions(Vec::new());
        },
        None => {
            session.set_input(format!("{} ", matches[0]));
            session.set_suggestions(matches);
            session.set_tab_cycle(TabCycle::Cycling { query, index: 0 });
        },
    }
}

/// End any Tab cycle without touching input or suggestions.
pub fn reset_tab_cycle(session: &mut SessionState) {
    session.set_tab_cycle(TabCycle::Idle);
}

/// Escape: drop suggestions and end any Tab cycle.
pub fn dismiss(session: &mut SessionState) {
    session.set_suggestions(Vec::new());
    session.set_tab_cycle(TabCycle::Idle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{Command, CommandContext, Output};
    use folio_types::error::Result;

    struct Named(&'static str);
    impl Command for Named {
        fn name(&self) -> &str {
            self.0
        }
        fn description(&self) -> &str {
            ""
        }
        fn execute(&self, _: &str, _: &mut CommandContext<'_>) -> Result<Option<Output>> {
            Ok(None)
        }
    }

    fn registry(names: &[&'static str]) -> CommandRegistry {
        let mut reg = CommandRegistry::new();
        for name in names {
            reg.register(Box::new(Named(name)));
        }
        reg
    }

    #[test]
    fn suggestions_are_limited_prefix_matches() {
        let reg = registry(&["a1", "a2", "a3", "a4", "a5", "a6", "b"]);
        assert_eq!(suggestions_for(&reg, "a", 5), vec!["a1", "a2", "a3", "a4", "a5"]);
        assert_eq!(suggestions_for(&reg, "A", 2), vec!["a1", "a2"]);
        assert!(suggestions_for(&reg, "", 5).is_empty());
        assert!(suggestions_for(&reg, "z", 5).is_empty());
    }

    #[test]
    fn typing_updates_suggestions_and_ends_cycle() {
        let reg = registry(&["theme", "themes", "help"]);
        let mut s = SessionState::new("matrix");
        s.set_tab_cycle(TabCycle::Cycling { query: "h".into(), index: 0 });
        type_input(&mut s, &reg, "th", 5);
        assert_eq!(s.input(), "th");
        assert_eq!(s.suggestions(), ["theme".to_string(), "themes".to_string()]);
        assert!(!s.is_cycling());
    }

    #[test]
    fn tab_on_blank_input_is_noop() {
        let reg = registry(&["help"]);
        let mut s = SessionState::new("matrix");
        s.set_input("   ");
        tab_complete(&mut s, &reg);
        assert_eq!(s.input(), "   ");
        assert!(!s.is_cycling());
    }

    #[test]
    fn tab_single_match_completes() {
        let reg = registry(&["about", "help"]);
        let mut s = SessionState::new("matrix");
        type_input(&mut s, &reg, "ab", 5);
        tab_complete(&mut s, &reg);
        assert_eq!(s.input(), "about ");
        assert!(s.suggestions().is_empty());
        assert!(!s.is_cycling());
    }

    #[test]
    fn tab_no_match_clears() {
        let reg = registry(&["about"]);
        let mut s = SessionState::new("matrix");
        s.set_input("zz");
        s.set_suggestions(vec!["stale".into()]);
        tab_complete(&mut s, &reg);
        assert_eq!(s.input(), "zz");
        assert!(s.suggestions().is_empty());
        assert!(!s.is_cycling());
    }

    #[test]
    fn tab_cycles_through_frozen_matches() {
        let reg = registry(&["theme", "themes", "help"]);
        let mut s = SessionState::new("matrix");
        type_input(&mut s, &reg, "th", 5);
        tab_complete(&mut s, &reg);
        assert_eq!(s.input(), "theme ");
        assert_eq!(s.suggestions().len(), 2);
        tab_complete(&mut s, &reg);
        assert_eq!(s.input(), "themes ");
        tab_complete(&mut s, &reg);
        assert_eq!(s.input(), "theme ");
        assert_eq!(s.tab_cycle(), &TabCycle::Cycling { query: "th".into(), index: 0 });
    }

    #[test]
    fn escape_dismisses() {
        let reg = registry(&["theme", "themes"]);
        let mut s = SessionState::new("matrix");
        type_input(&mut s, &reg, "t", 5);
        tab_complete(&mut s, &reg);
        dismiss(&mut s);
        assert!(s.suggestions().is_empty());
        assert!(!s.is_cycling());
        assert_eq!(s.input(), "theme ");
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn cycle_index_in_bounds(presses in 1usize..20) {
                let reg = registry(&["sa", "sb", "sc", "other"]);
                let mut s = SessionState::new("matrix");
                type_input(&mut s, &reg, "s", 5);
                for _ in 0..presses {
                    tab_complete(&mut s, &reg);
                    if let TabCycle::Cycling { index, .. } = s.tab_cycle() {
                        prop_assert!(*index < 3);
                    }
                    prop_assert!(s.input().starts_with('s'));
                    prop_assert!(s.input().ends_with(' '));
                }
            }
        }
    }
}
