//! Up/Down recall of previously submitted commands.
//!
//! The index counts back from the most recent command: `Some(0)` is the last
//! submission, `Some(len - 1)` the oldest. `None` means the user is editing a
//! fresh line.

use crate::session::{SessionState, TabCycle};

/// Result of one recall step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recall {
    pub index: Option<usize>,
    pub input: String,
}

/// Step one entry further into the past.
///
/// At the oldest entry the state is returned unchanged.
pub fn step_up(command_history: &[String], index: Option<usize>, input: &str) -> Recall {
    let next = index.map_or(0, |i| i + 1);
    if next < command_history.len() {
        Recall {
            index: Some(next),
            input: command_history[command_history.len() - 1 - next].clone(),
        }
    } else {
        Recall {
            index,
            input: input.to_string(),
        }
    }
}

/// Step one entry towards the present.
///
/// Stepping past the most recent entry leaves recall with an empty line; with
/// no recall active this is a no-op.
pub fn step_down(command_history: &[String], index: Option<usize>, input: &str) -> Recall {
    match index {
        Some(i) if i > 0 => {
            let next = i - 1;
            let pos = command_history.len().checked_sub(1 + next);
            match pos.and_then(|p| command_history.get(p)) {
                Some(cmd) => Recall {
                    index: Some(next),
                    input: cmd.clone(),
                },
                None => Recall {
                    index: None,
                    input: String::new(),
                },
            }
        },
        Some(_) => Recall {
            index: None,
            input: String::new(),
        },
        None => Recall {
            index: None,
            input: input.to_string(),
        },
    }
}

/// Apply `step_up` to the session. Also ends any Tab cycle.
pub fn recall_up(session: &mut SessionState) {
    let r = step_up(session.command_history(), session.history_index(), session.input());
    apply(session, r);
}

/// Apply `step_down` to the session. Also ends any Tab cycle.
pub fn recall_down(session: &mut SessionState) {
    let r = step_down(session.command_history(), session.history_index(), session.input());
    apply(session, r);
}

fn apply(session: &mut SessionState, recall: Recall) {
    session.set_history_index(recall.index);
    session.set_input(recall.input);
    session.set_tab_cycle(TabCycle::Idle);
}
