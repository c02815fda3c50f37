//! Usage reporting: one `(command, kind)` record per submission.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::interpreter::OutputKind;

/// Receives one record per submitted line.
///
/// `kind` is `Noop` when the submission produced no output.
pub trait UsageSink {
    fn record(&mut self, command: &str, kind: OutputKind);
}

impl<S: UsageSink + ?Sized> UsageSink for Rc<RefCell<S>> {
    fn record(&mut self, command: &str, kind: OutputKind) {
        self.borrow_mut().record(command, kind);
    }
}

/// Logs each record at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl UsageSink for LogSink {
    fn record(&mut self, command: &str, kind: OutputKind) {
        log::debug!("usage: {command} -> {kind}");
    }
}

/// In-memory tally of submissions.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UsageCounter {
    counts: BTreeMap<(String, OutputKind), u64>,
}

impl UsageCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submissions of `command`, any kind.
    pub fn count(&self, command: &str) -> u64 {
        self.counts
            .iter()
            .filter(|((name, _), _)| name == command)
            .map(|(_, n)| n)
            .sum()
    }

    /// Submissions of `command` that produced `kind`.
    pub fn count_kind(&self, command: &str, kind: OutputKind) -> u64 {
        self.counts
            .get(&(command.to_string(), kind))
            .copied()
            .unwrap_or(0)
    }

    /// All submissions.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// `(command, kind, count)` rows sorted by command then kind.
    pub fn rows(&self) -> impl Iterator<Item = (&str, OutputKind, u64)> {
        self.counts
            .iter()
            .map(|((name, kind), n)| (name.as_str(), *kind, *n))
    }
}

impl UsageSink for UsageCounter {
    fn record(&mut self, command: &str, kind: OutputKind) {
        *self.counts.entry((command.to_string(), kind)).or_insert(0) += 1;
    }
}
