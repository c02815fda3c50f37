//! Command palette: filter commands by name or description, pick one.

use crate::interpreter::CommandRegistry;

/// One palette row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry<'r> {
    pub name: &'r str,
    pub description: &'r str,
}

/// Filter text and selected row. The list itself is derived from the
/// registry on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandPalette {
    query: String,
    selected: usize,
}

impl CommandPalette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Replace the filter text. Selection goes back to the first row.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.selected = 0;
    }

    /// Commands whose name or description contains the query,
    /// case-insensitively, in declaration order.
    pub fn entries<'r>(&self, registry: &'r CommandRegistry) -> Vec<PaletteEntry<'r>> {
        let q = self.query.trim().to_lowercase();
        registry
            .list_all()
            .filter(|c| {
                q.is_empty()
                    || c.name().contains(&q)
                    || c.description().to_lowercase().contains(&q)
            })
            .map(|c| PaletteEntry {
                name: c.name(),
                description: c.description(),
            })
            .collect()
    }

    /// Move the selection down, stopping at the last row.
    pub fn move_down(&mut self, registry: &CommandRegistry) {
        let len = self.entries(registry).len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    /// Move the selection up, stopping at the first row.
    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Name of the selected command, if the filter matches anything.
    pub fn selected_name(&self, registry: &CommandRegistry) -> Option<String> {
        let entries = self.entries(registry);
        let index = self.selected.min(entries.len().checked_sub(1)?);
        Some(entries[index].name.to_string())
    }
}
