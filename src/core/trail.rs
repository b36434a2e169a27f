//! Undo trail for cell mutations.

use super::logic_variable::{Cell, CellState};

/// One recorded mutation: the cell and the state it held before.
#[derive(Clone, Debug, PartialEq)]
pub struct Binding {
    cell: Cell,
    previous: CellState,
}

impl Binding {
    pub(crate) fn new(cell: Cell, previous: CellState) -> Self {
        Binding { cell, previous }
    }

    /// The cell that was mutated.
    pub fn cell(&self) -> &Cell {
        &self.cell
    }

    pub fn previous(&self) -> &CellState {
        &self.previous
    }

    /// Put the cell back into the state it had before the mutation.
    pub fn revert(self) {
        tracing::trace!(cell = ?self.cell, restored = ?self.previous, "undo binding");
        self.cell.replace(self.previous);
    }
}

/// Ordered record of bindings, undone last-in first-out.
#[derive(Debug, Default)]
pub struct Trail {
    entries: Vec<Binding>,
}

impl Trail {
    pub fn new() -> Self {
        Trail::default()
    }

    pub fn record(&mut self, binding: Binding) {
        self.entries.push(binding);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Revert every recorded binding, most recent first.
    pub fn undo(&mut self) {
        while let Some(binding) = self.entries.pop() {
            binding.revert();
        }
    }
}

impl Extend<Binding> for Trail {
    fn extend<I: IntoIterator<Item = Binding>>(&mut self, iter: I) {
        self.entries.extend(iter)
    }
}
