//! Logic cells: the mutable slots that unification binds and aliases.

use super::symbol::Symbol;
use std::cell::RefCell;
use std::fmt::Formatter;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

static CELL_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// State of a single logic cell.
#[derive(Clone, PartialEq)]
pub enum CellState {
    Unbound,
    Bound(Symbol),
    Alias(Cell),
}

/// Logical value of a cell after following all alias links.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolved {
    /// The terminal cell is still unbound.
    Unbound(Cell),
    Bound(Symbol),
}

/// Logic variable backed by a shared mutable slot.
///
/// The name is purely descriptive. Any newly created cell is
/// different from all previously created cells, even if they have
/// the same name. Clones share the slot and therefore preserve identity.
#[derive(Clone)]
pub struct Cell(Rc<Slot>);

struct Slot {
    id: usize,
    name: Option<Rc<str>>,
    state: RefCell<CellState>,
}

impl Cell {
    /// Create a new unbound cell.
    pub fn new() -> Self {
        Cell::with_state(None, CellState::Unbound)
    }

    /// Create a new unbound cell that remembers the identifier that introduced it.
    pub fn named(name: impl AsRef<str>) -> Self {
        Cell::with_state(Some(Rc::from(name.as_ref())), CellState::Unbound)
    }

    /// Create a cell that is already bound to `symbol`.
    pub fn bound(symbol: Symbol) -> Self {
        Cell::with_state(None, CellState::Bound(symbol))
    }

    fn with_state(name: Option<Rc<str>>, state: CellState) -> Self {
        // ids only need to be unique, not ordered with other memory
        let id = CELL_COUNTER.fetch_add(1, Ordering::Relaxed);
        Cell(Rc::new(Slot {
            id,
            name,
            state: RefCell::new(state),
        }))
    }

    pub fn id(&self) -> usize {
        self.0.id
    }

    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    /// Snapshot of the raw state, without following aliases.
    pub fn state(&self) -> CellState {
        self.0.state.borrow().clone()
    }

    /// Follow alias links to the terminal cell.
    pub fn dereference(&self) -> Cell {
        let mut cell = self.clone();
        loop {
            let next = match &*cell.0.state.borrow() {
                CellState::Alias(next) => Some(next.clone()),
                CellState::Unbound | CellState::Bound(_) => None,
            };
            match next {
                Some(next) => cell = next,
                None => return cell,
            }
        }
    }

    /// Dereference and report the logical value.
    pub fn resolve(&self) -> Resolved {
        let cell = self.dereference();
        let state = cell.state();
        match state {
            CellState::Unbound => Resolved::Unbound(cell),
            CellState::Bound(symbol) => Resolved::Bound(symbol),
            CellState::Alias(_) => unreachable!("dereference stops at a terminal cell"),
        }
    }

    /// The symbol this cell is (transitively) bound to, if any.
    pub fn value(&self) -> Option<Symbol> {
        match self.resolve() {
            Resolved::Bound(symbol) => Some(symbol),
            Resolved::Unbound(_) => None,
        }
    }

    pub fn is_unbound(&self) -> bool {
        matches!(self.resolve(), Resolved::Unbound(_))
    }

    /// Returns `true` if both cells denote the same variable.
    pub fn same_variable(&self, other: &Cell) -> bool {
        self.dereference() == other.dereference()
    }

    /// Overwrite the raw state, returning the previous one.
    ///
    /// Only unification and the undo trail mutate cells.
    pub(crate) fn replace(&self, state: CellState) -> CellState {
        self.0.state.replace(state)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::new()
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Cell {}

impl From<&Cell> for Cell {
    fn from(cell: &Cell) -> Self {
        cell.clone()
    }
}

impl From<Symbol> for Cell {
    fn from(symbol: Symbol) -> Self {
        Cell::bound(symbol)
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}#{}", name, self.id()),
            None => write!(f, "_{}", self.id()),
        }
    }
}

impl std::fmt::Debug for CellState {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            CellState::Unbound => write!(f, "unbound"),
            CellState::Bound(symbol) => write!(f, "{:?}", symbol),
            CellState::Alias(cell) => write!(f, "-> {:?}", cell),
        }
    }
}
