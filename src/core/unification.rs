//! Unification binds or aliases two cells.
//!
//! Cells can be unbound, bound to a symbol or aliased to another cell.
//! A single call mutates at most one cell and reports it, so the
//! caller can revert exactly that change.

use super::logic_variable::{Cell, CellState};
use super::trail::Binding;

/// Outcome of a single unification.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub enum Unification {
    Failed,
    /// Succeeded; carries the binding it made, if any.
    Succeeded(Option<Binding>),
}

impl Unification {
    pub fn is_success(&self) -> bool {
        matches!(self, Unification::Succeeded(_))
    }

    /// The cell this unification mutated.
    pub fn mutated(&self) -> Option<&Cell> {
        match self {
            Unification::Succeeded(Some(binding)) => Some(binding.cell()),
            _ => None,
        }
    }
}

/// Attempt to unify cells `a` and `b`.
///
/// After dereferencing, an unbound `a` is aliased to `b`; otherwise an
/// unbound `b` is aliased to `a`; otherwise both are bound and unify iff
/// their symbols are equal. `a` is always tested first.
pub fn unify(a: &Cell, b: &Cell) -> Unification {
    let a = a.dereference();
    let b = b.dereference();

    // aliasing a terminal cell to itself would close a cycle
    if a == b {
        return Unification::Succeeded(None);
    }

    if a.is_unbound() {
        return Unification::Succeeded(Some(alias(&a, &b)));
    }

    if b.is_unbound() {
        return Unification::Succeeded(Some(alias(&b, &a)));
    }

    match (a.value(), b.value()) {
        (Some(x), Some(y)) if x == y => Unification::Succeeded(None),
        (Some(_), Some(_)) => Unification::Failed,
        _ => unreachable!("terminal cells are either unbound or bound to a symbol"),
    }
}

fn alias(cell: &Cell, target: &Cell) -> Binding {
    tracing::trace!(?cell, ?target, "alias");
    let previous = cell.replace(CellState::Alias(target.clone()));
    Binding::new(cell.clone(), previous)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::symbol::Symbol;

    fn atom(text: &str) -> Cell {
        Cell::bound(Symbol::new(text))
    }

    #[test]
    fn unify_same_cell_does_not_modify_anything() {
        let x = Cell::named("x");
        assert_eq!(unify(&x, &x), Unification::Succeeded(None));
        assert_eq!(x.state(), CellState::Unbound);
    }

    #[test]
    fn unify_two_unbound_cells_aliases_the_first() {
        let x = Cell::named("x");
        let y = Cell::named("y");
        let result = unify(&x, &y);
        assert_eq!(result.mutated(), Some(&x));
        assert_eq!(x.state(), CellState::Alias(y.clone()));
        assert_eq!(y.state(), CellState::Unbound);
    }

    #[test]
    fn unify_value_with_unbound_cell_aliases_the_cell() {
        let x = Cell::named("x");
        let v = atom("a");
        let result = unify(&v, &x);
        assert_eq!(result.mutated(), Some(&x));
        assert_eq!(x.value(), Some(Symbol::new("a")));
        assert_eq!(v.state(), CellState::Bound(Symbol::new("a")));
    }

    #[test]
    fn unify_same_symbols_does_not_modify_anything() {
        let a = atom("a");
        let b = atom("a");
        assert_eq!(unify(&a, &b), Unification::Succeeded(None));
        assert_eq!(unify(&a, &b), Unification::Succeeded(None));
    }

    #[test]
    fn unify_different_symbols_fails() {
        let a = atom("a");
        let b = atom("b");
        assert_eq!(unify(&a, &b), Unification::Failed);
        assert_eq!(a.state(), CellState::Bound(Symbol::new("a")));
        assert_eq!(b.state(), CellState::Bound(Symbol::new("b")));
    }

    #[test]
    fn unify_binds_the_terminal_cell_of_an_alias_chain() {
        let x = Cell::named("x");
        let y = Cell::named("y");
        let _ = unify(&x, &y);

        let result = unify(&x, &atom("c"));
        assert_eq!(result.mutated(), Some(&y));
        assert_eq!(x.value(), Some(Symbol::new("c")));
    }

    #[test]
    fn unify_cells_already_aliased_together_succeeds_without_mutation() {
        let x = Cell::named("x");
        let y = Cell::named("y");
        let _ = unify(&x, &y);
        assert_eq!(unify(&y, &x), Unification::Succeeded(None));
    }

    #[test]
    fn reverting_the_reported_binding_restores_the_cell() {
        let x = Cell::named("x");
        let result = unify(&x, &atom("a"));
        match result {
            Unification::Succeeded(Some(binding)) => binding.revert(),
            other => panic!("expected a binding, got {:?}", other),
        }
        assert_eq!(x.state(), CellState::Unbound);
    }

    #[test]
    fn unification_is_symmetric_for_every_pairing_of_states() {
        fn fixtures() -> Vec<(Cell, Cell)> {
            let unbound = || Cell::new();
            let aliased_unbound = || {
                let c = Cell::new();
                let _ = unify(&c, &Cell::new());
                c
            };
            let aliased_bound = |s: &str| {
                let c = Cell::new();
                let _ = unify(&c, &atom(s));
                c
            };
            vec![
                (unbound(), unbound()),
                (unbound(), atom("a")),
                (atom("a"), atom("a")),
                (atom("a"), atom("b")),
                (aliased_unbound(), atom("a")),
                (aliased_bound("a"), atom("a")),
                (aliased_bound("a"), atom("b")),
                (aliased_bound("a"), aliased_unbound()),
            ]
        }

        for (a, b) in fixtures() {
            let forward = unify(&a, &b);
            let forward_ok = forward.is_success();
            if let Unification::Succeeded(Some(binding)) = forward {
                binding.revert();
            }
            let backward_ok = unify(&b, &a).is_success();
            assert_eq!(forward_ok, backward_ok, "{:?} vs {:?}", a, b);
        }
    }
}
