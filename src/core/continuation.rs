//! Reified descriptions of the remaining computation.
//!
//! A goal is built into a tree of [`Continuation`]s before anything runs.
//! Executing the tree is plain recursion: every node receives the
//! continuation that should run after it succeeds (its *future*) and
//! reports whether the whole remaining computation succeeded.
//! Backtracking falls out of this: a choice point simply calls its
//! next alternative with the same future when an earlier one returned
//! `false`.

use super::logic_variable::Cell;
use super::output::Printer;
use super::trail::Trail;
use super::unification::{unify, Unification};
use std::rc::Rc;

/// The closed set of continuation kinds.
#[derive(Debug)]
pub enum Continuation {
    /// Succeeds without looking at its future.
    Terminal,
    /// Emit the symbol a cell is bound to.
    Print(Cell),
    /// Unify two cells.
    Unify(Cell, Cell),
    /// Choice point over ordered alternatives.
    Or(Vec<Rc<Continuation>>),
    /// Run `left` with `right` as its future. Built only by `And`.
    Compose(Rc<Continuation>, Rc<Continuation>),
    /// Conjunction of ordered relations.
    And(Vec<Rc<Continuation>>),
}

impl Continuation {
    pub fn terminal() -> Rc<Continuation> {
        Rc::new(Continuation::Terminal)
    }

    pub fn print(cell: Cell) -> Rc<Continuation> {
        Rc::new(Continuation::Print(cell))
    }

    pub fn unify(left: Cell, right: Cell) -> Rc<Continuation> {
        Rc::new(Continuation::Unify(left, right))
    }

    pub fn or(alternatives: Vec<Rc<Continuation>>) -> Rc<Continuation> {
        Rc::new(Continuation::Or(alternatives))
    }

    pub fn and(relations: Vec<Rc<Continuation>>) -> Rc<Continuation> {
        Rc::new(Continuation::And(relations))
    }

    pub(crate) fn compose(left: Rc<Continuation>, right: Rc<Continuation>) -> Rc<Continuation> {
        Rc::new(Continuation::Compose(left, right))
    }

    /// Run this continuation, then `future`.
    ///
    /// Returns `true` if this node and everything after it succeeded.
    /// A `false` result is ordinary search failure, not an error.
    pub fn invoke(&self, future: &Rc<Continuation>, exec: &mut Execution<'_>) -> bool {
        exec.steps += 1;
        match self {
            Continuation::Terminal => true,

            Continuation::Print(cell) => match cell.value() {
                Some(symbol) => {
                    exec.printer.emit(&symbol);
                    exec.resume(future)
                }
                None => false,
            },

            Continuation::Unify(left, right) => match unify(left, right) {
                Unification::Failed => false,
                Unification::Succeeded(binding) => {
                    let mut trail = Trail::new();
                    trail.extend(binding);
                    if exec.resume(future) {
                        true
                    } else {
                        trail.undo();
                        false
                    }
                }
            },

            Continuation::Or(alternatives) => {
                alternatives.iter().enumerate().any(|(index, alternative)| {
                    tracing::trace!(index, "try alternative");
                    alternative.invoke(future, exec)
                })
            }

            Continuation::Compose(left, right) => left.invoke(right, exec),

            Continuation::And(relations) => {
                // Fold right to left: relation i runs with relations i+1.. and
                // then `future` as its future.
                let chain = relations
                    .iter()
                    .rev()
                    .fold(Rc::clone(future), |rest, relation| {
                        Continuation::compose(Rc::clone(relation), rest)
                    });
                exec.resume(&chain)
            }
        }
    }
}

/// Mutable context for one execution of a continuation tree.
pub struct Execution<'p> {
    terminal: Rc<Continuation>,
    printer: &'p mut dyn Printer,
    steps: u64,
}

impl<'p> Execution<'p> {
    pub fn new(printer: &'p mut dyn Printer) -> Self {
        Execution {
            terminal: Continuation::terminal(),
            printer,
            steps: 0,
        }
    }

    /// Execute `goal` against the terminal continuation.
    pub fn run(&mut self, goal: &Continuation) -> bool {
        let terminal = Rc::clone(&self.terminal);
        goal.invoke(&terminal, self)
    }

    /// Number of continuation invocations so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    fn resume(&mut self, future: &Rc<Continuation>) -> bool {
        let terminal = Rc::clone(&self.terminal);
        future.invoke(&terminal, self)
    }
}
