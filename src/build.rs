//! Build phase: turn goal syntax into a continuation tree.
//!
//! Building is pure with respect to the search: it allocates cells and
//! registers names in scopes, but it never unifies and never prints.
//! A goal either builds completely or fails with a [`BuildError`]
//! before any of it runs.

use crate::config::EngineConfig;
use crate::core::logic_variable::Cell;
use crate::core::symbol::Symbol;
use crate::error::BuildError;
use crate::goals::combinators::{conj, disj};
use crate::goals::primitive::{eq, print};
use crate::goals::Goal;
use crate::rule::Rule;
use crate::scope::{Scope, Value};
use crate::syntax::Expr;

/// Returns `true` if `name` denotes a logic variable rather than a constant.
///
/// Variables start with an uppercase letter or `_`; everything else is
/// a self-denoting symbol.
pub fn is_variable_name(name: &str) -> bool {
    name.chars()
        .next()
        .map_or(false, |c| c.is_uppercase() || c == '_')
}

/// Resolve an identifier in term position to a cell.
///
/// A name already bound to a cell in the scope chain resolves to that
/// cell. A constant that is unbound, or that also names a rule, becomes
/// a fresh cell bound to its own symbol and is not registered. An
/// unbound variable gets a fresh cell that is registered in `scope`, so
/// later mentions find the same cell.
pub fn resolve(name: &str, scope: &Scope) -> Result<Cell, BuildError> {
    match scope.lookup(name) {
        Some(Value::Cell(cell)) => Ok(cell),
        _ if !is_variable_name(name) => Ok(Cell::bound(Symbol::new(name))),
        Some(Value::Rule(_)) => Err(BuildError::ExpectedTerm {
            name: name.to_string(),
        }),
        None => {
            let cell = Cell::named(name);
            tracing::trace!(?cell, "fresh variable");
            scope.bind(name, Value::Cell(cell.clone()));
            Ok(cell)
        }
    }
}

/// Builds goals against a global scope that holds the rule definitions.
pub struct Builder<'a> {
    global: &'a Scope,
    config: &'a EngineConfig,
}

impl<'a> Builder<'a> {
    pub fn new(global: &'a Scope, config: &'a EngineConfig) -> Self {
        Builder { global, config }
    }

    /// Build `goal`, registering new variables in `scope`.
    pub fn build(&self, goal: &Expr, scope: &Scope) -> Result<Goal, BuildError> {
        self.goal(goal, scope, 0)
    }

    fn goal(&self, expr: &Expr, scope: &Scope, depth: usize) -> Result<Goal, BuildError> {
        let items = match expr {
            Expr::Atom(name) => return self.apply(name, &[], scope, depth),
            Expr::List(items) => items,
        };
        let (head, args) = items.split_first().ok_or(BuildError::EmptyGoal)?;
        let head = head.as_atom().ok_or_else(|| BuildError::NotARelation {
            found: head.to_string(),
        })?;

        match head {
            "print" => {
                let [x] = args else {
                    return Err(arity(head, 1, args.len()));
                };
                Ok(print(self.term(x, scope)?))
            }
            ":=:" => {
                let [x, y] = args else {
                    return Err(arity(head, 2, args.len()));
                };
                Ok(eq(self.term(x, scope)?, self.term(y, scope)?))
            }
            "and" => Ok(conj(self.goals(args, scope, depth)?)),
            "or" => Ok(disj(self.goals(args, scope, depth)?)),
            name => self.apply(name, args, scope, depth),
        }
    }

    fn goals(&self, exprs: &[Expr], scope: &Scope, depth: usize) -> Result<Vec<Goal>, BuildError> {
        exprs
            .iter()
            .map(|expr| self.goal(expr, scope, depth))
            .collect()
    }

    /// Expand a rule application in place.
    ///
    /// Arguments resolve in the caller's scope. The body is built in a new
    /// scope under the global one, with each parameter bound to its
    /// argument cell, so body-only variables are fresh per application.
    fn apply(&self, name: &str, args: &[Expr], scope: &Scope, depth: usize) -> Result<Goal, BuildError> {
        let rule = match scope.lookup(name) {
            Some(Value::Rule(rule)) => rule,
            Some(Value::Cell(_)) => {
                return Err(BuildError::NotARelation {
                    found: name.to_string(),
                })
            }
            None => {
                return Err(BuildError::UnknownRelation {
                    name: name.to_string(),
                })
            }
        };
        if args.len() != rule.arity() {
            return Err(arity(name, rule.arity(), args.len()));
        }
        if depth >= self.config.max_rule_depth {
            return Err(BuildError::RuleDepthExceeded {
                name: name.to_string(),
                limit: self.config.max_rule_depth,
            });
        }

        let frame = self.instantiate(&rule, args, scope)?;
        self.goal(rule.body(), &frame, depth + 1)
    }

    fn instantiate(&self, rule: &Rule, args: &[Expr], scope: &Scope) -> Result<Scope, BuildError> {
        let frame = self.global.child();
        for (param, arg) in rule.params().iter().zip(args) {
            let cell = self.term(arg, scope)?;
            frame.bind(param.as_str(), Value::Cell(cell));
        }
        Ok(frame)
    }

    fn term(&self, expr: &Expr, scope: &Scope) -> Result<Cell, BuildError> {
        let name = expr.as_atom().ok_or_else(|| BuildError::ExpectedIdentifier {
            found: expr.to_string(),
        })?;
        resolve(name, scope)
    }
}

fn arity(form: &str, expected: usize, found: usize) -> BuildError {
    BuildError::Arity {
        form: form.to_string(),
        expected,
        found,
    }
}
