//! Compose goals using combinators to build more complex goals
//!

use crate::core::continuation::Continuation;
use crate::goals::Goal;

/// Creates a goal that succeeds if any of its subgoals succeeds.
///
/// Subgoals are tried in order; later ones run only after earlier
/// ones failed and undid their bindings.
pub fn disj(goals: impl IntoIterator<Item = Goal>) -> Goal {
    Continuation::or(goals.into_iter().collect())
}

/// Creates a goal that succeeds if all of its subgoals succeed, left to right.
pub fn conj(goals: impl IntoIterator<Item = Goal>) -> Goal {
    Continuation::and(goals.into_iter().collect())
}

/// Creates a goal that succeeds if either of its subgoals succeeds.
pub fn disj2(g1: Goal, g2: Goal) -> Goal {
    disj(vec![g1, g2])
}

/// Creates a goal that succeeds if both of its subgoals succeed.
pub fn conj2(g1: Goal, g2: Goal) -> Goal {
    conj(vec![g1, g2])
}

/// Creates a goal that succeeds if `goalfn` succeeds for every item.
pub fn everyg<T>(goalfn: impl Fn(T) -> Goal, values: impl IntoIterator<Item = T>) -> Goal {
    conj(values.into_iter().map(goalfn))
}
