use crate::core::continuation::Continuation;
use crate::core::logic_variable::Cell;
use crate::goals::Goal;

/// Creates a goal that succeeds if `u` and `v` unify.
pub fn eq(u: impl Into<Cell>, v: impl Into<Cell>) -> Goal {
    Continuation::unify(u.into(), v.into())
}

/// Creates a goal that prints the symbol `x` is bound to.
///
/// The goal fails if `x` is still unbound when it runs.
pub fn print(x: impl Into<Cell>) -> Goal {
    Continuation::print(x.into())
}

/// Creates a goal that always succeeds and passes control on to its future.
pub fn succeed() -> Goal {
    Continuation::and(vec![])
}

/// Creates a goal that never succeeds.
pub fn fail() -> Goal {
    Continuation::or(vec![])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::symbol::Symbol;
    use crate::testing::{fails, prints, succeeds};

    #[test]
    fn eq_of_equal_symbols_succeeds() {
        succeeds(eq(Symbol::new("a"), Symbol::new("a")));
    }

    #[test]
    fn eq_of_different_symbols_fails() {
        fails(eq(Symbol::new("a"), Symbol::new("b")));
    }

    #[test]
    fn succeed_and_fail() {
        succeeds(succeed());
        fails(fail());
    }

    #[test]
    fn print_of_constant() {
        prints(print(Symbol::new("hello")), &["hello"]);
    }
}
