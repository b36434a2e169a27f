pub use crate::{
    core::{
        continuation::{Continuation, Execution},
        logic_variable::{Cell, CellState, Resolved},
        output::{Printer, StdoutPrinter},
        symbol::Symbol,
        trail::{Binding, Trail},
        unification::{unify, Unification},
    },
    goals::{combinators::*, primitive::*, Goal},
    interpreter::{Interpreter, Outcome, QueryReport, QueryResult},
};
