//! A small logic-programming engine built on continuations.
//!
//! Goals are first *built* into a tree of [`Continuation`](core::continuation::Continuation)
//! objects and then *executed*. Each node receives the rest of the
//! computation as an explicit argument, so backtracking is ordinary
//! function return: a choice point tries its next alternative when the
//! previous one returned `false`, and every unification undoes its own
//! binding before reporting failure.
//!
//! ```
//! use kanren_cps::prelude::*;
//!
//! let mut interpreter = Interpreter::new();
//! let mut out = Vec::<String>::new();
//! interpreter
//!     .run_source(
//!         "(define parent (X Y)
//!            (or (and (:=: X alice) (:=: Y sally))
//!                (and (:=: X sam) (:=: Y alice))))
//!          (query (and (parent sam A) (print A)))",
//!         &mut out,
//!     )
//!     .unwrap();
//! assert_eq!(out, vec!["alice"]);
//! ```

#[macro_use]
pub mod macros;
pub mod build;
pub mod config;
pub mod core;
pub mod error;
pub mod goals;
pub mod interpreter;
pub mod prelude;
pub mod rule;
pub mod scope;
pub mod syntax;

#[cfg(test)]
mod testing;

pub use crate::error::{Error, Result};
