//! Core data structures and logic algorithms

pub mod continuation;
pub mod logic_variable;
pub mod output;
pub mod symbol;
pub mod trail;
pub mod unification;
