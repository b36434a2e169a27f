//! Library of goals
//!
//! Pure factories that turn cells and sub-goals into continuation
//! objects. Building a goal never unifies or prints anything.

use crate::core::continuation::Continuation;
use std::rc::Rc;

pub mod combinators;
pub mod primitive;

pub type Goal = Rc<Continuation>;
