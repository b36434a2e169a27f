//! Error types.
//!
//! Execution-time failure of a goal is not an error: it is the normal
//! signal that drives backtracking and shows up as `not ok`. The types
//! here cover input that cannot be read, goals that cannot be built,
//! and configuration that cannot be loaded.

use std::path::PathBuf;
use thiserror::Error;

/// Structural problems found while building a goal or a definition.
///
/// A build error aborts construction before anything executes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("`{form}` expects {expected} argument(s), found {found}")]
    Arity {
        form: String,
        expected: usize,
        found: usize,
    },

    #[error("expected an identifier, found `{found}`")]
    ExpectedIdentifier { found: String },

    #[error("`{name}` names a relation, not a term")]
    ExpectedTerm { name: String },

    #[error("`{found}` is not a relation")]
    NotARelation { found: String },

    #[error("unknown relation `{name}`")]
    UnknownRelation { name: String },

    #[error("empty goal `()`")]
    EmptyGoal,

    #[error("expanding `{name}` exceeded the rule depth limit of {limit}")]
    RuleDepthExceeded { name: String, limit: usize },

    #[error("`{name}` is a built-in form and cannot be redefined")]
    ReservedName { name: String },

    #[error("parameter `{param}` of `{rule}` must be a variable identifier")]
    InvalidParameter { rule: String, param: String },

    #[error("parameter `{param}` appears more than once in `{rule}`")]
    DuplicateParameter { rule: String, param: String },

    #[error("malformed form `{form}`: expected {expected}")]
    MalformedForm { form: String, expected: &'static str },
}

/// Problems reading source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected `)` at byte {offset}")]
    UnexpectedClose { offset: usize },

    #[error("unclosed `(` starting at byte {offset}")]
    Unclosed { offset: usize },

    #[error("expected exactly one expression, found {found}")]
    ExpectedOne { found: usize },
}

/// Problems loading an engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Any error produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("build error: {0}")]
    Build(#[from] BuildError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
