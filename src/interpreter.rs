//! Top-level forms and the query driver.

use crate::build::Builder;
use crate::config::EngineConfig;
use crate::core::continuation::Execution;
use crate::core::output::Printer;
use crate::error::BuildError;
use crate::rule::Rule;
use crate::scope::{Scope, Value};
use crate::syntax::{parse, Expr};
use std::fmt::Formatter;
use std::rc::Rc;
use tracing::debug;

/// Binary outcome of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryResult {
    Ok,
    NotOk,
}

impl QueryResult {
    pub fn is_ok(self) -> bool {
        self == QueryResult::Ok
    }
}

impl From<bool> for QueryResult {
    fn from(succeeded: bool) -> Self {
        if succeeded {
            QueryResult::Ok
        } else {
            QueryResult::NotOk
        }
    }
}

impl std::fmt::Display for QueryResult {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            QueryResult::Ok => write!(f, "ok"),
            QueryResult::NotOk => write!(f, "not ok"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryReport {
    pub result: QueryResult,
    /// Continuation invocations performed while executing the query.
    pub steps: u64,
}

/// What evaluating one top-level form produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Defined(String),
    Query(QueryReport),
}

/// Holds rule definitions and runs queries against them.
pub struct Interpreter {
    global: Scope,
    config: EngineConfig,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Interpreter {
            global: Scope::new(),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Scope holding the rule definitions.
    pub fn global(&self) -> &Scope {
        &self.global
    }

    /// Evaluate one top-level form: `(define Name (Params...) Body)` or `(query Goal)`.
    pub fn eval(&mut self, form: &Expr, printer: &mut dyn Printer) -> Result<Outcome, BuildError> {
        let items = form.as_list().unwrap_or(&[]);
        match items {
            [keyword, name, params, body] if keyword.as_atom() == Some("define") => {
                let (name, params) = match (name.as_atom(), params.as_list()) {
                    (Some(name), Some(params)) => (name, params),
                    _ => return Err(malformed(form, DEFINE_SHAPE)),
                };
                self.define(name, params, body.clone())?;
                Ok(Outcome::Defined(name.to_string()))
            }
            [keyword, ..] if keyword.as_atom() == Some("define") => {
                Err(malformed(form, DEFINE_SHAPE))
            }
            [keyword, goal] if keyword.as_atom() == Some("query") => {
                self.query(goal, printer).map(Outcome::Query)
            }
            [keyword, ..] if keyword.as_atom() == Some("query") => {
                Err(malformed(form, QUERY_SHAPE))
            }
            _ => Err(malformed(form, "a `define` or `query` form")),
        }
    }

    /// Store a rule in the global scope, replacing any rule of the same name.
    pub fn define(&mut self, name: &str, params: &[Expr], body: Expr) -> Result<(), BuildError> {
        let rule = Rule::new(name, params, body)?;
        debug!(rule = name, arity = rule.arity(), "define");
        if let Some(Value::Rule(_)) = self.global.bind(name, Value::Rule(Rc::new(rule))) {
            debug!(rule = name, "replaced earlier definition");
        }
        Ok(())
    }

    /// Build `goal` in a fresh scope and run it.
    ///
    /// Variables first mentioned by the goal live in a scope nested under
    /// the global one and are dropped when the query ends, whatever its
    /// outcome. A build error means nothing was executed.
    pub fn query(&self, goal: &Expr, printer: &mut dyn Printer) -> Result<QueryReport, BuildError> {
        let scope = self.global.child();
        let continuation = Builder::new(&self.global, &self.config).build(goal, &scope)?;
        debug!(%goal, variables = scope.len(), "query built");

        let mut execution = Execution::new(printer);
        let succeeded = execution.run(&continuation);
        let report = QueryReport {
            result: succeeded.into(),
            steps: execution.steps(),
        };
        debug!(result = %report.result, steps = report.steps, "query finished");
        Ok(report)
    }

    /// Parse `source` and evaluate every form in order, stopping at the first error.
    pub fn run_source(&mut self, source: &str, printer: &mut dyn Printer) -> crate::Result<Vec<Outcome>> {
        let forms = parse(source)?;
        let mut outcomes = Vec::with_capacity(forms.len());
        for form in &forms {
            outcomes.push(self.eval(form, printer)?);
        }
        Ok(outcomes)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}

const DEFINE_SHAPE: &str = "(define Name (Params...) Body)";
const QUERY_SHAPE: &str = "(query Goal)";

fn malformed(form: &Expr, expected: &'static str) -> BuildError {
    BuildError::MalformedForm {
        form: form.to_string(),
        expected,
    }
}
