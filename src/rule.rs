use crate::build::is_variable_name;
use crate::error::BuildError;
use crate::syntax::Expr;
use std::collections::HashSet;

/// Forms handled by the engine itself. They cannot name a rule.
pub const RESERVED: &[&str] = &["print", ":=:", "and", "or", "define", "query"];

/// User-defined relation: `(define Name (Params...) Body)`.
///
/// The body is kept as syntax and built afresh at every use, so each
/// application gets its own cells for variables that occur only in the
/// body.
#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    name: String,
    params: Vec<String>,
    body: Expr,
}

impl Rule {
    /// Validate and create a rule.
    pub fn new(name: &str, params: &[Expr], body: Expr) -> Result<Self, BuildError> {
        if RESERVED.contains(&name) {
            return Err(BuildError::ReservedName {
                name: name.to_string(),
            });
        }

        let mut seen = HashSet::new();
        let mut names = Vec::with_capacity(params.len());
        for param in params {
            let param_name = match param.as_atom() {
                Some(p) if is_variable_name(p) => p,
                _ => {
                    return Err(BuildError::InvalidParameter {
                        rule: name.to_string(),
                        param: param.to_string(),
                    })
                }
            };
            if !seen.insert(param_name) {
                return Err(BuildError::DuplicateParameter {
                    rule: name.to_string(),
                    param: param_name.to_string(),
                });
            }
            names.push(param_name.to_string());
        }

        Ok(Rule {
            name: name.to_string(),
            params: names,
            body,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn body(&self) -> &Expr {
        &self.body
    }
}
