//! S-expression reader producing the expression trees goals are built from.
//!
//! Parentheses delimit lists, atoms are maximal runs of anything else
//! that is not whitespace, and `;` starts a comment running to the end
//! of the line.

use crate::error::ParseError;
use nom::{
    branch::alt,
    bytes::complete::{take_till, take_while1},
    character::complete::{char, multispace1},
    combinator::{map, value},
    multi::many0,
    sequence::{delimited, pair, preceded},
    IResult,
};
use std::fmt::Formatter;

/// Parsed expression tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Atom(String),
    List(Vec<Expr>),
}

impl Expr {
    pub fn atom(text: impl Into<String>) -> Self {
        Expr::Atom(text.into())
    }

    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Expr::Atom(text) => Some(text),
            Expr::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Expr]> {
        match self {
            Expr::List(items) => Some(items),
            Expr::Atom(_) => None,
        }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Expr::Atom(text) => f.write_str(text),
            Expr::List(items) => {
                write!(f, "(")?;
                let mut iter = items.iter();
                if let Some(first) = iter.next() {
                    write!(f, "{}", first)?;
                }
                for item in iter {
                    write!(f, " {}", item)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Parse every top-level expression in `input`.
pub fn parse(input: &str) -> Result<Vec<Expr>, ParseError> {
    let (rest, exprs) = match many0(expr)(input) {
        Ok(parsed) => parsed,
        Err(_) => unreachable!("many0 recovers from every element error"),
    };
    let rest = match skip(rest) {
        Ok((rest, ())) => rest,
        Err(_) => rest,
    };
    let offset = input.len() - rest.len();
    match rest.chars().next() {
        None => Ok(exprs),
        Some(')') => Err(ParseError::UnexpectedClose { offset }),
        // atoms always parse, so whatever is left is an unfinished list
        Some(_) => Err(ParseError::Unclosed { offset }),
    }
}

/// Parse exactly one expression.
pub fn parse_one(input: &str) -> Result<Expr, ParseError> {
    let mut exprs = parse(input)?;
    match exprs.len() {
        1 => Ok(exprs.remove(0)),
        found => Err(ParseError::ExpectedOne { found }),
    }
}

fn skip(input: &str) -> IResult<&str, ()> {
    value(
        (),
        many0(alt((
            value((), multispace1),
            value((), pair(char(';'), take_till(|c: char| c == '\n'))),
        ))),
    )(input)
}

fn is_atom_char(c: char) -> bool {
    !c.is_whitespace() && c != '(' && c != ')' && c != ';'
}

fn atom(input: &str) -> IResult<&str, Expr> {
    map(take_while1(is_atom_char), |text: &str| Expr::atom(text))(input)
}

fn list(input: &str) -> IResult<&str, Expr> {
    map(
        delimited(char('('), many0(expr), preceded(skip, char(')'))),
        Expr::List,
    )(input)
}

fn expr(input: &str) -> IResult<&str, Expr> {
    preceded(skip, alt((atom, list)))(input)
}
