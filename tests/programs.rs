//! Whole programs run through the public interpreter API.

use kanren_cps::config::EngineConfig;
use kanren_cps::error::BuildError;
use kanren_cps::prelude::*;
use kanren_cps::syntax::parse;

fn run(interpreter: &mut Interpreter, source: &str) -> Vec<String> {
    let mut lines = Vec::new();
    for form in parse(source).expect("program parses") {
        let mut printed = Vec::<String>::new();
        match interpreter.eval(&form, &mut printed) {
            Ok(Outcome::Query(report)) => {
                lines.extend(printed);
                lines.push(report.result.to_string());
            }
            Ok(Outcome::Defined(_)) => {}
            Err(e) => lines.push(format!("error: {}", e)),
        }
    }
    lines
}

#[test]
fn colour_choice_backtracks_across_rules() {
    let mut interpreter = Interpreter::new();
    let source = "
        ; which colour is both warm and in the flag?
        (define warm (C) (or (:=: C red) (:=: C orange) (:=: C yellow)))
        (define flag (C) (or (:=: C blue) (:=: C yellow)))
        (query (and (warm C) (flag C) (print C)))
    ";
    assert_eq!(run(&mut interpreter, source), vec!["yellow", "ok"]);
}

#[test]
fn rules_defined_later_are_visible_to_later_queries() {
    let mut interpreter = Interpreter::new();
    assert_eq!(
        run(&mut interpreter, "(query (likes bob X))"),
        vec!["error: unknown relation `likes`"]
    );
    let source = "
        (define likes (P T) (and (:=: P bob) (:=: T tea)))
        (query (and (likes bob X) (print X)))
    ";
    assert_eq!(run(&mut interpreter, source), vec!["tea", "ok"]);
}

#[test]
fn rule_parameters_shadow_nothing_in_the_query() {
    // the rule's own X is independent of the query's X
    let mut interpreter = Interpreter::new();
    let source = "
        (define tag (X) (and (:=: Y tagged) (:=: X Y)))
        (query (and (:=: X plain) (tag Z) (print X) (print Z)))
    ";
    assert_eq!(run(&mut interpreter, source), vec!["plain", "tagged", "ok"]);
}

#[test]
fn configured_depth_limit_applies_to_nested_rules() {
    let config = EngineConfig::from_toml_str("max_rule_depth = 2").unwrap();
    let mut interpreter = Interpreter::with_config(config);
    assert_eq!(interpreter.config().max_rule_depth, 2);
    let source = "
        (define a (X) (print X))
        (define b (X) (a X))
        (define c (X) (b X))
        (query (b hi))
        (query (c hi))
    ";
    assert_eq!(
        run(&mut interpreter, source),
        vec![
            "hi".to_string(),
            "ok".to_string(),
            format!(
                "error: {}",
                BuildError::RuleDepthExceeded {
                    name: "a".into(),
                    limit: 2
                }
            ),
        ]
    );
}

#[test]
fn print_of_unbound_variable_fails_the_query() {
    let mut interpreter = Interpreter::new();
    assert_eq!(run(&mut interpreter, "(query (print Nobody))"), vec!["not ok"]);
}

#[test]
fn run_source_collects_outcomes() {
    let mut interpreter = Interpreter::new();
    let mut out = Vec::<String>::new();
    let outcomes = interpreter
        .run_source("(define same (X Y) (:=: X Y)) (query (same a a)) (query (same a b))", &mut out)
        .unwrap();
    let results: Vec<_> = outcomes
        .iter()
        .map(|o| match o {
            Outcome::Defined(name) => name.clone(),
            Outcome::Query(report) => report.result.to_string(),
        })
        .collect();
    assert_eq!(results, vec!["same", "ok", "not ok"]);
}

#[test]
fn constant_named_like_a_rule_is_a_symbol() {
    let mut interpreter = Interpreter::new();
    let source = "
        (define parent (X Y) (or (:=: X alice) (:=: Y sally)))
        (query (and (:=: R parent) (print R)))
        (define hello () (print hello))
        (query hello)
    ";
    assert_eq!(run(&mut interpreter, source), vec!["parent", "ok", "hello", "ok"]);
}
