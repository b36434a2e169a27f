use crate::core::continuation::{Continuation, Execution};
use crate::interpreter::{Interpreter, Outcome};
use crate::syntax::parse;

/// Run a goal, returning its result and everything it printed.
pub fn run_goal(goal: &Continuation) -> (bool, Vec<String>) {
    let mut out = Vec::<String>::new();
    let ok = Execution::new(&mut out).run(goal);
    (ok, out)
}

/// Assert that a goal fails
pub fn fails(goal: impl AsRef<Continuation>) {
    let (ok, _) = run_goal(goal.as_ref());
    assert!(!ok);
}

/// Assert that a goal succeeds
pub fn succeeds(goal: impl AsRef<Continuation>) {
    let (ok, _) = run_goal(goal.as_ref());
    assert!(ok);
}

/// Assert that a goal succeeds after printing exactly `expected`
pub fn prints(goal: impl AsRef<Continuation>, expected: &[&str]) {
    let (ok, out) = run_goal(goal.as_ref());
    assert!(ok, "goal failed after printing {:?}", out);
    assert_eq!(out, expected);
}

/// Evaluate a program and return its transcript: for each query, the
/// symbols it printed followed by its result token.
pub fn transcript(source: &str) -> Vec<String> {
    let mut interpreter = Interpreter::new();
    let mut lines = Vec::new();
    for form in parse(source).unwrap_or_else(|e| panic!("{}", e)) {
        let mut printed = Vec::<String>::new();
        match interpreter.eval(&form, &mut printed) {
            Ok(Outcome::Query(report)) => {
                lines.extend(printed);
                lines.push(report.result.to_string());
            }
            Ok(Outcome::Defined(_)) => {}
            Err(e) => panic!("{} in {}", e, form),
        }
    }
    lines
}
