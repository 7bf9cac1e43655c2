//! Helpers for asserting on goals in tests.

use crate::core::goal::Goal;
use crate::core::term::Term;
use crate::interface::run;

/// Assert that a goal fails
pub fn fails(goal: Goal) {
    let result = run(1, move || goal.clone());
    assert!(result.is_empty());
}

/// Assert that a goal succeeds at least once
pub fn succeeds(goal: Goal) {
    let result = run(1, move || goal.clone());
    assert!(!result.is_empty());
}

pub fn has_unique_solution(mut solutions: impl Iterator<Item = Term>, expected: Term) {
    assert_eq!(solutions.next(), Some(expected));
    assert_eq!(solutions.next(), None);
}
