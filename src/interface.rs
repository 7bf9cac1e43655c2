//! From goals to answers.
//!
//! A query is a closure over the variables it wants bound; the driver
//! introduces them fresh, applies the resulting goal to the initial state,
//! and reifies each produced state into its canonical display form. The
//! first variable the closure takes is the query variable whose value the
//! answers report.

use crate::core::goal::Goal;
use crate::core::state::State;
use crate::core::stream::Stream;
use crate::core::term::Term;
use crate::goals::combinators::{fresh, FreshGoal};

/// Apply a goal to the initial state: empty substitution, counter 0.
pub fn call_goal(goal: &Goal) -> Stream<State> {
    goal.call()
}

/// Force up to `n` answers of the query.
pub fn run<Args>(n: usize, f: impl FreshGoal<Args>) -> Vec<Term> {
    call_goal(&fresh(f))
        .take(n)
        .iter()
        .map(State::reify)
        .collect()
}

/// Force every answer of the query.
///
/// Only returns if the answer stream is finite; queries with unbounded
/// answer sets must use [`run`] or [`run_iter`].
pub fn run_star<Args>(f: impl FreshGoal<Args>) -> Vec<Term> {
    call_goal(&fresh(f))
        .take_all()
        .iter()
        .map(State::reify)
        .collect()
}

/// Lazily iterate the answers of the query.
pub fn run_iter<Args>(f: impl FreshGoal<Args>) -> impl Iterator<Item = Term> {
    call_goal(&fresh(f)).into_iter().map(|state| state.reify())
}
