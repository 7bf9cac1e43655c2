//! Goals map a search state to a lazy stream of successor states.

use crate::core::state::State;
use crate::core::stream::Stream;
use std::sync::Arc;

/// A goal.
///
/// Goals are pure: applying one never mutates the input state, and equal
/// states produce equal streams. They are shared (cheaply cloneable) so
/// combinators can reuse one goal across every answer of another.
#[derive(Clone)]
pub struct Goal {
    func: Arc<dyn Fn(State) -> Stream<State>>,
}

impl Goal {
    pub fn new(f: impl Fn(State) -> Stream<State> + 'static) -> Self {
        Goal { func: Arc::new(f) }
    }

    /// Apply the goal to a state.
    pub fn apply(&self, state: State) -> Stream<State> {
        (self.func)(state)
    }

    /// Apply the goal to the initial state (empty substitution, counter 0).
    pub fn call(&self) -> Stream<State> {
        self.apply(State::empty())
    }

    pub(crate) fn as_fn(&self) -> Arc<dyn Fn(State) -> Stream<State>> {
        self.func.clone()
    }
}

impl std::fmt::Debug for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "<goal>")
    }
}
