//! Search state: a substitution plus the fresh-variable counter.

use crate::core::logic_variable::Var;
use crate::core::substitution::Substitution;
use crate::core::term::Term;

/// One point in the search space.
///
/// The counter is the identity of the next fresh variable; it strictly
/// increases within a branch, so every variable introduced along the way is
/// unique. States are never updated in place — goals produce new ones.
#[derive(Clone, PartialEq, Debug)]
pub struct State {
    subst: Substitution,
    count: usize,
}

impl State {
    /// The initial state: empty substitution, counter 0.
    pub fn empty() -> Self {
        State {
            subst: Substitution::empty(),
            count: 0,
        }
    }

    pub fn new(subst: Substitution, count: usize) -> Self {
        State { subst, count }
    }

    pub fn subst(&self) -> &Substitution {
        &self.subst
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Introduce the next fresh variable, returning it together with the
    /// advanced state.
    pub fn fresh_var(&self) -> (Var, State) {
        let var = Var::new(self.count);
        let state = State {
            subst: self.subst.clone(),
            count: self.count + 1,
        };
        (var, state)
    }

    /// Reify the query variable — the first variable a run introduces.
    pub fn reify(&self) -> Term {
        self.subst.reify(&Term::Var(Var::new(0)))
    }
}

impl Default for State {
    fn default() -> Self {
        State::empty()
    }
}
