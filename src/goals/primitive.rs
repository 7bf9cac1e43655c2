//! Primitive goals.

use crate::core::goal::Goal;
use crate::core::state::State;
use crate::core::stream::Stream;
use crate::core::term::Term;
use crate::goals::combinators::disj2;

/// Creates a goal that succeeds when `u` and `v` unify.
///
/// Success contributes a single answer carrying the extended substitution;
/// the fresh-variable counter is untouched. Failure contributes nothing.
pub fn eq(u: impl Into<Term>, v: impl Into<Term>) -> Goal {
    let u = u.into();
    let v = v.into();
    Goal::new(move |state| match state.subst().unify(&u, &v) {
        Some(subst) => Stream::singleton(State::new(subst, state.count())),
        None => Stream::empty(),
    })
}

/// Creates a goal that succeeds once without constraining anything.
pub fn succeed() -> Goal {
    Goal::new(Stream::singleton)
}

/// Creates a goal that always fails.
pub fn fail() -> Goal {
    Goal::new(|_| Stream::empty())
}

/// Wraps a goal so that applying it yields a suspension instead of
/// evaluating right away.
///
/// Recursive relations must wrap their self-reference this way, otherwise
/// building the goal would unfold forever before any state is supplied.
/// [`defrel!`](crate::defrel) does this implicitly.
pub fn defer(goal: Goal) -> Goal {
    Goal::new(move |state| {
        let goal = goal.clone();
        Stream::suspension(move || goal.apply(state))
    })
}

/// A goal that never produces an answer, yet never finishes searching.
pub fn nevero() -> Goal {
    Goal::new(|state| Stream::suspension(move || nevero().apply(state)))
}

/// A goal that succeeds any number of times.
pub fn alwayso() -> Goal {
    Goal::new(|state| Stream::suspension(move || disj2(succeed(), alwayso()).apply(state)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::logic_variable::Var;
    use crate::core::substitution::Substitution;

    fn fresh_pair() -> (Var, Var, State) {
        let (x, state) = State::empty().fresh_var();
        let (y, state) = state.fresh_var();
        (x, y, state)
    }

    #[test]
    fn eq_of_equal_atoms_succeeds_without_binding() {
        assert_eq!(
            eq(42, 42).apply(State::empty()),
            Stream::singleton(State::empty())
        );
    }

    #[test]
    fn eq_of_different_atoms_fails() {
        assert_eq!(eq(42, 123).apply(State::empty()), Stream::empty());
        assert_eq!(eq(true, false).apply(State::empty()), Stream::empty());
    }

    #[test]
    fn eq_binds_a_variable_and_preserves_the_counter() {
        let (x, _, state) = fresh_pair();
        let expected = State::new(state.subst().extend(x, "olive".into()), state.count());

        assert_eq!(
            eq(x, "olive").apply(state),
            Stream::singleton(expected)
        );
    }

    #[test]
    fn eq_of_two_fresh_variables_links_them() {
        let (x, y, state) = fresh_pair();
        let expected = State::new(Substitution::empty().extend(x, y.into()), state.count());

        assert_eq!(eq(x, y).apply(state), Stream::singleton(expected));
    }

    #[test]
    fn succeed_passes_the_state_through_once() {
        assert_eq!(
            succeed().apply(State::empty()),
            Stream::singleton(State::empty())
        );
    }

    #[test]
    fn fail_produces_no_answers() {
        assert!(fail().apply(State::empty()).is_empty());
    }

    #[test]
    fn defer_suspends_evaluation_until_forced() {
        let goal = defer(succeed());
        match goal.apply(State::empty()) {
            Stream::Suspension(_) => {}
            _ => panic!("expected a suspension"),
        }
        assert_eq!(goal.apply(State::empty()).take_all().len(), 1);
    }

    #[test]
    fn alwayso_succeeds_as_often_as_asked() {
        let answers = alwayso().apply(State::empty()).take(3);
        assert_eq!(answers, vec![State::empty(); 3]);
    }

    #[test]
    fn nevero_stays_productive_under_take() {
        assert!(nevero().apply(State::empty()).take(0).is_empty());
    }
}
