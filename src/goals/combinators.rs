//! Compose goals using combinators to build more complex goals

use crate::core::goal::Goal;
use crate::core::logic_variable::Var;
use crate::error::{Error, Result};
use crate::goals::primitive::defer;

/// Creates a goal that succeeds if both of its subgoals succeed.
///
/// The second goal runs in every state the first one produces.
pub fn conj2(g1: Goal, g2: Goal) -> Goal {
    Goal::new(move |s| g1.apply(s).bind(g2.as_fn()))
}

/// Creates a goal that succeeds if either of its subgoals succeeds.
///
/// Both goals see the same input state; their answer streams are merged
/// with fair interleaving.
pub fn disj2(g1: Goal, g2: Goal) -> Goal {
    Goal::new(move |s| g1.apply(s.clone()).merge(g2.apply(s)))
}

/// Right-fold of [`conj2`] over a non-empty sequence, each goal deferred.
pub fn conj_all(goals: &[Goal]) -> Result<Goal> {
    match goals.split_first() {
        None => Err(Error::EmptyGoalSequence),
        Some((first, [])) => Ok(defer(first.clone())),
        Some((first, rest)) => Ok(conj2(defer(first.clone()), conj_all(rest)?)),
    }
}

/// Right-fold of [`disj2`] over a non-empty sequence, each goal deferred.
pub fn disj_all(goals: &[Goal]) -> Result<Goal> {
    match goals.split_first() {
        None => Err(Error::EmptyGoalSequence),
        Some((first, [])) => Ok(defer(first.clone())),
        Some((first, rest)) => Ok(disj2(defer(first.clone()), disj_all(rest)?)),
    }
}

/// Alternative clause lines: goals within a line are conjoined, lines are
/// merged as alternatives. Zero lines, or an empty line, is a usage error.
pub fn conde(lines: &[Vec<Goal>]) -> Result<Goal> {
    let folded = lines
        .iter()
        .map(|line| conj_all(line))
        .collect::<Result<Vec<_>>>()?;
    disj_all(&folded)
}

/// Introduces one fresh variable.
///
/// The variable's identity is the incoming state's counter; the goal built
/// by `f` then runs with the counter advanced.
pub fn call_fresh(f: impl Fn(Var) -> Goal + 'static) -> Goal {
    Goal::new(move |state| {
        let (var, state) = state.fresh_var();
        f(var).apply(state)
    })
}

/// Introduces as many fresh variables as the closure takes.
///
/// Closure arity cannot be inspected at runtime, so it is fixed statically
/// through [`FreshGoal`], implemented for closures of zero to five `Var`
/// parameters. A zero-parameter closure is invoked directly. The
/// [`fresh!`](crate::fresh) macro is a thin layer over this function.
pub fn fresh<Args>(f: impl FreshGoal<Args>) -> Goal {
    f.into_goal()
}

/// Closures that build a goal from some number of fresh variables.
pub trait FreshGoal<Args> {
    fn into_goal(self) -> Goal;
}

impl<F> FreshGoal<()> for F
where
    F: Fn() -> Goal + 'static,
{
    fn into_goal(self) -> Goal {
        self()
    }
}

impl<F> FreshGoal<(Var,)> for F
where
    F: Fn(Var) -> Goal + 'static,
{
    fn into_goal(self) -> Goal {
        call_fresh(self)
    }
}

impl<F> FreshGoal<(Var, Var)> for F
where
    F: Fn(Var, Var) -> Goal + Clone + 'static,
{
    fn into_goal(self) -> Goal {
        call_fresh(move |a| {
            let f = self.clone();
            call_fresh(move |b| f(a, b))
        })
    }
}

impl<F> FreshGoal<(Var, Var, Var)> for F
where
    F: Fn(Var, Var, Var) -> Goal + Clone + 'static,
{
    fn into_goal(self) -> Goal {
        call_fresh(move |a| {
            let f = self.clone();
            fresh(move |b: Var, c: Var| f(a, b, c))
        })
    }
}

impl<F> FreshGoal<(Var, Var, Var, Var)> for F
where
    F: Fn(Var, Var, Var, Var) -> Goal + Clone + 'static,
{
    fn into_goal(self) -> Goal {
        call_fresh(move |a| {
            let f = self.clone();
            fresh(move |b: Var, c: Var, d: Var| f(a, b, c, d))
        })
    }
}

impl<F> FreshGoal<(Var, Var, Var, Var, Var)> for F
where
    F: Fn(Var, Var, Var, Var, Var) -> Goal + Clone + 'static,
{
    fn into_goal(self) -> Goal {
        call_fresh(move |a| {
            let f = self.clone();
            fresh(move |b: Var, c: Var, d: Var, e: Var| f(a, b, c, d, e))
        })
    }
}
