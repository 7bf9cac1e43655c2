pub use crate::{
    core::{
        goal::Goal,
        logic_variable::Var,
        state::State,
        stream::Stream,
        substitution::Substitution,
        term::{Atom, Term},
    },
    error::Error,
    goals::{combinators::*, list::*, primitive::*},
    interface::{run, run_iter, run_star},
};
