//! Error types for goal construction.
//!
//! Unification failure is *not* an error; it is represented by the empty
//! stream and handled as ordinary control flow. The errors here are usage
//! errors that must reach the caller immediately.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The variadic combinators fold over their goals and have no meaningful
    /// result for an empty sequence.
    #[error("expected at least one goal")]
    EmptyGoalSequence,
}

pub type Result<T> = std::result::Result<T, Error>;
