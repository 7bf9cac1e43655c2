//! Relational logic programming with lazy, fair search.
//!
//! Goals describe relations between terms; running a goal searches for
//! variable substitutions that satisfy it and reports each solution in a
//! canonical display form. Answer streams are lazy, and alternatives are
//! interleaved fairly, so relations with infinitely many solutions can be
//! explored a bounded number of answers at a time.
//!
//! ```
//! use reasoned::prelude::*;
//! use reasoned::{disj, run};
//!
//! let answers = run!(*, x, disj!(eq(x, "olive"); eq(x, "oil")));
//! assert_eq!(answers, vec![Term::from("olive"), Term::from("oil")]);
//! ```
//!
//! Named relations are defined with [`defrel!`], which suspends the body so
//! recursive definitions stay productive. [`membero`](goals::list::membero),
//! for example, can enumerate the infinitely many lists containing a value:
//!
//! ```
//! use reasoned::prelude::*;
//! use reasoned::{list, run};
//!
//! let mut lists = run!(q, membero(42, q));
//! assert_eq!(lists.next().unwrap(), list![42 ; Term::Reified(0)]);
//! ```

#[macro_use]
pub mod macros;
pub mod core;
pub mod error;
pub mod goals;
pub mod interface;
pub mod prelude;
pub mod testing;
