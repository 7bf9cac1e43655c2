//! Terms are the data the relational language computes with.
//!
//! A term is an atom, a logic variable, or a pair of terms. Pairs encode
//! cons lists terminated by [`Atom::Nil`], so arbitrary tree-shaped data can
//! flow through unification.

use crate::core::logic_variable::Var;
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

/// An atomic leaf value. Atoms unify only with equal atoms.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Atom {
    /// The empty list.
    Nil,
    Bool(bool),
    Int(i64),
    Sym(Arc<str>),
}

/// A term of the relational language.
#[derive(Clone, PartialEq)]
pub enum Term {
    Atom(Atom),
    Var(Var),
    Pair(Arc<Term>, Arc<Term>),
    /// Display name of a variable that remained fresh after reification.
    /// Never occurs during search; produced only by
    /// [`Substitution::reify`](crate::core::substitution::Substitution::reify).
    Reified(usize),
}

impl Term {
    pub fn nil() -> Self {
        Term::Atom(Atom::Nil)
    }

    pub fn cons(car: impl Into<Term>, cdr: impl Into<Term>) -> Self {
        Term::Pair(Arc::new(car.into()), Arc::new(cdr.into()))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Term::Atom(Atom::Nil))
    }
}

impl From<Atom> for Term {
    fn from(atom: Atom) -> Self {
        Term::Atom(atom)
    }
}

impl From<Var> for Term {
    fn from(var: Var) -> Self {
        Term::Var(var)
    }
}

impl From<()> for Term {
    fn from(_: ()) -> Self {
        Term::nil()
    }
}

impl From<bool> for Term {
    fn from(b: bool) -> Self {
        Term::Atom(Atom::Bool(b))
    }
}

impl From<i64> for Term {
    fn from(n: i64) -> Self {
        Term::Atom(Atom::Int(n))
    }
}

impl From<i32> for Term {
    fn from(n: i32) -> Self {
        Term::Atom(Atom::Int(n as i64))
    }
}

impl From<&str> for Term {
    fn from(s: &str) -> Self {
        Term::Atom(Atom::Sym(s.into()))
    }
}

impl From<String> for Term {
    fn from(s: String) -> Self {
        Term::Atom(Atom::Sym(s.into()))
    }
}

impl PartialEq<&str> for Term {
    fn eq(&self, other: &&str) -> bool {
        match self {
            Term::Atom(Atom::Sym(s)) => &**s == *other,
            _ => false,
        }
    }
}

impl PartialEq<i64> for Term {
    fn eq(&self, other: &i64) -> bool {
        match self {
            Term::Atom(Atom::Int(n)) => n == other,
            _ => false,
        }
    }
}

impl PartialEq<Var> for Term {
    fn eq(&self, other: &Var) -> bool {
        match self {
            Term::Var(v) => v == other,
            _ => false,
        }
    }
}

impl Debug for Atom {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Atom::Nil => write!(f, "()"),
            Atom::Bool(b) => write!(f, "{}", b),
            Atom::Int(n) => write!(f, "{}", n),
            Atom::Sym(s) => write!(f, "{}", s),
        }
    }
}

impl Debug for Term {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Term::Atom(atom) => write!(f, "{:?}", atom),
            Term::Var(var) => write!(f, "{:?}", var),
            Term::Reified(n) => write!(f, "_.{}", n),
            Term::Pair(car, cdr) => {
                if !f.alternate() {
                    write!(f, "(")?;
                }

                if cdr.is_nil() {
                    write!(f, "{:?}", car)?;
                } else if let Term::Pair(_, _) = **cdr {
                    write!(f, "{:?} {:#?}", car, cdr)?;
                } else {
                    write!(f, "{:?} . {:?}", car, cdr)?;
                }

                if !f.alternate() {
                    write!(f, ")")?;
                }

                Ok(())
            }
        }
    }
}
