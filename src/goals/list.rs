//! Relations over cons-lists.

use crate::core::term::Term;
use crate::goals::primitive::eq;
use crate::{conde, defrel, fresh};

defrel! {
    /// Creates a goal that succeeds if p is the pair (a . d).
    pub conso(a, d, p) {
        eq(Term::cons(a, d), p)
    }
}

defrel! {
    /// Creates a goal that succeeds if a is the head of p.
    pub caro(p, a) {
        fresh!((d), eq(Term::cons(a.clone(), d), p.clone()))
    }
}

defrel! {
    /// Creates a goal that succeeds if d is the tail of p.
    pub cdro(p, d) {
        fresh!((a), eq(Term::cons(a, d.clone()), p.clone()))
    }
}

defrel! {
    /// Creates a goal that succeeds if x is a member of list l.
    pub membero(x, l) {
        conde!(
            caro(l.clone(), x.clone());
            fresh!((d), cdro(l.clone(), d), membero(x.clone(), d))
        )
    }
}
