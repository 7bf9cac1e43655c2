//! Substitutions map variables to terms.
//!
//! A substitution is a persistent association list with newest bindings
//! first. Extending shares the old list as the tail of the new one, so
//! sibling search branches can diverge from a common ancestor without any
//! rollback machinery.

use crate::core::logic_variable::Var;
use crate::core::term::Term;
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

#[derive(Clone, PartialEq, Default)]
pub struct Substitution {
    bindings: Option<Arc<Binding>>,
}

#[derive(PartialEq)]
struct Binding {
    var: Var,
    term: Term,
    rest: Option<Arc<Binding>>,
}

impl Substitution {
    /// The substitution that binds nothing.
    pub fn empty() -> Self {
        Substitution { bindings: None }
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_none()
    }

    /// Number of bindings, shadowed entries included.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Look up the newest binding of `var`.
    ///
    /// `None` means unbound; it can never be confused with a bound term.
    pub fn find(&self, var: &Var) -> Option<&Term> {
        for (bound, term) in self.iter() {
            if bound == var {
                return Some(term);
            }
        }
        None
    }

    /// Resolve a term to its binding, chasing variable-to-variable chains to
    /// a fixed point. Terminates on any substitution free of variable cycles.
    pub fn walk<'a>(&'a self, mut term: &'a Term) -> &'a Term {
        while let Term::Var(var) = term {
            match self.find(var) {
                Some(next) => term = next,
                None => break,
            }
        }
        term
    }

    /// Resolve every variable reachable inside `term`.
    pub fn walk_star(&self, term: &Term) -> Term {
        match self.walk(term) {
            Term::Pair(car, cdr) => {
                let (car, cdr) = (car.clone(), cdr.clone());
                Term::cons(self.walk_star(&car), self.walk_star(&cdr))
            }
            resolved => resolved.clone(),
        }
    }

    /// Prepend a binding. O(1); never checks for an existing binding of
    /// `var` — the newest entry shadows older ones on lookup.
    pub fn extend(&self, var: Var, term: Term) -> Substitution {
        Substitution {
            bindings: Some(Arc::new(Binding {
                var,
                term,
                rest: self.bindings.clone(),
            })),
        }
    }

    /// Attempt to unify `u` and `v` under this substitution.
    ///
    /// Failure is a value (`None`), not an error: rejected branches are
    /// simply discarded. There is no occurs-check; binding a variable to a
    /// term containing itself is representable and not prevented.
    pub fn unify(&self, u: &Term, v: &Term) -> Option<Substitution> {
        let u = self.walk(u);
        let v = self.walk(v);

        match (u, v) {
            (Term::Var(a), Term::Var(b)) if a == b => Some(self.clone()),
            (Term::Var(a), _) => Some(self.extend(*a, v.clone())),
            (_, Term::Var(b)) => Some(self.extend(*b, u.clone())),
            (Term::Pair(ua, ud), Term::Pair(va, vd)) => {
                let (ua, ud) = (ua.clone(), ud.clone());
                let (va, vd) = (va.clone(), vd.clone());
                self.unify(&ua, &va)?.unify(&ud, &vd)
            }
            (u, v) if u == v => Some(self.clone()),
            _ => None,
        }
    }

    /// Naming pass over `term`: bind every variable still fresh in it, in
    /// first-encountered depth-first order, to the next canonical name.
    /// `self` is the disposable naming substitution being built up.
    pub fn reify_s(self, term: &Term) -> Substitution {
        let resolved = self.walk(term).clone();
        match resolved {
            Term::Var(var) => {
                let name = Term::Reified(self.len());
                self.extend(var, name)
            }
            Term::Pair(car, cdr) => self.reify_s(&car).reify_s(&cdr),
            _ => self,
        }
    }

    /// Convert `term` into its canonical display form: fully resolved, with
    /// remaining fresh variables renamed `_.0`, `_.1`, ….
    pub fn reify(&self, term: &Term) -> Term {
        let resolved = self.walk_star(term);
        let names = Substitution::empty().reify_s(&resolved);
        names.walk_star(&resolved)
    }

    fn iter(&self) -> Iter {
        Iter {
            node: self.bindings.as_deref(),
        }
    }
}

struct Iter<'a> {
    node: Option<&'a Binding>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Var, &'a Term);

    fn next(&mut self) -> Option<Self::Item> {
        let binding = self.node?;
        self.node = binding.rest.as_deref();
        Some((&binding.var, &binding.term))
    }
}

impl Debug for Substitution {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{{")?;
        let mut iter = self.iter();
        if let Some((var, term)) = iter.next() {
            write!(f, "{:?}: {:?}", var, term)?;
        }
        for (var, term) in iter {
            write!(f, ", {:?}: {:?}", var, term)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars() -> (Var, Var, Var, Var, Var) {
        (
            Var::new(0),
            Var::new(1),
            Var::new(2),
            Var::new(3),
            Var::new(4),
        )
    }

    fn walk(var: Var, s: &Substitution) -> Term {
        s.walk(&Term::Var(var)).clone()
    }

    #[test]
    fn walk_chases_variable_chains_to_a_fixed_point() {
        let (v, w, x, y, z) = vars();

        let s = Substitution::empty()
            .extend(z, "a".into())
            .extend(x, w.into())
            .extend(y, z.into());
        assert_eq!(walk(z, &s), "a");
        assert_eq!(walk(y, &s), "a");
        assert_eq!(walk(x, &s), w);

        let s = Substitution::empty()
            .extend(x, y.into())
            .extend(v, x.into())
            .extend(w, x.into());
        assert_eq!(walk(x, &s), y);
        assert_eq!(walk(v, &s), y);
        assert_eq!(walk(w, &s), y);
    }

    #[test]
    fn walk_leaves_unbound_variables_and_non_variables_alone() {
        let (_, _, x, y, _) = vars();
        let s = Substitution::empty().extend(x, "a".into());

        assert_eq!(walk(y, &s), y);
        assert_eq!(s.walk(&Term::from(42)), &Term::from(42));
    }

    #[test]
    fn find_distinguishes_unbound_from_any_bound_term() {
        let (_, _, x, y, _) = vars();
        let s = Substitution::empty().extend(x, Term::nil());

        assert_eq!(s.find(&x), Some(&Term::nil()));
        assert_eq!(s.find(&y), None);
    }

    #[test]
    fn newest_binding_shadows_older_ones() {
        let (_, _, x, _, _) = vars();
        let s = Substitution::empty()
            .extend(x, "old".into())
            .extend(x, "new".into());

        assert_eq!(walk(x, &s), "new");
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn extending_never_modifies_the_original() {
        let (_, _, x, y, _) = vars();
        let ancestor = Substitution::empty().extend(x, "a".into());

        let left = ancestor.extend(y, "b".into());
        let right = ancestor.extend(y, "c".into());

        assert_eq!(ancestor.find(&y), None);
        assert_eq!(walk(y, &left), "b");
        assert_eq!(walk(y, &right), "c");
        assert_eq!(walk(x, &left), "a");
        assert_eq!(walk(x, &right), "a");
    }

    #[test]
    fn walk_star_resolves_variables_inside_pairs() {
        let (_, w, x, y, z) = vars();
        let s = Substitution::empty()
            .extend(x, "b".into())
            .extend(z, y.into())
            .extend(
                w,
                Term::cons(x, Term::cons("e", Term::cons(z, ()))),
            );

        assert_eq!(
            s.walk_star(&w.into()),
            Term::cons("b", Term::cons("e", Term::cons(y, ())))
        );
    }

    #[test]
    fn unify_same_var_does_not_modify_substitution() {
        let (_, _, x, _, _) = vars();
        let s = Substitution::empty();

        assert_eq!(s.unify(&x.into(), &x.into()), Some(Substitution::empty()));
    }

    #[test]
    fn unify_two_vars_extends_substitution() {
        let (_, _, x, y, _) = vars();
        let s = Substitution::empty().unify(&x.into(), &y.into()).unwrap();

        assert_eq!(s, Substitution::empty().extend(x, y.into()));
    }

    #[test]
    fn unify_binds_the_variable_side_whichever_it_is() {
        let (_, _, x, _, _) = vars();
        let v = Term::from(0);

        let s = Substitution::empty().unify(&v, &x.into()).unwrap();
        assert_eq!(s, Substitution::empty().extend(x, v.clone()));

        let s = Substitution::empty().unify(&x.into(), &v).unwrap();
        assert_eq!(s, Substitution::empty().extend(x, v));
    }

    #[test]
    fn unify_same_atoms_does_not_modify_substitution() {
        let s = Substitution::empty();
        assert_eq!(
            s.unify(&Term::from(42), &Term::from(42)),
            Some(Substitution::empty())
        );
    }

    #[test]
    fn unify_different_atoms_fails() {
        let s = Substitution::empty();
        assert_eq!(s.unify(&Term::from(1), &Term::from(2)), None);
        assert_eq!(s.unify(&Term::from("a"), &Term::cons("a", ()).into()), None);
    }

    #[test]
    fn unify_pairs_recursively_and_short_circuits() {
        let (_, _, x, y, _) = vars();
        let u = Term::cons(x, "b");
        let v = Term::cons("a", y);

        let s = Substitution::empty().unify(&u, &v).unwrap();
        assert_eq!(walk(x, &s), "a");
        assert_eq!(walk(y, &s), "b");

        // head mismatch short-circuits before the tails are considered
        assert_eq!(s.unify(&Term::cons("c", y), &v), None);
    }

    #[test]
    fn unify_without_occurs_check_accepts_self_referential_bindings() {
        let (_, _, x, _, _) = vars();
        let cyclic = Term::cons(x, ());

        // x ends up bound to a pair containing x itself; top-level walk
        // still terminates because the binding is not a bare variable.
        let s = Substitution::empty().unify(&x.into(), &cyclic).unwrap();
        assert_eq!(walk(x, &s), cyclic);
    }

    #[test]
    fn reify_names_fresh_variables_in_first_encountered_order() {
        let (v, w, x, y, z) = vars();
        let u = Var::new(5);

        let a1 = Term::cons(
            u,
            Term::cons(
                w,
                Term::cons(
                    y,
                    Term::cons(z, Term::cons(Term::cons("ice", Term::cons(z, ())), ())),
                ),
            ),
        );
        let s = Substitution::empty()
            .extend(x, a1)
            .extend(y, "corn".into())
            .extend(w, Term::cons(v, Term::cons(u, ())));

        assert_eq!(
            format!("{:?}", s.reify(&x.into())),
            "(_.0 (_.1 _.0) corn _.2 (ice _.2))"
        );
    }

    #[test]
    fn reify_resolves_bound_terms_completely() {
        let (_, _, x, y, _) = vars();
        let s = Substitution::empty()
            .extend(y, "b".into())
            .extend(x, Term::cons("a", y));

        assert_eq!(s.reify(&x.into()), Term::cons("a", "b"));
    }
}
