//! Macros for embedding the relational DSL in Rust

/// Creates a goal that succeeds if any of its subgoals succeeds
#[macro_export]
macro_rules! disj {
    () => { $crate::prelude::fail() };
    ($g:expr) => { $g };
    ($g0:expr; $($g:expr);*) => { $crate::prelude::disj2($g0, $crate::disj!($($g);*)) }
}

/// Creates a goal that succeeds if all of its subgoals succeed
#[macro_export]
macro_rules! conj {
    () => { $crate::prelude::succeed() };
    ($g:expr) => { $g };
    ($g0:expr, $($g:expr),*) => { $crate::prelude::conj2($g0, $crate::conj!($($g),*)) }
}

/// Creates a goal that succeeds if any of its *lines* succeeds.
/// Every successful *line* contributes one or more values.
///
/// A *line* (separated by `;`) succeeds if all of its
/// goals (separated by `,`) succeed.
#[macro_export]
macro_rules! conde {
    ( $($($g:expr),+);+ $(;)? ) => {
        $crate::disj!($($crate::conj!($($g),+));+)
    }
}

/// Binds fresh variables with scope inside the body of `fresh!`.
///
/// Expands to [`fresh`](crate::goals::combinators::fresh) over a closure,
/// so up to five variables can be introduced per invocation; nest `fresh!`
/// for more.
#[macro_export]
macro_rules! fresh {
    (($($x:ident),* $(,)?), $($g:expr),* $(,)?) => {
        $crate::prelude::fresh(move |$($x: $crate::prelude::Var),*| $crate::conj!($($g),*))
    }
}

/// Run one or more goals against a query variable.
///
/// `run!(n, q, goal1, goal2, ...)` produces at most n answers;
/// `run!(*, q, goal1, goal2, ...)` produces all of them and only returns
/// if the answer stream is finite. `run!(q, goal1, ...)` returns a
/// (possibly infinite) iterator over the answers instead.
///
/// The query may also be a tuple of variables, `run!(n, (x, y), ...)`; the
/// answer is then the list of their values, joined through a hidden query
/// variable.
#[macro_export]
macro_rules! run {
    (*, ($($x:ident),+), $($g:expr),* $(,)?) => {
        $crate::interface::run_star(move |__q: $crate::prelude::Var| {
            $crate::fresh!(($($x),+),
                $crate::prelude::eq($crate::list![$($x),+], __q),
                $($g),*
            )
        })
    };

    (*, $q:ident, $($g:expr),* $(,)?) => {
        $crate::interface::run_star(move |$q: $crate::prelude::Var| $crate::conj!($($g),*))
    };

    ($n:expr, ($($x:ident),+), $($g:expr),* $(,)?) => {
        $crate::interface::run($n, move |__q: $crate::prelude::Var| {
            $crate::fresh!(($($x),+),
                $crate::prelude::eq($crate::list![$($x),+], __q),
                $($g),*
            )
        })
    };

    ($n:expr, $q:ident, $($g:expr),* $(,)?) => {
        $crate::interface::run($n, move |$q: $crate::prelude::Var| $crate::conj!($($g),*))
    };

    (($($x:ident),+), $($g:expr),* $(,)?) => {
        $crate::interface::run_iter(move |__q: $crate::prelude::Var| {
            $crate::fresh!(($($x),+),
                $crate::prelude::eq($crate::list![$($x),+], __q),
                $($g),*
            )
        })
    };

    ($q:ident, $($g:expr),* $(,)?) => {
        $crate::interface::run_iter(move |$q: $crate::prelude::Var| $crate::conj!($($g),*))
    };
}

/// Builds a cons-list term.
///
/// `list![a, b, c]` is a proper list; `list![a, b ; t]` puts `t` in the
/// final tail position.
#[macro_export]
macro_rules! list {
    () => { $crate::prelude::Term::nil() };

    ($single:expr) => {
        $crate::prelude::Term::cons($single, ())
    };

    ($car:expr ; $cdr:expr) => {
        $crate::prelude::Term::cons($car, $cdr)
    };

    (($($first:tt)*), $($rest:tt)*) => {
        $crate::prelude::Term::cons($crate::list![$($first)*], $crate::list![$($rest)*])
    };

    ($first:expr, $($rest:tt)*) => {
        $crate::prelude::Term::cons($first, $crate::list![$($rest)*])
    };
}

/// Define a relation.
/// A relation is a function that creates a goal.
///
/// The body is suspended, so relations may refer to themselves without
/// unfolding forever. The `trace` variant prints the relation's reified
/// arguments every time it is applied to a state.
#[macro_export]
macro_rules! defrel {
    ($(#[$outer:meta])* pub $name:ident($($args:ident),*) { $($g:expr),* $(,)? }) => {
        $(#[$outer])*
        pub fn $name($($args: impl Into<$crate::prelude::Term>),*) -> $crate::prelude::Goal {
            $crate::defrel!(@body: $($args),* { $($g),* })
        }
    };

    ($(#[$outer:meta])* $name:ident($($args:ident),*) { $($g:expr),* $(,)? }) => {
        $(#[$outer])*
        fn $name($($args: impl Into<$crate::prelude::Term>),*) -> $crate::prelude::Goal {
            $crate::defrel!(@body: $($args),* { $($g),* })
        }
    };

    ($(#[$outer:meta])* pub trace $name:ident($($args:ident),*) { $($g:expr),* $(,)? }) => {
        $(#[$outer])*
        pub fn $name($($args: impl Into<$crate::prelude::Term>),*) -> $crate::prelude::Goal {
            $crate::defrel!(@tracebody: $name, $($args),* { $($g),* })
        }
    };

    ($(#[$outer:meta])* trace $name:ident($($args:ident),*) { $($g:expr),* $(,)? }) => {
        $(#[$outer])*
        fn $name($($args: impl Into<$crate::prelude::Term>),*) -> $crate::prelude::Goal {
            $crate::defrel!(@tracebody: $name, $($args),* { $($g),* })
        }
    };

    (@body: $($args:ident),* { $($g:expr),* }) => {{
        $(
            let $args: $crate::prelude::Term = $args.into();
        )*
        $crate::prelude::Goal::new(move |s| {
            $(
                let $args = $args.clone();
            )*
            $crate::prelude::Stream::suspension(move || $crate::conj!($($g),*).apply(s))
        })
    }};

    (@tracebody: $name:ident, $($args:ident),* { $($g:expr),* }) => {{
        $(
            let $args: $crate::prelude::Term = $args.into();
        )*
        $crate::prelude::Goal::new(move |s: $crate::prelude::State| {
            print!("{} apply:", stringify!($name));
            $(
                print!(" {}={:?}", stringify!($args), s.subst().reify(&$args));
            )*
            println!();
            $(
                let $args = $args.clone();
            )*
            $crate::prelude::Stream::suspension(move || $crate::conj!($($g),*).apply(s))
        })
    }};
}
