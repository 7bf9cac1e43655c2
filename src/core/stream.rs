//! Lazy answer streams.
//!
//! A stream is empty, an answer followed by a tail, or a suspended
//! computation. Suspensions are what make infinite answer sets
//! representable: nothing behind one is evaluated until a caller forces it.

use std::sync::Arc;

pub enum Stream<T> {
    Empty,
    Pair(T, Box<Stream<T>>),
    Suspension(Box<dyn FnOnce() -> Stream<T>>),
}

impl<T> Stream<T> {
    pub fn empty() -> Self {
        Stream::Empty
    }

    pub fn singleton(x: T) -> Self {
        Stream::cons(x, Stream::Empty)
    }

    pub fn cons(a: T, d: Self) -> Self {
        Stream::Pair(a, Box::new(d))
    }

    pub fn suspension(thunk: impl 'static + FnOnce() -> Stream<T>) -> Self {
        Stream::Suspension(Box::new(thunk))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Stream::Empty)
    }

    /// Force suspensions until the stream is `Empty` or a `Pair`.
    ///
    /// Iterative, so arbitrarily long suspension chains cannot overflow the
    /// stack. Does not force anything behind the first answer.
    pub fn pull(self) -> Self {
        let mut stream = self;
        while let Stream::Suspension(thunk) = stream {
            stream = thunk();
        }
        stream
    }

    /// Force up to `n` answers. `take(0)` forces nothing.
    pub fn take(self, n: usize) -> Vec<T> {
        self.into_iter().take(n).collect()
    }

    /// Force the whole stream. Diverges if it is infinite; bounded
    /// exploration must use [`Stream::take`].
    pub fn take_all(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

impl<T: 'static> Stream<T> {
    /// Merge two streams, interleaving fairly.
    ///
    /// Whenever the front of `self` is a suspension, the operands swap, so
    /// an infinite branch cannot starve the other one.
    pub fn merge(self, other: Self) -> Self {
        match self {
            Stream::Empty => other,
            Stream::Pair(a, d) => Stream::cons(a, d.merge(other)),
            Stream::Suspension(thunk) => Stream::suspension(move || other.merge(thunk())),
        }
    }

    /// Feed every answer through `goal`, merging the produced streams.
    pub fn bind(self, goal: Arc<dyn Fn(T) -> Stream<T>>) -> Self {
        match self {
            Stream::Empty => Stream::Empty,
            Stream::Pair(a, d) => goal(a).merge(d.bind(goal.clone())),
            Stream::Suspension(thunk) => Stream::suspension(move || thunk().bind(goal)),
        }
    }
}

impl<T> std::iter::IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = StreamIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        StreamIter(self)
    }
}

pub struct StreamIter<T>(Stream<T>);

impl<T> Iterator for StreamIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        match std::mem::replace(&mut self.0, Stream::Empty).pull() {
            Stream::Pair(a, d) => {
                self.0 = *d;
                Some(a)
            }
            _ => None,
        }
    }
}

impl<T: PartialEq> PartialEq for Stream<T> {
    fn eq(&self, other: &Self) -> bool {
        use Stream::*;
        match (self, other) {
            (Empty, Empty) => true,
            (Pair(a, x), Pair(b, y)) => a == b && x == y,
            _ => false,
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Stream::Empty => write!(f, "()"),
            Stream::Suspension(_) => write!(f, "(...)"),
            Stream::Pair(x, next) => {
                let mut next = next;
                write!(f, "({:?}", x)?;
                loop {
                    match &**next {
                        Stream::Empty => break,
                        Stream::Pair(x, n) => {
                            write!(f, " {:?}", x)?;
                            next = n;
                        }
                        Stream::Suspension(_) => {
                            write!(f, "...")?;
                            break;
                        }
                    }
                }
                write!(f, ")")
            }
        }
    }
}
