// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ways to build sequences.

use crate::seq::{Seq, SeqResult, Source};

/// The empty sequence.
pub fn nil<'a, T: 'a>() -> Seq<'a, T> {
    Seq::new(Nil)
}

/// `x` followed by every value of `rest`.
pub fn cons<'a, T: 'a>(x: T, rest: Seq<'a, T>) -> Seq<'a, T> {
    Seq::new(Cons {
        first: Some(x),
        rest,
    })
}

/// `a`, `f(a)`, `f(f(a))`, ...
///
/// Infinite. `f` is applied lazily: the value at position `k + 1` is computed
/// only when it is pulled.
pub fn iterate<'a, T, F>(f: F, a: T) -> Seq<'a, T>
where
    T: Clone + 'a,
    F: FnMut(&T) -> T + 'a,
{
    Seq::new(Iterate {
        f,
        current: a,
        started: false,
    })
}

/// `a` forever.
pub fn repeat<'a, T: Clone + 'a>(a: T) -> Seq<'a, T> {
    iterate(T::clone, a)
}

/// The natural numbers `0, 1, 2, ...`.
pub fn nats() -> Seq<'static, u64> {
    iterate(|x: &u64| x + 1, 0)
}

/// The values of any iterator, in order.
pub fn from_iter<'a, I>(values: I) -> Seq<'a, I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'a,
{
    let mut values = values.into_iter();
    Seq::from_fn(move || Ok(values.next()))
}

struct Nil;

impl<T> Source<T> for Nil {
    fn pull(&mut self) -> SeqResult<Option<T>> {
        Ok(None)
    }

    fn name(&self) -> &str {
        "Nil"
    }
}

struct Cons<'a, T> {
    first: Option<T>,
    rest: Seq<'a, T>,
}

impl<T> Source<T> for Cons<'_, T> {
    fn pull(&mut self) -> SeqResult<Option<T>> {
        match self.first.take() {
            Some(x) => Ok(Some(x)),
            None => self.rest.pull(),
        }
    }

    fn name(&self) -> &str {
        "Cons"
    }
}

struct Iterate<T, F> {
    f: F,
    current: T,
    started: bool,
}

impl<T, F> Source<T> for Iterate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    fn pull(&mut self) -> SeqResult<Option<T>> {
        if self.started {
            self.current = (self.f)(&self.current);
        } else {
            self.started = true;
        }
        Ok(Some(self.current.clone()))
    }

    fn name(&self) -> &str {
        "Iterate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::take;

    #[test]
    fn test_cons() {
        assert_eq!(cons(1, nil()).to_vec(), Ok(vec![1]));
        assert_eq!(cons(1, cons(2, cons(3, nil()))).to_vec(), Ok(vec![1, 2, 3]));
    }

    #[test]
    fn test_nil_stays_empty() {
        let mut seq = nil::<u8>();
        assert_eq!(seq.pull(), Ok(None));
        assert_eq!(seq.pull(), Ok(None));
    }

    #[test]
    fn test_iterate() {
        assert_eq!(take(3, iterate(|x: &i32| x + 1, 5)).to_vec(), Ok(vec![5, 6, 7]));
    }

    #[test]
    fn test_iterate_is_lazy() {
        let mut calls = 0;
        let mut seq = iterate(
            |x: &u32| {
                calls += 1;
                x * 2
            },
            1,
        );
        assert_eq!(seq.pull(), Ok(Some(1)));
        assert_eq!(seq.pull(), Ok(Some(2)));
        assert_eq!(seq.pull(), Ok(Some(4)));
        std::mem::drop(seq);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_repeat() {
        assert_eq!(take(3, repeat(3)).to_vec(), Ok(vec![3, 3, 3]));
        assert_eq!(take(2, repeat("a")).to_vec(), Ok(vec!["a", "a"]));
    }

    #[test]
    fn test_nats() {
        assert_eq!(
            take(10, nats()).to_vec(),
            Ok(vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9])
        );
    }

    #[test]
    fn test_from_iter() {
        assert_eq!(from_iter(vec![4, 2, 3]).to_vec(), Ok(vec![4, 2, 3]));
        assert_eq!(from_iter(Vec::<i32>::new()).to_vec(), Ok(vec![]));
        assert_eq!(take(2, from_iter(0..)).to_vec(), Ok(vec![0, 1]));
    }
}
