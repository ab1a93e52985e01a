// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the ephemeral sequence layer: core primitives,
//! constructors and combinators.

mod common;

use common::{example, PullCounter};
use lazy_seq::{
    append, cons, drop, filter, from_iter, head, iterate, nats, nil, repeat, tail, take, zip,
    zip_with, SeqError,
};
use pretty_assertions::assert_eq;

#[test]
fn test_head_of_tail_of_cons() {
    let mut rest = tail(cons(0, example()));
    assert_eq!(head(&mut rest), head(&mut example()));
}

#[test]
fn test_exhaustion_signalled_on_the_missing_pull_only() {
    let mut seq = example();
    assert_eq!(head(&mut seq), Ok(1));
    assert_eq!(head(&mut seq), Ok(2));
    assert_eq!(head(&mut seq), Ok(3));
    assert_eq!(head(&mut seq), Err(SeqError::Exhausted));
}

#[test]
fn test_exact_take_never_fails() {
    let values: Vec<_> = take(3, example()).collect();
    assert_eq!(values, vec![Ok(1), Ok(2), Ok(3)]);

    let values: Vec<_> = take(4, example()).collect();
    assert_eq!(values, vec![Ok(1), Ok(2), Ok(3), Err(SeqError::Exhausted)]);
}

#[test]
fn test_no_look_ahead() {
    let counter = PullCounter::new();
    let mut seq = take(5, zip_with(|x: u64, y: u64| x * y, counter.wrap(nats()), repeat(10)));
    assert_eq!(counter.get(), 0);

    assert_eq!(head(&mut seq), Ok(0));
    assert_eq!(counter.get(), 1);
    assert_eq!(head(&mut seq), Ok(10));
    assert_eq!(counter.get(), 2);
}

#[test]
fn test_drop_discards_before_first_value() {
    let counter = PullCounter::new();
    let mut seq = drop(3, counter.wrap(nats()));
    assert_eq!(counter.get(), 0);
    assert_eq!(head(&mut seq), Ok(3));
    assert_eq!(counter.get(), 4);
}

#[test]
fn test_iterate_doubling() {
    assert_eq!(
        take(5, iterate(|x: &i32| x * 2, 1)).to_vec(),
        Ok(vec![1, 2, 4, 8, 16])
    );
}

#[test]
fn test_filter_evens() {
    assert_eq!(
        take(5, filter(|x| x % 2 == 0, nats())).to_vec(),
        Ok(vec![0, 2, 4, 6, 8])
    );
}

#[test]
fn test_zip_with_and_zip() {
    assert_eq!(
        take(3, zip_with(|x: i32, y: i32| x + y, repeat(1), repeat(2))).to_vec(),
        Ok(vec![3, 3, 3])
    );
    assert_eq!(
        take(3, zip(example(), repeat(1))).to_vec(),
        Ok(vec![(1, 1), (2, 1), (3, 1)])
    );
}

#[test]
fn test_zip_pulls_left_then_right() {
    let left = PullCounter::new();
    let right = PullCounter::new();
    let mut zipped = zip(left.over(vec!['a']), right.over(vec!['b', 'c']));

    assert_eq!(zipped.pull(), Ok(Some(('a', 'b'))));
    assert_eq!(zipped.pull(), Err(SeqError::Exhausted));
    assert_eq!(left.get(), 1);
    assert_eq!(right.get(), 1);
}

#[test]
fn test_append_does_not_touch_second_early() {
    let second = PullCounter::new();
    let mut seq = append(example(), second.wrap(repeat(0)));
    for expected in 1..=3 {
        assert_eq!(head(&mut seq), Ok(expected));
    }
    assert_eq!(second.get(), 0);
    assert_eq!(head(&mut seq), Ok(0));
    assert_eq!(second.get(), 1);
}

#[test]
fn test_nested_composition() {
    let squares_of_odds = zip_with(
        |x: u64, _: ()| x * x,
        filter(|x| x % 2 == 1, nats()),
        repeat(()),
    );
    assert_eq!(
        take(4, squares_of_odds).to_vec(),
        Ok(vec![1, 9, 25, 49])
    );
}

#[test]
fn test_empty_sequences() {
    assert_eq!(nil::<i32>().to_vec(), Ok(vec![]));
    assert_eq!(from_iter(Vec::<i32>::new()).to_vec(), Ok(vec![]));
    assert_eq!(filter(|x| *x > 10, example()).to_vec(), Ok(vec![]));
}
