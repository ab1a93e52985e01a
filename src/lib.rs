// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pull-based lazy sequences.
//!
//! Define possibly infinite sequences declaratively and consume only as many
//! values as needed.
//!
//! # Architecture
//!
//! The crate is layered leaves first:
//!
//! ## Tier 1: Ephemeral sequences
//!
//! - [`seq`]: the [`Seq`] type, the [`Source`] trait and the consumption
//!   primitives `head`, `drop`, `tail`, `take`
//! - [`constructors`]: `nil`, `cons`, `iterate`, `repeat`, `nats`, `from_iter`
//! - [`combinators`]: `zip_with`, `zip`, `append`, `filter`
//!
//! ## Tier 2: Replayable sequences
//!
//! - [`memo`]: a [`Memo`] caches one ephemeral sequence and hands out any
//!   number of cursors that all see the same values
//! - [`knot`]: self-referential streams built through a deferred binding,
//!   such as [`fibs`]
//! - [`sort`]: `partition` into two views of one memo, and the lazy `qsort`
//!   built on it
//!
//! # Evaluation Model
//!
//! Single-threaded and demand-driven. No work happens until a value is pulled,
//! and a pull never reads further upstream than it needs. A pull that requires a
//! value from an ended sequence fails with [`SeqError::Exhausted`]; the valid end
//! of a finite sequence is `Ok(None)`.
//!
//! # Example
//!
//! ```
//! use lazy_seq::{filter, fibs, nats, take};
//!
//! let evens = take(5, filter(|x| x % 2 == 0, nats()));
//! assert_eq!(evens.to_vec(), Ok(vec![0, 2, 4, 6, 8]));
//!
//! let f = fibs();
//! assert_eq!(take(10, f.cursor()).to_vec(), Ok(vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]));
//! ```

pub mod combinators;
pub mod constructors;
pub mod knot;
pub mod memo;
pub mod seq;
pub mod sort;

// Re-export commonly used types
pub use combinators::{append, filter, zip, zip_with};
pub use constructors::{cons, from_iter, iterate, nats, nil, repeat};
pub use knot::{fibs, recurrence, Knot};
pub use memo::{memo, Memo};
pub use seq::{drop, head, tail, take, uncons, Seq, SeqError, SeqResult, Source};
pub use sort::{partition, qsort, qsort_by};
