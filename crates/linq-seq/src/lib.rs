//! linq-seq - Eager, query-style operations over in-memory sequences.
//!
//! [`Sequence`] wraps an ordered `Vec<T>` and exposes chainable operations
//! inspired by language-integrated query:
//!
//! - Element access: `first`, `last`, `at`, each in three failure tiers
//! - Sub-sequences: `skip`, `take`, `skip_while`, `take_while`
//! - Predicates: `filter`, `all`, `any`, `contains`, `count`
//! - Aggregation: `min`, `max`, `sum`, `average` over a projection
//! - Transforms: `reverse`, `distinct`, `sequence_equal`
//!
//! Every operation runs to completion immediately. Nothing is lazy and
//! nothing mutates the source sequence.
//!
//! # Quick Start
//!
//! ```rust
//! use linq_seq::{Sequence, SequenceError};
//!
//! let seq = Sequence::from(vec![1, 2, 3, 4, 5]);
//!
//! assert_eq!(seq.first(), Ok(&1));
//! assert_eq!(*seq.must_last(), 5);
//! assert_eq!(seq.at(-1), Err(SequenceError::IndexOutOfRange { index: -1, len: 5 }));
//! assert_eq!(seq.at_or_default(9), 0);
//!
//! let evens = seq.filter(|v, _| v % 2 == 0);
//! assert_eq!(evens.to_vec(), vec![2, 4]);
//! assert_eq!(seq.skip(1).take(2).to_vec(), vec![2, 3]);
//! assert_eq!(seq.sum(|v, _| *v as f64), 15.0);
//! ```
//!
//! # Failure Tiers
//!
//! | Form | Example | On failure |
//! |------|---------|------------|
//! | Fallible | `first()` | `Err(SequenceError)` |
//! | Panicking | `must_first()` | panics |
//! | Defaulting | `first_or_default()` | `T::default()` |
//!
//! # Capability Tiers
//!
//! Most operations place no bound on `T`. Operations that return new
//! sequences need `T: Clone`, defaulting operations need `T: Default`,
//! `contains` and `sequence_equal` need `T: PartialEq`, and `distinct`
//! needs `T: Eq + Hash`.
//!
//! # Features
//!
//! - `serde`: serialize a `Sequence<T>` as its plain list of elements.

mod access;
mod aggregate;
mod error;
mod partition;
mod position;
mod predicate;
mod sequence;
mod transform;

// Re-export public API
pub use error::{Result, SequenceError};
pub use position::Position;
pub use sequence::Sequence;
