//! # Fluent Collections
//!
//! An immutable, ordered container with a fluent, chainable API for sequence
//! manipulation: merging, replacing, differencing, mapping, filtering,
//! chunking and aggregation without hand-written loops.
//!
//! ## Features
//!
//! - **[`Collection<V>`]** – insertion-order-preserving value container; every
//!   transformation returns a new collection and never mutates the receiver
//! - **Equality-only element bound** – matching operations need `V: PartialEq`
//!   and nothing else; no ordering or hashing capability is required
//! - **Keyed difference** – [`diff_by`] filters on a derived comparison key,
//!   so equivalence classes (for example the floor of a float) can stand in
//!   for raw equality
//! - **Explicit degenerate cases** – a zero chunk size and the average of an
//!   empty collection surface as [`CollectionError`] values instead of
//!   undefined results
//!
//! ## Quick Examples
//!
//! ### Chained transformation
//!
//! ```rust
//! use fluent_collections::Collection;
//!
//! let report = Collection::collect(vec![3, 1, 4, 1, 5, 9, 2, 6])
//!     .diff(&[9])
//!     .replace(&1, &10, -1)
//!     .filter(|value, _| value % 2 == 0)
//!     .map(|value, index| value + index as i32);
//!
//! assert_eq!(report.as_slice(), &[10, 5, 12, 5, 10]);
//! ```
//!
//! ### Aggregation
//!
//! ```rust
//! use fluent_collections::{Collection, CollectionError};
//!
//! let scores = Collection::collect(vec![1, 2, 3, 4, 5]);
//! assert_eq!(scores.sum(|score| *score), 15);
//! assert_eq!(scores.avg(|score| *score), Ok(3));
//!
//! let none: Collection<i32> = Collection::new();
//! assert_eq!(none.avg(|score| *score), Err(CollectionError::EmptyCollection));
//! ```
//!
//! ### Partitioning
//!
//! ```rust
//! use fluent_collections::Collection;
//!
//! let pages = Collection::collect(vec![1, 2, 3, 4, 5]).chunk(2).unwrap();
//! assert_eq!(pages, vec![vec![1, 2], vec![3, 4], vec![5]]);
//! ```
//!
//! [`Collection<V>`]: Collection
//! [`diff_by`]: Collection::diff_by

pub mod collection;
pub mod error;

pub use collection::Collection;
pub use error::CollectionError;
