//! A skip list with sentinels and backward links on every level.
//!
//! This crate provides [`OrderedIndex`], an ordered map in which entries sit
//! on a sorted, doubly-linked chain between a head and a tail sentinel, with
//! randomly sized express lanes layered on top:
//!
//! ```text
//! <head> ----------> [2] --------------------------------------------------> [9] ----------> <tail>
//! <head> ----------> [2] ------------------------------------[7] ----------> [9] ----------> <tail>
//! <head> ----------> [2] ----------> [4] ------------------> [7] ----------> [9] --> [10] -> <tail>
//! <head> --> [1] --> [2] --> [3] --> [4] --> [5] --> [6] --> [7] --> [8] --> [9] --> [10] -> <tail>
//! ```
//!
//! Every lane is linked in both directions, so the index can be walked from
//! either end.
//!
//! - [`insert`](OrderedIndex::insert) - Insert, or update the value of an existing key in place
//! - [`search`](OrderedIndex::search) - Expected O(log n) point lookup
//! - [`delete`](OrderedIndex::delete) - Remove a key, reporting whether it was present
//! - [`iter`](OrderedIndex::iter) / [`iter_levels`](OrderedIndex::iter_levels) - Walk in key order, forwards or backwards
//!
//! # Example
//!
//! ```
//! use lanes::OrderedIndex;
//!
//! let mut index = OrderedIndex::new();
//! index.insert(5, 'a');
//! index.insert(1, 'b');
//! index.insert(9, 'c');
//!
//! assert_eq!(index.search(&5), Some((&5, &'a')));
//! assert!(index.delete(&5));
//! assert_eq!(index.search(&5), None);
//!
//! let backwards: Vec<_> = index.iter().rev().map(|(k, _)| *k).collect();
//! assert_eq!(backwards, [9, 1]);
//! ```
//!
//! # Collaborators
//!
//! Two small containers ship alongside the index: [`Stack`], a LIFO stack that
//! grows in fixed steps, and, with the `std` feature, [`BlockingQueue`], a
//! rendezvous queue where each push waits for a pop.
//!
//! # Features
//!
//! - **`std`** (default) - Seeds the level generator from the OS and enables [`BlockingQueue`].
//!   Without it the crate is `no_std` and only needs `alloc`.
//!
//! # Implementation
//!
//! Nodes live in an arena and refer to one another by index rather than by
//! pointer. The head and tail sentinels occupy the first two slots and are
//! never freed.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

mod raw;

pub mod ordered_index;
#[cfg(feature = "std")]
pub mod queue;
pub mod stack;

pub use ordered_index::{IndexConfig, OrderedIndex};
#[cfg(feature = "std")]
pub use queue::BlockingQueue;
pub use raw::MAX_LEVEL;
pub use stack::Stack;
