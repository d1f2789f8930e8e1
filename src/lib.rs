//! # Ring Deque
//!
//! A growable double-ended queue implemented as a circular buffer over a
//! single contiguous allocation.
//!
//! This crate provides [`RingDeque`], a deque with amortized O(1) insertion
//! and removal at both ends, O(1) random access by logical index, and an
//! explicit full-vs-empty representation (a stored element count, so the
//! cursor equality `begin == end` is never ambiguous).
//!
//! ## Key Features
//!
//! * **Single allocation:** all elements live in one contiguous buffer treated
//!   as a ring; the live range may wrap past the physical end and continue at
//!   slot 0.
//! * **Amortized growth:** a push against a full buffer reallocates to
//!   `2 * capacity + 1` slots and moves the live range to the front of the new
//!   buffer in logical order.
//! * **Checked everywhere:** popping or peeking an empty deque and indexing out
//!   of range return `None` in every build; allocation failure is reportable
//!   through the `try_*` constructors and pushes as [`ReserveError`].
//! * **Backend-agnostic callers:** the [`AnyDeque`] trait covers the operation
//!   set and is implemented for both `RingDeque` and
//!   `std::collections::VecDeque`.
//!
//! ## Examples
//!
//! FIFO use with growth:
//!
//! ```rust
//! use ring_deque::RingDeque;
//!
//! let mut queue = RingDeque::with_capacity(2);
//! queue.push_back(10);
//! queue.push_back(20);
//! assert!(queue.is_full());
//!
//! // Third push reallocates; order is preserved.
//! queue.push_back(30);
//! assert_eq!(queue.capacity(), 5);
//! assert_eq!(queue.pop_front(), Some(10));
//! assert_eq!(queue.pop_front(), Some(20));
//! assert_eq!(queue.pop_front(), Some(30));
//! assert!(queue.is_empty());
//! ```
//!
//! Both ends, plus random access by logical index:
//!
//! ```rust
//! use ring_deque::RingDeque;
//!
//! let mut deque: RingDeque<i32> = (1..=3).collect();
//! assert_eq!(deque.pop_back(), Some(3));
//! deque.push_front(0);
//! assert_eq!(deque.get(0), Some(&0));
//! assert_eq!(deque.get(2), Some(&2));
//! assert_eq!(deque.get(3), None);
//! ```
//!
//! As a breadth-first work-list behind [`AnyDeque`]:
//!
//! ```rust
//! use ring_deque::{AnyDeque, RingDeque};
//!
//! fn drain_frontier(frontier: &mut dyn AnyDeque<u32>) -> Vec<u32> {
//!     let mut visited = Vec::new();
//!     while let Some(node) = frontier.pop_front() {
//!         visited.push(node);
//!     }
//!     visited
//! }
//!
//! let mut frontier = RingDeque::with_capacity(4);
//! frontier.push_back(1);
//! frontier.push_back(2);
//! assert_eq!(drain_frontier(&mut frontier), vec![1, 2]);
//! ```

// --- Module Declarations ---

pub mod deque;
pub mod error;

// --- Re-exports ---

pub use deque::{AnyDeque, IntoIter, Iter, IterMut, RingDeque};
pub use error::ReserveError;
