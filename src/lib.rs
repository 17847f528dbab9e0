//! Comparator-driven binary heap priority queue for Rust
//!
//! This crate provides a single data structure: an array-backed binary heap
//! whose priority order is supplied by the caller as a comparator. It is the
//! building block for schedulers, pathfinding frontiers and event
//! simulations that need "next most important item" without committing to a
//! fixed ordering.
//!
//! # Features
//!
//! - **Pluggable ordering**: any `Fn(&T, &T) -> Ordering`, the named rules in
//!   [`compare`], or a rule chosen at runtime by name
//! - **O(log n)** push and pop, **O(1)** peek, **O(n)** bulk construction
//! - **Optional-element enqueue**: [`enqueue`](BinaryHeapPriorityQueue::enqueue)
//!   accepts `Option<T>` and silently skips `None`
//!
//! The queue has no handles, `decrease_key` or merge, and no internal
//! synchronization; wrap it in a lock to share it between threads.
//!
//! # Example
//!
//! ```rust
//! use comparator_heap::BinaryHeapPriorityQueue;
//!
//! let mut queue = BinaryHeapPriorityQueue::new();
//! for value in [5, 3, 8, 1, 4] {
//!     queue.enqueue(Some(value));
//! }
//! queue.enqueue(None);
//!
//! assert_eq!(queue.len(), 5);
//! assert_eq!(queue.peek(), Some(&1));
//! assert_eq!(queue.into_sorted_vec(), vec![1, 3, 4, 5, 8]);
//! ```

pub mod binary_heap;
pub mod compare;
pub mod traits;

// Re-export the main types for convenience
pub use binary_heap::BinaryHeapPriorityQueue;
pub use compare::{Comparator, NaturalOrder, OrderingRule, ReverseOrder, TotalOrder};
pub use traits::{Heap, QueueError};
