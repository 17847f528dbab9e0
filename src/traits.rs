//! Common traits for the priority queue
//!
//! This module provides the interface shared by every queue in the crate:
//!
//! - [`Heap`]: Base trait for simple heaps without handle or `decrease_key` support
//! - [`QueueError`]: The single error kind the crate can produce
//!
//! The [`Heap`] trait is compatible with Rust's standard heap API patterns,
//! so code written against it can switch ordering rules by switching the
//! concrete type.

use std::fmt;

/// Error type for queue construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// The supplied ordering rule does not denote a comparison
    ///
    /// Carries the rejected input verbatim.
    InvalidArgument(String),
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::InvalidArgument(rule) => {
                write!(f, "expected a valid ordering rule, got {:?}", rule)
            }
        }
    }
}

impl std::error::Error for QueueError {}

/// Base trait for heap/priority queue data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element (returns `()`)
/// - `pop` removes and returns the highest-priority element
/// - `peek` returns the highest-priority element without removing it
///
/// Unlike `BinaryHeap`, which is always a max-heap over `Ord`, "highest
/// priority" is decided by the queue's ordering rule. With the default rule
/// that is the minimum.
///
/// # Example
///
/// ```rust
/// use comparator_heap::Heap;
/// use comparator_heap::binary_heap::BinaryHeapPriorityQueue;
///
/// let mut heap: BinaryHeapPriorityQueue<i32> = Heap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// ```
pub trait Heap<T> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n), amortized O(1) for growing the backing store.
    fn push(&mut self, item: T);

    /// Returns the highest-priority element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the highest-priority element
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;
}
