//! Binary Heap Priority Queue implementation
//!
//! An array-backed binary heap whose priority order comes from an injected
//! [`Comparator`]. With the default [`NaturalOrder`] it is a min-heap; with
//! [`ReverseOrder`](crate::compare::ReverseOrder) or a closure it can order
//! elements any way the caller needs.
//!
//! The heap lives in a single `Vec<T>` in level order: the children of index
//! `i` are at `2i + 1` and `2i + 2`, and no child ever compares `Less` than
//! its parent.
//!
//! # Time Complexity
//!
//! | Operation          | Complexity |
//! |--------------------|------------|
//! | `push`/`enqueue`   | O(log n)   |
//! | `pop`/`dequeue`    | O(log n)   |
//! | `peek`             | O(1)       |
//! | `len`/`is_empty`   | O(1)       |
//! | `to_vec`           | O(n)       |
//! | `from(Vec<T>)`     | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use comparator_heap::binary_heap::BinaryHeapPriorityQueue;
//!
//! let mut queue = BinaryHeapPriorityQueue::with_comparator(|a: &i32, b: &i32| b.cmp(a));
//! queue.push(5);
//! queue.push(3);
//! queue.push(8);
//!
//! assert_eq!(queue.peek(), Some(&8));
//! assert_eq!(queue.dequeue(), Some(8));
//! assert_eq!(queue.dequeue(), Some(5));
//! assert_eq!(queue.dequeue(), Some(3));
//! assert_eq!(queue.dequeue(), None);
//! ```

use crate::compare::{Comparator, NaturalOrder, OrderingRule};
use crate::traits::{Heap, QueueError};
use std::cmp::Ordering;
use std::fmt;

/// A binary heap priority queue ordered by a comparator
///
/// The element for which the comparator returns `Less` against every other
/// element is dequeued first. Elements that compare `Equal` come out in an
/// unspecified relative order.
///
/// Elements have no stable position or handle; there is no way to update or
/// remove an element other than the current front.
#[derive(Clone)]
pub struct BinaryHeapPriorityQueue<T, C = NaturalOrder> {
    /// The heap in level order
    data: Vec<T>,
    cmp: C,
}

impl<T: Ord> BinaryHeapPriorityQueue<T> {
    /// Creates an empty queue that dequeues the smallest element first
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    /// Creates an empty ascending queue with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, NaturalOrder)
    }
}

impl<T: Ord> BinaryHeapPriorityQueue<T, OrderingRule> {
    /// Creates an empty queue from the name of an ordering rule
    ///
    /// See [`OrderingRule`] for the accepted names.
    ///
    /// # Errors
    /// Returns [`QueueError::InvalidArgument`] if `name` is not a rule.
    ///
    /// ```rust
    /// use comparator_heap::binary_heap::BinaryHeapPriorityQueue;
    /// use comparator_heap::QueueError;
    ///
    /// let mut queue = BinaryHeapPriorityQueue::from_rule_name("max").unwrap();
    /// queue.push(1);
    /// queue.push(9);
    /// assert_eq!(queue.peek(), Some(&9));
    ///
    /// let err = BinaryHeapPriorityQueue::<i32, _>::from_rule_name("42").unwrap_err();
    /// assert_eq!(err, QueueError::InvalidArgument("42".to_string()));
    /// ```
    pub fn from_rule_name(name: &str) -> Result<Self, QueueError> {
        let rule = name.parse::<OrderingRule>()?;
        Ok(Self::with_comparator(rule))
    }
}

impl<T, C: Comparator<T>> BinaryHeapPriorityQueue<T, C> {
    /// Creates an empty queue ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            data: Vec::new(),
            cmp,
        }
    }

    /// Creates an empty queue ordered by `cmp` with room for `capacity` elements
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Returns the ordering rule
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the number of elements in the queue
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the queue holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the backing store can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves room for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Releases unused backing store capacity
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Returns the highest-priority element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Inserts an element if one is given
    ///
    /// `None` is ignored: the queue is left exactly as it was and no error is
    /// reported. Use [`push`](Self::push) when the element is always present.
    pub fn enqueue(&mut self, element: Option<T>) {
        if let Some(element) = element {
            self.push(element);
        }
    }

    /// Inserts an element
    pub fn push(&mut self, element: T) {
        self.data.push(element);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the highest-priority element
    ///
    /// Returns `None` and leaves the queue untouched if it is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        let last = self.data.pop()?;
        if self.data.is_empty() {
            // It was the only element; nothing to compare against.
            return Some(last);
        }

        let front = std::mem::replace(&mut self.data[0], last);
        self.sift_down(0);
        Some(front)
    }

    /// Alias for [`dequeue`](Self::dequeue)
    pub fn pop(&mut self) -> Option<T> {
        self.dequeue()
    }

    /// Returns an iterator over the elements in heap (level) order
    ///
    /// Only the first element is guaranteed to be the current front.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Removes all elements, keeping the allocated capacity
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the queue, returning the backing store in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the queue, returning its elements in dequeue order
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter_sorted().collect()
    }

    /// Consumes the queue into an iterator that dequeues until empty
    pub fn into_iter_sorted(self) -> IntoIterSorted<T, C> {
        IntoIterSorted { queue: self }
    }

    /// Returns true if every parent compares no greater than its children
    pub fn is_heap(&self) -> bool {
        (1..self.data.len()).all(|i| {
            let parent = (i - 1) / 2;
            self.cmp.compare(&self.data[parent], &self.data[i]) != Ordering::Greater
        })
    }

    /// Move element at index up while it outranks its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.cmp.compare(&self.data[parent], &self.data[index]) == Ordering::Greater {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down while a child outranks it
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let mut child = left;
            if right < len
                && self.cmp.compare(&self.data[left], &self.data[right]) == Ordering::Greater
            {
                child = right;
            }

            if self.cmp.compare(&self.data[child], &self.data[index]) == Ordering::Less {
                self.data.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
    }

    /// Restore the heap property over an arbitrary backing store
    fn heapify(&mut self) {
        let len = self.data.len();
        log::trace!("heapifying {} elements", len);
        for index in (0..len / 2).rev() {
            self.sift_down(index);
        }
    }
}

impl<T: Clone, C: Comparator<T>> BinaryHeapPriorityQueue<T, C> {
    /// Returns a snapshot of the backing store in heap (level) order
    ///
    /// This is not sorted order: only index 0 is meaningful, and it equals
    /// [`peek`](Self::peek). Later changes to the queue do not affect the
    /// returned vector.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }
}

impl<T, C: Comparator<T> + Default> Heap<T> for BinaryHeapPriorityQueue<T, C> {
    fn new() -> Self {
        Self::with_comparator(C::default())
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, item: T) {
        BinaryHeapPriorityQueue::push(self, item);
    }

    fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    fn pop(&mut self) -> Option<T> {
        self.dequeue()
    }
}

impl<T, C: Comparator<T> + Default> Default for BinaryHeapPriorityQueue<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeapPriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeapPriorityQueue")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl<T, C: Comparator<T> + Default> From<Vec<T>> for BinaryHeapPriorityQueue<T, C> {
    /// Builds a queue from arbitrary elements in O(n)
    fn from(data: Vec<T>) -> Self {
        let mut queue = Self {
            data,
            cmp: C::default(),
        };
        queue.heapify();
        queue
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for BinaryHeapPriorityQueue<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T, C: Comparator<T>> Extend<T> for BinaryHeapPriorityQueue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for element in iter {
            self.push(element);
        }
    }
}

impl<'a, T, C> IntoIterator for &'a BinaryHeapPriorityQueue<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Consuming iterator yielding elements in dequeue order
///
/// Created by [`BinaryHeapPriorityQueue::into_iter_sorted`].
pub struct IntoIterSorted<T, C> {
    queue: BinaryHeapPriorityQueue<T, C>,
}

impl<T, C: Comparator<T>> Iterator for IntoIterSorted<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.data.len();
        (len, Some(len))
    }
}

impl<T, C: Comparator<T>> ExactSizeIterator for IntoIterSorted<T, C> {}
