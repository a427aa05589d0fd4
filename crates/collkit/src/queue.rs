//! Fixed-capacity priority queue that retains the best `k` elements seen.

use crate::order::{Comparator, Natural};
use std::{
    cmp::Ordering,
    fmt::{self, Debug, Formatter},
    mem::replace,
};

/// Upper bound on the number of slots reserved up front; larger queues grow
/// on demand.
const MAX_PREALLOCATED_SLOTS: usize = 1024;

/// Fill state of a [`BoundedPriorityQueue`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueueState {
    /// No elements yet.
    Empty,
    /// Holds fewer elements than its capacity: insertions always succeed.
    Filling,
    /// Holds `capacity` elements: an insertion evicts the worst element or is
    /// discarded.  A queue with capacity 0 is always full.
    Full,
}

struct Slot<T> {
    /// Insertion sequence number, used to break ties between elements the
    /// comparator considers equal.
    seq: u64,
    value: T,
}

/// A priority queue that keeps at most `capacity` elements: the ones that
/// sort first under its comparator.
///
/// Elements are stored in a binary heap with the worst retained element at
/// the root.  Once the queue is full, an insertion is compared against that
/// element only, so feeding `n` elements through a queue of capacity `k`
/// costs `O(n log k)`.
///
/// Elements that the comparator considers equal are ranked by insertion
/// order, earliest first.  The retained elements are therefore exactly the
/// first `capacity` elements of a stable sort of everything inserted.
pub struct BoundedPriorityQueue<T, C> {
    // Max-heap under `rank`: `heap[0]` is the worst retained element.
    heap: Vec<Slot<T>>,
    capacity: usize,
    comparator: C,
    next_seq: u64,
}

impl<T> BoundedPriorityQueue<T, Natural>
where
    T: Ord,
{
    /// Creates a queue that retains the `capacity` smallest elements.
    pub fn with_natural_order(capacity: usize) -> Self {
        Self::new(capacity, Natural)
    }
}

impl<T, C> BoundedPriorityQueue<T, C>
where
    C: Comparator<T>,
{
    pub fn new(capacity: usize, comparator: C) -> Self {
        Self {
            heap: Vec::with_capacity(capacity.min(MAX_PREALLOCATED_SLOTS)),
            capacity,
            comparator,
            next_seq: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.heap.len() == self.capacity
    }

    pub fn state(&self) -> QueueState {
        if self.is_full() {
            QueueState::Full
        } else if self.is_empty() {
            QueueState::Empty
        } else {
            QueueState::Filling
        }
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// The element that would be evicted next, i.e., the one that sorts last
    /// among the retained elements.
    pub fn peek_worst(&self) -> Option<&T> {
        self.heap.first().map(|slot| &slot.value)
    }

    /// Offers `value` to the queue.
    ///
    /// Returns the element that did not make the cut: `None` while the queue
    /// is filling, otherwise either the evicted worst element or `value`
    /// itself when it does not sort strictly before the worst element.
    pub fn insert(&mut self, value: T) -> Option<T> {
        if self.capacity == 0 {
            return Some(value);
        }

        let slot = Slot {
            seq: self.next_seq,
            value,
        };
        self.next_seq += 1;

        if self.heap.len() < self.capacity {
            self.heap.push(slot);
            self.sift_up(self.heap.len() - 1);
            return None;
        }

        // `slot` has the largest sequence number so far, so it only outranks
        // the root if the comparator puts it strictly first.
        if self.comparator.less(&slot.value, &self.heap[0].value) {
            let evicted = replace(&mut self.heap[0], slot);
            self.sift_down(0);
            Some(evicted.value)
        } else {
            Some(slot.value)
        }
    }

    /// Removes all elements, keeping the capacity and comparator.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }

    /// Returns the retained elements in ascending comparator order without
    /// consuming the queue, which keeps accepting insertions afterwards.
    pub fn to_sorted_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut slots: Vec<&Slot<T>> = self.heap.iter().collect();
        slots.sort_unstable_by(|left, right| self.rank(left, right));
        slots.into_iter().map(|slot| slot.value.clone()).collect()
    }

    /// Consumes the queue and returns its elements in ascending comparator
    /// order.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let Self {
            mut heap,
            comparator,
            ..
        } = self;
        heap.sort_unstable_by(|left, right| rank(&comparator, left, right));
        heap.into_iter().map(|slot| slot.value).collect()
    }

    #[inline]
    fn rank(&self, left: &Slot<T>, right: &Slot<T>) -> Ordering {
        rank(&self.comparator, left, right)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.rank(&self.heap[index], &self.heap[parent]) != Ordering::Greater {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let mut child = left;
            if right < len && self.rank(&self.heap[right], &self.heap[left]) == Ordering::Greater {
                child = right;
            }

            if self.rank(&self.heap[child], &self.heap[index]) != Ordering::Greater {
                break;
            }
            self.heap.swap(index, child);
            index = child;
        }
    }
}

fn rank<T, C>(comparator: &C, left: &Slot<T>, right: &Slot<T>) -> Ordering
where
    C: Comparator<T>,
{
    comparator
        .compare(&left.value, &right.value)
        .then(left.seq.cmp(&right.seq))
}

impl<T, C> Extend<T> for BoundedPriorityQueue<T, C>
where
    C: Comparator<T>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C> Debug for BoundedPriorityQueue<T, C>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedPriorityQueue")
            .field("capacity", &self.capacity)
            .field("len", &self.heap.len())
            .field(
                "worst",
                &self.heap.first().map(|slot| &slot.value),
            )
            .finish_non_exhaustive()
    }
}
