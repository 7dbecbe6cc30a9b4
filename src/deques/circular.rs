//! Growable ring-buffer deque with amortized O(1) operations at both ends.

use core::fmt;
use log::trace;

use crate::deque::{Deque, Elements, fmt_elements};
use crate::error::{Error, Result};

/// Allocates `capacity` empty slots.
pub(crate) fn empty_slots<E>(capacity: usize) -> Box<[Option<E>]> {
    core::iter::repeat_with(|| None).take(capacity).collect()
}

/// A double-ended queue backed by a circular slot buffer.
///
/// # Representation
/// Logical index `i` (0 is the front) lives in physical slot
/// `(head + i) % capacity`. Slots outside the window `[head, head + len)` hold
/// `None`; a removed element is taken out of its slot, so the buffer never
/// keeps a payload alive after it leaves the deque.
///
/// # Growth
/// When an insertion needs more room than the buffer has, a new buffer of
/// `max(len + 1, 2 * capacity)` slots is allocated and the live elements are
/// moved into it in logical order starting at slot 0, resetting `head`.
/// Capacity never shrinks.
///
/// # Instrumentation
/// [`ops`](CircularDeque::ops) counts slot writes and moves performed by this
/// instance. It is diagnostic only.
#[derive(Clone)]
pub struct CircularDeque<E> {
    slots: Box<[Option<E>]>,
    head: usize,
    len: usize,
    ops: u64,
}

impl<E> Deque<E> for CircularDeque<E> {
    fn len(&self) -> usize {
        self.len
    }
    fn insert_front(&mut self, item: E) {
        self.push_front(item);
    }
    fn insert_back(&mut self, item: E) {
        self.push_back(item);
    }
    fn remove_front(&mut self) -> Result<E> {
        self.pop_front().ok_or(Error::EmptyContainer)
    }
    fn remove_back(&mut self) -> Result<E> {
        self.pop_back().ok_or(Error::EmptyContainer)
    }
    fn peek_front(&self) -> Result<&E> {
        self.front().ok_or(Error::EmptyContainer)
    }
    fn peek_back(&self) -> Result<&E> {
        self.back().ok_or(Error::EmptyContainer)
    }
    fn elements(&self) -> Elements<'_, E> {
        Box::new(self.iter())
    }
}

impl<E> CircularDeque<E> {
    /// Capacity used by [`new`](CircularDeque::new) and whenever a capacity of
    /// zero is requested.
    pub const DEFAULT_CAPACITY: usize = 16;

    /// Creates an empty deque with [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY) slots.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates an empty deque with room for `capacity` elements before the
    /// first growth. A capacity of zero falls back to the default.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            Self::DEFAULT_CAPACITY
        } else {
            capacity
        };
        Self {
            slots: empty_slots(capacity),
            head: 0,
            len: 0,
            ops: 0,
        }
    }

    /// Returns the number of elements currently in the deque.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque contains no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the buffer.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slot writes and moves performed so far.
    pub fn ops(&self) -> u64 {
        self.ops
    }

    /// Maps a logical offset from `idx` to a physical slot.
    #[inline(always)]
    fn wrap_add(&self, idx: usize, add: usize) -> usize {
        (idx + add) % self.capacity()
    }

    /// Steps backwards from `idx`, wrapping below zero. `sub` never exceeds
    /// the capacity.
    #[inline(always)]
    fn wrap_sub(&self, idx: usize, sub: usize) -> usize {
        (idx + self.capacity() - sub) % self.capacity()
    }

    /// Returns a shared reference to the element at logical `index`, or `None`.
    pub fn get(&self, index: usize) -> Option<&E> {
        if index < self.len {
            self.slots[self.wrap_add(self.head, index)].as_ref()
        } else {
            None
        }
    }

    /// Makes room for one more element.
    #[inline(always)]
    fn reserve_one(&mut self) {
        let needed = self.len + 1;
        if needed > self.capacity() {
            self.grow(needed);
        }
    }

    /// Cold path: moves the live window into a buffer of at least `needed`
    /// slots (doubling), in logical order from slot 0.
    #[inline(never)]
    fn grow(&mut self, needed: usize) {
        let new_capacity = needed.max(self.capacity() * 2);
        trace!(
            "circular deque growing from {} to {} slots",
            self.capacity(),
            new_capacity
        );
        let mut fresh = empty_slots(new_capacity);
        for (i, slot) in fresh.iter_mut().take(self.len).enumerate() {
            let from = self.wrap_add(self.head, i);
            *slot = self.slots[from].take();
            self.ops += 1;
        }
        self.slots = fresh;
        self.head = 0;
    }

    /// Prepends `item`, growing the buffer if it is full.
    pub fn push_front(&mut self, item: E) {
        self.reserve_one();
        self.head = self.wrap_sub(self.head, 1);
        self.slots[self.head] = Some(item);
        self.len += 1;
        self.ops += 1;
    }

    /// Appends `item`, growing the buffer if it is full.
    pub fn push_back(&mut self, item: E) {
        self.reserve_one();
        let tail = self.wrap_add(self.head, self.len);
        self.slots[tail] = Some(item);
        self.len += 1;
        self.ops += 1;
    }

    /// Removes and returns the first element, or `None` if empty.
    pub fn pop_front(&mut self) -> Option<E> {
        if self.len == 0 {
            return None;
        }
        let item = self.slots[self.head].take();
        self.head = self.wrap_add(self.head, 1);
        self.len -= 1;
        self.ops += 1;
        item
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<E> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let tail = self.wrap_add(self.head, self.len);
        self.ops += 1;
        self.slots[tail].take()
    }

    /// Returns the front element, or `None` if empty.
    #[inline(always)]
    pub fn front(&self) -> Option<&E> {
        self.get(0)
    }

    /// Returns the back element, or `None` if empty.
    #[inline(always)]
    pub fn back(&self) -> Option<&E> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    /// Drops every element. Capacity is kept.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
        self.head = 0;
    }

    /// Returns a front-to-back iterator.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            deque: self,
            front: 0,
            back: self.len,
        }
    }
}

/// Borrowing iterator over a [`CircularDeque`].
pub struct Iter<'a, E> {
    deque: &'a CircularDeque<E>,
    front: usize,
    back: usize,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<&'a E> {
        if self.front == self.back {
            return None;
        }
        let item = self.deque.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<E> DoubleEndedIterator for Iter<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.deque.get(self.back)
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}

impl<'a, E> IntoIterator for &'a CircularDeque<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Iter<'a, E> {
        self.iter()
    }
}

/// Owning iterator; drains from the front.
pub struct IntoIter<E>(CircularDeque<E>);

impl<E> Iterator for IntoIter<E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<E> DoubleEndedIterator for IntoIter<E> {
    fn next_back(&mut self) -> Option<E> {
        self.0.pop_back()
    }
}

impl<E> IntoIterator for CircularDeque<E> {
    type Item = E;
    type IntoIter = IntoIter<E>;

    fn into_iter(self) -> IntoIter<E> {
        IntoIter(self)
    }
}

impl<E: fmt::Debug> fmt::Debug for CircularDeque<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<E: fmt::Display> fmt::Display for CircularDeque<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_elements(f, self.iter())
    }
}

impl<E> Default for CircularDeque<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: PartialEq> PartialEq for CircularDeque<E> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<E: Eq> Eq for CircularDeque<E> {}

impl<E> Extend<E> for CircularDeque<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<E> FromIterator<E> for CircularDeque<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut deque = Self::with_capacity(iter.size_hint().0);
        deque.extend(iter);
        deque
    }
}
