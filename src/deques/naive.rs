#![cfg(feature = "naive")]
//! Plain-buffer deque whose front operations shift every element.
//!
//! [`NaiveDeque`] exists as a comparison point for
//! [`CircularDeque`](crate::CircularDeque): both behave identically, but here
//! logical index `i` is always physical slot `i`, so touching the front costs
//! O(n). The difference is visible through [`NaiveDeque::ops`].

use core::fmt;
use log::trace;

use crate::deque::{Deque, Elements, fmt_elements};
use crate::deques::circular::empty_slots;
use crate::error::{Error, Result};

/// A double-ended queue stored contiguously in slots `[0, len)`.
///
/// * `push_back` / `pop_back` / peeks: O(1) (amortized for pushes).
/// * `push_front` / `pop_front`: O(n), every element moves one slot.
///
/// Growth doubles the buffer exactly like [`CircularDeque`](crate::CircularDeque).
#[derive(Clone)]
pub struct NaiveDeque<E> {
    slots: Box<[Option<E>]>,
    len: usize,
    ops: u64,
}

impl<E> Deque<E> for NaiveDeque<E> {
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

impl<E> NaiveDeque<E> {
    /// Capacity used by [`new`](NaiveDeque::new) and whenever a capacity of
    /// zero is requested.
    pub const DEFAULT_CAPACITY: usize = 10;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates an empty deque with `capacity` slots; zero falls back to the
    /// default.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            Self::DEFAULT_CAPACITY
        } else {
            capacity
        };
        Self {
            slots: empty_slots(capacity),
            len: 0,
            ops: 0,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slot writes and moves performed so far, shifts included.
    pub fn ops(&self) -> u64 {
        self.ops
    }

    pub fn get(&self, index: usize) -> Option<&E> {
        self.live().get(index).and_then(Option::as_ref)
    }

    /// The occupied prefix of the buffer.
    #[inline(always)]
    fn live(&self) -> &[Option<E>] {
        &self.slots[..self.len]
    }

    fn reserve_one(&mut self) {
        let needed = self.len + 1;
        if needed <= self.capacity() {
            return;
        }
        let new_capacity = needed.max(self.capacity() * 2);
        trace!(
            "naive deque growing from {} to {} slots",
            self.capacity(),
            new_capacity
        );
        let mut fresh = empty_slots(new_capacity);
        for (to, from) in fresh.iter_mut().zip(self.slots[..self.len].iter_mut()) {
            *to = from.take();
        }
        self.ops += self.len as u64;
        self.slots = fresh;
    }

    /// Shifts every element one slot toward the back, then writes slot 0.
    pub fn push_front(&mut self, item: E) {
        self.reserve_one();
        // Slot `len` is empty; rotating brings it round to slot 0.
        self.slots[..=self.len].rotate_right(1);
        self.slots[0] = Some(item);
        self.ops += self.len as u64 + 1;
        self.len += 1;
    }

    pub fn push_back(&mut self, item: E) {
        self.reserve_one();
        self.slots[self.len] = Some(item);
        self.len += 1;
        self.ops += 1;
    }

    /// Takes slot 0, then shifts every remaining element one slot toward the
    /// front.
    pub fn pop_front(&mut self) -> Option<E> {
        if self.len == 0 {
            return None;
        }
        let item = self.slots[0].take();
        self.slots[..self.len].rotate_left(1);
        self.len -= 1;
        self.ops += self.len as u64 + 1;
        item
    }

    pub fn pop_back(&mut self) -> Option<E> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        self.ops += 1;
        self.slots[self.len].take()
    }

    #[inline(always)]
    pub fn front(&self) -> Option<&E> {
        self.get(0)
    }

    #[inline(always)]
    pub fn back(&self) -> Option<&E> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    pub fn clear(&mut self) {
        for slot in &mut self.slots[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            inner: self.live().iter(),
        }
    }
}

/// Borrowing iterator over a [`NaiveDeque`].
pub struct Iter<'a, E> {
    inner: core::slice::Iter<'a, Option<E>>,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<&'a E> {
        self.inner.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> DoubleEndedIterator for Iter<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().and_then(Option::as_ref)
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}

impl<'a, E> IntoIterator for &'a NaiveDeque<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Iter<'a, E> {
        self.iter()
    }
}

impl<E: fmt::Debug> fmt::Debug for NaiveDeque<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<E: fmt::Display> fmt::Display for NaiveDeque<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_elements(f, self.iter())
    }
}

impl<E> Default for NaiveDeque<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: PartialEq> PartialEq for NaiveDeque<E> {
    fn eq(&self, other: &Self) -> bool {
        self.live() == other.live()
    }
}

impl<E: Eq> Eq for NaiveDeque<E> {}

impl<E> Extend<E> for NaiveDeque<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<E> FromIterator<E> for NaiveDeque<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut deque = Self::with_capacity(iter.size_hint().0);
        deque.extend(iter);
        deque
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CircularDeque;

    #[test]
    fn test_naive_basic_scenario() {
        let mut d: NaiveDeque<i32> = NaiveDeque::new();
        d.insert_back(10);
        d.insert_back(20);
        d.insert_front(5);
        d.insert_back(30);
        assert_eq!(d.render(), "[5, 10, 20, 30]");
        assert_eq!(d.remove_front(), Ok(5));
        assert_eq!(d.remove_back(), Ok(30));
        assert_eq!(d.to_string(), "[10, 20]");
    }

    #[test]
    fn test_naive_empty_errors() {
        let mut d: NaiveDeque<i32> = NaiveDeque::with_capacity(0);
        assert_eq!(d.capacity(), NaiveDeque::<i32>::DEFAULT_CAPACITY);
        assert_eq!(d.remove_front(), Err(Error::EmptyContainer));
        assert_eq!(d.remove_back(), Err(Error::EmptyContainer));
        assert_eq!(d.peek_front(), Err(Error::EmptyContainer));
        assert_eq!(d.peek_back(), Err(Error::EmptyContainer));
    }

    #[test]
    fn test_naive_front_ops_keep_contiguous_prefix() {
        let mut d: NaiveDeque<i32> = NaiveDeque::with_capacity(2);
        d.push_front(3);
        d.push_front(2);
        d.push_front(1); // grows to 4
        assert_eq!(d.capacity(), 4);
        assert_eq!(d.get(0), Some(&1));
        assert_eq!(d.get(2), Some(&3));
        assert_eq!(d.get(3), None);
        assert_eq!(d.pop_front(), Some(1));
        assert_eq!(d.to_vec(), vec![2, 3]);
        assert_eq!(d.iter().rev().copied().collect::<Vec<_>>(), vec![3, 2]);
    }

    #[test]
    fn test_naive_growth_capacity_plus_one() {
        let mut d: NaiveDeque<usize> = NaiveDeque::with_capacity(5);
        for i in 0..6 {
            d.push_back(i);
        }
        assert_eq!(d.capacity(), 10);
        assert_eq!(d.to_vec(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_naive_front_inserts_are_quadratic_in_ops() {
        let n = 256usize;
        let mut naive: NaiveDeque<usize> = NaiveDeque::with_capacity(n);
        let mut circular: CircularDeque<usize> = CircularDeque::with_capacity(n);
        for i in 0..n {
            naive.push_front(i);
            circular.push_front(i);
        }
        assert_eq!(naive.to_vec(), circular.to_vec());
        // 1 + 2 + ... + n slot operations versus one per insert.
        assert_eq!(naive.ops(), (n * (n + 1) / 2) as u64);
        assert_eq!(circular.ops(), n as u64);
    }

    #[test]
    fn test_naive_back_ops_are_constant() {
        let mut d: NaiveDeque<usize> = NaiveDeque::with_capacity(64);
        for i in 0..64 {
            d.push_back(i);
        }
        while d.pop_back().is_some() {}
        assert_eq!(d.ops(), 128);
    }

    #[test]
    fn test_naive_insert_all_and_contains() {
        let mut d: NaiveDeque<&str> = NaiveDeque::new();
        assert!(d.insert_all([Some("x"), None, Some("y")]));
        assert_eq!(d.render(), "[y, x]");
        assert!(d.contains(&"x"));
        assert!(!d.contains(&"z"));
        assert!(d.contains_all([None, Some(&"y")]));
    }

    #[test]
    fn test_naive_traits_eq_ignores_spare_slots() {
        let mut a: NaiveDeque<i32> = NaiveDeque::with_capacity(2);
        let b: NaiveDeque<i32> = [1, 2].into_iter().collect();
        a.push_back(1);
        a.push_back(2);
        a.push_back(3);
        a.pop_back();
        assert_eq!(a, b);
        assert_eq!(format!("{:?}", a), "[1, 2]");
        a.clear();
        assert!(a.is_empty());
        assert_eq!(a.render(), "[]");
    }
}
