//! Priority queue with a "cut to the front" admission rule.
//!
//! [`BigPriorityQueue`] does not sort. Each offered element is compared with
//! the current front only: if it orders strictly before the front it jumps
//! the whole line, otherwise it joins the back. The resulting order is the
//! product of those sequential decisions:
//!
//! ```
//! use deque_collections::BigPriorityQueue;
//!
//! let mut q: BigPriorityQueue<i32> = BigPriorityQueue::new();
//! for x in [10, 20, 5, 7, 1] {
//!     q.offer(x).unwrap();
//! }
//! assert_eq!(q.render(), "[1, 5, 10, 20, 7]");
//! assert_eq!(q.poll(), Some(1));
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use log::trace;

use crate::deque::Deque;
use crate::deques::CircularDeque;
use crate::error::{Error, Result};

// ─── Ordering capability ──────────────────────────────────────────────────────

/// Orders two elements; `None` means they cannot be ordered.
///
/// Implemented by [`NaturalOrder`], by [`PartialOrderBy`], and by every
/// closure `Fn(&T, &T) -> Ordering`.
pub trait Compare<T> {
    fn compare(&self, a: &T, b: &T) -> Option<Ordering>;
}

/// The element type's own [`PartialOrd`]. Elements without a total order
/// (e.g. `f64::NAN`) fail with [`Error::Incomparable`] when first compared.
#[derive(Copy, Clone, Debug, Default)]
pub struct NaturalOrder;

impl<T: PartialOrd> Compare<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Option<Ordering> {
        a.partial_cmp(b)
    }
}

/// Wraps a fallible comparator `Fn(&T, &T) -> Option<Ordering>`.
#[derive(Copy, Clone, Debug)]
pub struct PartialOrderBy<F>(pub F);

impl<T, F> Compare<T> for PartialOrderBy<F>
where
    F: Fn(&T, &T) -> Option<Ordering>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Option<Ordering> {
        (self.0)(a, b)
    }
}

impl<T, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Option<Ordering> {
        Some(self(a, b))
    }
}

// ─── BigPriorityQueue ─────────────────────────────────────────────────────────

/// A queue stored in a single [`Deque`] where smaller elements may cut ahead.
///
/// # Generic parameters
/// | Parameter | Meaning |
/// |-----------|--------|
/// | `T` | Element type |
/// | `D` | Backing deque, [`CircularDeque<T>`] by default |
/// | `C` | Ordering capability, [`NaturalOrder`] by default |
///
/// The backing deque is the only storage. `poll` and `peek` report an empty
/// queue as `None` rather than as an error.
pub struct BigPriorityQueue<T, D = CircularDeque<T>, C = NaturalOrder> {
    deque: D,
    order: C,
    _marker: PhantomData<T>,
}

impl<T> BigPriorityQueue<T> {
    /// Creates an empty queue over a [`CircularDeque`] using natural ordering.
    pub fn new() -> Self {
        Self::with_deque(CircularDeque::new())
    }
}

impl<T, C> BigPriorityQueue<T, CircularDeque<T>, C> {
    /// Creates an empty queue over a [`CircularDeque`] ordered by `order`.
    pub fn with_comparator(order: C) -> Self {
        Self::with_deque_and_comparator(CircularDeque::new(), order)
    }
}

impl<T, D> BigPriorityQueue<T, D, NaturalOrder> {
    /// Uses `deque` as storage with natural ordering. Elements already in
    /// `deque` stay where they are.
    pub fn with_deque(deque: D) -> Self {
        Self::with_deque_and_comparator(deque, NaturalOrder)
    }
}

impl<T, D, C> BigPriorityQueue<T, D, C> {
    pub fn with_deque_and_comparator(deque: D, order: C) -> Self {
        Self {
            deque,
            order,
            _marker: PhantomData,
        }
    }

    /// Read-only view of the backing deque.
    pub fn deque(&self) -> &D {
        &self.deque
    }

    /// Gives the backing deque back.
    pub fn into_deque(self) -> D {
        self.deque
    }
}

impl<T, D, C> BigPriorityQueue<T, D, C>
where
    D: Deque<T>,
    C: Compare<T>,
{
    /// Offers `item` to the queue.
    ///
    /// An empty queue takes it at the back. Otherwise it is compared with the
    /// current front: strictly smaller goes to the front, anything else goes
    /// to the back.
    ///
    /// # Errors
    /// * [`Error::InvalidArgument`] if `item` is `None`.
    /// * [`Error::Incomparable`] if `item` and the front cannot be ordered; the
    ///   queue is left unchanged.
    pub fn offer(&mut self, item: impl Into<Option<T>>) -> Result<bool> {
        let item = item.into().ok_or(Error::InvalidArgument)?;
        let cuts = match self.deque.peek_front() {
            Err(_) => false,
            Ok(front) => {
                let ordering = self
                    .order
                    .compare(&item, front)
                    .ok_or(Error::Incomparable)?;
                ordering == Ordering::Less
            }
        };
        if cuts {
            trace!("offer cuts ahead of the front");
            self.deque.insert_front(item);
        } else {
            trace!("offer joins the back");
            self.deque.insert_back(item);
        }
        Ok(true)
    }

    /// Removes and returns the front element, or `None` if the queue is empty.
    pub fn poll(&mut self) -> Option<T> {
        self.deque.remove_front().ok()
    }

    /// Returns the front element, or `None` if the queue is empty.
    pub fn peek(&self) -> Option<&T> {
        self.deque.peek_front().ok()
    }

    /// Returns `true` if some element equals `value`. An absent query is
    /// simply not contained.
    pub fn contains<'a>(&self, value: impl Into<Option<&'a T>>) -> bool
    where
        T: PartialEq + 'a,
    {
        value.into().is_some_and(|value| self.deque.contains(value))
    }

    pub fn len(&self) -> usize {
        self.deque.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }

    /// The backing deque's rendering, unchanged.
    pub fn render(&self) -> String
    where
        T: fmt::Display,
    {
        self.deque.render()
    }
}

impl<T> Default for BigPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, D, C> fmt::Display for BigPriorityQueue<T, D, C>
where
    T: fmt::Display,
    D: Deque<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.deque.render())
    }
}

impl<T, D: fmt::Debug, C> fmt::Debug for BigPriorityQueue<T, D, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BigPriorityQueue").field(&self.deque).finish()
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(feature = "linked")]
    use crate::LinkedDeque;
    #[cfg(feature = "naive")]
    use crate::NaiveDeque;

    /// Polls until empty and renders what came out.
    fn drain<T, D, C>(q: &mut BigPriorityQueue<T, D, C>) -> String
    where
        T: fmt::Display,
        D: Deque<T>,
        C: Compare<T>,
    {
        let mut out = CircularDeque::new();
        while let Some(item) = q.poll() {
            out.push_back(item);
        }
        out.to_string()
    }

    // ─── natural ordering ────────────────────────────────────────────────────
    #[test]
    fn test_priority_initial_state_is_empty() {
        let mut q: BigPriorityQueue<i32> = BigPriorityQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.peek(), None);
        assert_eq!(q.poll(), None);
        assert_eq!(q.render(), "[]");
        assert!(!q.contains(&1));
    }

    #[test]
    fn test_priority_offer_none_is_rejected() {
        let mut q: BigPriorityQueue<i32> = BigPriorityQueue::new();
        assert_eq!(q.offer(None::<i32>), Err(Error::InvalidArgument));
        assert!(q.is_empty());
    }

    #[test]
    fn test_priority_single_offer_becomes_front() {
        let mut q: BigPriorityQueue<i32> = BigPriorityQueue::new();
        assert_eq!(q.offer(10), Ok(true));
        assert_eq!(q.peek(), Some(&10));
        assert!(q.contains(&10));
        assert_eq!(q.render(), "[10]");
    }

    #[test]
    fn test_priority_smaller_than_front_cuts() {
        let mut q: BigPriorityQueue<i32> = BigPriorityQueue::new();
        for x in [10, 20, 5] {
            q.offer(x).unwrap();
        }
        assert_eq!(q.peek(), Some(&5));
        assert_eq!(q.render(), "[5, 10, 20]");
        assert_eq!(drain(&mut q), "[5, 10, 20]");
        assert_eq!(q.poll(), None);
    }

    #[test]
    fn test_priority_equal_to_front_goes_back() {
        let mut q: BigPriorityQueue<i32> = BigPriorityQueue::new();
        q.offer(10).unwrap();
        q.offer(10).unwrap();
        assert_eq!(q.render(), "[10, 10]");
    }

    #[test]
    fn test_priority_larger_than_front_goes_back_unsorted() {
        let mut q: BigPriorityQueue<i32> = BigPriorityQueue::new();
        for x in [10, 30, 20] {
            q.offer(x).unwrap();
        }
        assert_eq!(q.render(), "[10, 30, 20]");
        assert_eq!(drain(&mut q), "[10, 30, 20]");
    }

    #[test]
    fn test_priority_sequential_cut_trace() {
        let mut q: BigPriorityQueue<i32> = BigPriorityQueue::new();
        for x in [10, 20, 5, 7, 1] {
            q.offer(x).unwrap();
        }
        assert_eq!(q.render(), "[1, 5, 10, 20, 7]");
        assert_eq!(q.peek(), Some(&1));
        assert_eq!(q.poll(), Some(1));
        assert_eq!(q.render(), "[5, 10, 20, 7]");
        assert_eq!(q.to_string(), "[5, 10, 20, 7]");
    }

    #[test]
    fn test_priority_poll_updates_front() {
        let mut q: BigPriorityQueue<i32> = BigPriorityQueue::new();
        for x in [10, 20, 5] {
            q.offer(x).unwrap();
        }
        assert_eq!(q.poll(), Some(5));
        assert_eq!(q.peek(), Some(&10));
        assert_eq!(q.poll(), Some(10));
        assert_eq!(q.render(), "[20]");
        assert_eq!(q.poll(), Some(20));
        assert_eq!(q.peek(), None);
        assert_eq!(q.render(), "[]");
    }

    #[test]
    fn test_priority_contains_absent_is_false() {
        let mut q: BigPriorityQueue<i32> = BigPriorityQueue::new();
        q.offer(10).unwrap();
        assert!(!q.contains(None::<&i32>));
        assert!(!q.contains(&11));
    }

    #[test]
    fn test_priority_incomparable_fails_on_first_comparison() {
        let mut q: BigPriorityQueue<f64> = BigPriorityQueue::new();
        // Nothing to compare against yet.
        assert_eq!(q.offer(f64::NAN), Ok(true));
        assert_eq!(q.offer(1.0), Err(Error::Incomparable));
        assert_eq!(q.len(), 1);
    }

    // ─── comparator ordering ─────────────────────────────────────────────────
    #[test]
    fn test_priority_comparator_decides_the_cut() {
        let mut q: BigPriorityQueue<i32, _, _> =
            BigPriorityQueue::with_comparator(|a: &i32, b: &i32| b.cmp(a));
        for x in [10, 5, 20] {
            q.offer(x).unwrap();
        }
        assert_eq!(q.render(), "[20, 10, 5]");
        assert_eq!(drain(&mut q), "[20, 10, 5]");
    }

    #[test]
    fn test_priority_offer_none_rejected_with_comparator() {
        let mut q: BigPriorityQueue<i32, _, _> =
            BigPriorityQueue::with_comparator(|a: &i32, b: &i32| a.cmp(b));
        assert_eq!(q.offer(None::<i32>), Err(Error::InvalidArgument));
    }

    #[test]
    fn test_priority_failing_comparator_propagates() {
        let refuse = PartialOrderBy(|a: &i32, b: &i32| (a % 2 == b % 2).then(|| a.cmp(b)));
        let mut q: BigPriorityQueue<i32, _, _> = BigPriorityQueue::with_comparator(refuse);
        q.offer(4).unwrap();
        q.offer(2).unwrap();
        assert_eq!(q.offer(3), Err(Error::Incomparable));
        assert_eq!(q.render(), "[2, 4]");
    }

    // ─── backing deques ──────────────────────────────────────────────────────
    #[cfg(all(feature = "naive", feature = "linked"))]
    #[test]
    fn test_priority_backends_agree() {
        let offers = [10, 20, 5, 7, 1, 1, 0, 30];
        let mut circular: BigPriorityQueue<i32> = BigPriorityQueue::new();
        let mut naive: BigPriorityQueue<i32, NaiveDeque<i32>> =
            BigPriorityQueue::with_deque(NaiveDeque::new());
        let mut linked: BigPriorityQueue<i32, LinkedDeque<i32>> =
            BigPriorityQueue::with_deque(LinkedDeque::new());
        for x in offers {
            circular.offer(x).unwrap();
            naive.offer(x).unwrap();
            linked.offer(x).unwrap();
            assert_eq!(circular.render(), naive.render());
            assert_eq!(circular.render(), linked.render());
        }
        assert_eq!(linked.into_deque().to_vec(), circular.deque().to_vec());
    }

    #[test]
    fn test_priority_over_std_vecdeque() {
        use std::collections::VecDeque;
        let mut q: BigPriorityQueue<i32, VecDeque<i32>> =
            BigPriorityQueue::with_deque(VecDeque::from(vec![3]));
        q.offer(1).unwrap();
        q.offer(2).unwrap();
        assert_eq!(q.deque(), &VecDeque::from(vec![1, 3, 2]));
    }
}
