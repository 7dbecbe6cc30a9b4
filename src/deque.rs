//! The double-ended queue contract shared by every backend.
//!
//! [`Deque`] is object-safe: the priority queue and the algorithms in
//! [`algorithms`](crate::algorithms) accept `&mut dyn Deque<E>` as readily as
//! a concrete backend. The bulk helpers ([`Deque::insert_all`],
//! [`Deque::contains_all`]) are generic and therefore only callable on sized
//! receivers.

use core::fmt::{self, Display, Formatter};
use std::collections::VecDeque;

use crate::error::{Error, Result};

/// Front-to-back borrowing iterator returned by [`Deque::elements`].
pub type Elements<'a, E> = Box<dyn Iterator<Item = &'a E> + 'a>;

// ─── Deque ────────────────────────────────────────────────────────────────────

/// An object-safe abstraction over double-ended queue types.
///
/// Implemented by [`CircularDeque`](crate::CircularDeque),
/// [`NaiveDeque`](crate::NaiveDeque), [`LinkedDeque`](crate::LinkedDeque) and
/// `std::collections::VecDeque`. All implementations are observably
/// interchangeable: the same sequence of calls yields the same results and the
/// same [`render`](Deque::render) output.
pub trait Deque<E> {
    /// Returns the number of elements in the deque.
    fn len(&self) -> usize;

    /// Returns `true` if the deque contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Prepends an element to the front.
    fn insert_front(&mut self, item: E);

    /// Appends an element to the back.
    fn insert_back(&mut self, item: E);

    /// Removes and returns the front element.
    ///
    /// # Errors
    /// [`Error::EmptyContainer`] if the deque is empty.
    fn remove_front(&mut self) -> Result<E>;

    /// Removes and returns the back element.
    ///
    /// # Errors
    /// [`Error::EmptyContainer`] if the deque is empty.
    fn remove_back(&mut self) -> Result<E>;

    /// Returns the front element without removing it.
    ///
    /// # Errors
    /// [`Error::EmptyContainer`] if the deque is empty.
    fn peek_front(&self) -> Result<&E>;

    /// Returns the back element without removing it.
    ///
    /// # Errors
    /// [`Error::EmptyContainer`] if the deque is empty.
    fn peek_back(&self) -> Result<&E>;

    /// Iterates the live elements front to back.
    fn elements(&self) -> Elements<'_, E>;

    /// Returns `true` if some element equals `value`.
    fn contains(&self, value: &E) -> bool
    where
        E: PartialEq,
    {
        self.elements().any(|item| item == value)
    }

    /// Returns `true` if some element satisfies `predicate`. Stops at the first
    /// match, testing from the front.
    fn any_match(&self, predicate: &mut dyn FnMut(&E) -> bool) -> bool {
        self.elements().any(|item| predicate(item))
    }

    /// Calls `action` once per element, front to back.
    fn for_each(&self, action: &mut dyn FnMut(&E)) {
        for item in self.elements() {
            action(item);
        }
    }

    /// Copies the elements, front to back, into a freshly allocated vector.
    fn to_vec(&self) -> Vec<E>
    where
        E: Clone,
    {
        let mut out = Vec::with_capacity(self.len());
        out.extend(self.elements().cloned());
        out
    }

    /// Renders the deque as `[e0, e1, ..., en]`, or `[]` when empty.
    fn render(&self) -> String
    where
        E: Display,
    {
        let mut out = String::from("[");
        for (i, item) in self.elements().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&item.to_string());
        }
        out.push(']');
        out
    }

    /// Returns `true` if every present item is contained in the deque.
    /// Absent (`None`) items are skipped.
    fn contains_all<'a, I>(&self, items: I) -> bool
    where
        Self: Sized,
        E: PartialEq + 'a,
        I: IntoIterator,
        I::Item: Into<Option<&'a E>>,
    {
        items
            .into_iter()
            .filter_map(Into::into)
            .all(|item| self.contains(item))
    }

    /// Inserts every present item at the **front**, one at a time, in the
    /// input's iteration order; the inserted run therefore ends up reversed.
    /// Absent (`None`) items are skipped.
    ///
    /// Returns `true` if at least one item was inserted.
    fn insert_all<I>(&mut self, items: I) -> bool
    where
        Self: Sized,
        I: IntoIterator,
        I::Item: Into<Option<E>>,
    {
        let mut changed = false;
        for item in items.into_iter().filter_map(Into::into) {
            self.insert_front(item);
            changed = true;
        }
        changed
    }
}

/// Writes `[a, b, c]` for the given elements; the common `Display` body of
/// every backend.
pub(crate) fn fmt_elements<'a, E, I>(f: &mut Formatter<'_>, items: I) -> fmt::Result
where
    E: Display + 'a,
    I: IntoIterator<Item = &'a E>,
{
    f.write_str("[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        Display::fmt(item, f)?;
    }
    f.write_str("]")
}

impl<E> Deque<E> for VecDeque<E> {
    fn len(&self) -> usize {
        self.len()
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
