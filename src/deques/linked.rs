#![cfg(feature = "linked")]
//! Doubly linked deque stored in an index arena.
//!
//! Nodes live in a `Vec` and link to each other by slot index instead of by
//! pointer. Unlinked slots are threaded onto a singly linked free list through
//! their `next` field and reused before the arena grows.
//!
//! ```text
//!  first                                         last
//!    │                                             │
//!    ▼                                             ▼
//!  ┌──────┐  next  ┌──────┐  next       next  ┌──────┐
//!  │ slot │ ─────→ │ slot │ ─────→ ┄┄ ─────→ │ slot │ ──→ NIL
//!  │  a   │ ←───── │  b   │ ←───── ┄┄ ←───── │  z   │
//!  └──────┘  prev  └──────┘  prev       prev  └──────┘
//!     │
//!     ▼ prev = NIL
//! ```

use core::fmt;
use log::trace;

use crate::deque::{Deque, Elements, fmt_elements};
use crate::error::{Error, Result};

/// Sentinel slot index meaning "no node".
const NIL: usize = usize::MAX;

/// One arena slot. `item` is `None` exactly while the slot is on the free list.
#[derive(Clone)]
struct Node<E> {
    item: Option<E>,
    prev: usize,
    next: usize,
}

/// A double-ended queue built from doubly linked nodes.
///
/// The six end operations never move an element: they link or unlink one
/// node. Searching and iterating walk the chain from `first` to `last`.
///
/// # Invariants
/// * `first == NIL` iff `last == NIL` iff `len == 0`.
/// * Following `next` from `first` visits exactly `len` nodes and ends at
///   `last`; following `prev` from `last` visits the same nodes in reverse.
/// * A node's payload is taken the moment it is unlinked.
#[derive(Clone)]
pub struct LinkedDeque<E> {
    nodes: Vec<Node<E>>,
    first: usize,
    last: usize,
    free_head: usize,
    len: usize,
    ops: u64,
}

impl<E> Deque<E> for LinkedDeque<E> {
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

impl<E> LinkedDeque<E> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            first: NIL,
            last: NIL,
            free_head: NIL,
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

    /// Link and unlink operations performed so far.
    pub fn ops(&self) -> u64 {
        self.ops
    }

    /// Takes a slot off the free list, or appends a fresh one.
    fn alloc(&mut self, item: E) -> usize {
        let node = Node {
            item: Some(item),
            prev: NIL,
            next: NIL,
        };
        if self.free_head != NIL {
            let idx = self.free_head;
            self.free_head = self.nodes[idx].next;
            self.nodes[idx] = node;
            idx
        } else {
            if self.nodes.len() == self.nodes.capacity() {
                trace!("linked deque arena growing past {} nodes", self.nodes.len());
            }
            self.nodes.push(node);
            self.nodes.len() - 1
        }
    }

    /// Takes the payload out of `idx` and pushes the slot onto the free list.
    fn release(&mut self, idx: usize) -> Option<E> {
        let node = &mut self.nodes[idx];
        let item = node.item.take();
        node.prev = NIL;
        node.next = self.free_head;
        self.free_head = idx;
        item
    }

    fn attach_front(&mut self, idx: usize) {
        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = self.first;
        if self.first != NIL {
            self.nodes[self.first].prev = idx;
        } else {
            self.last = idx;
        }
        self.first = idx;
        self.len += 1;
        self.ops += 1;
    }

    fn attach_back(&mut self, idx: usize) {
        self.nodes[idx].next = NIL;
        self.nodes[idx].prev = self.last;
        if self.last != NIL {
            self.nodes[self.last].next = idx;
        } else {
            self.first = idx;
        }
        self.last = idx;
        self.len += 1;
        self.ops += 1;
    }

    fn detach(&mut self, idx: usize) {
        let (p, n) = (self.nodes[idx].prev, self.nodes[idx].next);
        if p != NIL {
            self.nodes[p].next = n;
        } else {
            self.first = n;
        }
        if n != NIL {
            self.nodes[n].prev = p;
        } else {
            self.last = p;
        }
        self.len -= 1;
        self.ops += 1;
    }

    pub fn push_front(&mut self, item: E) {
        let idx = self.alloc(item);
        self.attach_front(idx);
    }

    pub fn push_back(&mut self, item: E) {
        let idx = self.alloc(item);
        self.attach_back(idx);
    }

    pub fn pop_front(&mut self) -> Option<E> {
        if self.first == NIL {
            return None;
        }
        let idx = self.first;
        self.detach(idx);
        self.release(idx)
    }

    pub fn pop_back(&mut self) -> Option<E> {
        if self.last == NIL {
            return None;
        }
        let idx = self.last;
        self.detach(idx);
        self.release(idx)
    }

    /// Payload of a linked slot; `None` for `NIL`.
    #[inline(always)]
    fn item(&self, idx: usize) -> Option<&E> {
        self.nodes.get(idx).and_then(|node| node.item.as_ref())
    }

    #[inline(always)]
    pub fn front(&self) -> Option<&E> {
        self.item(self.first)
    }

    #[inline(always)]
    pub fn back(&self) -> Option<&E> {
        self.item(self.last)
    }

    /// Drops every element and forgets the arena's free list; the arena's
    /// allocation is kept.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.first = NIL;
        self.last = NIL;
        self.free_head = NIL;
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            deque: self,
            front: self.first,
            back: self.last,
            remaining: self.len,
        }
    }
}

/// Borrowing iterator over a [`LinkedDeque`]; walks `next` from the front and
/// `prev` from the back.
pub struct Iter<'a, E> {
    deque: &'a LinkedDeque<E>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<&'a E> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.deque.nodes[self.front];
        self.front = node.next;
        self.remaining -= 1;
        node.item.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E> DoubleEndedIterator for Iter<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.deque.nodes[self.back];
        self.back = node.prev;
        self.remaining -= 1;
        node.item.as_ref()
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}

impl<'a, E> IntoIterator for &'a LinkedDeque<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Iter<'a, E> {
        self.iter()
    }
}

impl<E: fmt::Debug> fmt::Debug for LinkedDeque<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<E: fmt::Display> fmt::Display for LinkedDeque<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_elements(f, self.iter())
    }
}

impl<E> Default for LinkedDeque<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: PartialEq> PartialEq for LinkedDeque<E> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<E: Eq> Eq for LinkedDeque<E> {}

impl<E> Extend<E> for LinkedDeque<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<E> FromIterator<E> for LinkedDeque<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}
