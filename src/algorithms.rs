//! Stack-discipline algorithms written purely against [`Deque`].
//!
//! Each algorithm follows the same shape: peel elements off the front one at a
//! time, then put them back while unwinding. The textbook formulation recurses
//! once per element; here the call stack is replaced by an explicit work stack
//! (a `Vec` of the removed elements), so the depth is bounded by memory rather
//! than by the thread's stack size. The sequence of deque calls and predicate
//! calls is the same as in the recursive form:
//!
//! ```text
//! unwind:  x0 = remove_front, x1 = remove_front, ... (until empty or done)
//! rewind:  ..., reinsert x1, reinsert x0
//! ```
//!
//! [`reverse`] reinserts at the back and therefore permanently reverses the
//! deque. [`any_match`] and [`min`] reinsert at the front and leave the deque
//! exactly as they found it.

use log::debug;

use crate::deque::Deque;
use crate::error::{Error, Result};

/// Reverses `deque` in place.
///
/// Removes every element from the front, then appends them back in the
/// opposite order. Applying it twice restores the original order.
pub fn reverse<E, D>(deque: &mut D)
where
    D: Deque<E> + ?Sized,
{
    let mut stack = Vec::with_capacity(deque.len());
    while let Ok(item) = deque.remove_front() {
        stack.push(item);
    }
    let len = stack.len();
    while let Some(item) = stack.pop() {
        deque.insert_back(item);
    }
    debug!("reversed a deque of {} elements", len);
}

/// Returns `true` if some element of `deque` satisfies `predicate`.
///
/// Elements are tested front first and the scan stops at the first match.
/// Every removed element is reinserted at the front before returning, so the
/// deque is unchanged afterwards.
pub fn any_match<E, D, P>(deque: &mut D, mut predicate: P) -> bool
where
    D: Deque<E> + ?Sized,
    P: FnMut(&E) -> bool,
{
    let mut stack = Vec::new();
    let mut found = false;
    while let Ok(item) = deque.remove_front() {
        found = predicate(&item);
        stack.push(item);
        if found {
            break;
        }
    }
    while let Some(item) = stack.pop() {
        deque.insert_front(item);
    }
    found
}

/// Returns (a clone of) the smallest element of `deque`.
///
/// Among equal minima the one nearest the front wins. The deque is unchanged
/// afterwards.
///
/// # Errors
/// [`Error::NoSuchElement`] if the deque is empty.
pub fn min<E, D>(deque: &mut D) -> Result<E>
where
    E: Ord + Clone,
    D: Deque<E> + ?Sized,
{
    let mut stack = Vec::with_capacity(deque.len());
    while let Ok(item) = deque.remove_front() {
        stack.push(item);
    }
    let scanned = stack.len();
    let mut least: Option<E> = None;
    while let Some(item) = stack.pop() {
        // `item` sits nearer the front than everything already seen, so it
        // wins ties.
        least = Some(match least {
            Some(rest) if rest < item => rest,
            _ => item.clone(),
        });
        deque.insert_front(item);
    }
    debug!("min scanned {} elements", scanned);
    least.ok_or(Error::NoSuchElement)
}
