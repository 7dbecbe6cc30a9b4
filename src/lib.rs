//! # Deque Collections
//!
//! Interchangeable double-ended queues, a priority queue with a "cut to the
//! front" admission rule, and stack-discipline algorithms written purely
//! against the deque contract.
//!
//! ## Key Features
//!
//! * **One contract, three backends:** [`CircularDeque`] (ring buffer),
//!   [`NaiveDeque`] (shifting buffer) and [`LinkedDeque`] (index-linked
//!   nodes) all implement [`Deque`], as does `std::collections::VecDeque`.
//!   Given the same calls they produce the same results.
//! * **Observable cost profiles:** every backend counts its own slot
//!   operations (`ops()`), which makes the O(n) front operations of
//!   [`NaiveDeque`] measurable.
//! * **Cut-to-front queue:** [`BigPriorityQueue`] compares each offer with the
//!   current front only. The resulting order is *not* sorted.
//! * **State-restoring algorithms:** [`algorithms::any_match`] and
//!   [`algorithms::min`] take elements off the front and put them all back;
//!   [`algorithms::reverse`] reverses permanently.
//!
//! ## Cargo features
//!
//! * `naive` (default): [`NaiveDeque`].
//! * `linked` (default): [`LinkedDeque`].
//!
//! ## Examples
//!
//! ### Deque
//!
//! ```rust
//! use deque_collections::{CircularDeque, Deque};
//!
//! let mut d: CircularDeque<i32> = CircularDeque::new();
//! d.insert_back(10);
//! d.insert_back(20);
//! d.insert_front(5);
//! d.insert_back(30);
//! assert_eq!(d.render(), "[5, 10, 20, 30]");
//!
//! assert_eq!(d.remove_front(), Ok(5));
//! assert_eq!(d.remove_back(), Ok(30));
//! assert_eq!(d.render(), "[10, 20]");
//! ```
//!
//! ### Algorithms
//!
//! ```rust
//! use deque_collections::{algorithms, CircularDeque, Deque};
//!
//! let mut d: CircularDeque<i32> = [20, 10, 30].into_iter().collect();
//! assert_eq!(algorithms::min(&mut d), Ok(10));
//! assert!(algorithms::any_match(&mut d, |x| *x > 25));
//! assert_eq!(d.render(), "[20, 10, 30]"); // untouched
//!
//! algorithms::reverse(&mut d);
//! assert_eq!(d.render(), "[30, 10, 20]");
//! ```
//!
//! ### Priority queue
//!
//! ```rust
//! use deque_collections::{BigPriorityQueue, Error};
//!
//! let mut q: BigPriorityQueue<i32, _, _> =
//!     BigPriorityQueue::with_comparator(|a: &i32, b: &i32| b.cmp(a));
//! for x in [10, 5, 20] {
//!     q.offer(x)?;
//! }
//! assert_eq!(q.to_string(), "[20, 10, 5]");
//! assert_eq!(q.offer(None::<i32>), Err(Error::InvalidArgument));
//! # Ok::<(), Error>(())
//! ```

// --- Module Declarations ---

pub mod algorithms;
pub mod deque;
pub mod deques;
pub mod error;
pub mod priority;

// --- Re-exports ---

pub use deque::{Deque, Elements};
pub use deques::CircularDeque;
#[cfg(feature = "linked")]
pub use deques::LinkedDeque;
#[cfg(feature = "naive")]
pub use deques::NaiveDeque;
pub use error::{Error, Result};
pub use priority::{BigPriorityQueue, Compare, NaturalOrder, PartialOrderBy};
