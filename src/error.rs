//! Error kinds shared by every deque, the priority queue and the algorithms.

use core::fmt::{self, Display, Formatter};

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Failure of a deque, priority-queue or algorithm operation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// An absent value was passed where a concrete one is required.
    InvalidArgument,
    /// A remove or peek was attempted on an empty deque.
    EmptyContainer,
    /// A minimum was requested from an empty deque.
    NoSuchElement,
    /// Two elements could not be ordered against each other.
    Incomparable,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidArgument => "an absent value was passed where an element is required",
            Self::EmptyContainer => "the deque is empty",
            Self::NoSuchElement => "no minimum exists for an empty deque",
            Self::Incomparable => "the elements cannot be ordered against each other",
        })
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        assert_eq!(Error::EmptyContainer.to_string(), "the deque is empty");
        assert!(Error::Incomparable.to_string().contains("ordered"));
    }

    #[test]
    fn test_error_boxes_as_std_error() {
        let boxed: Box<dyn std::error::Error> = Box::new(Error::NoSuchElement);
        assert!(boxed.to_string().contains("minimum"));
    }
}
