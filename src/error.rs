//! Errors reported by the checked treap operations.

use std::result;
use thiserror::Error;

/// Convenience `Error` enum for checked reads and range operations.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum Error {
    /// A position, or either bound of a range, is not within `[0, len)`.
    #[error("index {index} is out of range for a treap of length {len}")]
    OutOfRange { index: usize, len: usize },
    /// Both bounds of a range are in bounds, but the start lies after the end.
    #[error("range start {start} is greater than range end {end}")]
    InvalidRange { start: usize, end: usize },
}

pub type Result<T> = result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_display() {
        let err = Error::OutOfRange { index: 3, len: 3 };
        assert_eq!(err.to_string(), "index 3 is out of range for a treap of length 3");

        let err = Error::InvalidRange { start: 2, end: 1 };
        assert_eq!(err.to_string(), "range start 2 is greater than range end 1");
    }
}
