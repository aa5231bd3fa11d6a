//! Errors reported by ring accounting.

use thiserror::Error;

/// Error value indicating that a ring could not account for an operation.
///
/// Both variants are ordinary, recoverable conditions. Bulk operations that
/// fail with either of them leave the ring untouched.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Error)]
pub enum RingError {
    /// An addition found insufficient free capacity.
    #[error("inserting into a full ring")]
    Full,
    /// A removal found insufficient occupied elements.
    #[error("reading from an empty ring")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(RingError::Full.to_string(), "inserting into a full ring");
        assert_eq!(RingError::Empty.to_string(), "reading from an empty ring");
    }

    #[test]
    fn is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&RingError::Full);
    }
}
