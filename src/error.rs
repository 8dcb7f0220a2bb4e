//! Error types for the ordered set.
//!
//! Almost every operation on [`OrderedSet`](crate::OrderedSet) is total. The
//! only recoverable failure is strict bulk construction through
//! [`OrderedSet::try_from_unique`](crate::OrderedSet::try_from_unique), which
//! rejects input containing a repeated value instead of silently absorbing it.

/// Represents an error when strict construction receives a repeated value.
///
/// Both positions refer to the input sequence: `first_index` is where the
/// value first appeared and `duplicate_index` is where it appeared again.
///
/// # Examples
///
/// ```rust
/// use simple_set::DuplicateValueError;
///
/// let error = DuplicateValueError {
///     first_index: 0,
///     duplicate_index: 2,
/// };
/// assert_eq!(
///     format!("{}", error),
///     "duplicate value at index 2 (first seen at index 0)"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateValueError {
    /// Index of the first occurrence of the repeated value.
    pub first_index: usize,
    /// Index of the occurrence that repeats it.
    pub duplicate_index: usize,
}

impl std::fmt::Display for DuplicateValueError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "duplicate value at index {} (first seen at index {})",
            self.duplicate_index, self.first_index
        )
    }
}

impl std::error::Error for DuplicateValueError {}
