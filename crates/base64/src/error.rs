use thiserror::Error;

/// Error type for encode calls.
///
/// Both variants are caller-contract violations detected before any work is
/// done.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The source byte sequence is absent.
    #[error("cannot encode a null byte sequence")]
    NullInput,
    /// The offset or length is negative, or the range runs past the source.
    #[error("cannot have offset of {offset} and length of {length} with source of length {size}")]
    InvalidRange { offset: i64, length: i64, size: usize },
}

impl EncodeError {
    pub(crate) fn invalid_range(offset: usize, length: usize, size: usize) -> Self {
        EncodeError::InvalidRange {
            offset: i64::try_from(offset).unwrap_or(i64::MAX),
            length: i64::try_from(length).unwrap_or(i64::MAX),
            size,
        }
    }
}
