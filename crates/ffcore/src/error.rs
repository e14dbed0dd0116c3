//! Error types

use thiserror::Error;

/// Encoding errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Resource name too long: {len} bytes (max: 255)")]
    InvalidName { len: usize },

    #[error("Encoding overflow: {field} = {value} (max: {max})")]
    EncodingOverflow {
        field: &'static str,
        value: u64,
        max: u64,
    },

    #[error("Invalid four-char code: {0:?}")]
    InvalidFourCharCode(String),

    #[error("Truncated {record}: {len} bytes (need: {needed})")]
    TruncatedRecord {
        record: &'static str,
        len: usize,
        needed: usize,
    },
}

impl EncodeError {
    /// Build an overflow error for a field
    pub(crate) fn overflow(field: &'static str, value: usize, max: u64) -> Self {
        Self::EncodingOverflow {
            field,
            value: value as u64,
            max,
        }
    }
}

/// Byte-backed file delegate errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DelegateError {
    #[error("Negative offset: {0}")]
    NegativeOffset(i64),

    #[error("Offset too large: {0}")]
    OffsetTooLarge(i64),

    #[error("File is read-only")]
    ReadOnly,
}

/// Result type for encoding operations
pub type Result<T> = std::result::Result<T, EncodeError>;
