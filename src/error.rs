//! Error types for simdadd operations.
//!
//! The default entry point ([`crate::add_in_place`]) never fails: a length
//! mismatch is a silent no-op. These errors are returned by the strict entry
//! points for callers that want the mismatch reported.

use thiserror::Error;

use crate::simd::SimdLevel;

/// Errors that can occur during simdadd operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimdAddError {
    /// `dst` and `src` do not have the same number of elements.
    #[error("length mismatch: dst has {dst_len} elements, src has {src_len}")]
    LengthMismatch {
        /// Length of the destination slice.
        dst_len: usize,
        /// Length of the source slice.
        src_len: usize,
    },
    /// The requested kernel needs CPU features this machine does not have.
    #[error("kernel level {0} is not supported on this CPU")]
    UnsupportedLevel(SimdLevel),
    /// A level name could not be parsed.
    #[error("unknown kernel level {0:?} (expected scalar, vector128, vector256 or vector512)")]
    InvalidLevel(String),
}

/// Result type alias for simdadd operations.
pub type Result<T> = std::result::Result<T, SimdAddError>;

/// Checks that both operands have the same length.
#[inline]
pub fn check_lengths(dst_len: usize, src_len: usize) -> Result<()> {
    if dst_len == src_len {
        Ok(())
    } else {
        Err(SimdAddError::LengthMismatch { dst_len, src_len })
    }
}
