use thiserror::Error;

/// Errors returned by bit-level reads.
///
/// # Examples
/// ```
/// use hrdscope_core::bits::BitError;
///
/// let err = BitError::Underflow { needed: 32, available: 7 };
/// assert!(err.to_string().contains("buffer underflow"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitError {
    #[error("buffer underflow: need {needed} bits, {available} available")]
    Underflow { needed: usize, available: usize },
    #[error("invalid bit width: {width} (max 32)")]
    InvalidWidth { width: u8 },
}
