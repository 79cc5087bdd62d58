use thiserror::Error;

use crate::bits::BitError;

/// Errors returned by AVC timing and HRD descriptor decoding.
///
/// # Examples
/// ```
/// use hrdscope_core::descriptors::avc_timing_hrd::DescriptorError;
///
/// let err = DescriptorError::InvalidTag { tag: 0x28 };
/// assert!(err.to_string().contains("invalid descriptor tag"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    #[error("payload truncated: {0}")]
    Bits(#[from] BitError),
    #[error("descriptor too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("invalid descriptor tag: 0x{tag:02X}")]
    InvalidTag { tag: u8 },
    #[error("descriptor length byte says {declared} bytes, {actual} present")]
    LengthMismatch { declared: usize, actual: usize },
    #[error("{count} unexpected bytes after the last field")]
    TrailingData { count: usize },
}
