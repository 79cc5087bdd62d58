//! hrdscope core library: bit-exact codec for the MPEG AVC timing and HRD
//! descriptor.
//!
//! The descriptor codec supports four operations over one layout definition:
//! binary serialize, binary deserialize, best-effort text rendering of raw
//! bytes, and conversion to and from an attribute tree used for
//! configuration and interchange. Everything here is pure: no I/O, no shared
//! state. Bit-level access lives in `bits`, attribute conventions in `tree`,
//! and wire layouts in each descriptor's `layout` module.
//!
//! Invariants:
//! - `deserialize(serialize(d)) == d` for every wire-consistent record.
//! - Reserved bits are written as ones and never inspected on read.
//! - Rendering never fails; truncated input degrades to partial output.
//!
//! Version française (résumé):
//! Cette crate fournit un codec exact au bit près pour le descripteur AVC
//! timing and HRD : sérialisation, désérialisation, affichage lisible et
//! conversion vers/depuis un arbre d'attributs. Aucune E/S, aucun état
//! partagé.
//!
//! # Examples
//! ```
//! use hrdscope_core::AvcTimingHrdDescriptor;
//!
//! let desc = AvcTimingHrdDescriptor {
//!     num_units_in_tick: Some(1001),
//!     fixed_frame_rate: true,
//!     ..Default::default()
//! };
//! let bytes = desc.serialize();
//! assert_eq!(AvcTimingHrdDescriptor::deserialize(&bytes)?, desc);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bits;
pub mod descriptors;
pub mod tree;

pub use descriptors::avc_timing_hrd::{
    AvcTimingHrdDescriptor, Clock90kHz, DescriptorError, TimingInfo, display_payload,
};
pub use tree::{Element, TreeError};

/// Parse whitespace-separated hexadecimal text into bytes.
///
/// Whitespace anywhere is ignored; an optional `0x` prefix per token is
/// accepted. Returns `None` on odd digit counts or non-hex characters.
///
/// # Examples
/// ```
/// use hrdscope_core::parse_hex;
///
/// assert_eq!(parse_hex("7e 1f"), Some(vec![0x7E, 0x1F]));
/// assert_eq!(parse_hex("0x7E1F"), Some(vec![0x7E, 0x1F]));
/// assert_eq!(parse_hex("7"), None);
/// ```
pub fn parse_hex(text: &str) -> Option<Vec<u8>> {
    let digits: String = text
        .split_whitespace()
        .map(|token| {
            token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
                .unwrap_or(token)
        })
        .collect();
    if digits.len() % 2 != 0 || !digits.is_ascii() {
        return None;
    }
    (0..digits.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&digits[i..i + 2], 16).ok())
        .collect()
}

/// Format bytes as lowercase hex pairs separated by spaces.
pub fn format_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
