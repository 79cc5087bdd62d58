//! Bit-level stream primitives.
//!
//! Fields are packed most-significant-bit first and multi-byte integers are
//! big-endian. Reserved padding is handled by dedicated primitives
//! (`BitWriter::put_reserved`, `BitReader::skip_reserved`) so descriptor
//! layouts never spell out fill constants inline.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::BitError;
pub use reader::BitReader;
pub use writer::BitWriter;

/// Fill value of every reserved bit written by this crate.
pub const RESERVED_BIT: bool = true;
