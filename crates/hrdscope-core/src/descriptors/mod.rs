//! Descriptor codecs.
//!
//! Each descriptor follows a layered structure:
//! - `layout`: bit widths, masks and lengths (source of truth)
//! - `record`: the in-memory value type
//! - `parser`: binary serialize/deserialize and descriptor framing
//! - `display`: best-effort text rendering straight from bytes
//! - `text`: mapping to and from the attribute tree
//! - `error`: explicit, actionable errors
//!
//! Codecs are pure and contain no I/O.

pub mod avc_timing_hrd;
