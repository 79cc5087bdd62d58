//! AVC timing and HRD descriptor (MPEG tag 0x2A).
//!
//! Carries the 90 kHz clock ratio, the tick unit count and a few timing flags
//! of an AVC video stream. The wire form nests the optional clock pair inside
//! the section gated by `num_units_in_tick`: a record with a clock pair but
//! no tick count loses the pair on serialization. That rule is part of the
//! format and is reproduced as-is; `Record::timing_info` exposes what will
//! actually reach the wire.
//!
//! Bit widths live in `layout`, the record type in `record`.

pub mod display;
pub mod error;
pub mod layout;
pub mod parser;
pub mod record;
pub mod text;

pub use display::display_payload;
pub use error::DescriptorError;
pub use record::{AvcTimingHrdDescriptor, Clock90kHz, TimingInfo};
