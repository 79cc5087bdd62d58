//! Wire layout of the AVC timing and HRD descriptor payload.
//!
//! ```text
//! hrd_management_valid        1
//! reserved                    6   (ones)
//! picture_and_timing_info_present 1
//! if picture_and_timing_info_present {
//!     90kHz_flag              1
//!     reserved                7   (ones)
//!     if 90kHz_flag {
//!         N                   32
//!         K                   32
//!     }
//!     num_units_in_tick       32
//! }
//! fixed_frame_rate_flag       1
//! temporal_poc_flag           1
//! picture_to_display_conversion_flag 1
//! reserved                    5   (ones)
//! ```

/// MPEG descriptor tag.
pub const DESCRIPTOR_TAG: u8 = 0x2A;
/// Element name in the attribute tree.
pub const ELEMENT_NAME: &str = "AVC_timing_and_HRD_descriptor";

pub const FLAG_BITS: u8 = 1;
pub const HEADER_RESERVED_BITS: u8 = 6;
pub const INFO_RESERVED_BITS: u8 = 7;
pub const TRAILER_RESERVED_BITS: u8 = 5;

/// Bytes of the descriptor header (tag, length).
pub const DESCRIPTOR_HEADER_LEN: usize = 2;

/// Payload without the timing section: header byte and flags byte.
pub const MIN_PAYLOAD_LEN: usize = 2;
/// Payload with every optional section present.
pub const MAX_PAYLOAD_LEN: usize =
    HEADER_LEN + INFO_HEADER_LEN + CLOCK_90KHZ_LEN + NUM_UNITS_IN_TICK_LEN + FLAGS_LEN;

// Byte-oriented view used by the renderer.
pub const HEADER_LEN: usize = 1;
pub const INFO_HEADER_LEN: usize = 1;
pub const CLOCK_90KHZ_LEN: usize = 8;
pub const NUM_UNITS_IN_TICK_LEN: usize = 4;
pub const FLAGS_LEN: usize = 1;

pub const HRD_MANAGEMENT_VALID_MASK: u8 = 0x80;
pub const INFO_PRESENT_MASK: u8 = 0x01;
pub const HAS_90KHZ_MASK: u8 = 0x80;
pub const FIXED_FRAME_RATE_MASK: u8 = 0x80;
pub const TEMPORAL_POC_MASK: u8 = 0x40;
pub const PICTURE_TO_DISPLAY_CONVERSION_MASK: u8 = 0x20;

pub const ATTR_HRD_MANAGEMENT_VALID: &str = "hrd_management_valid";
pub const ATTR_N_90KHZ: &str = "N_90khz";
pub const ATTR_K_90KHZ: &str = "K_90khz";
pub const ATTR_NUM_UNITS_IN_TICK: &str = "num_units_in_tick";
pub const ATTR_FIXED_FRAME_RATE: &str = "fixed_frame_rate";
pub const ATTR_TEMPORAL_POC: &str = "temporal_poc";
pub const ATTR_PICTURE_TO_DISPLAY_CONVERSION: &str = "picture_to_display_conversion";
