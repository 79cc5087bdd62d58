//! Human-readable rendering of a raw payload.
//!
//! Works on bytes directly, without going through the record type, so a
//! truncated or malformed payload still renders every field that fits.
//! Output is meant for people, not for parsing.

use tracing::debug;

use crate::format_hex;
use crate::tree::value::{format_bool, format_grouped};

use super::layout;

struct PayloadCursor<'a> {
    data: &'a [u8],
}

impl<'a> PayloadCursor<'a> {
    fn take(&mut self, len: usize) -> Option<&'a [u8]> {
        let (head, tail) = self.data.split_at_checked(len)?;
        self.data = tail;
        Some(head)
    }

    fn take_u8(&mut self) -> Option<u8> {
        self.take(1).map(|bytes| bytes[0])
    }

    fn take_u32_be(&mut self) -> Option<u32> {
        self.take(4)
            .map(|bytes| u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn rest(&self) -> &'a [u8] {
        self.data
    }
}

/// Render the payload one field per line, each prefixed by `indent` spaces.
///
/// Never fails. When a field does not fit in the remaining bytes, rendering
/// stops and the unconsumed bytes are reported as extra data; trailing
/// bytes after a complete payload are reported the same way.
///
/// # Examples
/// ```
/// use hrdscope_core::descriptors::avc_timing_hrd::display_payload;
///
/// let text = display_payload(&[0x7E, 0x9F], 2);
/// assert!(text.starts_with("  HRD management valid: false\n"));
/// assert!(text.contains("  Fixed frame rate: true\n"));
/// ```
pub fn display_payload(data: &[u8], indent: usize) -> String {
    let margin = " ".repeat(indent);
    let mut lines = Vec::new();
    let mut cursor = PayloadCursor { data };

    let complete = display_fields(&mut cursor, &mut lines).is_some();
    let extra = cursor.rest();
    if !complete {
        debug!(
            consumed = data.len() - extra.len(),
            remaining = extra.len(),
            "payload truncated, rendering stopped"
        );
    }
    if !complete || !extra.is_empty() {
        lines.push(format_extra_data(extra));
    }

    let mut out = String::new();
    for line in lines {
        out.push_str(&margin);
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn display_fields(cursor: &mut PayloadCursor<'_>, lines: &mut Vec<String>) -> Option<()> {
    let header = cursor.take_u8()?;
    lines.push(format!(
        "HRD management valid: {}",
        format_bool(header & layout::HRD_MANAGEMENT_VALID_MASK != 0)
    ));

    if header & layout::INFO_PRESENT_MASK != 0 {
        let info = cursor.take_u8()?;
        if info & layout::HAS_90KHZ_MASK != 0 {
            let clock = cursor.take(layout::CLOCK_90KHZ_LEN)?;
            let n = u32::from_be_bytes([clock[0], clock[1], clock[2], clock[3]]);
            let k = u32::from_be_bytes([clock[4], clock[5], clock[6], clock[7]]);
            lines.push(format!(
                "90 kHz: N = {}, K = {}",
                format_grouped(n.into()),
                format_grouped(k.into())
            ));
        }
        let ticks = cursor.take_u32_be()?;
        lines.push(format!(
            "Num. units in tick: {}",
            format_grouped(ticks.into())
        ));
    }

    let flags = cursor.take_u8()?;
    lines.push(format!(
        "Fixed frame rate: {}",
        format_bool(flags & layout::FIXED_FRAME_RATE_MASK != 0)
    ));
    lines.push(format!(
        "Temporal picture order count: {}",
        format_bool(flags & layout::TEMPORAL_POC_MASK != 0)
    ));
    lines.push(format!(
        "Picture to display conversion: {}",
        format_bool(flags & layout::PICTURE_TO_DISPLAY_CONVERSION_MASK != 0)
    ));
    Some(())
}

fn format_extra_data(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return "Extra data (0 bytes)".to_string();
    }
    format!("Extra data ({} bytes): {}", bytes.len(), format_hex(bytes))
}
