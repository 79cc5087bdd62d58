use tracing::debug;

use crate::bits::{BitError, BitReader, BitWriter};

use super::error::DescriptorError;
use super::layout;
use super::record::{AvcTimingHrdDescriptor, Clock90kHz, TimingInfo};

impl AvcTimingHrdDescriptor {
    /// Encode the descriptor payload (without tag and length).
    ///
    /// Never fails. Only the fields reachable through
    /// [`AvcTimingHrdDescriptor::timing_info`] are written.
    pub fn serialize(&self) -> Vec<u8> {
        let mut buf = BitWriter::with_capacity(layout::MAX_PAYLOAD_LEN);
        self.serialize_payload(&mut buf);
        buf.into_bytes()
    }

    pub fn serialize_payload(&self, buf: &mut BitWriter) {
        let info = self.timing_info();
        if info == TimingInfo::Absent && self.clock_90khz().is_some() {
            debug!("num_units_in_tick unset, 90 kHz clock pair not serialized");
        }

        buf.put_bit(self.hrd_management_valid);
        buf.put_reserved(layout::HEADER_RESERVED_BITS);
        buf.put_bit(info != TimingInfo::Absent);
        if let TimingInfo::Present {
            clock,
            num_units_in_tick,
        } = info
        {
            buf.put_bit(clock.is_some());
            buf.put_reserved(layout::INFO_RESERVED_BITS);
            if let Some(clock) = clock {
                buf.put_u32(clock.n);
                buf.put_u32(clock.k);
            }
            buf.put_u32(num_units_in_tick);
        }
        buf.put_bit(self.fixed_frame_rate);
        buf.put_bit(self.temporal_poc);
        buf.put_bit(self.picture_to_display_conversion);
        buf.put_reserved(layout::TRAILER_RESERVED_BITS);
    }

    /// Decode a descriptor payload (without tag and length).
    ///
    /// Reserved bits are skipped unchecked. Bytes after the last field are
    /// ignored; use [`AvcTimingHrdDescriptor::from_descriptor`] for a strict
    /// decode.
    pub fn deserialize(payload: &[u8]) -> Result<Self, DescriptorError> {
        let mut buf = BitReader::new(payload);
        let desc = Self::deserialize_payload(&mut buf)?;
        debug!(bits = buf.position(), "decoded AVC timing and HRD payload");
        Ok(desc)
    }

    pub fn deserialize_payload(buf: &mut BitReader<'_>) -> Result<Self, BitError> {
        let mut desc = Self::new();
        desc.hrd_management_valid = buf.read_bool()?;
        buf.skip_reserved(layout::HEADER_RESERVED_BITS)?;
        let info_present = buf.read_bool()?;
        if info_present {
            let has_90khz = buf.read_bool()?;
            buf.skip_reserved(layout::INFO_RESERVED_BITS)?;
            let clock = if has_90khz {
                let n = buf.read_u32()?;
                let k = buf.read_u32()?;
                Some(Clock90kHz { n, k })
            } else {
                None
            };
            let num_units_in_tick = buf.read_u32()?;
            desc.set_timing_info(TimingInfo::Present {
                clock,
                num_units_in_tick,
            });
        }
        desc.fixed_frame_rate = buf.read_bool()?;
        desc.temporal_poc = buf.read_bool()?;
        desc.picture_to_display_conversion = buf.read_bool()?;
        buf.skip_reserved(layout::TRAILER_RESERVED_BITS)?;
        Ok(desc)
    }

    /// Encode the complete descriptor: tag, length byte, payload.
    pub fn to_descriptor(&self) -> Vec<u8> {
        let payload = self.serialize();
        let mut out = Vec::with_capacity(layout::DESCRIPTOR_HEADER_LEN + payload.len());
        out.push(layout::DESCRIPTOR_TAG);
        // Payload never exceeds MAX_PAYLOAD_LEN.
        out.push(payload.len() as u8);
        out.extend_from_slice(&payload);
        out
    }

    /// Decode a complete descriptor, validating tag, length and that the
    /// payload holds nothing past the last field.
    pub fn from_descriptor(data: &[u8]) -> Result<Self, DescriptorError> {
        let (header, payload) = match data.split_at_checked(layout::DESCRIPTOR_HEADER_LEN) {
            Some(parts) => parts,
            None => {
                return Err(DescriptorError::TooShort {
                    needed: layout::DESCRIPTOR_HEADER_LEN,
                    actual: data.len(),
                });
            }
        };
        if header[0] != layout::DESCRIPTOR_TAG {
            return Err(DescriptorError::InvalidTag { tag: header[0] });
        }
        let declared = header[1] as usize;
        if declared != payload.len() {
            return Err(DescriptorError::LengthMismatch {
                declared,
                actual: payload.len(),
            });
        }

        let mut buf = BitReader::new(payload);
        let desc = Self::deserialize_payload(&mut buf)?;
        let count = buf.remaining_bytes().len();
        if count > 0 {
            return Err(DescriptorError::TrailingData { count });
        }
        Ok(desc)
    }
}
