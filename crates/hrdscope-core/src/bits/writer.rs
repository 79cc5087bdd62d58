use super::RESERVED_BIT;

/// MSB-first writer appending to an owned buffer.
///
/// Writes are infallible: the buffer grows as needed. A partially filled
/// final byte is padded with zero bits until more bits arrive.
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    data: Vec<u8>,
    position: usize,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            data: Vec::with_capacity(bytes),
            position: 0,
        }
    }

    /// Number of bits written so far.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_byte_aligned(&self) -> bool {
        self.position % 8 == 0
    }

    pub fn put_bit(&mut self, bit: bool) {
        let offset = self.position % 8;
        if offset == 0 {
            self.data.push(0);
        }
        if bit {
            if let Some(last) = self.data.last_mut() {
                *last |= 1 << (7 - offset);
            }
        }
        self.position += 1;
    }

    /// Write the low `width` bits of `value`, most significant first.
    /// Widths above 32 are clamped.
    pub fn put_bits(&mut self, value: u32, width: u8) {
        for i in (0..width.min(32)).rev() {
            self.put_bit((value >> i) & 1 != 0);
        }
    }

    pub fn put_u32(&mut self, value: u32) {
        self.put_bits(value, 32);
    }

    /// Write `width` reserved bits with the conventional fill value.
    pub fn put_reserved(&mut self, width: u8) {
        for _ in 0..width {
            self.put_bit(RESERVED_BIT);
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::BitWriter;
    use crate::bits::BitReader;

    #[test]
    fn writes_msb_first() {
        let mut writer = BitWriter::new();
        writer.put_bits(0b1011, 4);
        writer.put_bit(false);
        writer.put_bits(0b100, 3);
        assert!(writer.is_byte_aligned());
        assert_eq!(writer.data(), &[0b1011_0100]);
    }

    #[test]
    fn reserved_bits_are_ones() {
        let mut writer = BitWriter::new();
        writer.put_bit(false);
        writer.put_reserved(6);
        writer.put_bit(false);
        assert_eq!(writer.into_bytes(), vec![0x7E]);
    }

    #[test]
    fn unaligned_u32_spans_five_bytes() {
        let mut writer = BitWriter::new();
        writer.put_bit(true);
        writer.put_u32(0xDEAD_BEEF);
        assert_eq!(writer.position(), 33);
        assert_eq!(writer.data().len(), 5);

        let mut reader = BitReader::new(writer.data());
        assert!(reader.read_bool().unwrap());
        assert_eq!(reader.read_u32().unwrap(), 0xDEAD_BEEF);
    }
}
