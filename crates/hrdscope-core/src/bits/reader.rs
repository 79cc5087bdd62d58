use super::error::BitError;

/// MSB-first reader over a borrowed byte slice.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Current position in bits from the start of the slice.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining_bits(&self) -> usize {
        (self.data.len() * 8).saturating_sub(self.position)
    }

    /// True once every bit of the slice has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.remaining_bits() == 0
    }

    pub fn require_bits(&self, needed: usize) -> Result<(), BitError> {
        let available = self.remaining_bits();
        if available < needed {
            return Err(BitError::Underflow { needed, available });
        }
        Ok(())
    }

    pub fn read_bool(&mut self) -> Result<bool, BitError> {
        self.require_bits(1)?;
        let byte = self.data[self.position / 8];
        let bit = (byte >> (7 - (self.position % 8))) & 1;
        self.position += 1;
        Ok(bit != 0)
    }

    /// Read up to 32 bits as an unsigned integer.
    pub fn read_bits(&mut self, width: u8) -> Result<u32, BitError> {
        if width > 32 {
            return Err(BitError::InvalidWidth { width });
        }
        self.require_bits(width as usize)?;
        let mut value = 0u32;
        for _ in 0..width {
            value = (value << 1) | u32::from(self.read_bool()?);
        }
        Ok(value)
    }

    pub fn read_u32(&mut self) -> Result<u32, BitError> {
        self.read_bits(32)
    }

    /// Consume reserved bits without checking their value.
    pub fn skip_reserved(&mut self, width: u8) -> Result<(), BitError> {
        self.require_bits(width as usize)?;
        self.position += width as usize;
        Ok(())
    }

    /// Bytes not yet touched by any read, starting at the next byte boundary.
    pub fn remaining_bytes(&self) -> &'a [u8] {
        let start = self.position.div_ceil(8).min(self.data.len());
        &self.data[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::BitReader;
    use crate::bits::BitError;

    #[test]
    fn reads_msb_first() {
        let data = [0b1011_0100, 0b1100_1010];
        let mut reader = BitReader::new(&data);
        assert_eq!(reader.read_bits(4).unwrap(), 0b1011);
        assert!(!reader.read_bool().unwrap());
        assert_eq!(reader.read_bits(3).unwrap(), 0b100);
        assert_eq!(reader.read_bits(8).unwrap(), 0b1100_1010);
        assert!(reader.is_exhausted());
    }

    #[test]
    fn read_u32_is_big_endian() {
        let data = [0x12, 0x34, 0x56, 0x78];
        let mut reader = BitReader::new(&data);
        assert_eq!(reader.read_u32().unwrap(), 0x1234_5678);
    }

    #[test]
    fn skip_reserved_ignores_bit_values() {
        let data = [0b1010_1011];
        let mut reader = BitReader::new(&data);
        assert!(reader.read_bool().unwrap());
        reader.skip_reserved(6).unwrap();
        assert!(reader.read_bool().unwrap());
    }

    #[test]
    fn underflow_reports_needed_and_available() {
        let data = [0xFF, 0xFF];
        let mut reader = BitReader::new(&data);
        reader.skip_reserved(9).unwrap();
        let err = reader.read_u32().unwrap_err();
        assert_eq!(
            err,
            BitError::Underflow {
                needed: 32,
                available: 7
            }
        );
    }

    #[test]
    fn underflow_on_empty_input() {
        let mut reader = BitReader::new(&[]);
        assert!(matches!(
            reader.read_bool(),
            Err(BitError::Underflow { needed: 1, .. })
        ));
    }

    #[test]
    fn remaining_bytes_starts_at_next_boundary() {
        let data = [0x01, 0x02, 0x03];
        let mut reader = BitReader::new(&data);
        reader.skip_reserved(3).unwrap();
        assert_eq!(reader.remaining_bytes(), &[0x02, 0x03]);
        reader.skip_reserved(5).unwrap();
        assert_eq!(reader.remaining_bytes(), &[0x02, 0x03]);
    }

    #[test]
    fn rejects_wide_reads() {
        let data = [0u8; 8];
        let mut reader = BitReader::new(&data);
        assert_eq!(
            reader.read_bits(33).unwrap_err(),
            BitError::InvalidWidth { width: 33 }
        );
    }
}
