use bitstream_io::BitWrite;

use crate::errors::BitstreamResult;

/// Big endian bit writer into an owned buffer,
/// the last byte is padded with zero bits by [`BitstreamWriter::into_bytes`].
pub struct BitstreamWriter {
    writer: bitstream_io::BitWriter<Vec<u8>, bitstream_io::BigEndian>,
    position: usize,
}

impl BitstreamWriter {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(bytes_count: usize) -> Self {
        Self {
            writer: bitstream_io::BitWriter::endian(
                Vec::with_capacity(bytes_count),
                bitstream_io::BigEndian,
            ),
            position: 0,
        }
    }

    pub fn position_in_bits(&self) -> usize {
        self.position
    }

    pub fn write<const BITS: u32, I>(&mut self, value: I) -> BitstreamResult<()>
    where
        I: bitstream_io::Integer,
    {
        self.writer.write::<BITS, I>(value)?;
        self.position += BITS as usize;
        Ok(())
    }

    pub fn write_bit(&mut self, bit: bool) -> BitstreamResult<()> {
        self.writer.write_bit(bit)?;
        self.position += 1;
        Ok(())
    }

    pub fn into_bytes(mut self) -> BitstreamResult<Vec<u8>> {
        self.writer.byte_align()?;
        Ok(self.writer.into_writer())
    }
}

impl Default for BitstreamWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::BitstreamWriter;
    use crate::reader::BitstreamReader;

    #[test]
    fn test_write_pads_with_zero() {
        let mut writer = BitstreamWriter::new();
        writer.write::<5, u8>(0b11111).unwrap();
        writer.write_bit(true).unwrap();
        assert_eq!(writer.position_in_bits(), 6);
        let bytes = writer.into_bytes().unwrap();
        assert_eq!(bytes, vec![0b1111_1100]);
    }

    #[test]
    fn test_write_then_read() {
        let mut writer = BitstreamWriter::with_capacity(6);
        writer.write::<5, u8>(5).unwrap();
        writer.write::<4, u8>(0xf).unwrap();
        writer.write::<24, u32>(12345).unwrap();
        writer.write::<14, u16>(16383).unwrap();
        writer.write_bit(false).unwrap();
        assert_eq!(writer.position_in_bits(), 48);
        let bytes = writer.into_bytes().unwrap();
        assert_eq!(bytes.len(), 6);

        let mut reader = BitstreamReader::new(&bytes);
        assert_eq!(reader.read::<5, u8>("type").unwrap(), 5);
        assert_eq!(reader.read::<4, u8>("index").unwrap(), 0xf);
        assert_eq!(reader.read::<24, u32>("frequency").unwrap(), 12345);
        assert_eq!(reader.read::<14, u16>("delay").unwrap(), 16383);
        assert!(!reader.read_bit("flag").unwrap());
        assert_eq!(reader.remaining_bits(), 0);
    }

    #[test]
    fn test_empty_writer() {
        let bytes = BitstreamWriter::default().into_bytes().unwrap();
        assert!(bytes.is_empty());
    }
}
