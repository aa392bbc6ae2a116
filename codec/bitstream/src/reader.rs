use std::io;

use bitstream_io::BitRead;

use crate::errors::{BitstreamError, BitstreamResult};

/// Big endian bit cursor over a borrowed buffer.
///
/// Every read names the field being read so a truncated buffer
/// reports which field ran out of data.
pub struct BitstreamReader<'a> {
    reader: bitstream_io::BitReader<io::Cursor<&'a [u8]>, bitstream_io::BigEndian>,
    buf_length: usize,
    // absolute bit position in the whole buffer
    position: usize,
}

impl<'a> BitstreamReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        let reader = bitstream_io::BitReader::endian(io::Cursor::new(buf), bitstream_io::BigEndian);
        Self {
            reader,
            buf_length: buf.len(),
            position: 0,
        }
    }

    /// starts reading at `offset` bits into `buf`
    pub fn with_bit_offset(buf: &'a [u8], offset: usize) -> BitstreamResult<Self> {
        let length = buf.len() * 8;
        if offset > length {
            return Err(BitstreamError::OffsetOutOfRange { offset, length });
        }
        let mut reader = bitstream_io::BitReader::endian(
            io::Cursor::new(&buf[offset / 8..]),
            bitstream_io::BigEndian,
        );
        // below 8, always fits
        reader.skip((offset % 8) as u32)?;
        Ok(Self {
            reader,
            buf_length: buf.len(),
            position: offset,
        })
    }

    pub fn remaining_bits(&self) -> usize {
        (self.buf_length * 8).saturating_sub(self.position)
    }

    pub fn position_in_bits(&self) -> usize {
        self.position
    }

    fn ensure_remaining(&self, wanted: u32, field: &'static str) -> BitstreamResult<()> {
        let remaining = self.remaining_bits();
        if (wanted as usize) > remaining {
            return Err(BitstreamError::NotEnoughData {
                field,
                wanted,
                remaining,
            });
        }
        Ok(())
    }

    pub fn read<const BITS: u32, I>(&mut self, field: &'static str) -> BitstreamResult<I>
    where
        I: bitstream_io::Integer,
    {
        self.ensure_remaining(BITS, field)?;
        let value = self.reader.read::<BITS, I>()?;
        self.position += BITS as usize;
        Ok(value)
    }

    pub fn read_bit(&mut self, field: &'static str) -> BitstreamResult<bool> {
        self.ensure_remaining(1, field)?;
        let value = self.reader.read_bit()?;
        self.position += 1;
        Ok(value)
    }
}

#[cfg(test)]
mod test {
    use super::BitstreamReader;
    use crate::errors::BitstreamError;

    #[test]
    fn test_read_across_byte_boundary() {
        let bytes = [0b0001_0010, 0b0001_0000];
        let mut reader = BitstreamReader::new(&bytes);
        assert_eq!(reader.read::<5, u8>("a").unwrap(), 2);
        assert_eq!(reader.read::<4, u8>("b").unwrap(), 4);
        assert_eq!(reader.read::<4, u8>("c").unwrap(), 2);
        assert!(!reader.read_bit("d").unwrap());
        assert_eq!(reader.position_in_bits(), 14);
        assert_eq!(reader.remaining_bits(), 2);
    }

    #[test]
    fn test_read_with_bit_offset() {
        // 3 junk bits followed by 0b10110
        let bytes = [0b1111_0110, 0b0000_0000];
        let mut reader = BitstreamReader::with_bit_offset(&bytes, 3).unwrap();
        assert_eq!(reader.position_in_bits(), 3);
        assert_eq!(reader.read::<5, u8>("value").unwrap(), 0b10110);
        assert_eq!(reader.position_in_bits(), 8);
        assert_eq!(reader.remaining_bits(), 8);

        let mut reader = BitstreamReader::with_bit_offset(&bytes, 9).unwrap();
        assert_eq!(reader.remaining_bits(), 7);
        assert_eq!(reader.read::<7, u8>("value").unwrap(), 0);
    }

    #[test]
    fn test_offset_out_of_range() {
        let bytes = [0u8; 2];
        assert!(BitstreamReader::with_bit_offset(&bytes, 16).is_ok());
        assert!(matches!(
            BitstreamReader::with_bit_offset(&bytes, 17),
            Err(BitstreamError::OffsetOutOfRange {
                offset: 17,
                length: 16
            })
        ));
    }

    #[test]
    fn test_not_enough_data() {
        let bytes = [0xff];
        let mut reader = BitstreamReader::new(&bytes);
        assert_eq!(reader.read::<5, u8>("first").unwrap(), 0b11111);
        match reader.read::<4, u8>("second") {
            Err(BitstreamError::NotEnoughData {
                field,
                wanted,
                remaining,
            }) => {
                assert_eq!(field, "second");
                assert_eq!(wanted, 4);
                assert_eq!(remaining, 3);
            }
            other => panic!("unexpected result: {:?}", other.map(|_: u8| ())),
        }
        // a failed read does not consume anything
        assert_eq!(reader.position_in_bits(), 5);
        assert_eq!(reader.read::<3, u8>("third").unwrap(), 0b111);
        assert!(reader.read_bit("fourth").is_err());
    }

    #[test]
    fn test_empty_buffer() {
        let mut reader = BitstreamReader::new(&[]);
        assert_eq!(reader.remaining_bits(), 0);
        assert!(reader.read_bit("flag").is_err());
    }
}
