use utils::{
    bits::{bool_to_bit, msb_bit},
    traits::fixed_packet::FixedPacket,
};

use crate::{
    errors::AV1CodecError,
    obu_type::ObuType,
};

/// @see: AV1 Bitstream & Decoding Process Specification, 5.3.2 OBU header syntax
///
/// Headers carrying the optional extension byte are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObuHeader {
    // 1 bit forbidden_obu_bit, always 0
    // 4 bits
    pub obu_type: ObuType,
    // 1 bit obu_extension_flag, always 0
    // 1 bit
    pub has_size_field: bool,
    // 1 bit obu_reserved_1bit
}

impl From<ObuHeader> for u8 {
    fn from(value: ObuHeader) -> Self {
        let mut result: u8 = u8::from(value.obu_type) << 3;
        result |= bool_to_bit(value.has_size_field) << 1;
        result
    }
}

impl TryFrom<u8> for ObuHeader {
    type Error = AV1CodecError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if msb_bit(value, 0) {
            return Err(AV1CodecError::ForbiddenBitSet);
        }
        let obu_type = ObuType::from(value >> 3);
        if msb_bit(value, 5) {
            return Err(AV1CodecError::UnsupportedExtension);
        }
        Ok(Self {
            obu_type,
            has_size_field: msb_bit(value, 6),
        })
    }
}

impl TryFrom<&[u8]> for ObuHeader {
    type Error = AV1CodecError;
    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        match value.first() {
            Some(first_byte) => Self::try_from(*first_byte),
            None => Err(AV1CodecError::NotEnoughData),
        }
    }
}

impl FixedPacket for ObuHeader {
    fn bytes_count() -> usize {
        1
    }
}

#[cfg(test)]
mod test {
    use utils::traits::fixed_packet::FixedPacket;

    use super::ObuHeader;
    use crate::{errors::AV1CodecError, obu_type::ObuType};

    #[test]
    fn test_sequence_header_with_size() {
        let header = ObuHeader::try_from(&[0x0au8, 0x0b, 0x00][..]).unwrap();
        assert_eq!(header.obu_type, ObuType::SequenceHeader);
        assert!(header.has_size_field);
        assert_eq!(u8::from(header), 0x0a);
    }

    #[test]
    fn test_frame_without_size() {
        let header = ObuHeader::try_from(0b0011_0000u8).unwrap();
        assert_eq!(header.obu_type, ObuType::Frame);
        assert!(!header.has_size_field);
    }

    #[test]
    fn test_reserved_bit_is_ignored() {
        let header = ObuHeader::try_from(0b0001_0011u8).unwrap();
        assert_eq!(header.obu_type, ObuType::TemporalDelimiter);
        assert!(header.has_size_field);
        assert_eq!(u8::from(header), 0b0001_0010);
    }

    #[test]
    fn test_reserved_obu_type() {
        let header = ObuHeader::try_from(0b0100_1000u8).unwrap();
        assert_eq!(header.obu_type, ObuType::Reserved(9));
        let header = ObuHeader::try_from(0b0111_1010u8).unwrap();
        assert_eq!(header.obu_type, ObuType::Padding);
    }

    #[test]
    fn test_invalid_headers() {
        assert!(matches!(
            ObuHeader::try_from(0b1000_1010u8),
            Err(AV1CodecError::ForbiddenBitSet)
        ));
        assert!(matches!(
            ObuHeader::try_from(0b0000_1110u8),
            Err(AV1CodecError::UnsupportedExtension)
        ));
        assert!(matches!(
            ObuHeader::try_from(&[0u8; 0][..]),
            Err(AV1CodecError::NotEnoughData)
        ));
    }

    #[test]
    fn test_header_byte_round_trip() {
        for value in 0..=u8::MAX {
            if let Ok(header) = ObuHeader::try_from(value) {
                // only the reserved bit may differ
                assert_eq!(u8::from(header), value & !0b1);
            }
        }
        assert_eq!(ObuHeader::bytes_count(), 1);
    }
}
