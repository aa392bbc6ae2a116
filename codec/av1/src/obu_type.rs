/// @see: AV1 Bitstream & Decoding Process Specification
/// 6.2.2 OBU header semantics, obu_type
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObuType {
    SequenceHeader = 1,
    TemporalDelimiter = 2,
    FrameHeader = 3,
    TileGroup = 4,
    Metadata = 5,
    Frame = 6,
    RedundantFrameHeader = 7,
    TileList = 8,
    Padding = 15,
    Reserved(u8), // 0, 9~14
}

pub const AV1_OBU_TYPE_U8_MASK: u8 = 0b1111;

impl From<ObuType> for u8 {
    fn from(value: ObuType) -> Self {
        match value {
            ObuType::SequenceHeader => 1,
            ObuType::TemporalDelimiter => 2,
            ObuType::FrameHeader => 3,
            ObuType::TileGroup => 4,
            ObuType::Metadata => 5,
            ObuType::Frame => 6,
            ObuType::RedundantFrameHeader => 7,
            ObuType::TileList => 8,
            ObuType::Padding => 15,
            ObuType::Reserved(v) => v,
        }
    }
}

/// only the low 4 bits are looked at
impl From<u8> for ObuType {
    fn from(value: u8) -> Self {
        match value & AV1_OBU_TYPE_U8_MASK {
            1 => Self::SequenceHeader,
            2 => Self::TemporalDelimiter,
            3 => Self::FrameHeader,
            4 => Self::TileGroup,
            5 => Self::Metadata,
            6 => Self::Frame,
            7 => Self::RedundantFrameHeader,
            8 => Self::TileList,
            15 => Self::Padding,
            v => Self::Reserved(v),
        }
    }
}

#[cfg(test)]
mod test {
    use super::ObuType;

    #[test]
    fn test_every_obu_type_code() {
        for code in 0..=u8::MAX {
            let obu_type = ObuType::from(code);
            let low_bits = code & 0b1111;
            assert_eq!(u8::from(obu_type), low_bits);
            if low_bits == 0 || (9..=14).contains(&low_bits) {
                assert_eq!(obu_type, ObuType::Reserved(low_bits));
            }
        }
        assert_eq!(ObuType::from(6), ObuType::Frame);
        assert_eq!(ObuType::from(15), ObuType::Padding);
    }
}
