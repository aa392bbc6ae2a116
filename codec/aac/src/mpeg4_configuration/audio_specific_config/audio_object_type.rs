//!!! @see: Table 1.1 – Audio Object Type definition based on Tools/Modules

use utils::traits::fixed_packet::FixedBitwisePacket;

use crate::errors::AACCodecError;

/// The audio object types this codec can carry,
/// everything else in Table 1.1 is rejected.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioObjectType {
    AACLC = 2,
    SBR = 5,
    PS = 29,
}

impl AudioObjectType {
    /// SBR and PS wrap a base AAC LC object type
    pub fn is_extension(&self) -> bool {
        matches!(self, Self::SBR | Self::PS)
    }
}

impl FixedBitwisePacket for AudioObjectType {
    fn bits_count() -> usize {
        5
    }
}

impl From<AudioObjectType> for u8 {
    fn from(value: AudioObjectType) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for AudioObjectType {
    type Error = AACCodecError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Self::AACLC),
            5 => Ok(Self::SBR),
            29 => Ok(Self::PS),
            _ => Err(AACCodecError::UnsupportedAudioObjectType(value)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::AudioObjectType;
    use crate::errors::AACCodecError;

    #[test]
    fn test_audio_object_type() {
        for object_type in [AudioObjectType::AACLC, AudioObjectType::SBR, AudioObjectType::PS] {
            let value: u8 = object_type.into();
            assert_eq!(AudioObjectType::try_from(value).unwrap(), object_type);
        }
        assert!(!AudioObjectType::AACLC.is_extension());
        assert!(AudioObjectType::SBR.is_extension());
        assert!(AudioObjectType::PS.is_extension());
        for value in [0, 1, 3, 4, 6, 17, 23, 30, 31] {
            assert!(matches!(
                AudioObjectType::try_from(value),
                Err(AACCodecError::UnsupportedAudioObjectType(v)) if v == value
            ));
        }
    }
}
