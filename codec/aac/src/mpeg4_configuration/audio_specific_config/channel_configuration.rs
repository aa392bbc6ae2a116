//!! @see: Table 1.19 – Channel Configuration

use crate::errors::AACCodecError;

/// A 4 bits channel configuration code with an explicit channel mapping.
///
/// Code 0 defers the mapping to a program config element which is not supported,
/// codes 8 and above are reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelConfiguration(u8);

impl ChannelConfiguration {
    pub fn try_from_channel_count(channel_count: u8) -> Result<Self, AACCodecError> {
        match channel_count {
            1..=6 => Ok(Self(channel_count)),
            8 => Ok(Self(7)),
            _ => Err(AACCodecError::InvalidChannelCount(channel_count)),
        }
    }

    pub fn channel_count(&self) -> u8 {
        match self.0 {
            7 => 8,
            code => code,
        }
    }
}

impl From<ChannelConfiguration> for u8 {
    fn from(value: ChannelConfiguration) -> Self {
        value.0
    }
}

impl TryFrom<u8> for ChannelConfiguration {
    type Error = AACCodecError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Err(AACCodecError::UnsupportedChannelConfiguration(value)),
            1..=7 => Ok(Self(value)),
            _ => Err(AACCodecError::InvalidChannelConfiguration(value)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::ChannelConfiguration;
    use crate::errors::AACCodecError;

    #[test]
    fn test_channel_mapping() {
        for code in 1..=6u8 {
            let configuration = ChannelConfiguration::try_from(code).unwrap();
            assert_eq!(configuration.channel_count(), code);
            assert_eq!(
                ChannelConfiguration::try_from_channel_count(code).unwrap(),
                configuration
            );
        }
        let configuration = ChannelConfiguration::try_from(7).unwrap();
        assert_eq!(configuration.channel_count(), 8);
        assert_eq!(
            u8::from(ChannelConfiguration::try_from_channel_count(8).unwrap()),
            7
        );
    }

    #[test]
    fn test_rejected_codes() {
        assert!(matches!(
            ChannelConfiguration::try_from(0),
            Err(AACCodecError::UnsupportedChannelConfiguration(0))
        ));
        for code in 8..=15u8 {
            assert!(matches!(
                ChannelConfiguration::try_from(code),
                Err(AACCodecError::InvalidChannelConfiguration(v)) if v == code
            ));
        }
        for count in [0u8, 7, 9, 255] {
            assert!(matches!(
                ChannelConfiguration::try_from_channel_count(count),
                Err(AACCodecError::InvalidChannelCount(v)) if v == count
            ));
        }
    }
}
