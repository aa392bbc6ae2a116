use codec_bitstream::reader::BitstreamReader;
use utils::traits::reader::{BitwiseReadFrom, BitwiseReadReaminingFrom};

use crate::errors::AACCodecError;

use super::{
    AudioSpecificConfig, CORE_SAMPLING_FREQUENCY, EXTENSION_SAMPLING_FREQUENCY, SamplingFrequency,
    SamplingFrequencyFields, SbrExtension, audio_object_type::AudioObjectType,
    channel_configuration::ChannelConfiguration, sampling_frequency_index::SamplingFrequencyIndex,
};

/// the 4 bits index was read ahead, reads the 24 bits frequency after an escape index
impl<'a> BitwiseReadReaminingFrom<(u8, SamplingFrequencyFields), BitstreamReader<'a>>
    for SamplingFrequency
{
    type Error = AACCodecError;
    fn read_remaining_from(
        header: (u8, SamplingFrequencyFields),
        reader: &mut BitstreamReader<'a>,
    ) -> Result<Self, Self::Error> {
        let (index, fields) = header;
        let index = SamplingFrequencyIndex::try_from(index).map_err(|_| {
            AACCodecError::InvalidSamplingFrequencyIndex {
                field: fields.index,
                value: index,
            }
        })?;
        if index == SamplingFrequencyIndex::Escape {
            return Ok(Self::Explicit(reader.read::<24, u32>(fields.frequency)?));
        }
        match index.get_sampling_frequency() {
            Some(frequency) => Ok(Self::Indexed { index, frequency }),
            None => Err(AACCodecError::InvalidSamplingFrequencyIndex {
                field: fields.index,
                value: index.into(),
            }),
        }
    }
}

impl<'a> BitwiseReadFrom<BitstreamReader<'a>> for SamplingFrequency {
    type Error = AACCodecError;
    fn read_from(reader: &mut BitstreamReader<'a>) -> Result<Self, Self::Error> {
        let index = reader.read::<4, u8>(CORE_SAMPLING_FREQUENCY.index)?;
        Self::read_remaining_from((index, CORE_SAMPLING_FREQUENCY), reader)
    }
}

impl<'a> BitwiseReadFrom<BitstreamReader<'a>> for AudioSpecificConfig {
    type Error = AACCodecError;
    fn read_from(reader: &mut BitstreamReader<'a>) -> Result<Self, Self::Error> {
        let mut audio_object_type: AudioObjectType =
            reader.read::<5, u8>("audioObjectType")?.try_into()?;
        let sampling_frequency = SamplingFrequency::read_from(reader)?;
        let channel_configuration: ChannelConfiguration =
            reader.read::<4, u8>("channelConfiguration")?.try_into()?;

        let mut extension = None;
        if audio_object_type.is_extension() {
            let index = reader.read::<4, u8>(EXTENSION_SAMPLING_FREQUENCY.index)?;
            let extension_sampling_frequency =
                SamplingFrequency::read_remaining_from((index, EXTENSION_SAMPLING_FREQUENCY), reader)?;
            extension = Some(SbrExtension {
                audio_object_type,
                sampling_frequency: extension_sampling_frequency.frequency(),
            });
            // only AAC LC may be wrapped
            let base_audio_object_type = reader.read::<5, u8>("audioObjectType")?;
            if base_audio_object_type != u8::from(AudioObjectType::AACLC) {
                return Err(AACCodecError::UnsupportedExtensionBaseObjectType(
                    base_audio_object_type,
                ));
            }
            audio_object_type = AudioObjectType::AACLC;
        }

        let frame_length_flag = reader.read_bit("frameLengthFlag")?;
        let depends_on_core_coder = reader.read_bit("dependsOnCoreCoder")?;
        let core_coder_delay = if depends_on_core_coder {
            Some(reader.read::<14, u16>("coreCoderDelay")?)
        } else {
            None
        };
        if reader.read_bit("extensionFlag")? {
            return Err(AACCodecError::UnsupportedExtensionFlag);
        }

        let config = Self {
            audio_object_type,
            sampling_frequency: sampling_frequency.frequency(),
            channel_count: channel_configuration.channel_count(),
            extension,
            frame_length_flag,
            core_coder_delay,
        };
        tracing::trace!("read audio specific config: {:?}", config);
        Ok(config)
    }
}

impl TryFrom<&[u8]> for AudioSpecificConfig {
    type Error = AACCodecError;
    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let mut reader = BitstreamReader::new(value);
        Self::read_from(&mut reader)
    }
}
