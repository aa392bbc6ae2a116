use codec_bitstream::writer::BitstreamWriter;
use utils::traits::{dynamic_sized_packet::DynamicSizedBitsPacket, writer::BitwiseWriteTo};

use crate::errors::{AACCodecError, AACCodecResult};

use super::{
    AudioSpecificConfig, CORE_SAMPLING_FREQUENCY, EXTENSION_SAMPLING_FREQUENCY,
    MAX_CORE_CODER_DELAY, MAX_EXPLICIT_SAMPLING_FREQUENCY, SamplingFrequency,
    SamplingFrequencyFields, audio_object_type::AudioObjectType,
    channel_configuration::ChannelConfiguration,
};

impl BitwiseWriteTo<BitstreamWriter> for SamplingFrequency {
    type Error = AACCodecError;
    fn write_to(&self, writer: &mut BitstreamWriter) -> Result<(), Self::Error> {
        writer.write::<4, u8>(self.index().into())?;
        if let Self::Explicit(frequency) = self {
            tracing::debug!("sampling frequency {} is not indexed, escaping", frequency);
            writer.write::<24, u32>(*frequency)?;
        }
        Ok(())
    }
}

fn check_sampling_frequency(
    frequency: u32,
    fields: SamplingFrequencyFields,
) -> AACCodecResult<SamplingFrequency> {
    let sampling_frequency = SamplingFrequency::from_frequency(frequency);
    if let SamplingFrequency::Explicit(value) = sampling_frequency
        && value > MAX_EXPLICIT_SAMPLING_FREQUENCY
    {
        return Err(AACCodecError::SamplingFrequencyOutOfRange {
            field: fields.frequency,
            value,
        });
    }
    Ok(sampling_frequency)
}

impl BitwiseWriteTo<BitstreamWriter> for AudioSpecificConfig {
    type Error = AACCodecError;
    fn write_to(&self, writer: &mut BitstreamWriter) -> Result<(), Self::Error> {
        // SBR / PS are only signaled through `extension`, which always wraps AAC LC
        if self.audio_object_type != AudioObjectType::AACLC {
            return Err(AACCodecError::InvalidAudioObjectType(self.audio_object_type));
        }
        let channel_configuration = ChannelConfiguration::try_from_channel_count(self.channel_count)?;
        let sampling_frequency = check_sampling_frequency(self.sampling_frequency, CORE_SAMPLING_FREQUENCY)?;
        if let Some(delay) = self.core_coder_delay
            && delay > MAX_CORE_CODER_DELAY
        {
            return Err(AACCodecError::CoreCoderDelayOutOfRange(delay));
        }

        match self.extension.as_ref() {
            Some(extension) => {
                if !extension.audio_object_type.is_extension() {
                    return Err(AACCodecError::InvalidExtensionObjectType(
                        extension.audio_object_type,
                    ));
                }
                let extension_sampling_frequency = check_sampling_frequency(
                    extension.sampling_frequency,
                    EXTENSION_SAMPLING_FREQUENCY,
                )?;
                // the extension type goes first, the wrapped type after the extension frequency
                writer.write::<5, u8>(extension.audio_object_type.into())?;
                sampling_frequency.write_to(writer)?;
                writer.write::<4, u8>(channel_configuration.into())?;
                extension_sampling_frequency.write_to(writer)?;
                writer.write::<5, u8>(self.audio_object_type.into())?;
            }
            None => {
                writer.write::<5, u8>(self.audio_object_type.into())?;
                sampling_frequency.write_to(writer)?;
                writer.write::<4, u8>(channel_configuration.into())?;
            }
        }

        writer.write_bit(self.frame_length_flag)?;
        writer.write_bit(self.depends_on_core_coder())?;
        if let Some(delay) = self.core_coder_delay {
            writer.write::<14, u16>(delay)?;
        }
        writer.write_bit(false)?; // extensionFlag
        Ok(())
    }
}

impl AudioSpecificConfig {
    /// Minimal encoding, padding bits of the last byte are zero.
    pub fn to_bytes(&self) -> AACCodecResult<Vec<u8>> {
        let expected = self.get_packet_bits_count();
        let mut writer = BitstreamWriter::with_capacity(self.get_packet_bytes_count());
        self.write_to(&mut writer)?;
        let written = writer.position_in_bits();
        if written != expected {
            return Err(AACCodecError::BitsCountMismatch { expected, written });
        }
        let bytes = writer.into_bytes()?;
        tracing::trace!("wrote audio specific config: {} bits, {:?}", written, self);
        Ok(bytes)
    }
}
