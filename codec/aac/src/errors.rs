use codec_bitstream::errors::BitstreamError;
use thiserror::Error;

use crate::mpeg4_configuration::audio_specific_config::audio_object_type::AudioObjectType;

#[derive(Debug, Error)]
pub enum AACCodecError {
    #[error("bitstream error: {0}")]
    Bitstream(#[from] BitstreamError),
    #[error("unsupported audio object type: {0}")]
    UnsupportedAudioObjectType(u8),
    #[error("unsupported audio object type wrapped by sbr/ps extension: {0}")]
    UnsupportedExtensionBaseObjectType(u8),
    #[error("audio object type {0:?} can not be coded as the primary type")]
    InvalidAudioObjectType(AudioObjectType),
    #[error("invalid extension audio object type: {0:?}")]
    InvalidExtensionObjectType(AudioObjectType),
    #[error("invalid {field}: {value}")]
    InvalidSamplingFrequencyIndex { field: &'static str, value: u8 },
    #[error("{field} can not be coded in 24 bits: {value}")]
    SamplingFrequencyOutOfRange { field: &'static str, value: u32 },
    #[error("unsupported channel configuration: {0}")]
    UnsupportedChannelConfiguration(u8),
    #[error("invalid channel configuration: {0}")]
    InvalidChannelConfiguration(u8),
    #[error("invalid channel count: {0}")]
    InvalidChannelCount(u8),
    #[error("core coder delay can not be coded in 14 bits: {0}")]
    CoreCoderDelayOutOfRange(u16),
    #[error("audio specific config with extension flag set is not supported")]
    UnsupportedExtensionFlag,
    #[error("written bits count {written} differs from computed bits count {expected}")]
    BitsCountMismatch { expected: usize, written: usize },
}

pub type AACCodecResult<T> = Result<T, AACCodecError>;
