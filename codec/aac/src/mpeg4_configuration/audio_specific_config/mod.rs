//!! @see: Information technology - Coding of  audio-visual objects Part 3:  Audio
//!! 1.6.2.1 AudioSpecificConfig, restricted to AAC LC with optional SBR / PS signaling

use audio_object_type::AudioObjectType;
use sampling_frequency_index::SamplingFrequencyIndex;
use utils::traits::{dynamic_sized_packet::DynamicSizedBitsPacket, fixed_packet::FixedBitwisePacket};

pub mod audio_object_type;
pub mod channel_configuration;
pub mod reader;
pub mod sampling_frequency_index;
pub mod writer;

/// largest value of the explicit 24 bits sampling frequency
pub const MAX_EXPLICIT_SAMPLING_FREQUENCY: u32 = (1 << 24) - 1;
/// largest value of the 14 bits core coder delay
pub const MAX_CORE_CODER_DELAY: u16 = (1 << 14) - 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioSpecificConfig {
    /// always AAC LC once an SBR / PS extension was resolved
    pub audio_object_type: AudioObjectType, // 5 bits
    pub sampling_frequency: u32,            // 4 bits index or 4 + 24 bits
    pub channel_count: u8,                  // 4 bits channelConfiguration
    pub extension: Option<SbrExtension>,
    pub frame_length_flag: bool, // 1 bit
    /// present if and only if dependsOnCoreCoder is set
    pub core_coder_delay: Option<u16>, // 14 bits
}

/// Explicit SBR / PS signaling, the extension sampling frequency
/// is usually twice the core one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SbrExtension {
    pub audio_object_type: AudioObjectType, // 5 bits, SBR or PS
    pub sampling_frequency: u32,            // 4 bits index or 4 + 24 bits
}

impl AudioSpecificConfig {
    pub fn depends_on_core_coder(&self) -> bool {
        self.core_coder_delay.is_some()
    }

    pub fn is_sbr(&self) -> bool {
        self.extension.is_some()
    }

    pub fn is_ps(&self) -> bool {
        self.extension
            .is_some_and(|extension| extension.audio_object_type == AudioObjectType::PS)
    }

    /// the rate decoded audio is played at
    pub fn output_sampling_frequency(&self) -> u32 {
        self.extension
            .map_or(self.sampling_frequency, |extension| extension.sampling_frequency)
    }

    pub fn samples_per_frame(&self) -> usize {
        if self.frame_length_flag { 960 } else { 1024 }
    }
}

impl DynamicSizedBitsPacket for AudioSpecificConfig {
    fn get_packet_bits_count(&self) -> usize {
        AudioObjectType::bits_count() +
        SamplingFrequency::from_frequency(self.sampling_frequency).get_packet_bits_count() +
        4 + // channelConfiguration
        self.extension.as_ref().map_or(0, |item| item.get_packet_bits_count()) +
        1 + // frameLengthFlag
        1 + // dependsOnCoreCoder
        self.core_coder_delay.map_or(0, |_| 14) +
        1 // extensionFlag
    }
}

impl DynamicSizedBitsPacket for SbrExtension {
    fn get_packet_bits_count(&self) -> usize {
        SamplingFrequency::from_frequency(self.sampling_frequency).get_packet_bits_count() +
        AudioObjectType::bits_count() // the wrapped audioObjectType
    }
}

/// How a sampling frequency sits in the bitstream,
/// shared by the bits count and the write pass so both always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingFrequency {
    Indexed {
        index: SamplingFrequencyIndex,
        frequency: u32,
    },
    Explicit(u32),
}

impl SamplingFrequency {
    pub fn from_frequency(frequency: u32) -> Self {
        match SamplingFrequencyIndex::get_sampling_frequency_index(frequency) {
            Some(index) => Self::Indexed { index, frequency },
            None => Self::Explicit(frequency),
        }
    }

    pub fn frequency(&self) -> u32 {
        match self {
            Self::Indexed { frequency, .. } | Self::Explicit(frequency) => *frequency,
        }
    }

    pub fn index(&self) -> SamplingFrequencyIndex {
        match self {
            Self::Indexed { index, .. } => *index,
            Self::Explicit(_) => SamplingFrequencyIndex::Escape,
        }
    }
}

impl DynamicSizedBitsPacket for SamplingFrequency {
    fn get_packet_bits_count(&self) -> usize {
        4 + // samplingFrequencyIndex
        match self {
            Self::Indexed { .. } => 0,
            Self::Explicit(_) => 24, // samplingFrequency
        }
    }
}

/// bitstream field names of a sampling frequency
#[derive(Debug, Clone, Copy)]
pub struct SamplingFrequencyFields {
    pub index: &'static str,
    pub frequency: &'static str,
}

pub const CORE_SAMPLING_FREQUENCY: SamplingFrequencyFields = SamplingFrequencyFields {
    index: "samplingFrequencyIndex",
    frequency: "samplingFrequency",
};

pub const EXTENSION_SAMPLING_FREQUENCY: SamplingFrequencyFields = SamplingFrequencyFields {
    index: "extensionSamplingFrequencyIndex",
    frequency: "extensionSamplingFrequency",
};
