//!! @see: Table 1.18 – Sampling Frequency Index

use std::{collections::HashMap, sync::LazyLock};

use crate::errors::AACCodecError;

/// indexed by the 4 bits sampling frequency index
pub const SAMPLING_FREQUENCIES: [u32; 13] = [
    96000, 88200, 64000, 48000, 44100, 32000, 24000, 22050, 16000, 12000, 11025, 8000, 7350,
];

static SAMPLING_FREQUENCY_INDICES: LazyLock<HashMap<u32, u8>> = LazyLock::new(|| {
    SAMPLING_FREQUENCIES
        .iter()
        .zip(0u8..)
        .map(|(frequency, index)| (*frequency, index))
        .collect()
});

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SamplingFrequencyIndex {
    F96000 = 0x0,
    F88200 = 0x1,
    F64000 = 0x2,
    F48000 = 0x3,
    F44100 = 0x4,
    F32000 = 0x5,
    F24000 = 0x6,
    F22050 = 0x7,
    F16000 = 0x8,
    F12000 = 0x9,
    F11025 = 0xa,
    F8000 = 0xb,
    F7350 = 0xc,
    Reserved(u8), // 0xd, 0xe
    Escape = 0xf,
}

impl SamplingFrequencyIndex {
    pub fn get_sampling_frequency(&self) -> Option<u32> {
        match self {
            Self::Reserved(_) | Self::Escape => None,
            indexed => SAMPLING_FREQUENCIES
                .get(u8::from(*indexed) as usize)
                .copied(),
        }
    }

    /// exact match only, rates outside the table need the escape form
    pub fn get_sampling_frequency_index(frequency: u32) -> Option<Self> {
        SAMPLING_FREQUENCY_INDICES
            .get(&frequency)
            .and_then(|index| Self::try_from(*index).ok())
    }
}

impl From<SamplingFrequencyIndex> for u8 {
    fn from(value: SamplingFrequencyIndex) -> Self {
        match value {
            SamplingFrequencyIndex::F96000 => 0x0,
            SamplingFrequencyIndex::F88200 => 0x1,
            SamplingFrequencyIndex::F64000 => 0x2,
            SamplingFrequencyIndex::F48000 => 0x3,
            SamplingFrequencyIndex::F44100 => 0x4,
            SamplingFrequencyIndex::F32000 => 0x5,
            SamplingFrequencyIndex::F24000 => 0x6,
            SamplingFrequencyIndex::F22050 => 0x7,
            SamplingFrequencyIndex::F16000 => 0x8,
            SamplingFrequencyIndex::F12000 => 0x9,
            SamplingFrequencyIndex::F11025 => 0xa,
            SamplingFrequencyIndex::F8000 => 0xb,
            SamplingFrequencyIndex::F7350 => 0xc,
            SamplingFrequencyIndex::Reserved(v) => v,
            SamplingFrequencyIndex::Escape => 0xf,
        }
    }
}

impl TryFrom<u8> for SamplingFrequencyIndex {
    type Error = AACCodecError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x0 => Ok(Self::F96000),
            0x1 => Ok(Self::F88200),
            0x2 => Ok(Self::F64000),
            0x3 => Ok(Self::F48000),
            0x4 => Ok(Self::F44100),
            0x5 => Ok(Self::F32000),
            0x6 => Ok(Self::F24000),
            0x7 => Ok(Self::F22050),
            0x8 => Ok(Self::F16000),
            0x9 => Ok(Self::F12000),
            0xa => Ok(Self::F11025),
            0xb => Ok(Self::F8000),
            0xc => Ok(Self::F7350),
            0xd | 0xe => Ok(Self::Reserved(value)),
            0xf => Ok(Self::Escape),
            _ => Err(AACCodecError::InvalidSamplingFrequencyIndex {
                field: "samplingFrequencyIndex",
                value,
            }),
        }
    }
}
