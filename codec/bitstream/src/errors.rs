use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BitstreamError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("not enough data for {field}: wanted {wanted} bits, {remaining} bits remaining")]
    NotEnoughData {
        field: &'static str,
        wanted: u32,
        remaining: usize,
    },
    #[error("bit offset {offset} is out of range, buffer has {length} bits")]
    OffsetOutOfRange { offset: usize, length: usize },
}

pub type BitstreamResult<T> = Result<T, BitstreamError>;
