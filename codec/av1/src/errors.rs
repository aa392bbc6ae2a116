use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AV1CodecError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("not enough data for obu header")]
    NotEnoughData,
    #[error("obu forbidden bit is set")]
    ForbiddenBitSet,
    #[error("obu extension header is not supported")]
    UnsupportedExtension,
}

pub type AV1CodecResult<T> = Result<T, AV1CodecError>;
