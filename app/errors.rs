use codec_aac::errors::AACCodecError;
use codec_av1::errors::AV1CodecError;
use codec_bitstream::errors::BitstreamError;
use config::ConfigError;
use thiserror::Error;
use tracing::dispatcher::SetGlobalDefaultError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),
    #[error("set global logger failed: {0}")]
    LoggerError(#[from] SetGlobalDefaultError),
    #[error("invalid hex input: {0}")]
    InvalidHex(String),
    #[error("bitstream error: {0}")]
    BitstreamError(#[from] BitstreamError),
    #[error("aac codec error: {0}")]
    AACCodecError(#[from] AACCodecError),
    #[error("av1 codec error: {0}")]
    AV1CodecError(#[from] AV1CodecError),
}

pub(crate) type AppResult<T> = Result<T, AppError>;
