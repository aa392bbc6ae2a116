use codec_aac::mpeg4_configuration::audio_specific_config::AudioSpecificConfig;
use codec_av1::obu_header::ObuHeader;
use config::ConfigError;
use utils::bytes::hex_to_bytes;

use crate::errors::{AppError, AppResult};

pub(crate) fn parse_log_level(level: &str) -> AppResult<tracing::Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(tracing::Level::TRACE),
        "debug" => Ok(tracing::Level::DEBUG),
        "info" => Ok(tracing::Level::INFO),
        "warn" => Ok(tracing::Level::WARN),
        "error" => Ok(tracing::Level::ERROR),
        other => Err(AppError::ConfigError(ConfigError::Message(format!(
            "got unexpected log level: {}",
            other
        )))),
    }
}

pub(crate) fn parse_hex(hex: &str) -> AppResult<Vec<u8>> {
    hex_to_bytes(hex).ok_or_else(|| AppError::InvalidHex(hex.to_owned()))
}

pub(crate) fn describe_audio_specific_config(config: &AudioSpecificConfig) -> String {
    let extension = match config.extension {
        Some(extension) => format!(
            "{:?} at {}",
            extension.audio_object_type, extension.sampling_frequency
        ),
        None => "none".to_owned(),
    };
    let core_coder_delay = match config.core_coder_delay {
        Some(delay) => delay.to_string(),
        None => "none".to_owned(),
    };
    format!(
        "audio object type: {:?}\n\
         sampling frequency: {}\n\
         channel count: {}\n\
         extension: {}\n\
         frame length flag: {}\n\
         core coder delay: {}\n\
         samples per frame: {}",
        config.audio_object_type,
        config.sampling_frequency,
        config.channel_count,
        extension,
        config.frame_length_flag,
        core_coder_delay,
        config.samples_per_frame()
    )
}

pub(crate) fn describe_obu_header(header: &ObuHeader) -> String {
    format!(
        "obu type: {:?}\nhas size field: {}",
        header.obu_type, header.has_size_field
    )
}

#[cfg(test)]
mod test {
    use codec_aac::mpeg4_configuration::audio_specific_config::AudioSpecificConfig;

    use super::{describe_audio_specific_config, parse_hex, parse_log_level};

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("DEBUG").unwrap(), tracing::Level::DEBUG);
        assert_eq!(parse_log_level("warn").unwrap(), tracing::Level::WARN);
        assert!(parse_log_level("verbose").is_err());
    }

    #[test]
    fn test_describe_decoded_hex() {
        let bytes = parse_hex("1210").unwrap();
        let config = AudioSpecificConfig::try_from(&bytes[..]).unwrap();
        let description = describe_audio_specific_config(&config);
        assert!(description.contains("audio object type: AACLC"));
        assert!(description.contains("sampling frequency: 44100"));
        assert!(description.contains("channel count: 2"));
        assert!(description.contains("extension: none"));
        assert!(description.contains("core coder delay: none"));
        assert!(description.ends_with("samples per frame: 1024"));
        assert!(parse_hex("12x0").is_err());
    }
}
