use std::env;

use codec_aac::mpeg4_configuration::audio_specific_config::{
    AudioSpecificConfig, SbrExtension, audio_object_type::AudioObjectType,
};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::{
    cli::AppCli,
    errors::{AppError, AppResult},
    util::parse_log_level,
};

#[derive(Debug, Deserialize)]
#[allow(unused)]
pub(crate) struct Logger {
    pub(crate) level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Extension {
    Sbr,
    Ps,
}

/// the `[audio_specific_config]` section used by the encode command
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AudioSpecificConfigSection {
    pub(crate) sampling_frequency: u32,
    pub(crate) channel_count: u8,
    pub(crate) extension: Option<Extension>,
    pub(crate) extension_sampling_frequency: Option<u32>,
    #[serde(default)]
    pub(crate) frame_length_flag: bool,
    pub(crate) core_coder_delay: Option<u16>,
}

impl TryFrom<&AudioSpecificConfigSection> for AudioSpecificConfig {
    type Error = AppError;
    fn try_from(value: &AudioSpecificConfigSection) -> Result<Self, Self::Error> {
        let extension = match value.extension {
            None => None,
            Some(extension) => {
                let sampling_frequency = value.extension_sampling_frequency.ok_or_else(|| {
                    AppError::ConfigError(ConfigError::Message(
                        "extension_sampling_frequency is required with an extension".to_owned(),
                    ))
                })?;
                Some(SbrExtension {
                    audio_object_type: match extension {
                        Extension::Sbr => AudioObjectType::SBR,
                        Extension::Ps => AudioObjectType::PS,
                    },
                    sampling_frequency,
                })
            }
        };
        Ok(Self {
            audio_object_type: AudioObjectType::AACLC,
            sampling_frequency: value.sampling_frequency,
            channel_count: value.channel_count,
            extension,
            frame_length_flag: value.frame_length_flag,
            core_coder_delay: value.core_coder_delay,
        })
    }
}

#[derive(Debug, Deserialize)]
#[allow(unused)]
pub(crate) struct AppConfig {
    pub(crate) logger: Logger,
    pub(crate) audio_specific_config: Option<AudioSpecificConfigSection>,
}

impl AppConfig {
    pub(crate) fn new(config_path: Option<String>) -> AppResult<Self> {
        let config_path_composed = config_path.or_else(|| env::var("ASC_TOOL_CONFIG").ok());
        let mut builder = Config::builder().set_default("logger.level", "info")?;
        if let Some(path) = config_path_composed {
            builder = builder.add_source(File::with_name(path.as_str()));
        }
        let result = builder
            .add_source(Environment::with_prefix("asc").separator("__"))
            .build()?;
        let config = result.try_deserialize()?;
        Ok(config)
    }

    pub(crate) fn apply(&mut self, cli_args: &AppCli) -> AppResult<()> {
        if let Some(level) = cli_args.log_level.as_ref() {
            self.logger.level = level.clone();
        }
        Ok(())
    }

    pub(crate) fn validate(&self) -> AppResult<()> {
        let _ = parse_log_level(&self.logger.level)?;
        if let Some(section) = self.audio_specific_config.as_ref()
            && section.extension.is_some()
            && section.extension_sampling_frequency.is_none()
        {
            return Err(AppError::ConfigError(ConfigError::Message(
                "extension_sampling_frequency is required with an extension".to_owned(),
            )));
        }
        Ok(())
    }
}
