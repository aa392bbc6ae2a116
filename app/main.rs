mod cli;
mod config;
mod errors;
mod util;

use std::process::ExitCode;

use clap::Parser;
use codec_aac::mpeg4_configuration::audio_specific_config::AudioSpecificConfig;
use codec_av1::obu_header::ObuHeader;
use codec_bitstream::reader::BitstreamReader;
use ::config::ConfigError;
use time::macros::format_description;
use tracing::{self, Dispatch};
use tracing_subscriber::{self, EnvFilter, filter::LevelFilter, fmt::time::LocalTime};
use utils::{bytes::bytes_to_hex, traits::reader::BitwiseReadFrom};

use crate::{
    cli::{AppCli, Command},
    config::AppConfig,
    errors::{AppError, AppResult},
    util::{describe_audio_specific_config, describe_obu_header, parse_hex, parse_log_level},
};

fn init_logger(level: tracing::Level) -> AppResult<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_timer(LocalTime::new(format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        )))
        .compact()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        // stdout carries the command output
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::from_level(level).into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .finish();
    tracing::dispatcher::set_global_default(Dispatch::new(subscriber))?;
    Ok(())
}

fn run_command(command: &Command, app_config: &AppConfig) -> AppResult<()> {
    match command {
        Command::Decode { hex, bit_offset } => {
            let bytes = parse_hex(hex)?;
            let mut reader = BitstreamReader::with_bit_offset(&bytes, *bit_offset)?;
            let config = AudioSpecificConfig::read_from(&mut reader)?;
            tracing::info!(
                "decoded audio specific config, consumed bits {}..{}",
                bit_offset,
                reader.position_in_bits()
            );
            println!("{}", describe_audio_specific_config(&config));
        }
        Command::Encode => {
            let section = app_config.audio_specific_config.as_ref().ok_or_else(|| {
                AppError::ConfigError(ConfigError::NotFound(
                    "audio_specific_config".to_owned(),
                ))
            })?;
            let config = AudioSpecificConfig::try_from(section)?;
            let bytes = config.to_bytes()?;
            tracing::info!("encoded audio specific config into {} bytes", bytes.len());
            println!("{}", bytes_to_hex(&bytes));
        }
        Command::Obu { hex } => {
            let bytes = parse_hex(hex)?;
            let header = ObuHeader::try_from(&bytes[..])?;
            println!("{}", describe_obu_header(&header));
        }
    }
    Ok(())
}

fn run(cli_args: AppCli) -> AppResult<()> {
    let mut app_config = AppConfig::new(cli_args.config.clone())?;
    app_config.apply(&cli_args)?;
    app_config.validate()?;
    init_logger(parse_log_level(&app_config.logger.level)?)?;
    tracing::debug!("asc_tool config: {:?}", app_config);
    run_command(&cli_args.command, &app_config)
}

fn main() -> ExitCode {
    let cli_args = AppCli::parse();
    match run(cli_args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("asc_tool failed: {}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
