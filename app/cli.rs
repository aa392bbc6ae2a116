use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version, about, long_about)]
pub(crate) struct AppCli {
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub(crate) config: Option<String>,
    #[arg(long, value_name = "LOG_LEVEL")]
    pub(crate) log_level: Option<String>,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Decode a hex encoded audio specific config
    Decode {
        #[arg(value_name = "HEX")]
        hex: String,
        /// Bit position the config starts at
        #[arg(long, value_name = "BITS", default_value_t = 0)]
        bit_offset: usize,
    },
    /// Encode the audio specific config described in the config file
    Encode,
    /// Parse the header of a hex encoded av1 obu
    Obu {
        #[arg(value_name = "HEX")]
        hex: String,
    },
}
