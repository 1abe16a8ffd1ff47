use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use xmtr_api::channel::ChannelConfig;
use xmtr_api::signal::SignalType;
use xmtr_engine::Resolution;

/// Scale transmitter signals between engineering units and ADC counts.
#[derive(Debug, Parser)]
#[command(name = "xmtr", version)]
pub struct Cli {
    /// TOML file with a [channel] table. Defaults to ./xmtr.toml when present.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Lower range value
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub lrv: Option<f64>,

    /// Upper range value
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub urv: Option<f64>,

    /// Converter resolution in bits (12, 14, 16, 24)
    #[arg(short, long, global = true)]
    pub resolution: Option<Resolution>,

    /// Signal type, e.g. "4-20ma" or "1-5v"
    #[arg(short, long, global = true)]
    pub signal: Option<SignalType>,

    /// Print the result as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// More log output, repeat for more detail
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scale an engineering value to a raw count
    ToRaw {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Scale a raw count (decimal or 0x hex) to an engineering value
    ToEng {
        #[arg(allow_hyphen_values = true)]
        raw: String,
    },
    /// List signal types and standard resolutions
    Signals,
}

impl Cli {
    /// Apply command line overrides on top of `config`.
    pub fn channel_config(&self, config: ChannelConfig) -> ChannelConfig {
        let mut config = config;

        if let Some(lrv) = self.lrv {
            config = config.with_lrv(lrv);
        }
        if let Some(urv) = self.urv {
            config = config.with_urv(urv);
        }
        if let Some(resolution) = self.resolution {
            config = config.with_resolution(resolution.bits());
        }
        if let Some(signal) = self.signal {
            config = config.with_signal(signal);
        }

        config
    }
}
