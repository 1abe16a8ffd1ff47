use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use tracing::{event, Level};
use xmtr_api::convert::Request;
use xmtr_engine::{validate, Channel};

mod cli;
mod config;
mod report;

use cli::{Cli, Command};
use config::Config;
use report::Report;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    run(&cli, &mut out)
}

fn init_tracing(cli: &Cli) {
    let level = if cli.quiet {
        Level::ERROR
    } else {
        match cli.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    // Logs go to stderr so stdout only carries the result
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let request = match &cli.command {
        Command::Signals => return report::write_signals(out),
        Command::ToRaw { value } => Request::ToRaw {
            engineering: validate::parse_engineering(value)?,
        },
        Command::ToEng { raw } => Request::ToEngineering {
            raw: validate::parse_raw_count(raw)?,
        },
    };

    let config = Config::load(cli.config.as_deref())?;
    let channel_config = cli.channel_config(config.channel);
    let channel = Channel::new(&channel_config).context("invalid channel")?;
    event!(Level::INFO, "scaling {:?} on {:?}", request, channel);

    let result = channel.convert(request)?;
    let report = Report::new(&channel, result);

    if cli.json {
        report.write_json(out)
    } else {
        report.write_text(out)
    }
}
