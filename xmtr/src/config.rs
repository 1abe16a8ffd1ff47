use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{event, Level};
use xmtr_api::channel::ChannelConfig;

/// Config file read when no path is given on the command line.
pub const DEFAULT_PATH: &str = "xmtr.toml";

/// Contents of the TOML config file.
///
/// ```toml
/// [channel]
/// lrv = 0.0
/// urv = 250.0
/// resolution = 12
/// signal = "4-20ma"
/// ```
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub channel: ChannelConfig,
}

impl Config {
    /// Read `path`, or `DEFAULT_PATH` if it exists, or fall back to defaults.
    ///
    /// An explicitly given path that cannot be read is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_PATH).is_file() => Self::from_file(Path::new(DEFAULT_PATH)),
            None => Ok(Self::default()),
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        event!(Level::INFO, "loaded config from {}", path.display());

        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
