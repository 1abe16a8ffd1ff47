use crate::adc::Resolution;
use crate::error::ScaleError;
use crate::scale::percent_of_span;
use crate::transfer::{EngineeringScale, Transfer, TransferFunction};
use crate::validate;
use tracing::{event, Level};
use xmtr_api::channel::{ChannelConfig, RangeSpec};
use xmtr_api::convert::{ConversionResult, Primary, Request};
use xmtr_api::signal::SignalType;

/// A validated transmitter channel.
///
/// Range and resolution are checked once on creation; each conversion then only
/// checks the value it is given and returns the full result set an operator
/// expects to see.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Channel {
    resolution: Resolution,
    transfer: TransferFunction,
    scale: EngineeringScale,
}

impl Channel {
    /// Creates a new `Channel` from a `ChannelConfig`.
    ///
    /// Will return an error if the resolution is unsupported or the range is not ordered.
    pub fn new(config: &ChannelConfig) -> Result<Self, ScaleError> {
        let resolution = Resolution::new(config.resolution())?;
        let range = config.range();
        validate::check_range(&range)?;

        let transfer = TransferFunction::new(config.signal(), resolution);
        let scale = EngineeringScale::new(range, transfer.window());

        Ok(Self {
            resolution,
            transfer,
            scale,
        })
    }

    pub fn range(&self) -> RangeSpec {
        self.scale.range()
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn signal(&self) -> SignalType {
        self.transfer.signal()
    }

    pub fn convert(&self, request: Request) -> Result<ConversionResult, ScaleError> {
        match request {
            Request::ToRaw { engineering } => self.to_raw(engineering),
            Request::ToEngineering { raw } => self.to_engineering(raw),
        }
    }

    /// Scale an engineering value to a raw count.
    ///
    /// The loop signal is derived from the rounded count, percent of span from
    /// the engineering value.
    pub fn to_raw(&self, engineering: f64) -> Result<ConversionResult, ScaleError> {
        let range = self.range();
        validate::check_engineering(engineering, &range)?;

        let count = self.scale.to_count(engineering);
        event!(Level::DEBUG, "{} -> raw {} on {:?}", engineering, count, self);

        Ok(ConversionResult {
            primary: Primary::Raw {
                count,
                bits: self.resolution.bits(),
            },
            physical: self.transfer.conversion(count),
            percent_of_span: percent_of_span(engineering, &range),
        })
    }

    /// Scale a raw count to an engineering value.
    pub fn to_engineering(&self, raw: i64) -> Result<ConversionResult, ScaleError> {
        validate::check_raw(raw, self.resolution, self.signal())?;

        let value = self.scale.conversion(raw);
        event!(Level::DEBUG, "raw {} -> {} on {:?}", raw, value, self);

        Ok(ConversionResult {
            primary: Primary::Engineering { value },
            physical: self.transfer.conversion(raw),
            percent_of_span: percent_of_span(value, &self.range()),
        })
    }
}
