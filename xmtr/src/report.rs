use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use strum::IntoEnumIterator;
use xmtr_api::channel::RangeSpec;
use xmtr_api::convert::ConversionResult;
use xmtr_api::signal::{PhysicalUnit, SignalType};
use xmtr_engine::{Channel, Resolution};

/// Everything printed for one conversion.
#[derive(Debug, Serialize)]
pub struct Report {
    pub signal: SignalType,
    pub resolution: u8,
    pub range: RangeSpec,
    pub result: ConversionResult,
}

impl Report {
    pub fn new(channel: &Channel, result: ConversionResult) -> Self {
        Self {
            signal: channel.signal(),
            resolution: channel.resolution().bits(),
            range: channel.range(),
            result,
        }
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<()> {
        let physical_label = match self.result.physical.unit {
            PhysicalUnit::Volt => "Calculated Voltage",
            PhysicalUnit::Milliamp => "Calculated Current",
        };

        writeln!(out, "Signal Type: {}", self.signal)?;
        writeln!(out, "Range: {} to {}", self.range.lrv, self.range.urv)?;
        writeln!(out, "Result: {}", self.result.primary)?;
        writeln!(out, "{}: {}", physical_label, self.result.physical)?;
        writeln!(out, "Percent of Span: {}", self.result.percent_label())?;

        Ok(())
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;

        Ok(())
    }
}

/// List the signal types and standard resolutions that can be selected.
pub fn write_signals<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Signal types:")?;
    for signal in SignalType::iter() {
        let (low, high) = signal.physical_bounds();
        let unit = signal.quantity().unit();
        writeln!(out, "  {:<16} {} to {} {}", signal, low, high, unit)?;
    }

    let widths: Vec<String> = Resolution::STANDARD.iter().map(|r| r.to_string()).collect();
    writeln!(out, "Resolutions: {}", widths.join(", "))?;

    Ok(())
}
