//! Checks applied to caller input before it is scaled.

use crate::adc::Resolution;
use crate::error::ScaleError;
use crate::transfer::CountWindow;
use xmtr_api::channel::RangeSpec;
use xmtr_api::signal::SignalType;

/// Require finite bounds with `lrv < urv` and a finite span.
pub fn check_range(range: &RangeSpec) -> Result<(), ScaleError> {
    if range.lrv < range.urv && range.span().is_finite() {
        Ok(())
    } else {
        Err(ScaleError::Range {
            lrv: range.lrv,
            urv: range.urv,
        })
    }
}

/// Require `lrv <= value <= urv`.
pub fn check_engineering(value: f64, range: &RangeSpec) -> Result<(), ScaleError> {
    if (range.lrv..=range.urv).contains(&value) {
        Ok(())
    } else {
        Err(ScaleError::Domain {
            value,
            lrv: range.lrv,
            urv: range.urv,
        })
    }
}

/// Require `raw` to be a count the converter can report and, for signals with a
/// fixed hardware window, a count inside that window.
pub fn check_raw(raw: i64, resolution: Resolution, signal: SignalType) -> Result<(), ScaleError> {
    let max = resolution.max_count();
    if !(0..=max).contains(&raw) {
        return Err(ScaleError::RawCountOutOfBounds {
            raw,
            min: 0,
            max,
            window: None,
        });
    }

    let window = CountWindow::select(signal, resolution);
    if window.is_fixed() && !window.contains(raw) {
        let (min, max) = window.bounds();
        return Err(ScaleError::RawCountOutOfBounds {
            raw,
            min,
            max,
            window: Some((signal, resolution)),
        });
    }

    Ok(())
}

/// Parse an engineering value typed by an operator.
pub fn parse_engineering(input: &str) -> Result<f64, ScaleError> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ScaleError::InputFormat {
            input: input.to_owned(),
            expected: "engineering value",
        }),
    }
}

/// Parse a raw count typed by an operator, in decimal or `0x` hexadecimal.
pub fn parse_raw_count(input: &str) -> Result<i64, ScaleError> {
    let trimmed = input.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => i64::from_str_radix(hex, 16),
        None => trimmed.parse::<i64>(),
    };

    parsed.map_err(|_| ScaleError::InputFormat {
        input: input.to_owned(),
        expected: "raw count",
    })
}
