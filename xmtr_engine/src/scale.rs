//! Stateless scaling operations.
//!
//! Each function takes every parameter it needs; nothing is cached between calls.

use crate::adc::Resolution;
use crate::error::ScaleError;
use crate::transfer::{CountWindow, EngineeringScale, Transfer, TransferFunction};
use crate::validate;
use tracing::{event, Level};
use xmtr_api::channel::RangeSpec;
use xmtr_api::convert::PhysicalReading;
use xmtr_api::signal::{Quantity, SignalType};

/// Convert an engineering value to the nearest raw count.
///
/// Will return an error if the range is not ordered or `value` lies outside it.
pub fn engineering_to_raw(
    value: f64,
    range: &RangeSpec,
    resolution: Resolution,
    signal: SignalType,
) -> Result<i64, ScaleError> {
    validate::check_range(range)?;
    validate::check_engineering(value, range)?;

    let scale = EngineeringScale::new(*range, CountWindow::select(signal, resolution));
    let raw = scale.to_count(value);
    event!(Level::DEBUG, "{} -> raw {} ({}, {})", value, raw, signal, resolution);

    Ok(raw)
}

/// Convert a raw count to an engineering value.
///
/// Will return an error if the range is not ordered or `raw` is not a count the
/// signal can produce.
pub fn raw_to_engineering(
    raw: i64,
    range: &RangeSpec,
    resolution: Resolution,
    signal: SignalType,
) -> Result<f64, ScaleError> {
    validate::check_range(range)?;
    validate::check_raw(raw, resolution, signal)?;

    let scale = EngineeringScale::new(*range, CountWindow::select(signal, resolution));
    let value = scale.conversion(raw);
    event!(Level::DEBUG, "raw {} -> {} ({}, {})", raw, value, signal, resolution);

    Ok(value)
}

/// Loop voltage for `raw`. Current signals give 0.0.
pub fn raw_to_voltage(raw: i64, resolution: Resolution, signal: SignalType) -> f64 {
    physical_of(raw, resolution, signal, Quantity::Voltage)
}

/// Loop current in milliamps for `raw`. Voltage signals give 0.0.
pub fn raw_to_current(raw: i64, resolution: Resolution, signal: SignalType) -> f64 {
    physical_of(raw, resolution, signal, Quantity::Current)
}

/// Loop signal for `raw` in whichever unit the signal type uses.
pub fn physical_reading(raw: i64, resolution: Resolution, signal: SignalType) -> PhysicalReading {
    TransferFunction::new(signal, resolution).conversion(raw)
}

/// Position of `value` within `range` in percent. Not clamped.
pub fn percent_of_span(value: f64, range: &RangeSpec) -> f64 {
    (value - range.lrv) / range.span() * 100.0
}

fn physical_of(raw: i64, resolution: Resolution, signal: SignalType, wanted: Quantity) -> f64 {
    let function = TransferFunction::new(signal, resolution);
    if function.quantity() == wanted {
        function.physical(raw)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn voltage_of_offset_signal() {
        let max = Resolution::BITS_12.max_count();
        assert!(close(raw_to_voltage(0, Resolution::BITS_12, SignalType::Voltage1to5V), 1.0));
        assert!(close(raw_to_voltage(max, Resolution::BITS_12, SignalType::Voltage1to5V), 5.0));
        assert!(close(raw_to_voltage(max, Resolution::BITS_12, SignalType::Voltage0to5V), 5.0));
    }

    #[test]
    fn voltage_of_current_signal_is_zero() {
        assert_eq!(raw_to_voltage(1000, Resolution::BITS_16, SignalType::Current4to20mA), 0.0);
        assert_eq!(raw_to_current(1000, Resolution::BITS_16, SignalType::Voltage0to10V), 0.0);
    }

    #[test]
    fn current_of_live_zero_signal() {
        let max = Resolution::BITS_16.max_count();
        assert!(close(raw_to_current(0, Resolution::BITS_16, SignalType::Current4to20mA), 4.0));
        assert!(close(raw_to_current(max, Resolution::BITS_16, SignalType::Current4to20mA), 20.0));
        assert!(close(raw_to_current(655, Resolution::BITS_12, SignalType::Current4to20mA), 4.0));
        assert!(close(raw_to_current(3276, Resolution::BITS_12, SignalType::Current4to20mA), 20.0));
        // Clamped into the hardware window
        assert!(close(raw_to_current(0, Resolution::BITS_12, SignalType::Current4to20mA), 4.0));
        assert!(close(raw_to_current(4095, Resolution::BITS_12, SignalType::Current4to20mA), 20.0));
    }

    #[test]
    fn current_of_zero_based_signals() {
        let max = Resolution::BITS_14.max_count();
        assert!(close(raw_to_current(max, Resolution::BITS_14, SignalType::Current0to20mA), 20.0));
        assert!(close(raw_to_current(max, Resolution::BITS_14, SignalType::Current0to25mA), 25.0));
        assert!(close(raw_to_current(0, Resolution::BITS_14, SignalType::Current0to25mA), 0.0));
    }

    #[test]
    fn percent_is_unclamped() {
        let range = RangeSpec::new(0.0, 200.0);
        assert_eq!(percent_of_span(0.0, &range), 0.0);
        assert_eq!(percent_of_span(200.0, &range), 100.0);
        assert!(close(percent_of_span(300.0, &range), 150.0));
        assert!(close(percent_of_span(-20.0, &range), -10.0));
    }

    #[test]
    fn engineering_to_raw_rejects_bad_input() {
        assert_eq!(
            engineering_to_raw(7.0, &RangeSpec::new(10.0, 5.0), Resolution::BITS_16, SignalType::Voltage0to5V),
            Err(ScaleError::Range { lrv: 10.0, urv: 5.0 })
        );
        assert!(matches!(
            engineering_to_raw(101.0, &RangeSpec::new(0.0, 100.0), Resolution::BITS_16, SignalType::Voltage0to5V),
            Err(ScaleError::Domain { .. })
        ));
    }

    #[test]
    fn raw_to_engineering_rejects_bad_input() {
        let range = RangeSpec::new(0.0, 100.0);
        assert_eq!(
            raw_to_engineering(10, &RangeSpec::new(10.0, 5.0), Resolution::BITS_16, SignalType::Voltage0to5V),
            Err(ScaleError::Range { lrv: 10.0, urv: 5.0 })
        );
        assert!(matches!(
            raw_to_engineering(-1, &range, Resolution::BITS_16, SignalType::Voltage0to5V),
            Err(ScaleError::RawCountOutOfBounds { .. })
        ));
        assert!(matches!(
            raw_to_engineering(100, &range, Resolution::BITS_12, SignalType::Current4to20mA),
            Err(ScaleError::RawCountOutOfBounds { min: 655, max: 3276, .. })
        ));
    }

    #[test]
    fn physical_reading_routes_by_signal() {
        let reading = physical_reading(32768, Resolution::BITS_16, SignalType::Voltage0to10V);
        assert_eq!(reading.to_string(), "5.000 V");
        let reading = physical_reading(1966, Resolution::BITS_12, SignalType::Current4to20mA);
        assert_eq!(reading.to_string(), "12.00 mA");
    }
}
