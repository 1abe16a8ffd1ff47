//! Errors that can be encountered scaling transmitter signals.

use crate::adc::Resolution;
use thiserror::Error;
use xmtr_api::signal::SignalType;

/// Errors that can be encountered scaling transmitter signals.
///
/// The messages are the ones shown to an operator; the fields carry the
/// offending values for callers that want to report them differently.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ScaleError {
    /// Lower range value is not below the upper range value
    #[error("LRV must be less than URV")]
    Range { lrv: f64, urv: f64 },

    /// Engineering value lies outside the calibrated range
    #[error("Engineering value must be between LRV and URV")]
    Domain { value: f64, lrv: f64, urv: f64 },

    /// Raw count outside what the converter can report, or outside the fixed
    /// hardware window of the signal when `window` is set
    #[error("Raw count{} must be between {min} and {max}", window_context(.window))]
    RawCountOutOfBounds {
        raw: i64,
        min: i64,
        max: i64,
        window: Option<(SignalType, Resolution)>,
    },

    /// Caller input could not be read as a number
    #[error("Invalid {expected}: {input:?}")]
    InputFormat {
        input: String,
        expected: &'static str,
    },

    /// Converter width outside the supported bit range
    #[error("Resolution must be between 1 and 32 bits, got {bits}")]
    UnsupportedResolution { bits: u8 },
}

fn window_context(window: &Option<(SignalType, Resolution)>) -> String {
    match window {
        Some((signal, resolution)) => format!(" for {} at {}", signal, resolution),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_read_as_operator_prompts() {
        assert_eq!(
            ScaleError::Range { lrv: 10.0, urv: 5.0 }.to_string(),
            "LRV must be less than URV"
        );
        assert_eq!(
            ScaleError::Domain {
                value: 120.0,
                lrv: 0.0,
                urv: 100.0
            }
            .to_string(),
            "Engineering value must be between LRV and URV"
        );
    }

    #[test]
    fn raw_count_message_names_window() {
        let full_scale = ScaleError::RawCountOutOfBounds {
            raw: 70000,
            min: 0,
            max: 65535,
            window: None,
        };
        assert_eq!(full_scale.to_string(), "Raw count must be between 0 and 65535");

        let windowed = ScaleError::RawCountOutOfBounds {
            raw: 100,
            min: 655,
            max: 3276,
            window: Some((SignalType::Current4to20mA, Resolution::BITS_12)),
        };
        assert_eq!(
            windowed.to_string(),
            "Raw count for 4–20 mA at 12-bit must be between 655 and 3276"
        );
    }
}
