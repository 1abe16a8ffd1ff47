//! Scaling engine for industrial transmitter signals.
//!
//! Converts between engineering-unit values and raw converter counts for voltage
//! and current loop transmitters, and derives the loop signal and percent of span
//! that correspond to a count. Every operation is a pure function of its
//! arguments; invalid input is reported as a [`ScaleError`].
//!
//! ```
//! use xmtr_api::channel::RangeSpec;
//! use xmtr_api::signal::SignalType;
//! use xmtr_engine::{engineering_to_raw, Resolution};
//!
//! let range = RangeSpec::new(0.0, 100.0);
//! let raw = engineering_to_raw(50.0, &range, Resolution::BITS_16, SignalType::Voltage0to10V);
//! assert_eq!(raw, Ok(32768));
//! ```

pub mod adc;
pub mod channel;
pub mod error;
pub mod scale;
pub mod transfer;
pub mod validate;

pub use adc::Resolution;
pub use channel::Channel;
pub use error::ScaleError;
pub use scale::{
    engineering_to_raw, percent_of_span, physical_reading, raw_to_current, raw_to_engineering,
    raw_to_voltage,
};
pub use transfer::{CountWindow, EngineeringScale, Transfer, TransferFunction};
