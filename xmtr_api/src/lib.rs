pub mod signal {
    use serde::{Deserialize, Serialize};
    use strum::{Display, EnumIter, EnumString};

    /// Physical quantity carried on a transmitter loop.
    #[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
    pub enum Quantity {
        Voltage,
        Current,
    }

    impl Quantity {
        pub fn unit(self) -> PhysicalUnit {
            match self {
                Self::Voltage => PhysicalUnit::Volt,
                Self::Current => PhysicalUnit::Milliamp,
            }
        }
    }

    #[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
    pub enum PhysicalUnit {
        #[strum(serialize = "V")]
        Volt,
        #[strum(serialize = "mA")]
        Milliamp,
    }

    /// Analog signal convention of a transmitter.
    ///
    /// Displays as the label used on instrument data sheets. Parsing accepts the
    /// label or a short key such as `4-20ma`, ignoring ASCII case.
    #[derive(
        Clone,
        Copy,
        Debug,
        Default,
        Deserialize,
        Display,
        EnumIter,
        EnumString,
        Eq,
        Hash,
        PartialEq,
        Serialize,
    )]
    #[strum(ascii_case_insensitive)]
    pub enum SignalType {
        #[default]
        #[strum(to_string = "Voltage (0–5V)", serialize = "0-5v")]
        #[serde(alias = "0-5v")]
        Voltage0to5V,
        #[strum(to_string = "Voltage (0–10V)", serialize = "0-10v")]
        #[serde(alias = "0-10v")]
        Voltage0to10V,
        #[strum(to_string = "Voltage (1–5V)", serialize = "1-5v")]
        #[serde(alias = "1-5v")]
        Voltage1to5V,
        #[strum(to_string = "4–20 mA", serialize = "4-20ma")]
        #[serde(alias = "4-20ma")]
        Current4to20mA,
        #[strum(to_string = "0–20 mA", serialize = "0-20ma")]
        #[serde(alias = "0-20ma")]
        Current0to20mA,
        #[strum(to_string = "0–25 mA", serialize = "0-25ma")]
        #[serde(alias = "0-25ma")]
        Current0to25mA,
    }

    impl SignalType {
        pub fn quantity(self) -> Quantity {
            match self {
                Self::Voltage0to5V | Self::Voltage0to10V | Self::Voltage1to5V => Quantity::Voltage,
                Self::Current4to20mA | Self::Current0to20mA | Self::Current0to25mA => {
                    Quantity::Current
                }
            }
        }

        /// Physical value at 0 % and 100 % of span, in volts or milliamps.
        pub fn physical_bounds(self) -> (f64, f64) {
            match self {
                Self::Voltage0to5V => (0.0, 5.0),
                Self::Voltage0to10V => (0.0, 10.0),
                Self::Voltage1to5V => (1.0, 5.0),
                Self::Current4to20mA => (4.0, 20.0),
                Self::Current0to20mA => (0.0, 20.0),
                Self::Current0to25mA => (0.0, 25.0),
            }
        }
    }
}

pub mod channel {
    use crate::signal::SignalType;
    use serde::{Deserialize, Serialize};

    /// Calibrated engineering-unit span of an instrument.
    #[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
    pub struct RangeSpec {
        pub lrv: f64,
        pub urv: f64,
    }

    impl RangeSpec {
        pub fn new(lrv: f64, urv: f64) -> Self {
            Self { lrv, urv }
        }

        pub fn span(&self) -> f64 {
            self.urv - self.lrv
        }
    }

    /// Everything needed to scale one transmitter channel.
    ///
    /// Fields are private and set through the `with_*` methods so a config can be
    /// built up from defaults, a file and command line overrides in turn.
    #[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
    #[serde(default, deny_unknown_fields)]
    pub struct ChannelConfig {
        lrv: f64,
        urv: f64,
        resolution: u8,
        signal: SignalType,
    }

    impl Default for ChannelConfig {
        fn default() -> Self {
            Self {
                lrv: 0.0,
                urv: 100.0,
                resolution: 16,
                signal: SignalType::default(),
            }
        }
    }

    impl ChannelConfig {
        pub fn with_lrv(mut self, lrv: f64) -> Self {
            self.lrv = lrv;
            self
        }

        pub fn with_urv(mut self, urv: f64) -> Self {
            self.urv = urv;
            self
        }

        pub fn with_range(self, range: RangeSpec) -> Self {
            self.with_lrv(range.lrv).with_urv(range.urv)
        }

        pub fn with_resolution(mut self, bits: u8) -> Self {
            self.resolution = bits;
            self
        }

        pub fn with_signal(mut self, signal: SignalType) -> Self {
            self.signal = signal;
            self
        }

        pub fn range(&self) -> RangeSpec {
            RangeSpec::new(self.lrv, self.urv)
        }

        pub fn resolution(&self) -> u8 {
            self.resolution
        }

        pub fn signal(&self) -> SignalType {
            self.signal
        }
    }
}

pub mod convert {
    use crate::signal::PhysicalUnit;
    use serde::{Deserialize, Serialize};
    use std::fmt;

    #[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
    pub enum Request {
        ToRaw { engineering: f64 },
        ToEngineering { raw: i64 },
    }

    /// Loop signal corresponding to a raw count.
    #[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
    pub struct PhysicalReading {
        pub value: f64,
        pub unit: PhysicalUnit,
    }

    impl fmt::Display for PhysicalReading {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self.unit {
                PhysicalUnit::Volt => write!(f, "{:.3} {}", self.value, self.unit),
                PhysicalUnit::Milliamp => write!(f, "{:.2} {}", self.value, self.unit),
            }
        }
    }

    /// The value a conversion was asked for.
    #[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
    pub enum Primary {
        Raw { count: i64, bits: u8 },
        Engineering { value: f64 },
    }

    impl fmt::Display for Primary {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Raw { count, bits } => write!(f, "Raw Count ({}-bit): {}", bits, count),
                Self::Engineering { value } => write!(f, "Engineering Value: {:.4}", value),
            }
        }
    }

    #[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
    pub struct ConversionResult {
        pub primary: Primary,
        pub physical: PhysicalReading,
        pub percent_of_span: f64,
    }

    impl ConversionResult {
        pub fn percent_label(&self) -> String {
            format!("{:.1}%", self.percent_of_span)
        }
    }
}
