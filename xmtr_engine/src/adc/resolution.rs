use crate::error::ScaleError;
use std::fmt;
use std::str::FromStr;

/// Bit width of an analog to digital converter.
///
/// Determines the largest count the converter can report,
/// `max_count = 2^bits - 1`. Transmitter cards commonly ship with 12, 14, 16 or
/// 24 bit converters, see [`Resolution::STANDARD`], but any width in
/// `MIN_BITS..=MAX_BITS` is accepted.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Resolution(u8);

impl Resolution {
    pub const MIN_BITS: u8 = 1;
    pub const MAX_BITS: u8 = 32;

    pub const BITS_12: Self = Self(12);
    pub const BITS_14: Self = Self(14);
    pub const BITS_16: Self = Self(16);
    pub const BITS_24: Self = Self(24);

    /// Widths offered by the usual transmitter input cards.
    pub const STANDARD: [Self; 4] = [Self::BITS_12, Self::BITS_14, Self::BITS_16, Self::BITS_24];

    /// Creates a new `Resolution`.
    ///
    /// Will return an error if `bits` is outside `MIN_BITS..=MAX_BITS`.
    pub fn new(bits: u8) -> Result<Self, ScaleError> {
        if (Self::MIN_BITS..=Self::MAX_BITS).contains(&bits) {
            Ok(Self(bits))
        } else {
            Err(ScaleError::UnsupportedResolution { bits })
        }
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    /// Largest count the converter can report.
    pub fn max_count(self) -> i64 {
        (1_i64 << self.0) - 1
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::BITS_16
    }
}

impl TryFrom<u8> for Resolution {
    type Error = ScaleError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Self::new(bits)
    }
}

impl FromStr for Resolution {
    type Err = ScaleError;

    /// Parse a bit width such as `16` or `16-bit`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_suffix("-bit").unwrap_or(trimmed);

        match digits.parse::<u8>() {
            Ok(bits) => Self::new(bits),
            Err(_) => Err(ScaleError::InputFormat {
                input: s.to_owned(),
                expected: "resolution in bits",
            }),
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.0)
    }
}
