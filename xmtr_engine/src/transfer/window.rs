use crate::adc::Resolution;
use tracing::{event, Level};
use xmtr_api::signal::SignalType;

// Counts reported at 4 mA and 20 mA by 12-bit current loop input cards
const LOOP_12BIT_ZERO: i64 = 655;
const LOOP_12BIT_FULL: i64 = 3276;

/// Range of raw counts that spans 0 % to 100 % of a signal.
///
/// Most signals use the whole converter range. 12-bit 4–20 mA inputs are the
/// exception: their hardware reports live zero and full scale at fixed counts
/// and anything outside that window is clamped back into it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CountWindow {
    /// `0..=max_count`, counts are used as given
    FullScale { max_count: i64 },
    /// `zero..=full`, counts are clamped into the window
    Fixed { zero: i64, full: i64 },
}

impl CountWindow {
    /// Window used by 12-bit 4–20 mA input cards.
    pub const LOOP_4_20MA_12BIT: Self = Self::Fixed {
        zero: LOOP_12BIT_ZERO,
        full: LOOP_12BIT_FULL,
    };

    /// Select the window for a signal read through a converter of `resolution`.
    ///
    /// This is the only place the 12-bit 4–20 mA window is chosen.
    pub fn select(signal: SignalType, resolution: Resolution) -> Self {
        match (signal, resolution) {
            (SignalType::Current4to20mA, Resolution::BITS_12) => Self::LOOP_4_20MA_12BIT,
            _ => Self::FullScale {
                max_count: resolution.max_count(),
            },
        }
    }

    /// Counts at 0 % and 100 % of span.
    pub fn bounds(&self) -> (i64, i64) {
        match *self {
            Self::FullScale { max_count } => (0, max_count),
            Self::Fixed { zero, full } => (zero, full),
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed { .. })
    }

    pub fn contains(&self, raw: i64) -> bool {
        let (low, high) = self.bounds();
        (low..=high).contains(&raw)
    }

    /// Clamp `raw` into a fixed window. Full scale windows pass counts through.
    pub fn clamp(&self, raw: i64) -> i64 {
        match *self {
            Self::FullScale { .. } => raw,
            Self::Fixed { zero, full } => {
                let clamped = raw.clamp(zero, full);
                if clamped != raw {
                    event!(
                        Level::WARN,
                        "raw count {} clamped into window {}..={}",
                        raw,
                        zero,
                        full
                    );
                }
                clamped
            }
        }
    }

    /// Position of `raw` within the window, 0.0 at the low count and 1.0 at the high count.
    pub fn fraction(&self, raw: i64) -> f64 {
        let (low, high) = self.bounds();
        (self.clamp(raw) - low) as f64 / (high - low) as f64
    }

    /// Nearest count to `fraction` of the window.
    ///
    /// Ties round half away from zero, so 50 % of a 16-bit window is 32768.
    /// Fractions outside `0.0..=1.0` extrapolate past the window, and counts beyond
    /// the `i64` range saturate at `i64::MIN`/`i64::MAX`.
    pub fn count_at(&self, fraction: f64) -> i64 {
        let (low, high) = self.bounds();
        (low as f64 + fraction * (high - low) as f64).round() as i64
    }
}
