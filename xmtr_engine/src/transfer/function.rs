use super::{CountWindow, Transfer};
use crate::adc::Resolution;
use xmtr_api::convert::PhysicalReading;
use xmtr_api::signal::{Quantity, SignalType};

/// Raw count to loop signal mapping of one signal type on one converter.
///
/// `physical = offset + fraction(raw) * span`, where the fraction is taken over
/// the signal's [`CountWindow`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransferFunction {
    signal: SignalType,
    window: CountWindow,
    offset: f64,
    span: f64,
}

impl TransferFunction {
    pub fn new(signal: SignalType, resolution: Resolution) -> Self {
        let (low, high) = signal.physical_bounds();

        Self {
            signal,
            window: CountWindow::select(signal, resolution),
            offset: low,
            span: high - low,
        }
    }

    pub fn signal(&self) -> SignalType {
        self.signal
    }

    pub fn window(&self) -> CountWindow {
        self.window
    }

    pub fn quantity(&self) -> Quantity {
        self.signal.quantity()
    }

    /// Loop signal in volts or milliamps for `raw`.
    pub fn physical(&self, raw: i64) -> f64 {
        self.offset + self.window.fraction(raw) * self.span
    }
}

impl Transfer for TransferFunction {
    type Output = PhysicalReading;

    fn conversion(&self, raw: i64) -> PhysicalReading {
        PhysicalReading {
            value: self.physical(raw),
            unit: self.quantity().unit(),
        }
    }
}
