use super::{CountWindow, Transfer};
use xmtr_api::channel::RangeSpec;

/// Linear mapping between an engineering range and a count window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineeringScale {
    range: RangeSpec,
    window: CountWindow,
}

impl EngineeringScale {
    pub fn new(range: RangeSpec, window: CountWindow) -> Self {
        Self { range, window }
    }

    pub fn range(&self) -> RangeSpec {
        self.range
    }

    /// Nearest count to `value`. The value is not checked against the range, see
    /// [`CountWindow::count_at`] for values outside it.
    pub fn to_count(&self, value: f64) -> i64 {
        let fraction = (value - self.range.lrv) / self.range.span();
        self.window.count_at(fraction)
    }
}

impl Transfer for EngineeringScale {
    type Output = f64;

    fn conversion(&self, raw: i64) -> f64 {
        self.window.fraction(raw) * self.range.span() + self.range.lrv
    }
}
