mod engineering;
mod function;
mod window;

pub use engineering::EngineeringScale;
pub use function::TransferFunction;
pub use window::CountWindow;

/// Maps a raw converter count onto an output quantity.
pub trait Transfer {
    type Output;

    fn conversion(&self, raw: i64) -> Self::Output;
}
