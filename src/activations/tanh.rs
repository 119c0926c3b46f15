use super::kernels::{AlignedScratch, multiply_scalar};

/// Scaled hyperbolic tangent: `f(x) = SCALE_Y * tanh(SCALE_X * x)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScaledTanh;

impl ScaledTanh {
    /// Applied to the input before the nonlinearity.
    pub const SCALE_X: f32 = 0.6666;
    /// Applied to the nonlinearity's output.
    pub const SCALE_Y: f32 = 1.7159;

    pub fn new() -> Self {
        Self
    }

    /// Scalar form of the activation.
    pub fn f(&self, x: f32) -> f32 {
        (x * Self::SCALE_X).tanh() * Self::SCALE_Y
    }

    /// Applies the activation to every element of `data` in place.
    pub fn apply(&self, data: &mut [f32]) {
        let mut scratch = AlignedScratch::zeroed(data.len());
        let tmp = scratch.as_mut_slice();

        multiply_scalar(data, Self::SCALE_X, tmp);
        for x in tmp.iter_mut() {
            *x = x.tanh();
        }
        multiply_scalar(tmp, Self::SCALE_Y, data);
    }
}
