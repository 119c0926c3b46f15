/// Smooth rectifier: `f(x) = ln(1 + e^x)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Relu;

impl Relu {
    /// Above this input `ln(1 + e^x)` equals `x` at `f32` precision.
    const LINEAR_FROM: f32 = 15.0;

    pub fn new() -> Self {
        Self
    }

    pub fn f(&self, x: f32) -> f32 {
        if x > Self::LINEAR_FROM {
            x
        } else {
            x.exp().ln_1p()
        }
    }

    pub fn apply(&self, data: &mut [f32]) {
        for x in data.iter_mut() {
            *x = self.f(*x);
        }
    }
}
