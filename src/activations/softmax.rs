/// Normalized exponential over the whole buffer.
///
/// Unlike the other activations this one is not element-wise: every output depends on the
/// maximum and the sum of the entire buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Softmax;

impl Softmax {
    pub fn new() -> Self {
        Self
    }

    pub fn apply(&self, data: &mut [f32]) {
        let max = data.iter().copied().fold(f32::NEG_INFINITY, f32::max);

        let mut sum = 0.0;
        for x in data.iter_mut() {
            *x = (*x - max).exp();
            sum += *x;
        }

        for x in data.iter_mut() {
            *x /= sum;
        }
    }
}
