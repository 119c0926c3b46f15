use super::{Relu, ScaledTanh, Sigmoid, Softmax};

/// The activation step applied to a projection's output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Activation {
    /// `f(x) = x`.
    #[default]
    Identity,
    ScaledTanh(ScaledTanh),
    Relu(Relu),
    Sigmoid(Sigmoid),
    Softmax(Softmax),
}

impl Activation {
    pub fn identity() -> Self {
        Self::Identity
    }

    pub fn scaled_tanh() -> Self {
        Self::ScaledTanh(ScaledTanh::new())
    }

    pub fn relu() -> Self {
        Self::Relu(Relu::new())
    }

    pub fn sigmoid() -> Self {
        Self::Sigmoid(Sigmoid::new())
    }

    pub fn softmax() -> Self {
        Self::Softmax(Softmax::new())
    }

    /// A short name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::ScaledTanh(_) => "scaled_tanh",
            Self::Relu(_) => "relu",
            Self::Sigmoid(_) => "sigmoid",
            Self::Softmax(_) => "softmax",
        }
    }

    /// Applies the activation to `data` in place.
    ///
    /// # Arguments
    /// * `data` - The buffer to transform.
    pub fn apply(&self, data: &mut [f32]) {
        if data.is_empty() {
            return;
        }

        match self {
            Self::Identity => {}
            Self::ScaledTanh(a) => a.apply(data),
            Self::Relu(a) => a.apply(data),
            Self::Sigmoid(a) => a.apply(data),
            Self::Softmax(a) => a.apply(data),
        }
    }
}
