use log::trace;
use ndarray::{ArrayView1, ArrayView2, ArrayViewMut1, Zip};

use crate::{
    Result, UnitErr,
    activations::Activation,
    params::{ParameterBag, Value},
    unit::Unit,
};

/// Layers with at least this many weights spread their output columns over the rayon pool.
const PAR_THRESHOLD: usize = 1 << 14;

/// The bound parameters of an `All2All`, already checked against each other.
struct Shape<'a> {
    inputs: usize,
    outputs: usize,
    weights: &'a [f32],
    bias: &'a [f32],
}

/// A fully connected layer: `y = f(W·x + b)`.
///
/// `weights` is laid out row-major with one row per input and one column per output.
#[derive(Debug, Clone)]
pub struct All2All {
    name: &'static str,
    activation: Activation,
    params: ParameterBag,
}

impl All2All {
    pub const WEIGHTS: &'static str = "weights";
    pub const BIAS: &'static str = "bias";
    pub const INPUTS: &'static str = "inputs";
    pub const OUTPUTS: &'static str = "outputs";

    /// Creates a new `All2All` with no parameters bound.
    ///
    /// # Arguments
    /// * `name` - The name the layer is registered under.
    /// * `activation` - The activation applied after the projection.
    pub fn new(name: &'static str, activation: Activation) -> Self {
        Self {
            name,
            activation,
            params: ParameterBag::new(),
        }
    }

    pub fn linear() -> Self {
        Self::new("all2all", Activation::identity())
    }

    pub fn tanh() -> Self {
        Self::new("all2all_tanh", Activation::scaled_tanh())
    }

    pub fn relu() -> Self {
        Self::new("all2all_relu", Activation::relu())
    }

    pub fn sigmoid() -> Self {
        Self::new("all2all_sigmoid", Activation::sigmoid())
    }

    pub fn softmax() -> Self {
        Self::new("all2all_softmax", Activation::softmax())
    }

    /// Reads the bound parameters and checks them against each other and the input.
    ///
    /// # Arguments
    /// * `input_len` - The length of the input about to be projected.
    ///
    /// # Returns
    /// The layer's shape or the first missing, mistyped or inconsistent parameter.
    fn shape(&self, input_len: usize) -> Result<Shape<'_>> {
        let inputs = *self.params.get::<usize>(Self::INPUTS)?;
        let outputs = *self.params.get::<usize>(Self::OUTPUTS)?;
        let weights = self.params.get::<[f32]>(Self::WEIGHTS)?;
        let bias = self.params.get::<[f32]>(Self::BIAS)?;

        let expected = inputs.checked_mul(outputs).unwrap_or(usize::MAX);
        if weights.len() != expected {
            return Err(UnitErr::DimensionMismatch {
                what: Self::WEIGHTS,
                got: weights.len(),
                expected,
            });
        }

        if bias.len() != outputs {
            return Err(UnitErr::DimensionMismatch {
                what: Self::BIAS,
                got: bias.len(),
                expected: outputs,
            });
        }

        if input_len != inputs {
            return Err(UnitErr::DimensionMismatch {
                what: "input",
                got: input_len,
                expected: inputs,
            });
        }

        Ok(Shape {
            inputs,
            outputs,
            weights,
            bias,
        })
    }

    /// Projects and activates `input` into `output`, which must be `shape.outputs` long.
    fn forward(&self, shape: &Shape<'_>, input: &[f32], output: &mut [f32]) -> Result<()> {
        trace!(
            unit = self.name,
            activation = self.activation.name(),
            inputs = shape.inputs,
            outputs = shape.outputs;
            "executing"
        );

        let parallel = shape.weights.len() >= PAR_THRESHOLD;
        project(shape, input, output, parallel)?;
        self.activation.apply(output);
        Ok(())
    }
}

/// Writes `W·x + b` into `output`.
///
/// Every output is reduced on its own, in input order, so splitting the outputs across
/// threads does not change a single bit of the result.
fn project(shape: &Shape<'_>, input: &[f32], output: &mut [f32], parallel: bool) -> Result<()> {
    let w = ArrayView2::from_shape((shape.inputs, shape.outputs), shape.weights).map_err(|_| {
        UnitErr::DimensionMismatch {
            what: All2All::WEIGHTS,
            got: shape.weights.len(),
            expected: shape.inputs * shape.outputs,
        }
    })?;
    let x = ArrayView1::from(input);
    let bias = ArrayView1::from(shape.bias);
    let mut out = ArrayViewMut1::from(output);

    let zip = Zip::from(&mut out).and(w.columns()).and(&bias);
    if parallel {
        zip.par_for_each(|y, w_col, &b| *y = w_col.dot(&x) + b);
    } else {
        zip.for_each(|y, w_col, &b| *y = w_col.dot(&x) + b);
    }

    Ok(())
}

impl Unit for All2All {
    fn name(&self) -> &'static str {
        self.name
    }

    fn parameters(&self) -> &ParameterBag {
        &self.params
    }

    fn set_parameter(&mut self, name: &str, value: Value) -> Result<()> {
        self.params.set(name, value)
    }

    fn execute(&self, input: &[f32]) -> Result<Vec<f32>> {
        let shape = self.shape(input.len())?;
        let mut output = vec![0.0_f32; shape.outputs];

        self.forward(&shape, input, &mut output)?;
        Ok(output)
    }

    fn execute_into(&self, input: &[f32], output: &mut [f32]) -> Result<()> {
        let shape = self.shape(input.len())?;

        if output.len() != shape.outputs {
            return Err(UnitErr::DimensionMismatch {
                what: "output",
                got: output.len(),
                expected: shape.outputs,
            });
        }

        self.forward(&shape, input, output)
    }
}
