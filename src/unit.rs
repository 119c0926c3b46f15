use std::fmt::Debug;

use crate::{
    Result,
    params::{ParameterBag, Value},
};

/// A single configurable computation node.
///
/// Parameters are bound one at a time, in any order, and only checked for consistency when
/// the unit is executed.
pub trait Unit: Debug + Send + Sync {
    /// The name the unit's type is registered under.
    fn name(&self) -> &'static str;

    /// The parameters currently bound to this unit.
    fn parameters(&self) -> &ParameterBag;

    /// Binds `value` to the parameter `name`.
    ///
    /// # Arguments
    /// * `name` - The parameter's name.
    /// * `value` - The value to bind.
    ///
    /// # Returns
    /// An error if `name` already holds a value of another kind.
    fn set_parameter(&mut self, name: &str, value: Value) -> Result<()>;

    /// Computes the unit's output for `input`.
    ///
    /// # Arguments
    /// * `input` - The input buffer.
    ///
    /// # Returns
    /// A newly allocated output buffer or an error if the parameters or the input are not
    /// consistent.
    fn execute(&self, input: &[f32]) -> Result<Vec<f32>>;

    /// Computes the unit's output for `input` into `output`.
    ///
    /// `output` is left untouched if an error is returned.
    ///
    /// # Arguments
    /// * `input` - The input buffer.
    /// * `output` - The caller's output buffer.
    fn execute_into(&self, input: &[f32], output: &mut [f32]) -> Result<()>;
}
