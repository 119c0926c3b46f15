use log::debug;

use crate::{
    Result, UnitErr, all2all::All2All, registry::UnitRegistry, spec::UnitSpec, unit::Unit,
};

/// Allocates `len` zeros for the parameter `what`.
///
/// # Returns
/// The zeroed buffer or `DimensionMismatch` if `len` overflowed or cannot be allocated.
fn zeroed(what: &'static str, len: Option<usize>) -> Result<Vec<f32>> {
    let mut buf = Vec::new();
    let len = len
        .filter(|&n| buf.try_reserve_exact(n).is_ok())
        .ok_or(UnitErr::DimensionMismatch {
            what,
            got: 0,
            expected: len.unwrap_or(usize::MAX),
        })?;

    buf.resize(len, 0.0);
    Ok(buf)
}

/// Builds configured units from `UnitSpec`s.
pub struct UnitBuilder<'r> {
    registry: &'r UnitRegistry,
}

impl<'r> UnitBuilder<'r> {
    /// Creates a new `UnitBuilder`.
    ///
    /// # Arguments
    /// * `registry` - Where unit types are looked up.
    pub fn new(registry: &'r UnitRegistry) -> Self {
        Self { registry }
    }

    /// Builds a new unit following a spec.
    ///
    /// Missing weights and bias are bound as zeros. Given lengths are not checked here, a spec
    /// whose weights or bias disagree with its shape builds fine and fails on `execute`.
    ///
    /// # Arguments
    /// * `spec` - The specification for the unit.
    ///
    /// # Returns
    /// The configured unit, `UnknownUnitType` if its type is not registered or
    /// `DimensionMismatch` if a missing weights or bias is too large to zero-fill.
    pub fn build(&self, spec: &UnitSpec) -> Result<Box<dyn Unit>> {
        let mut unit = self.registry.create(&spec.unit_type)?;

        let weights = match &spec.weights {
            Some(weights) => weights.clone(),
            None => zeroed(All2All::WEIGHTS, spec.inputs.checked_mul(spec.outputs))?,
        };
        let bias = match &spec.bias {
            Some(bias) => bias.clone(),
            None => zeroed(All2All::BIAS, Some(spec.outputs))?,
        };

        unit.set_parameter(All2All::INPUTS, spec.inputs.into())?;
        unit.set_parameter(All2All::OUTPUTS, spec.outputs.into())?;
        unit.set_parameter(All2All::WEIGHTS, weights.into())?;
        unit.set_parameter(All2All::BIAS, bias.into())?;

        debug!(
            unit = unit.name(),
            inputs = spec.inputs,
            outputs = spec.outputs;
            "built unit"
        );

        Ok(unit)
    }
}
