use serde::{Deserialize, Serialize};

/// The specification for a single unit.
///
/// `weights` and `bias` may be left out, in which case they get bound zero-filled to the
/// lengths `inputs` and `outputs` call for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitSpec {
    /// The name the unit's type is registered under.
    #[serde(rename = "type")]
    pub unit_type: String,
    pub inputs: usize,
    pub outputs: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<Vec<f32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bias: Option<Vec<f32>>,
}

impl UnitSpec {
    /// Creates a new `UnitSpec` without weights nor bias.
    pub fn new(unit_type: impl Into<String>, inputs: usize, outputs: usize) -> Self {
        Self {
            unit_type: unit_type.into(),
            inputs,
            outputs,
            weights: None,
            bias: None,
        }
    }

    pub fn with_weights(mut self, weights: Vec<f32>) -> Self {
        self.weights = Some(weights);
        self
    }

    pub fn with_bias(mut self, bias: Vec<f32>) -> Self {
        self.bias = Some(bias);
        self
    }

    /// Parses a `UnitSpec` from its json representation.
    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
