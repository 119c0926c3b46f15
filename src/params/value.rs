use std::fmt;

/// The kind of a bound parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Floats,
    Count,
    Scalar,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ValueKind::Floats => "float buffer",
            ValueKind::Count => "count",
            ValueKind::Scalar => "scalar",
        };

        write!(f, "{s}")
    }
}

/// A type-erased parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Floats(Vec<f32>),
    Count(usize),
    Scalar(f32),
}

impl Value {
    /// Returns the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Floats(_) => ValueKind::Floats,
            Value::Count(_) => ValueKind::Count,
            Value::Scalar(_) => ValueKind::Scalar,
        }
    }
}

impl From<Vec<f32>> for Value {
    fn from(value: Vec<f32>) -> Self {
        Value::Floats(value)
    }
}

impl From<&[f32]> for Value {
    fn from(value: &[f32]) -> Self {
        Value::Floats(value.to_vec())
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::Count(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Scalar(value)
    }
}

/// Types that can be borrowed out of a `Value` of a matching kind.
pub trait Extract {
    /// The kind a `Value` must have for the extraction to succeed.
    const KIND: ValueKind;

    /// Borrows `Self` from `value`, `None` if the kinds differ.
    fn extract(value: &Value) -> Option<&Self>;
}

impl Extract for [f32] {
    const KIND: ValueKind = ValueKind::Floats;

    fn extract(value: &Value) -> Option<&Self> {
        match value {
            Value::Floats(v) => Some(v.as_slice()),
            _ => None,
        }
    }
}

impl Extract for usize {
    const KIND: ValueKind = ValueKind::Count;

    fn extract(value: &Value) -> Option<&Self> {
        match value {
            Value::Count(n) => Some(n),
            _ => None,
        }
    }
}

impl Extract for f32 {
    const KIND: ValueKind = ValueKind::Scalar;

    fn extract(value: &Value) -> Option<&Self> {
        match value {
            Value::Scalar(x) => Some(x),
            _ => None,
        }
    }
}
