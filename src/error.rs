use std::{
    error::Error,
    fmt::{self, Display},
};

use crate::params::ValueKind;

/// The result type used in the entire units crate.
pub type Result<T> = std::result::Result<T, UnitErr>;

/// The units crate's error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitErr {
    /// No factory was registered under the requested name.
    UnknownUnitType { name: String },
    /// A factory was already registered under this name.
    DuplicateRegistration { name: String },
    /// A parameter required by `execute` was never bound.
    MissingParameter { name: String },
    /// The bound value is of a different kind than the one requested.
    ParameterTypeMismatch {
        name: String,
        expected: ValueKind,
        got: ValueKind,
    },
    /// A shape invariant was violated (e.g. mismatched lengths).
    DimensionMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
}

impl Display for UnitErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitErr::UnknownUnitType { name } => write!(f, "unknown unit type \"{name}\""),
            UnitErr::DuplicateRegistration { name } => {
                write!(f, "a unit factory is already registered as \"{name}\"")
            }
            UnitErr::MissingParameter { name } => write!(f, "parameter \"{name}\" is not set"),
            UnitErr::ParameterTypeMismatch {
                name,
                expected,
                got,
            } => write!(
                f,
                "parameter \"{name}\" holds a {got} value, expected a {expected} value"
            ),
            UnitErr::DimensionMismatch {
                what,
                got,
                expected,
            } => write!(f, "dimension mismatch for {what}: got {got}, expected {expected}"),
        }
    }
}

impl Error for UnitErr {}
