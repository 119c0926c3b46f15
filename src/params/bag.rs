use std::collections::HashMap;

use super::{Extract, Value, ValueKind};
use crate::{Result, UnitErr};

/// A named store of type-erased parameter values.
///
/// The first binding of a name fixes its kind: later bindings may replace the value but
/// not change what kind of value it is.
#[derive(Debug, Clone, Default)]
pub struct ParameterBag {
    values: HashMap<String, Value>,
}

impl ParameterBag {
    /// Creates a new, empty `ParameterBag`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `value` to `name`, overwriting any previous value of the same kind.
    ///
    /// # Arguments
    /// * `name` - The parameter's name.
    /// * `value` - The value to bind.
    ///
    /// # Returns
    /// An error if `name` is already bound to a value of a different kind.
    pub fn set(&mut self, name: &str, value: Value) -> Result<()> {
        if let Some(prev) = self.values.get_mut(name) {
            if prev.kind() != value.kind() {
                return Err(UnitErr::ParameterTypeMismatch {
                    name: name.to_string(),
                    expected: prev.kind(),
                    got: value.kind(),
                });
            }

            *prev = value;
            return Ok(());
        }

        self.values.insert(name.to_string(), value);
        Ok(())
    }

    /// Borrows the value bound to `name` as a `T`.
    ///
    /// # Arguments
    /// * `name` - The parameter's name.
    ///
    /// # Returns
    /// The bound value, `MissingParameter` if unbound or `ParameterTypeMismatch` if it
    /// is not of `T`'s kind.
    pub fn get<T: Extract + ?Sized>(&self, name: &str) -> Result<&T> {
        let value = self
            .values
            .get(name)
            .ok_or_else(|| UnitErr::MissingParameter {
                name: name.to_string(),
            })?;

        T::extract(value).ok_or_else(|| UnitErr::ParameterTypeMismatch {
            name: name.to_string(),
            expected: T::KIND,
            got: value.kind(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns the kind of the value bound to `name`, if any.
    pub fn kind_of(&self, name: &str) -> Option<ValueKind> {
        self.values.get(name).map(Value::kind)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
