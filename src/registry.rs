use std::collections::HashMap;

use log::{debug, warn};

use crate::{Result, UnitErr, all2all::All2All, unit::Unit};

/// Builds a new, unconfigured unit.
pub type UnitFactory = fn() -> Box<dyn Unit>;

fn all2all() -> Box<dyn Unit> {
    Box::new(All2All::linear())
}

fn all2all_tanh() -> Box<dyn Unit> {
    Box::new(All2All::tanh())
}

fn all2all_relu() -> Box<dyn Unit> {
    Box::new(All2All::relu())
}

fn all2all_sigmoid() -> Box<dyn Unit> {
    Box::new(All2All::sigmoid())
}

fn all2all_softmax() -> Box<dyn Unit> {
    Box::new(All2All::softmax())
}

const DEFAULT_UNITS: [(&str, UnitFactory); 5] = [
    ("all2all", all2all),
    ("all2all_tanh", all2all_tanh),
    ("all2all_relu", all2all_relu),
    ("all2all_sigmoid", all2all_sigmoid),
    ("all2all_softmax", all2all_softmax),
];

/// Maps unit type names to the factories that build them.
///
/// The registry is meant to be filled once at startup and then shared by reference, lookups
/// only need `&self`.
#[derive(Debug, Clone, Default)]
pub struct UnitRegistry {
    factories: HashMap<String, UnitFactory>,
}

impl UnitRegistry {
    /// Creates a new, empty `UnitRegistry`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `UnitRegistry` holding every unit this crate provides.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        for (name, factory) in DEFAULT_UNITS {
            registry.replace(name, factory);
        }

        registry
    }

    /// Registers `factory` under `name`.
    ///
    /// # Arguments
    /// * `name` - The unit type's name.
    /// * `factory` - Builds a new unit of this type.
    ///
    /// # Returns
    /// `DuplicateRegistration` if `name` is already taken, use `replace` to overwrite it.
    pub fn register(&mut self, name: &str, factory: UnitFactory) -> Result<()> {
        if self.factories.contains_key(name) {
            warn!(unit = name; "rejected duplicate registration");
            return Err(UnitErr::DuplicateRegistration {
                name: name.to_string(),
            });
        }

        self.factories.insert(name.to_string(), factory);
        debug!(unit = name; "registered unit");
        Ok(())
    }

    /// Registers `factory` under `name`, overwriting any previous registration.
    ///
    /// # Returns
    /// Whether a previous registration was replaced.
    pub fn replace(&mut self, name: &str, factory: UnitFactory) -> bool {
        let replaced = self
            .factories
            .insert(name.to_string(), factory)
            .is_some();

        debug!(unit = name, replaced = replaced; "registered unit");
        replaced
    }

    /// Builds a new unit of the type registered as `name`.
    ///
    /// # Arguments
    /// * `name` - The unit type's name.
    ///
    /// # Returns
    /// The new unit or `UnknownUnitType` if nothing was registered under `name`.
    pub fn create(&self, name: &str) -> Result<Box<dyn Unit>> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| UnitErr::UnknownUnitType {
                name: name.to_string(),
            })?;

        debug!(unit = name; "creating unit");
        Ok(factory())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Returns the registered names in lexicographic order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}
