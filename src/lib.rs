pub mod activations;
pub mod all2all;
pub mod builder;
pub mod error;
pub mod params;
pub mod registry;
pub mod spec;
pub mod unit;

pub use all2all::All2All;
pub use builder::UnitBuilder;
pub use error::{Result, UnitErr};
pub use params::{ParameterBag, Value, ValueKind};
pub use registry::{UnitFactory, UnitRegistry};
pub use spec::UnitSpec;
pub use unit::Unit;
