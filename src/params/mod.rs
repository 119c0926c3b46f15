mod bag;
mod value;

pub use bag::ParameterBag;
pub use value::{Extract, Value, ValueKind};
