mod layer;

pub use layer::All2All;
