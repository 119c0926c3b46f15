#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sigmoid;

impl Sigmoid {
    pub fn new() -> Self {
        Self
    }

    pub fn f(&self, z: f32) -> f32 {
        1. / (1. + (-z).exp())
    }

    pub fn apply(&self, data: &mut [f32]) {
        for z in data.iter_mut() {
            *z = self.f(*z);
        }
    }
}
