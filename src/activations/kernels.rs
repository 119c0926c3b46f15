use bytemuck::{Pod, Zeroable};

/// Amount of `f32`s processed per vector step.
pub const LANES: usize = 8;

/// A block of `LANES` floats aligned for 256-bit vector loads and stores.
#[derive(Clone, Copy, Pod, Zeroable)]
#[repr(C, align(32))]
struct Lane([f32; LANES]);

/// A zero-initialized float buffer whose storage starts on a 32-byte boundary.
///
/// The storage is owned, so it is released whenever the buffer goes out of scope, whether
/// the surrounding computation finished or bailed out early.
pub struct AlignedScratch {
    lanes: Vec<Lane>,
    len: usize,
}

impl AlignedScratch {
    /// Allocates a new `AlignedScratch` able to hold `len` floats.
    ///
    /// # Arguments
    /// * `len` - The amount of floats to hold.
    ///
    /// # Returns
    /// A new zeroed `AlignedScratch`.
    pub fn zeroed(len: usize) -> Self {
        Self {
            lanes: vec![Lane::zeroed(); len.div_ceil(LANES)],
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[f32] {
        let floats: &[f32] = bytemuck::cast_slice(self.lanes.as_slice());
        &floats[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        let floats: &mut [f32] = bytemuck::cast_slice_mut(self.lanes.as_mut_slice());
        &mut floats[..self.len]
    }
}

/// Writes `src[i] * scalar` into `dst[i]`, `LANES` elements at a time.
///
/// # Arguments
/// * `src` - The values to scale.
/// * `scalar` - The factor.
/// * `dst` - The destination, of the same length as `src`.
pub fn multiply_scalar(src: &[f32], scalar: f32, dst: &mut [f32]) {
    debug_assert_eq!(src.len(), dst.len());

    let mut src_chunks = src.chunks_exact(LANES);
    let mut dst_chunks = dst.chunks_exact_mut(LANES);

    for (s, d) in (&mut src_chunks).zip(&mut dst_chunks) {
        for (d, s) in d.iter_mut().zip(s) {
            *d = s * scalar;
        }
    }

    for (s, d) in src_chunks
        .remainder()
        .iter()
        .zip(dst_chunks.into_remainder())
    {
        *d = s * scalar;
    }
}
