use std::sync::Arc;

use crate::worldgen::WorldGenParams;

use super::noise::{NoiseSource, SimplexSource};

/// Reusable per-chunk generation context: one noise source plus a parameter
/// snapshot. Build once via [`super::World::make_gen_ctx`] and reuse across a
/// whole chunk rather than per voxel.
pub struct GenCtx<N: NoiseSource = SimplexSource> {
    pub noise: N,
    pub params: Arc<WorldGenParams>,
    pub seed: u32,
}

impl<N: NoiseSource> GenCtx<N> {
    pub fn with_noise(noise: N, params: Arc<WorldGenParams>, seed: u32) -> Self {
        Self {
            noise,
            params,
            seed,
        }
    }
}
