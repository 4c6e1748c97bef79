use std::sync::{Arc, RwLock};

use crate::worldgen::WorldGenParams;

use super::noise::SimplexSource;
use super::{CHUNK_SIZE, GenCtx};

/// World sizing and generation parameters. Chunks are cubes of `CHUNK_SIZE`
/// stacked `chunks_y` high; the island falloff is centered on the middle of
/// the horizontal world extent.
pub struct World {
    pub chunk_size_x: usize,
    pub chunk_size_y: usize,
    pub chunk_size_z: usize,
    pub chunks_x: usize,
    pub chunks_y: usize,
    pub chunks_z: usize,
    pub seed: i32,
    pub gen_params: Arc<RwLock<Arc<WorldGenParams>>>,
}

impl World {
    pub fn new(chunks_x: usize, chunks_y: usize, chunks_z: usize, seed: i32) -> Self {
        Self {
            chunk_size_x: CHUNK_SIZE,
            chunk_size_y: CHUNK_SIZE,
            chunk_size_z: CHUNK_SIZE,
            chunks_x,
            chunks_y,
            chunks_z,
            seed,
            gen_params: Arc::new(RwLock::new(Arc::new(WorldGenParams::default()))),
        }
    }

    #[inline]
    pub fn world_size_x(&self) -> usize {
        self.chunk_size_x * self.chunks_x
    }

    #[inline]
    pub fn world_size_z(&self) -> usize {
        self.chunk_size_z * self.chunks_z
    }

    #[inline]
    pub fn world_height(&self) -> usize {
        self.chunk_size_y * self.chunks_y
    }

    /// Island falloff center in the XZ plane.
    #[inline]
    pub fn center_xz(&self) -> f32 {
        self.world_size_x() as f32 * 0.5
    }

    /// Half the world height; doubles as the base octave amplitude.
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.world_height() as f32 * 0.5
    }

    pub fn make_gen_ctx(&self) -> GenCtx {
        let params = {
            let guard = self.gen_params.read().unwrap();
            Arc::clone(&*guard)
        };
        GenCtx {
            noise: SimplexSource::with_seed(self.seed),
            params,
            seed: self.seed as u32,
        }
    }

    pub fn update_worldgen_params(&self, params: WorldGenParams) {
        if let Ok(mut guard) = self.gen_params.write() {
            *guard = Arc::new(params);
        }
    }
}
