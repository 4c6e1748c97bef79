mod column;
mod height;
mod trees;

pub use column::strata_band;

use std::sync::Arc;

use voxisle_blocks::Voxel;

use crate::worldgen::WorldGenParams;

use super::{CHUNK_AREA, CHUNK_SIZE, GenCtx, NoiseSource, World};

/// Linear index of a local voxel position: x-fastest, then z, then y.
/// Buffers must be sized `CHUNK_AREA * chunk_size_y`.
#[inline]
pub fn voxel_index(x: usize, y: usize, z: usize) -> usize {
    x + CHUNK_SIZE * z + CHUNK_AREA * y
}

/// Per-chunk sampling state: the noise context plus the world dimensions the
/// height and placement code keeps reaching for.
pub struct ColumnSampler<'ctx, 'p, N: NoiseSource> {
    pub(super) ctx: &'ctx GenCtx<N>,
    pub(super) params: &'p WorldGenParams,
    pub(super) chunk_size: usize,
    pub(super) chunk_size_y: usize,
    pub(super) center_xz: f32,
    pub(super) center_y: f32,
    pub(super) seed: u32,
}

impl<'ctx, 'p, N: NoiseSource> ColumnSampler<'ctx, 'p, N> {
    pub fn new(world: &World, ctx: &'ctx GenCtx<N>, params: &'p WorldGenParams) -> Self {
        Self {
            ctx,
            params,
            chunk_size: world.chunk_size_x,
            chunk_size_y: world.chunk_size_y,
            center_xz: world.center_xz(),
            center_y: world.center_y(),
            seed: ctx.seed,
        }
    }

    /// Surface height of the column at (wx, wz). Pure in the world seed and
    /// parameters; truncates toward zero.
    pub fn surface_height(&self, wx: i32, wz: i32) -> i32 {
        height::surface_height(self, wx, wz)
    }

    /// Classify one voxel and write it into `voxels` at the local position;
    /// may additionally carve a tree into the surrounding cells.
    pub fn classify(
        &self,
        voxels: &mut [Voxel],
        x: usize,
        y: usize,
        z: usize,
        wx: i32,
        wy: i32,
        wz: i32,
        world_height: i32,
    ) {
        column::classify(self, voxels, x, y, z, wx, wy, wz, world_height);
    }
}

impl World {
    /// One-off column height query. Builds a sampler per call; reuse a
    /// [`ColumnSampler`] when iterating many columns.
    pub fn column_height<N: NoiseSource>(&self, ctx: &GenCtx<N>, wx: i32, wz: i32) -> i32 {
        let params = Arc::clone(&ctx.params);
        ColumnSampler::new(self, ctx, &params).surface_height(wx, wz)
    }
}

pub(super) const SALT_STRATA: u32 = 0x5712_00A5;
pub(super) const SALT_TREE: u32 = 0x000A_53F9;
pub(super) const SALT_LEAF_KEEP: u32 = 0x001E_AF01;
pub(super) const SALT_LEAF_THIN: u32 = 0x001E_AF02;

fn uhash32(mut a: u32) -> u32 {
    a ^= a >> 16;
    a = a.wrapping_mul(0x7feb_352d);
    a ^= a >> 15;
    a = a.wrapping_mul(0x846c_a68b);
    a ^= a >> 16;
    a
}

pub(super) fn hash3(x: i32, y: i32, z: i32, seed: u32) -> u32 {
    let mut h = seed ^ 0x9e37_79b9;
    h ^= uhash32((x as u32).wrapping_add(0x85eb_ca6b));
    h ^= uhash32((y as u32).wrapping_add(0xc2b2_ae35));
    h ^= uhash32((z as u32).wrapping_add(0x27d4_eb2f));
    uhash32(h)
}

/// Deterministic uniform scalar in [0, 1) keyed on a voxel position.
pub(super) fn rand01(seed: u32, x: i32, y: i32, z: i32, salt: u32) -> f32 {
    let h = hash3(x, y, z, seed ^ salt);
    (h & 0x00FF_FFFF) as f32 / 16_777_216.0
}
