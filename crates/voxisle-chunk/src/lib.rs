//! Chunk buffer and population loop.
#![forbid(unsafe_code)]

use std::sync::Arc;
use std::time::Instant;

use voxisle_blocks::Voxel;
use voxisle_world::voxel::generation::ColumnSampler;
use voxisle_world::{ChunkCoord, GenCtx, NoiseSource, World};

#[derive(Clone, Debug)]
pub struct ChunkBuf {
    pub coord: ChunkCoord,
    pub sx: usize,
    pub sy: usize,
    pub sz: usize,
    pub voxels: Vec<Voxel>,
}

impl ChunkBuf {
    /// Linear index: x-fastest, then z, then y.
    #[inline]
    pub fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        x + self.sx * z + self.sx * self.sz * y
    }

    #[inline]
    pub fn get_local(&self, x: usize, y: usize, z: usize) -> Voxel {
        self.voxels[self.idx(x, y, z)]
    }

    #[inline]
    pub fn contains_world(&self, wx: i32, wy: i32, wz: i32) -> bool {
        let base_x = self.coord.cx * self.sx as i32;
        let base_y = self.coord.cy * self.sy as i32;
        let base_z = self.coord.cz * self.sz as i32;
        if wy < base_y || wy >= base_y + self.sy as i32 {
            return false;
        }
        wx >= base_x && wx < base_x + self.sx as i32 && wz >= base_z && wz < base_z + self.sz as i32
    }

    #[inline]
    pub fn get_world(&self, wx: i32, wy: i32, wz: i32) -> Option<Voxel> {
        if !self.contains_world(wx, wy, wz) {
            return None;
        }
        let base_x = self.coord.cx * self.sx as i32;
        let base_y = self.coord.cy * self.sy as i32;
        let base_z = self.coord.cz * self.sz as i32;
        let lx = (wx - base_x) as usize;
        let ly = (wy - base_y) as usize;
        let lz = (wz - base_z) as usize;
        Some(self.get_local(lx, ly, lz))
    }

    pub fn from_voxels_local(
        coord: ChunkCoord,
        sx: usize,
        sy: usize,
        sz: usize,
        voxels: Vec<Voxel>,
    ) -> Self {
        let mut v = voxels;
        let expect = sx * sy * sz;
        if v.len() != expect {
            v.resize(expect, Voxel::AIR);
        }
        ChunkBuf {
            coord,
            sx,
            sy,
            sz,
            voxels: v,
        }
    }

    #[inline]
    pub fn has_non_air(&self) -> bool {
        self.voxels.iter().any(|v| *v != Voxel::AIR)
    }

    #[inline]
    pub fn is_all_air(&self) -> bool {
        !self.has_non_air()
    }

    #[inline]
    pub fn non_air_count(&self) -> usize {
        self.voxels.iter().filter(|v| !v.is_air()).count()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChunkOccupancy {
    Empty,
    Populated,
}

impl ChunkOccupancy {
    #[inline]
    pub fn is_empty(self) -> bool {
        matches!(self, ChunkOccupancy::Empty)
    }

    #[inline]
    pub fn has_blocks(self) -> bool {
        matches!(self, ChunkOccupancy::Populated)
    }
}

#[derive(Clone, Debug)]
pub struct ChunkGenerateResult {
    pub buf: ChunkBuf,
    pub occupancy: ChunkOccupancy,
}

/// Populate one chunk. Each column consults the height field once, then
/// classifies only the voxels at or below the surface; everything above stays
/// air by construction.
pub fn generate_chunk_buffer<N: NoiseSource>(
    world: &World,
    ctx: &GenCtx<N>,
    coord: ChunkCoord,
) -> ChunkGenerateResult {
    let sx = world.chunk_size_x;
    let sy = world.chunk_size_y;
    let sz = world.chunk_size_z;
    let mut voxels = vec![Voxel::AIR; sx * sy * sz];
    let base_x = coord.cx * sx as i32;
    let base_y = coord.cy * sy as i32;
    let base_z = coord.cz * sz as i32;
    let params = Arc::clone(&ctx.params);
    let sampler = ColumnSampler::new(world, ctx, &params);
    let t0 = Instant::now();
    for z in 0..sz {
        for x in 0..sx {
            let wx = base_x + x as i32;
            let wz = base_z + z as i32;
            let world_height = sampler.surface_height(wx, wz);
            let local_height = (world_height - base_y).clamp(0, sy as i32) as usize;
            for y in 0..local_height {
                let wy = base_y + y as i32;
                sampler.classify(&mut voxels, x, y, z, wx, wy, wz, world_height);
            }
        }
    }
    let has_blocks = voxels.iter().any(|v| !v.is_air());
    log::debug!(
        "generated chunk ({}, {}, {}) in {:.2}ms",
        coord.cx,
        coord.cy,
        coord.cz,
        t0.elapsed().as_secs_f64() * 1000.0
    );
    ChunkGenerateResult {
        buf: ChunkBuf {
            coord,
            sx,
            sy,
            sz,
            voxels,
        },
        occupancy: if has_blocks {
            ChunkOccupancy::Populated
        } else {
            ChunkOccupancy::Empty
        },
    }
}
