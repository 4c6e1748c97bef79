//! Island worldgen parameters and the terrain generation core.
#![forbid(unsafe_code)]

pub mod voxel;
pub mod worldgen;

pub use voxel::{CHUNK_AREA, CHUNK_SIZE, ChunkCoord, GenCtx, NoiseSource, SimplexSource, World};
