pub const CHUNK_SIZE: usize = 48;
pub const CHUNK_AREA: usize = CHUNK_SIZE * CHUNK_SIZE;

mod chunk_coord;
mod gen_ctx;
pub mod generation;
mod noise;
mod world;

pub use chunk_coord::ChunkCoord;
pub use gen_ctx::GenCtx;
pub use noise::{NoiseSource, SimplexSource};
pub use world::World;
