use std::path::PathBuf;

use clap::Parser;
use voxisle_chunk::generate_chunk_buffer;
use voxisle_world::worldgen::load_params_from_path;
use voxisle_world::{ChunkCoord, World};

#[derive(Parser, Debug)]
#[command(name = "voxisle", about = "Procedural island voxel terrain generator")]
struct Args {
    /// World seed
    #[arg(long, default_value_t = 1337)]
    seed: i32,
    /// Worldgen config (toml); defaults apply when absent
    #[arg(long)]
    config: Option<PathBuf>,
    /// World extent in chunks along X and Z
    #[arg(long, default_value_t = 20)]
    chunks: usize,
    /// World height in stacked chunks
    #[arg(long, default_value_t = 2)]
    stack: usize,
    /// Chunk column to generate (chunk coordinates)
    #[arg(long, default_value_t = 10)]
    cx: i32,
    #[arg(long, default_value_t = 10)]
    cz: i32,
    /// Print an ASCII height map of the island with this many columns
    #[arg(long)]
    map: Option<usize>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let world = World::new(args.chunks, args.stack, args.chunks, args.seed);
    if let Some(path) = args.config.as_deref() {
        match load_params_from_path(path) {
            Ok(params) => {
                world.update_worldgen_params(params);
                log::info!("worldgen config loaded from {}", path.display());
            }
            Err(e) => {
                log::warn!(
                    "worldgen config {} unusable ({}); using defaults",
                    path.display(),
                    e
                );
            }
        }
    }

    let ctx = world.make_gen_ctx();
    for cy in 0..world.chunks_y {
        let coord = ChunkCoord::new(args.cx, cy as i32, args.cz);
        let result = generate_chunk_buffer(&world, &ctx, coord);
        log::info!(
            "chunk ({}, {}, {}): occupancy={:?} non_air={}",
            coord.cx,
            coord.cy,
            coord.cz,
            result.occupancy,
            result.buf.non_air_count()
        );
    }

    if let Some(cols) = args.map {
        print_height_map(&world, cols.max(8));
    }
}

fn print_height_map(world: &World, cols: usize) {
    const RAMP: &[u8] = b" .:-=+*#%@";
    let ctx = world.make_gen_ctx();
    let size_x = world.world_size_x();
    let size_z = world.world_size_z();
    let step_x = (size_x / cols).max(1);
    // Terminal cells are roughly twice as tall as wide.
    let step_z = step_x * 2;
    let max_h = world.world_height() as f32;
    let mut line = String::with_capacity(cols + 1);
    for wz in (0..size_z).step_by(step_z) {
        line.clear();
        for wx in (0..size_x).step_by(step_x) {
            let h = world.column_height(&ctx, wx as i32, wz as i32);
            let t = (h as f32 / max_h).clamp(0.0, 1.0);
            let i = ((t * (RAMP.len() - 1) as f32) as usize).min(RAMP.len() - 1);
            line.push(RAMP[i] as char);
        }
        println!("{line}");
    }
}
