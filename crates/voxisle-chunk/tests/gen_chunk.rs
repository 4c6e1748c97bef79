use voxisle_blocks::Voxel;
use voxisle_chunk::{ChunkOccupancy, generate_chunk_buffer};
use voxisle_world::{ChunkCoord, World};

#[test]
fn generation_is_reproducible_for_a_fixed_seed() {
    let world = World::new(20, 2, 20, 42);
    let coord = ChunkCoord::new(10, 0, 10);
    let a = generate_chunk_buffer(&world, &world.make_gen_ctx(), coord);
    let b = generate_chunk_buffer(&world, &world.make_gen_ctx(), coord);
    assert_eq!(a.buf.voxels, b.buf.voxels);
    assert_eq!(a.occupancy, b.occupancy);
}

#[test]
fn chunk_outside_the_island_rim_is_empty() {
    let world = World::new(20, 2, 20, 42);
    // Corner chunk, ~640 units from the island center: the falloff has long
    // since collapsed every column to zero height.
    let result = generate_chunk_buffer(&world, &world.make_gen_ctx(), ChunkCoord::new(0, 0, 0));
    assert_eq!(result.occupancy, ChunkOccupancy::Empty);
    assert!(result.buf.is_all_air());
}

#[test]
fn central_chunk_is_populated() {
    let world = World::new(20, 2, 20, 42);
    let result = generate_chunk_buffer(&world, &world.make_gen_ctx(), ChunkCoord::new(10, 0, 10));
    assert_eq!(result.occupancy, ChunkOccupancy::Populated);
    assert!(result.buf.non_air_count() > 0);
}

#[test]
fn no_carved_air_within_ten_units_of_the_surface() {
    let world = World::new(20, 2, 20, 42);
    let ctx = world.make_gen_ctx();
    let coord = ChunkCoord::new(10, 0, 10);
    let result = generate_chunk_buffer(&world, &ctx, coord);
    let buf = &result.buf;
    let base_x = coord.cx * buf.sx as i32;
    let base_y = coord.cy * buf.sy as i32;
    let base_z = coord.cz * buf.sz as i32;
    for z in 0..buf.sz {
        for x in 0..buf.sx {
            let wx = base_x + x as i32;
            let wz = base_z + z as i32;
            let h = world.column_height(&ctx, wx, wz);
            let lo = (h - 10).max(base_y);
            let hi = (h - 1).min(base_y + buf.sy as i32);
            for wy in lo..hi {
                let v = buf.get_world(wx, wy, wz).unwrap();
                assert_ne!(
                    v,
                    Voxel::Air,
                    "carved air at ({wx}, {wy}, {wz}), surface {h}"
                );
            }
        }
    }
}

#[test]
fn below_surface_voxels_are_stone_air_or_overhanging_leaves() {
    let world = World::new(20, 2, 20, 42);
    let ctx = world.make_gen_ctx();
    let coord = ChunkCoord::new(10, 0, 10);
    let result = generate_chunk_buffer(&world, &ctx, coord);
    let buf = &result.buf;
    let base_x = coord.cx * buf.sx as i32;
    let base_y = coord.cy * buf.sy as i32;
    let base_z = coord.cz * buf.sz as i32;
    for z in 0..buf.sz {
        for x in 0..buf.sx {
            let wx = base_x + x as i32;
            let wz = base_z + z as i32;
            let h = world.column_height(&ctx, wx, wz);
            // Surface voxel is always written (band material or tree dirt, or
            // leaves blown in from a lower neighboring tree).
            if h - 1 >= base_y && h - 1 < base_y + buf.sy as i32 && h > 0 {
                let surface = buf.get_world(wx, h - 1, wz).unwrap();
                assert_ne!(surface, Voxel::Air, "open surface at ({wx}, {wz})");
            }
            // Strictly below the surface only stone, carved air, or canopy
            // spill from a neighboring lower tree can appear.
            let hi = (h - 1).clamp(base_y, base_y + buf.sy as i32);
            for wy in base_y..hi {
                let v = buf.get_world(wx, wy, wz).unwrap();
                assert!(
                    matches!(v, Voxel::Stone | Voxel::Air | Voxel::Leaves),
                    "unexpected {v:?} at ({wx}, {wy}, {wz}), surface {h}"
                );
            }
        }
    }
}
