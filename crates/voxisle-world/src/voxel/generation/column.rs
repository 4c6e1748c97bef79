use voxisle_blocks::Voxel;

use crate::worldgen::WorldGenParams;

use super::super::NoiseSource;
use super::trees::place_tree;
use super::{ColumnSampler, SALT_STRATA, rand01, voxel_index};

/// Surface stratification by (jittered) absolute height, evaluated top-down.
pub fn strata_band(params: &WorldGenParams, ry: i32) -> Voxel {
    if ry >= params.snow_lvl {
        Voxel::Snow
    } else if ry >= params.stone_lvl {
        Voxel::Stone
    } else if ry >= params.dirt_lvl {
        Voxel::Dirt
    } else if ry >= params.grass_lvl {
        Voxel::Grass
    } else {
        Voxel::Sand
    }
}

#[allow(clippy::too_many_arguments)]
pub(super) fn classify<N: NoiseSource>(
    sampler: &ColumnSampler<'_, '_, N>,
    voxels: &mut [Voxel],
    x: usize,
    y: usize,
    z: usize,
    wx: i32,
    wy: i32,
    wz: i32,
    world_height: i32,
) {
    let params = sampler.params;

    let voxel = if wy < world_height - 1 {
        if carve_cavity(sampler, wx, wy, wz, world_height) {
            Voxel::Air
        } else {
            Voxel::Stone
        }
    } else {
        // Jitter the band boundary by a few units so strata lines do not come
        // out perfectly flat.
        let jitter =
            (params.jitter_span as f32 * rand01(sampler.seed, wx, wy, wz, SALT_STRATA)) as i32;
        strata_band(params, wy - jitter)
    };

    let idx = voxel_index(x, y, z);
    debug_assert!(
        idx < voxels.len(),
        "voxel write out of range at local ({x}, {y}, {z})"
    );
    voxels[idx] = voxel;

    // Tree trigger is keyed on absolute world height, not on "is this the top
    // of a grass column"; the grass gate inside place_tree does the rest.
    if wy < params.dirt_lvl {
        place_tree(sampler, voxels, x, y, z, wx, wy, wz, voxel);
    }
}

fn carve_cavity<N: NoiseSource>(
    sampler: &ColumnSampler<'_, '_, N>,
    wx: i32,
    wy: i32,
    wz: i32,
    world_height: i32,
) -> bool {
    let params = sampler.params;
    if !params.carvers_enable {
        return false;
    }
    // Caves never open within the configured margin of the surface.
    if wy >= world_height - params.cave_surface_margin {
        return false;
    }
    let noise = &sampler.ctx.noise;
    let f = params.cave_cavity_frequency;
    let cavity = noise.noise3(wx as f32 * f, wy as f32 * f, wz as f32 * f);
    if cavity <= 0.0 {
        return false;
    }
    let ff = params.cave_floor_frequency;
    let floor = noise.noise2(wx as f32 * ff, wz as f32 * ff) * params.cave_floor_scale
        + params.cave_floor_offset;
    floor < wy as f32
}
