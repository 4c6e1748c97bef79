use voxisle_blocks::Voxel;

use super::super::NoiseSource;
use super::{ColumnSampler, SALT_LEAF_KEEP, SALT_LEAF_THIN, SALT_TREE, rand01, voxel_index};

#[inline]
fn put(voxels: &mut [Voxel], x: usize, y: usize, z: usize, v: Voxel) {
    let idx = voxel_index(x, y, z);
    debug_assert!(
        idx < voxels.len(),
        "tree write out of range at local ({x}, {y}, {z})"
    );
    voxels[idx] = v;
}

/// Stochastically carve a trunk and canopy around a surface grass voxel.
/// Every rejection is silent; the room gates below are what make all the
/// canopy and trunk writes provably in-range, so changing the tree dimensions
/// means re-deriving them.
#[allow(clippy::too_many_arguments)]
pub(super) fn place_tree<N: NoiseSource>(
    sampler: &ColumnSampler<'_, '_, N>,
    voxels: &mut [Voxel],
    x: usize,
    y: usize,
    z: usize,
    wx: i32,
    wy: i32,
    wz: i32,
    voxel: Voxel,
) {
    let params = sampler.params;
    if voxel != Voxel::Grass {
        return;
    }
    if rand01(sampler.seed, wx, wy, wz, SALT_TREE) > params.tree_probability {
        return;
    }

    let th = params.tree_height;
    let hw = params.tree_half_width;
    let hh = params.tree_half_height;
    let xi = x as i32;
    let yi = y as i32;
    let zi = z as i32;

    // Room gates: canopy and trunk must fit entirely inside this chunk.
    if yi + th >= sampler.chunk_size_y as i32 {
        return;
    }
    if xi - hw < 0 || xi + hw >= sampler.chunk_size as i32 {
        return;
    }
    if zi - hw < 0 || zi + hw >= sampler.chunk_size as i32 {
        return;
    }

    // Dirt under the tree.
    put(voxels, x, y, z, Voxel::Dirt);

    // Canopy: a sphere-clipped band at the top, thinned twice -- a flat keep
    // chance, then a draw weighted toward the trunk axis.
    for iy in hh..th {
        for ix in -hw..hw {
            for iz in -hw..hw {
                if ix * ix + iz * iz + (iy - hh) * (iy - hh) >= hw * hw {
                    continue;
                }
                let lwx = wx + ix;
                let lwy = wy + iy;
                let lwz = wz + iz;
                if rand01(sampler.seed, lwx, lwy, lwz, SALT_LEAF_KEEP) <= 0.4 {
                    continue;
                }
                let axis_dist = (ix.abs() + iz.abs()) as f32 / hw as f32;
                if rand01(sampler.seed, lwx, lwy, lwz, SALT_LEAF_THIN) <= axis_dist {
                    continue;
                }
                put(
                    voxels,
                    (xi + ix) as usize,
                    (yi + iy) as usize,
                    (zi + iz) as usize,
                    Voxel::Leaves,
                );
            }
        }
    }

    // Trunk.
    for iy in 1..th - 2 {
        put(voxels, x, (yi + iy) as usize, z, Voxel::Wood);
    }

    // Single leaf cap directly above the trunk.
    put(voxels, x, (yi + th - 2) as usize, z, Voxel::Leaves);
}
