use super::ColumnSampler;
use super::super::NoiseSource;

pub(super) fn surface_height<N: NoiseSource>(
    sampler: &ColumnSampler<'_, '_, N>,
    wx: i32,
    wz: i32,
) -> i32 {
    let params = sampler.params;
    let noise = &sampler.ctx.noise;
    let x = wx as f32;
    let z = wz as f32;

    // Radial island mask: ~1 near the world center, falling off hard at the
    // configured rim rather than tapering into a coastline.
    let dx = x - sampler.center_xz;
    let dz = z - sampler.center_xz;
    let dist = (dx * dx + dz * dz).sqrt();
    let falloff = (params.island_falloff_scale * dist).powi(params.island_falloff_exponent);
    let island = (1.0 / (falloff + params.island_epsilon)).min(1.0);

    let mut a1 = sampler.center_y;
    let mut a2 = a1 * 0.5;
    let mut a4 = a1 * 0.25;
    let mut a8 = a1 * 0.125;

    let f1 = params.base_frequency;
    let f2 = f1 * 2.0;
    let f4 = f1 * 4.0;
    let f8 = f1 * 8.0;

    // Terrain-type shaping: squared-and-negated valleys stay flat, fourth
    // power sharpens the mountains.
    let t = noise.noise2(x * params.terrain_frequency, z * params.terrain_frequency);
    let t = if t < 0.0 { -(t * t) } else { t.powi(4) };
    a1 *= 1.0 + t * 5.0;
    a2 *= 1.0 + t * 5.0;
    a4 *= 1.0 + t * 5.0;
    a8 *= 1.0 + t * 5.0;

    // Octave sum with alternating sign bias: odd octaves push up, even pull
    // down, which rolls the terrain instead of centering it.
    let mut h = 0.0;
    h += noise.noise2(x * f1, z * f1) * a1 + a1;
    h += noise.noise2(x * f2, z * f2) * a2 - a2;
    h += noise.noise2(x * f4, z * f4) * a4 + a4;
    h += noise.noise2(x * f8, z * f8) * a8 - a8;

    // Noise-textured minimum floor keeps every column off a flat degenerate
    // value.
    h = h.max(noise.noise2(x * f8, z * f8) + params.floor_offset);
    h *= island;

    h as i32
}
