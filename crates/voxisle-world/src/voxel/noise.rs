use fastnoise_lite::{FastNoiseLite, NoiseType};

/// Coherent-noise collaborator used by the generation core. Implementations
/// must be deterministic for a fixed seed and return values in roughly
/// [-1, 1]; tests substitute constant sources.
pub trait NoiseSource {
    fn noise2(&self, x: f32, z: f32) -> f32;
    fn noise3(&self, x: f32, y: f32, z: f32) -> f32;
}

/// Production source backed by OpenSimplex2. Frequency is fixed at 1.0 so the
/// generation code owns all coordinate scaling explicitly.
pub struct SimplexSource {
    r#gen: FastNoiseLite,
}

impl SimplexSource {
    pub fn with_seed(seed: i32) -> Self {
        let mut r#gen = FastNoiseLite::with_seed(seed);
        r#gen.set_noise_type(Some(NoiseType::OpenSimplex2));
        r#gen.set_frequency(Some(1.0));
        Self { r#gen }
    }
}

impl NoiseSource for SimplexSource {
    #[inline]
    fn noise2(&self, x: f32, z: f32) -> f32 {
        self.r#gen.get_noise_2d(x, z)
    }

    #[inline]
    fn noise3(&self, x: f32, y: f32, z: f32) -> f32 {
        self.r#gen.get_noise_3d(x, y, z)
    }
}
