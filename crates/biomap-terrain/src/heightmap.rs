//! Height field synthesis from 2D Perlin noise.
//!
//! Each cell samples a single octave of gradient noise at
//! `((x + ox) * noise_scale, (y + oy) * noise_scale)` and remaps it to
//! `[0, 1]`. The noise permutation is fixed; the seed only moves the sample
//! window through [`SeedOffsets`].

use noise::{NoiseFn, Perlin};

use crate::error::GenerationError;
use crate::grid::{Dimensions, Grid};
use crate::seed::SeedOffsets;

/// Upper bound for `noise_scale`. Larger values produce salt-and-pepper maps.
pub const MAX_NOISE_SCALE: f64 = 0.3;

/// Permutation seed of the shared noise function.
const NOISE_PERMUTATION_SEED: u32 = 0;

/// Per-cell elevation values in `[0, 1]`.
pub type HeightField = Grid<f64>;

/// Samples normalized Perlin noise for one seed and frequency.
pub struct HeightmapSampler {
    noise: Perlin,
    offsets: SeedOffsets,
    noise_scale: f64,
}

impl HeightmapSampler {
    /// Create a sampler, rejecting a `noise_scale` outside `(0, 0.3]`.
    pub fn new(seed: i64, noise_scale: f64) -> Result<Self, GenerationError> {
        if !(noise_scale.is_finite() && noise_scale > 0.0 && noise_scale <= MAX_NOISE_SCALE) {
            return Err(GenerationError::invalid(
                "terrain.noise_scale",
                format!("expected a value in (0, {MAX_NOISE_SCALE}], got {noise_scale}"),
            ));
        }
        let offsets = SeedOffsets::from_seed(seed);
        if !(offsets.ox.is_finite() && offsets.oy.is_finite()) {
            return Err(GenerationError::invalid("seed.seed", "derived offsets are not finite"));
        }
        Ok(Self {
            noise: Perlin::new(NOISE_PERMUTATION_SEED),
            offsets,
            noise_scale,
        })
    }

    /// Normalized noise at a point in noise space, clamped to `[0, 1]`.
    pub fn sample(&self, nx: f64, ny: f64) -> f64 {
        let raw = self.noise.get([nx, ny]);
        ((raw + 1.0) * 0.5).clamp(0.0, 1.0)
    }

    /// Noise-space coordinate sampled for cell `(x, y)`.
    pub fn noise_coord(&self, x: u32, y: u32) -> [f64; 2] {
        [
            (x as f64 + self.offsets.ox) * self.noise_scale,
            (y as f64 + self.offsets.oy) * self.noise_scale,
        ]
    }

    /// Height of cell `(x, y)`.
    pub fn height_at(&self, x: u32, y: u32) -> f64 {
        let [nx, ny] = self.noise_coord(x, y);
        self.sample(nx, ny)
    }

    /// Offsets derived from the seed.
    pub fn offsets(&self) -> SeedOffsets {
        self.offsets
    }

    /// Fill a height field covering `dims`.
    pub fn generate(&self, dims: Dimensions) -> HeightField {
        Grid::from_fn(dims, |x, y| self.height_at(x, y))
    }
}

/// Generate the height field for `(seed, width, height, noise_scale)`.
///
/// Pure: identical inputs always yield bit-identical output.
pub fn generate_height_field(
    seed: i64,
    width: u32,
    height: u32,
    noise_scale: f64,
) -> Result<HeightField, GenerationError> {
    let dims = Dimensions::new(width, height)?;
    let sampler = HeightmapSampler::new(seed, noise_scale)?;
    Ok(sampler.generate(dims))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism_same_inputs() {
        let a = generate_height_field(42, 32, 24, 0.08).unwrap();
        let b = generate_height_field(42, 32, 24, 0.08).unwrap();
        let bits_a: Vec<u64> = a.values().iter().map(|h| h.to_bits()).collect();
        let bits_b: Vec<u64> = b.values().iter().map(|h| h.to_bits()).collect();
        assert_eq!(bits_a, bits_b, "height fields must be bit-identical");
    }

    #[test]
    fn test_different_seeds_different_fields() {
        let a = generate_height_field(1, 16, 16, 0.08).unwrap();
        let b = generate_height_field(999, 16, 16, 0.08).unwrap();
        assert_ne!(a, b, "different seeds should shift the sampled window");
    }

    #[test]
    fn test_heights_within_unit_range() {
        for seed in [-999_999, -5, 0, 7, 123_456, 999_998] {
            let field = generate_height_field(seed, 40, 30, 0.3).unwrap();
            for ((x, y), &h) in field.iter() {
                assert!(
                    (0.0..=1.0).contains(&h),
                    "height {h} out of range at ({x}, {y}) for seed {seed}"
                );
            }
        }
    }

    #[test]
    fn test_lattice_points_sample_midpoint() {
        // Gradient noise is zero on integer lattice points.
        let sampler = HeightmapSampler::new(0, 0.08).unwrap();
        assert_eq!(sampler.sample(3.0, 7.0), 0.5);
        assert_eq!(sampler.sample(-2.0, 11.0), 0.5);
    }

    #[test]
    fn test_smooth_gradient_no_discontinuities() {
        let sampler = HeightmapSampler::new(42, 0.08).unwrap();
        let step = 0.01;
        for i in 0..10_000 {
            let x = i as f64 * step;
            let delta = (sampler.sample(x + step, 0.3) - sampler.sample(x, 0.3)).abs();
            assert!(delta < 0.05, "discontinuity at x={x}: delta={delta}");
        }
    }

    #[test]
    fn test_neighbouring_cells_are_coherent() {
        let field = generate_height_field(12345, 60, 35, 0.08).unwrap();
        let dims = field.dimensions();
        for (x, y) in dims.cells() {
            if x + 1 < dims.width() {
                let delta = (field[(x + 1, y)] - field[(x, y)]).abs();
                assert!(delta < 0.25, "jump of {delta} between ({x},{y}) and ({},{y})", x + 1);
            }
        }
    }

    #[test]
    fn test_noise_coord_uses_seed_offsets() {
        let sampler = HeightmapSampler::new(0, 0.08).unwrap();
        let [nx, ny] = sampler.noise_coord(0, 0);
        assert!((nx - 0.84).abs() < 1e-12);
        assert!((ny - 6.216).abs() < 1e-12);
        let [nx, _] = sampler.noise_coord(3, 0);
        assert!((nx - 1.08).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_noise_scale_rejected() {
        for bad in [0.0, -0.1, 0.31, f64::NAN, f64::INFINITY] {
            let err = HeightmapSampler::new(0, bad).err().unwrap();
            assert_eq!(err.field(), "terrain.noise_scale");
        }
        assert!(HeightmapSampler::new(0, 0.3).is_ok());
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        assert!(generate_height_field(0, 0, 10, 0.08).is_err());
        assert!(generate_height_field(0, 10, 0, 0.08).is_err());
    }
}
