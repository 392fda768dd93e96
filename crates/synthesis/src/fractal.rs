//! Multi-octave coherent noise.

use noise::{NoiseFn, Perlin};

use oxymouse_trajectory_model::params::PerlinParams;

/// Permutation seed of the underlying gradient lattice. Path variety comes
/// from the sampling position (the trajectory seed is a noise coordinate),
/// not from reshuffling the lattice.
const LATTICE_SEED: u32 = 0;

/// Fractal Brownian motion over 2-D Perlin noise.
///
/// Octave `k` samples at frequency `lacunarity^k` with amplitude
/// `persistence^k`; the sum is divided by the total amplitude and clamped,
/// so [`FractalNoise::sample`] always returns a value in `[-1, 1]`.
#[derive(Debug, Clone)]
pub struct FractalNoise {
    noise: Perlin,
    octaves: u32,
    persistence: f64,
    lacunarity: f64,
}

impl FractalNoise {
    pub fn new(octaves: u32, persistence: f64, lacunarity: f64) -> Self {
        Self {
            noise: Perlin::new(LATTICE_SEED),
            octaves: octaves.max(1),
            persistence,
            lacunarity,
        }
    }

    pub fn from_params(params: &PerlinParams) -> Self {
        Self::new(params.octaves, params.persistence, params.lacunarity)
    }

    /// Noise value at `(x, y)` in `[-1, 1]`.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let (total, max_amplitude, _, _) = (0..self.octaves).fold(
            (0.0, 0.0, 1.0, 1.0),
            |(total, max_amp, amp, freq), _| {
                (
                    total + self.noise.get([x * freq, y * freq]) * amp,
                    max_amp + amp,
                    amp * self.persistence,
                    freq * self.lacunarity,
                )
            },
        );

        if max_amplitude == 0.0 {
            return 0.0;
        }
        (total / max_amplitude).clamp(-1.0, 1.0)
    }

    /// Map a sample onto `[0, dimension]`: `(n + 1) / 2 · dimension`.
    pub fn to_pixels(value: f64, dimension: f64) -> f64 {
        (value + 1.0) / 2.0 * dimension
    }
}
