//! Random walks and 1-D signal shaping.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use oxymouse_common::error::{OxymouseError, OxymouseResult};
use oxymouse_trajectory_model::params::GaussianParams;

/// Kernel half-width in standard deviations.
const KERNEL_TRUNCATE: f64 = 4.0;

/// Cumulative sum of `len` i.i.d. `Normal(0, stddev)` steps.
pub fn random_walk<R: Rng + ?Sized>(
    len: usize,
    stddev: f64,
    rng: &mut R,
) -> OxymouseResult<Vec<f64>> {
    let step = Normal::new(0.0, stddev)
        .map_err(|e| OxymouseError::invalid_parameter("stddev", e.to_string()))?;

    let mut position = 0.0;
    Ok((0..len)
        .map(|_| {
            position += step.sample(rng);
            position
        })
        .collect())
}

/// Low-pass filter `data` with a normalized Gaussian kernel of width `sigma`.
///
/// Samples beyond the ends are mirrored with the edge repeated
/// (`d c b a | a b c d | d c b a`), so the output has the input's length.
/// `sigma` above [`GaussianParams::MAX_SMOOTHNESS`] is rejected.
pub fn gaussian_smooth(data: &[f64], sigma: f64) -> OxymouseResult<Vec<f64>> {
    if sigma > GaussianParams::MAX_SMOOTHNESS {
        return Err(OxymouseError::invalid_parameter(
            "smoothness",
            format!("kernel sigma {sigma} is too wide"),
        ));
    }
    if !(sigma > 0.0) || data.len() < 2 {
        return Ok(data.to_vec());
    }

    let radius = (KERNEL_TRUNCATE * sigma + 0.5) as isize;
    let kernel = gaussian_kernel(sigma, radius);

    Ok((0..data.len() as isize)
        .map(|i| {
            kernel
                .iter()
                .zip(-radius..=radius)
                .map(|(w, offset)| w * data[reflect_index(i + offset, data.len())])
                .sum()
        })
        .collect())
}

fn gaussian_kernel(sigma: f64, radius: isize) -> Vec<f64> {
    let weights: Vec<f64> = (-radius..=radius)
        .map(|k| {
            let z = k as f64 / sigma;
            (-0.5 * z * z).exp()
        })
        .collect();
    let total: f64 = weights.iter().sum();
    weights.into_iter().map(|w| w / total).collect()
}

fn reflect_index(i: isize, len: usize) -> usize {
    let period = 2 * len as isize;
    let m = i.rem_euclid(period);
    if m < len as isize {
        m as usize
    } else {
        (period - 1 - m) as usize
    }
}

/// Shift and scale `data` so its mean and (population) standard deviation
/// become `target_mean` and `target_std`.
///
/// Constant input has no spread to rescale; every sample becomes `target_mean`.
pub fn morph_distribution(data: &[f64], target_mean: f64, target_std: f64) -> Vec<f64> {
    if data.is_empty() {
        return vec![];
    }

    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    let variance = data.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let std = variance.sqrt();

    if !(std > 0.0) || !std.is_finite() {
        return vec![target_mean; data.len()];
    }

    data.iter()
        .map(|v| (v - mean) / std * target_std + target_mean)
        .collect()
}
