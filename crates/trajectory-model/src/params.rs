//! Algorithm selection and per-algorithm tuning parameters.
//!
//! Parameters are per-call configuration. Every struct has a `validate()`
//! that generators call before doing any work, so a bad value surfaces as
//! `OxymouseError::InvalidParameter` instead of an empty or NaN-filled path.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use oxymouse_common::error::{OxymouseError, OxymouseResult};

/// Frame rate used to turn a duration into a sample count.
pub const FRAMES_PER_SECOND: f64 = 60.0;

/// Smallest sample count a frame-based path may have (the two anchors).
pub const MIN_FRAME_SAMPLES: usize = 2;

/// Longest movement any generator will plan, in seconds.
pub const MAX_DURATION: f64 = 3600.0;

/// Number of samples for a frame-based movement: `floor(duration * 60)`.
pub fn frame_count(duration: f64) -> usize {
    (duration * FRAMES_PER_SECOND) as usize
}

/// The trajectory synthesis algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Bezier,
    Gaussian,
    Perlin,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bezier, Algorithm::Gaussian, Algorithm::Perlin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bezier => "bezier",
            Algorithm::Gaussian => "gaussian",
            Algorithm::Perlin => "perlin",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive name matching.
impl FromStr for Algorithm {
    type Err = OxymouseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bezier" => Ok(Algorithm::Bezier),
            "gaussian" => Ok(Algorithm::Gaussian),
            "perlin" => Ok(Algorithm::Perlin),
            other => Err(OxymouseError::invalid_algorithm(other)),
        }
    }
}

/// Parameters for Bezier-curve movements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BezierParams {
    /// Duration of the movement in seconds.
    pub duration: f64,
    /// Number of control points including both anchors. Values below 4 act as 4.
    pub complexity: usize,
    /// Jitter applied to interior control points, in units of 100 px.
    pub randomness: f64,
}

impl BezierParams {
    /// Fewest control points a curve is built from.
    pub const MIN_COMPLEXITY: usize = 4;

    /// Complexity after clamping to [`Self::MIN_COMPLEXITY`].
    pub fn effective_complexity(&self) -> usize {
        self.complexity.max(Self::MIN_COMPLEXITY)
    }

    pub fn validate(&self) -> OxymouseResult<()> {
        check_frame_duration(self.duration)?;
        check_non_negative("randomness", self.randomness)
    }
}

impl Default for BezierParams {
    fn default() -> Self {
        Self {
            duration: 1.0,
            complexity: 4,
            randomness: 1.0,
        }
    }
}

/// Parameters for Gaussian random-walk movements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaussianParams {
    /// Duration of the movement in seconds.
    pub duration: f64,
    /// Gaussian kernel sigma used to smooth the walk (higher = smoother).
    pub smoothness: f64,
    /// Scales the walk step deviation (`randomness * 10`).
    pub randomness: f64,
}

impl GaussianParams {
    /// Largest accepted smoothing sigma. The kernel spans `8 * sigma + 1` taps.
    pub const MAX_SMOOTHNESS: f64 = 1000.0;

    pub fn validate(&self) -> OxymouseResult<()> {
        check_frame_duration(self.duration)?;
        check_non_negative("smoothness", self.smoothness)?;
        if self.smoothness > Self::MAX_SMOOTHNESS {
            return Err(OxymouseError::invalid_parameter(
                "smoothness",
                format!(
                    "must be at most {}, got {}",
                    Self::MAX_SMOOTHNESS,
                    self.smoothness
                ),
            ));
        }
        check_non_negative("randomness", self.randomness)
    }
}

impl Default for GaussianParams {
    fn default() -> Self {
        Self {
            duration: 1.0,
            smoothness: 2.0,
            randomness: 1.0,
        }
    }
}

/// Parameters for Perlin-noise movements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerlinParams {
    /// Duration of the movement in seconds.
    pub duration: f64,
    /// Number of noise octaves summed.
    pub octaves: u32,
    /// Amplitude multiplier between octaves.
    pub persistence: f64,
    /// Frequency multiplier between octaves.
    pub lacunarity: f64,
    /// Noise seed. `None` draws a fresh seed on every call.
    pub seed: Option<u32>,
}

impl PerlinParams {
    /// Upper bound (inclusive) of generated default seeds.
    pub const MAX_DEFAULT_SEED: u32 = 100_000;

    pub fn validate(&self) -> OxymouseResult<()> {
        check_duration(self.duration)?;
        if self.octaves == 0 {
            return Err(OxymouseError::invalid_parameter(
                "octaves",
                "at least one octave is required",
            ));
        }
        if !self.persistence.is_finite() {
            return Err(OxymouseError::invalid_parameter(
                "persistence",
                format!("must be finite, got {}", self.persistence),
            ));
        }
        check_positive("lacunarity", self.lacunarity)
    }
}

impl Default for PerlinParams {
    fn default() -> Self {
        Self {
            duration: 1.0,
            octaves: 6,
            persistence: 0.5,
            lacunarity: 2.0,
            seed: None,
        }
    }
}

/// Inter-step delay range used when replaying a trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    pub min_delay_ms: f64,
    pub max_delay_ms: f64,
}

impl ReplayConfig {
    pub fn validate(&self) -> OxymouseResult<()> {
        check_non_negative("min_delay_ms", self.min_delay_ms)?;
        check_non_negative("max_delay_ms", self.max_delay_ms)?;
        if self.min_delay_ms > self.max_delay_ms {
            return Err(OxymouseError::invalid_parameter(
                "min_delay_ms",
                format!(
                    "must not exceed max_delay_ms ({} > {})",
                    self.min_delay_ms, self.max_delay_ms
                ),
            ));
        }
        Ok(())
    }
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: 1.0,
            max_delay_ms: 3.0,
        }
    }
}

fn check_positive(name: &'static str, value: f64) -> OxymouseResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(OxymouseError::invalid_parameter(
            name,
            format!("must be a positive finite number, got {value}"),
        ));
    }
    Ok(())
}

fn check_non_negative(name: &'static str, value: f64) -> OxymouseResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(OxymouseError::invalid_parameter(
            name,
            format!("must be a non-negative finite number, got {value}"),
        ));
    }
    Ok(())
}

fn check_duration(duration: f64) -> OxymouseResult<()> {
    check_positive("duration", duration)?;
    if duration > MAX_DURATION {
        return Err(OxymouseError::invalid_parameter(
            "duration",
            format!("must be at most {MAX_DURATION}s, got {duration}s"),
        ));
    }
    Ok(())
}

fn check_frame_duration(duration: f64) -> OxymouseResult<()> {
    check_duration(duration)?;
    let samples = frame_count(duration);
    if samples < MIN_FRAME_SAMPLES {
        return Err(OxymouseError::invalid_parameter(
            "duration",
            format!(
                "{duration}s yields {samples} sample(s) at {FRAMES_PER_SECOND} fps; \
                 at least {MIN_FRAME_SAMPLES} are required"
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_names_are_exact() {
        assert_eq!("bezier".parse::<Algorithm>().unwrap(), Algorithm::Bezier);
        assert_eq!("gaussian".parse::<Algorithm>().unwrap(), Algorithm::Gaussian);
        assert_eq!("perlin".parse::<Algorithm>().unwrap(), Algorithm::Perlin);

        for bad in ["spline", "Bezier", " perlin", ""] {
            assert!(matches!(
                bad.parse::<Algorithm>(),
                Err(OxymouseError::InvalidAlgorithm { .. })
            ));
        }
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_frame_count_floors() {
        assert_eq!(frame_count(1.0), 60);
        assert_eq!(frame_count(0.5), 30);
        assert_eq!(frame_count(0.999), 59);
        assert_eq!(frame_count(0.01), 0);
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(BezierParams::default().validate().is_ok());
        assert!(GaussianParams::default().validate().is_ok());
        assert!(PerlinParams::default().validate().is_ok());
        assert!(ReplayConfig::default().validate().is_ok());
    }

    #[test]
    fn test_bezier_complexity_clamps() {
        let params = BezierParams {
            complexity: 2,
            ..Default::default()
        };
        assert_eq!(params.effective_complexity(), 4);
        let params = BezierParams {
            complexity: 7,
            ..Default::default()
        };
        assert_eq!(params.effective_complexity(), 7);
    }

    #[test]
    fn test_duration_validation() {
        for duration in [0.0, -1.0, f64::NAN, f64::INFINITY, 0.02] {
            let params = BezierParams {
                duration,
                ..Default::default()
            };
            assert!(
                matches!(
                    params.validate(),
                    Err(OxymouseError::InvalidParameter { name: "duration", .. })
                ),
                "duration {duration} should be rejected"
            );
        }
        let params = GaussianParams {
            duration: 0.05,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_oversized_duration_rejected() {
        for duration in [MAX_DURATION + 1.0, 1e300] {
            let bezier = BezierParams {
                duration,
                ..Default::default()
            };
            let gaussian = GaussianParams {
                duration,
                ..Default::default()
            };
            let perlin = PerlinParams {
                duration,
                ..Default::default()
            };
            for result in [bezier.validate(), gaussian.validate(), perlin.validate()] {
                assert!(
                    matches!(result, Err(OxymouseError::InvalidParameter { name: "duration", .. })),
                    "duration {duration} should be rejected"
                );
            }
        }

        let longest = BezierParams {
            duration: MAX_DURATION,
            ..Default::default()
        };
        assert!(longest.validate().is_ok());
    }

    #[test]
    fn test_smoothness_upper_bound() {
        for smoothness in [GaussianParams::MAX_SMOOTHNESS + 1.0, 1e20] {
            let params = GaussianParams {
                smoothness,
                ..Default::default()
            };
            assert!(matches!(
                params.validate(),
                Err(OxymouseError::InvalidParameter { name: "smoothness", .. })
            ));
        }
        let params = GaussianParams {
            smoothness: GaussianParams::MAX_SMOOTHNESS,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_negative_knobs_rejected() {
        let gaussian = GaussianParams {
            smoothness: -1.0,
            ..Default::default()
        };
        assert!(gaussian.validate().is_err());

        let bezier = BezierParams {
            randomness: -0.1,
            ..Default::default()
        };
        assert!(bezier.validate().is_err());

        let perlin = PerlinParams {
            octaves: 0,
            ..Default::default()
        };
        assert!(perlin.validate().is_err());

        let perlin = PerlinParams {
            lacunarity: 0.0,
            ..Default::default()
        };
        assert!(perlin.validate().is_err());
    }

    #[test]
    fn test_replay_range_must_be_ordered() {
        let replay = ReplayConfig {
            min_delay_ms: 5.0,
            max_delay_ms: 1.0,
        };
        assert!(replay.validate().is_err());
    }

    #[test]
    fn test_partial_params_deserialize() {
        let params: PerlinParams = serde_json::from_str(r#"{"octaves": 3, "seed": 42}"#).unwrap();
        assert_eq!(params.octaves, 3);
        assert_eq!(params.seed, Some(42));
        assert_eq!(params.duration, 1.0);
    }
}
