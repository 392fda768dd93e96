//! Replay schedules.
//!
//! A consumer that drives a real pointer moves to each point of a
//! trajectory and waits a short random delay before the next one. This
//! module only computes those delays; sending the events is up to the
//! caller.

use std::time::Duration;

use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use serde::{Serialize, Serializer};

use oxymouse_common::error::OxymouseResult;
use oxymouse_trajectory_model::coordinate::Coordinate;
use oxymouse_trajectory_model::params::ReplayConfig;

/// A point to move to, and how long to wait after moving there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReplayStep {
    pub point: Coordinate,
    #[serde(rename = "delay_ms", serialize_with = "serialize_millis")]
    pub delay: Duration,
}

fn serialize_millis<S: Serializer>(delay: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(delay.as_secs_f64() * 1000.0)
}

/// Pair every point of `trajectory` with a delay drawn uniformly from
/// `[min_delay_ms, max_delay_ms]`.
pub fn schedule<R: Rng + ?Sized>(
    trajectory: &[Coordinate],
    config: &ReplayConfig,
    rng: &mut R,
) -> OxymouseResult<Vec<ReplayStep>> {
    config.validate()?;
    let delays = Uniform::new_inclusive(config.min_delay_ms, config.max_delay_ms);

    Ok(trajectory
        .iter()
        .map(|&point| ReplayStep {
            point,
            delay: Duration::from_secs_f64(delays.sample(rng) / 1000.0),
        })
        .collect())
}

/// Sum of all delays in a schedule.
pub fn total_duration(steps: &[ReplayStep]) -> Duration {
    steps.iter().map(|s| s.delay).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn line(n: i32) -> Vec<Coordinate> {
        (0..n).map(|i| Coordinate::new(i, i * 2)).collect()
    }

    #[test]
    fn test_one_step_per_point_with_bounded_delay() {
        let mut rng = ChaCha8Rng::seed_from_u64(10);
        let path = line(200);
        let steps = schedule(&path, &ReplayConfig::default(), &mut rng).unwrap();

        assert_eq!(steps.len(), path.len());
        for (step, point) in steps.iter().zip(&path) {
            assert_eq!(step.point, *point);
            // Allow for float-to-nanosecond conversion at the range edges.
            assert!(step.delay >= Duration::from_micros(999), "{:?}", step.delay);
            assert!(step.delay <= Duration::from_micros(3001), "{:?}", step.delay);
        }

        let total = total_duration(&steps);
        assert!(total >= Duration::from_millis(199));
        assert!(total <= Duration::from_millis(601));
    }

    #[test]
    fn test_fixed_delay() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let config = ReplayConfig {
            min_delay_ms: 2.0,
            max_delay_ms: 2.0,
        };
        let steps = schedule(&line(3), &config, &mut rng).unwrap();
        assert!(steps.iter().all(|s| s.delay == Duration::from_millis(2)));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let config = ReplayConfig {
            min_delay_ms: 3.0,
            max_delay_ms: 1.0,
        };
        assert!(schedule(&line(3), &config, &mut rng).is_err());
    }

    #[test]
    fn test_step_serializes_delay_in_millis() {
        let step = ReplayStep {
            point: Coordinate::new(3, 4),
            delay: Duration::from_micros(1500),
        };
        let json = serde_json::to_string(&step).unwrap();
        assert_eq!(json, r#"{"point":{"x":3,"y":4},"delay_ms":1.5}"#);
    }
}
