//! Perlin-noise trajectories.
//!
//! A raw path is produced by walking a normalized progress value `t` from 0
//! to 1 and sampling fractal noise at `(t, seed)` for x and `(t, seed + 1)`
//! for y, mapped onto a screen. How `t` advances is decided by [`Pacing`]:
//! either real elapsed time with a 10 ms pause between samples, the same
//! timeline on a virtual clock, or a fixed number of evenly spaced samples.
//!
//! Unlike the other generators the raw path knows nothing about the
//! requested anchors. `generate_coordinates` stretches it afterwards so its
//! bounding box spans `from..=to`; the first and last samples are therefore
//! only on the anchors when the raw path happened to start at its minimum
//! and end at its maximum.

use std::time::Duration;

use rand::Rng;

use oxymouse_common::clock::{Clock, ManualClock, WallClock};
use oxymouse_common::error::{Axis, OxymouseError, OxymouseResult};
use oxymouse_trajectory_model::coordinate::{
    axis_bounds, scroll_path, AxisBounds, Coordinate, Trajectory,
};
use oxymouse_trajectory_model::params::PerlinParams;
use oxymouse_trajectory_model::viewport::Viewport;

use crate::fractal::FractalNoise;
use crate::movement::MouseMovement;

/// Pause between samples on a paced timeline.
pub const SAMPLE_INTERVAL: Duration = Duration::from_millis(10);

/// How the Perlin sampling loop advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pacing {
    /// Sample against the wall clock, sleeping between samples.
    /// Blocks the calling thread for about `duration` seconds.
    #[default]
    RealTime,

    /// The real-time timeline on a virtual clock: same sample spacing,
    /// no blocking, deterministic length.
    Simulated,

    /// Exactly `samples` points at `t = i / samples`.
    Fixed { samples: usize },
}

/// Trajectory generator built on fractal Perlin noise.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PerlinMouse {
    params: PerlinParams,
    pacing: Pacing,
}

impl PerlinMouse {
    pub fn new(params: PerlinParams, pacing: Pacing) -> OxymouseResult<Self> {
        params.validate()?;
        Ok(Self { params, pacing })
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn params(&self) -> &PerlinParams {
        &self.params
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    /// Generate an unscaled path on `screen` using this instance's pacing.
    pub fn raw_path<R: Rng + ?Sized>(
        &self,
        screen: Viewport,
        rng: &mut R,
    ) -> OxymouseResult<Trajectory> {
        let seed = resolve_seed(&self.params, rng);
        let path = match self.pacing {
            Pacing::RealTime => {
                generate_perlin_mouse_movements(&self.params, seed, screen, &mut WallClock::start())?
            }
            Pacing::Simulated => {
                generate_perlin_mouse_movements(&self.params, seed, screen, &mut ManualClock::new())?
            }
            Pacing::Fixed { samples } => {
                generate_perlin_samples(&self.params, seed, screen, samples)?
            }
        };

        if path.is_empty() {
            return Err(OxymouseError::degenerate(
                Axis::X,
                format!("no samples were taken with {:?} pacing", self.pacing),
            ));
        }
        Ok(path)
    }
}

impl MouseMovement for PerlinMouse {
    fn generate_coordinates<R: Rng + ?Sized>(
        &self,
        from: Coordinate,
        to: Coordinate,
        rng: &mut R,
    ) -> OxymouseResult<Trajectory> {
        let raw = self.raw_path(Viewport::REFERENCE, rng)?;
        fit_to_anchors(&raw, from, to)
    }

    /// Noise is mapped onto `viewport` itself, so the path stays inside it.
    fn generate_random_coordinates<R: Rng + ?Sized>(
        &self,
        viewport: Viewport,
        rng: &mut R,
    ) -> OxymouseResult<Trajectory> {
        viewport.validate()?;
        self.raw_path(viewport, rng)
    }

    fn generate_scroll_coordinates<R: Rng + ?Sized>(
        &self,
        start_y: i32,
        end_y: i32,
        rng: &mut R,
    ) -> OxymouseResult<Trajectory> {
        let raw = self.raw_path(Viewport::REFERENCE, rng)?;
        let reference_height = Viewport::REFERENCE.height_f64();
        let span = end_y as f64 - start_y as f64;
        let ys = raw
            .iter()
            .map(|c| (start_y as f64 + (c.y as f64 / reference_height) * span) as i32);
        Ok(scroll_path(ys, end_y))
    }
}

/// The seed to sample with: the configured one, or a fresh draw from `rng`.
pub fn resolve_seed<R: Rng + ?Sized>(params: &PerlinParams, rng: &mut R) -> u32 {
    params
        .seed
        .unwrap_or_else(|| rng.gen_range(0..=PerlinParams::MAX_DEFAULT_SEED))
}

/// Sample noise on a paced timeline driven by `clock`.
///
/// Takes a sample, then sleeps [`SAMPLE_INTERVAL`], until `duration`
/// seconds have elapsed on the clock.
pub fn generate_perlin_mouse_movements<C: Clock + ?Sized>(
    params: &PerlinParams,
    seed: u32,
    screen: Viewport,
    clock: &mut C,
) -> OxymouseResult<Trajectory> {
    params.validate()?;
    screen.validate()?;

    let noise = FractalNoise::from_params(params);
    let mut path = Vec::new();

    loop {
        let elapsed = clock.elapsed_secs();
        if elapsed >= params.duration {
            break;
        }
        let t = elapsed / params.duration;
        path.push(sample_point(&noise, t, seed, screen));
        clock.sleep(SAMPLE_INTERVAL);
    }

    tracing::debug!(seed, samples = path.len(), "perlin path generated");
    Ok(path)
}

/// Sample noise at `samples` evenly spaced progress values `i / samples`.
pub fn generate_perlin_samples(
    params: &PerlinParams,
    seed: u32,
    screen: Viewport,
    samples: usize,
) -> OxymouseResult<Trajectory> {
    params.validate()?;
    screen.validate()?;

    let noise = FractalNoise::from_params(params);
    let path: Trajectory = (0..samples)
        .map(|i| sample_point(&noise, i as f64 / samples as f64, seed, screen))
        .collect();

    tracing::debug!(seed, samples = path.len(), "perlin path generated");
    Ok(path)
}

fn sample_point(noise: &FractalNoise, t: f64, seed: u32, screen: Viewport) -> Coordinate {
    let row = seed as f64;
    let x = FractalNoise::to_pixels(noise.sample(t, row), screen.width_f64());
    let y = FractalNoise::to_pixels(noise.sample(t, row + 1.0), screen.height_f64());
    Coordinate::truncate(x, y)
}

/// Stretch `raw` so its x range becomes `from.x..=to.x` and its y range
/// `from.y..=to.y`.
///
/// The raw minimum lands exactly on `from` and the raw maximum exactly on
/// `to`, also when `from` is the larger anchor (the path is mirrored). A
/// raw axis with a single value cannot be stretched and is reported
/// as [`OxymouseError::DegenerateTrajectory`].
pub fn fit_to_anchors(
    raw: &[Coordinate],
    from: Coordinate,
    to: Coordinate,
) -> OxymouseResult<Trajectory> {
    let x_bounds = non_degenerate_bounds(raw, Axis::X)?;
    let y_bounds = non_degenerate_bounds(raw, Axis::Y)?;

    Ok(raw
        .iter()
        .map(|c| {
            Coordinate::truncate(
                stretch(c.x, x_bounds, from.x, to.x),
                stretch(c.y, y_bounds, from.y, to.y),
            )
        })
        .collect())
}

fn non_degenerate_bounds(raw: &[Coordinate], axis: Axis) -> OxymouseResult<AxisBounds> {
    let bounds = axis_bounds(raw, axis)
        .ok_or_else(|| OxymouseError::degenerate(axis, "raw path is empty"))?;
    if bounds.is_degenerate() {
        return Err(OxymouseError::degenerate(
            axis,
            format!("every raw sample has value {}, range is zero", bounds.min),
        ));
    }
    Ok(bounds)
}

/// `from + (value - min) · (to - from) / (max - min)`, multiplied before
/// dividing so the extremes map exactly.
fn stretch(value: i32, bounds: AxisBounds, from: i32, to: i32) -> f64 {
    let offset = value as f64 - bounds.min as f64;
    let target_span = to as f64 - from as f64;
    from as f64 + offset * target_span / bounds.span() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    fn short(duration: f64, seed: Option<u32>) -> PerlinParams {
        PerlinParams {
            duration,
            seed,
            ..Default::default()
        }
    }

    #[test]
    fn test_manual_clock_gives_exact_sample_count() {
        let params = short(0.05, Some(1234));
        let mut clock = ManualClock::new();
        let path =
            generate_perlin_mouse_movements(&params, 1234, Viewport::REFERENCE, &mut clock)
                .unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(clock.elapsed(), Duration::from_millis(50));
        for c in &path {
            assert!(Viewport::REFERENCE.contains(c.x, c.y), "{c:?} off screen");
        }
    }

    #[test]
    fn test_wall_clock_scenario() {
        let params = short(0.05, Some(77));
        let mut clock = WallClock::start();
        let path =
            generate_perlin_mouse_movements(&params, 77, Viewport::REFERENCE, &mut clock).unwrap();
        assert!((1..=5).contains(&path.len()), "got {} samples", path.len());
        for c in &path {
            assert!(Viewport::REFERENCE.contains(c.x, c.y));
        }
    }

    #[test]
    fn test_first_sample_sits_on_lattice_center() {
        // t = 0 with an integer seed is a lattice point where gradient noise is zero.
        let path = generate_perlin_samples(&short(1.0, None), 500, Viewport::REFERENCE, 3).unwrap();
        assert_eq!(path[0], Coordinate::new(960, 540));
    }

    #[test]
    fn test_seed_changes_path() {
        let params = short(1.0, None);
        let a = generate_perlin_samples(&params, 1, Viewport::REFERENCE, 50).unwrap();
        let b = generate_perlin_samples(&params, 2, Viewport::REFERENCE, 50).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_unseeded_calls_draw_fresh_seeds() {
        let params = short(1.0, None);
        let mut rng = rng(8);
        let seeds: Vec<u32> = (0..8).map(|_| resolve_seed(&params, &mut rng)).collect();
        assert!(seeds.iter().any(|&s| s != seeds[0]));
        assert!(seeds.iter().all(|&s| s <= PerlinParams::MAX_DEFAULT_SEED));

        let fixed = short(1.0, Some(42));
        assert_eq!(resolve_seed(&fixed, &mut rng), 42);
    }

    #[test]
    fn test_fit_maps_extremes_onto_anchors() {
        let raw = vec![
            Coordinate::new(500, 300),
            Coordinate::new(200, 900),
            Coordinate::new(800, 100),
            Coordinate::new(650, 450),
        ];
        let from = Coordinate::new(10, 20);
        let to = Coordinate::new(1000, 1000);
        let fitted = fit_to_anchors(&raw, from, to).unwrap();

        assert_eq!(fitted.len(), raw.len());
        assert_eq!(axis_bounds(&fitted, Axis::X), Some(AxisBounds { min: 10, max: 1000 }));
        assert_eq!(axis_bounds(&fitted, Axis::Y), Some(AxisBounds { min: 20, max: 1000 }));
        // The first raw sample is not an extreme, so it does not land on `from`.
        assert_ne!(fitted[0], from);
    }

    #[test]
    fn test_fit_with_reversed_anchors_mirrors_the_path() {
        let raw = vec![
            Coordinate::new(0, 0),
            Coordinate::new(10, 20),
            Coordinate::new(5, 5),
        ];
        let from = Coordinate::new(100, 200);
        let to = Coordinate::ORIGIN;
        let fitted = fit_to_anchors(&raw, from, to).unwrap();

        // Raw minimum lands on `from` even though it is the larger anchor.
        assert_eq!(
            fitted,
            vec![
                Coordinate::new(100, 200),
                Coordinate::new(0, 0),
                Coordinate::new(50, 150),
            ]
        );
    }

    #[test]
    fn test_fit_rejects_constant_axis() {
        let raw = vec![Coordinate::new(5, 1), Coordinate::new(5, 9)];
        let err = fit_to_anchors(&raw, Coordinate::ORIGIN, Coordinate::new(100, 100)).unwrap_err();
        assert!(matches!(
            err,
            OxymouseError::DegenerateTrajectory { axis: Axis::X, .. }
        ));

        let raw = vec![Coordinate::new(1, 7), Coordinate::new(9, 7)];
        let err = fit_to_anchors(&raw, Coordinate::ORIGIN, Coordinate::new(100, 100)).unwrap_err();
        assert!(matches!(
            err,
            OxymouseError::DegenerateTrajectory { axis: Axis::Y, .. }
        ));

        assert!(fit_to_anchors(&[], Coordinate::ORIGIN, Coordinate::new(1, 1)).is_err());
    }

    #[test]
    fn test_generate_coordinates_spans_anchors() {
        let mouse = PerlinMouse::new(short(1.0, Some(31337)), Pacing::Fixed { samples: 100 }).unwrap();
        let from = Coordinate::new(0, 0);
        let to = Coordinate::new(1000, 1000);
        let path = mouse.generate_coordinates(from, to, &mut rng(1)).unwrap();
        assert_eq!(path.len(), 100);
        assert_eq!(axis_bounds(&path, Axis::X), Some(AxisBounds { min: 0, max: 1000 }));
        assert_eq!(axis_bounds(&path, Axis::Y), Some(AxisBounds { min: 0, max: 1000 }));
    }

    #[test]
    fn test_single_sample_is_degenerate() {
        let mouse = PerlinMouse::new(short(1.0, Some(3)), Pacing::Fixed { samples: 1 }).unwrap();
        let err = mouse
            .generate_coordinates(Coordinate::ORIGIN, Coordinate::new(10, 10), &mut rng(0))
            .unwrap_err();
        assert!(matches!(err, OxymouseError::DegenerateTrajectory { .. }));

        let mouse = mouse.with_pacing(Pacing::Fixed { samples: 0 });
        assert!(mouse.raw_path(Viewport::REFERENCE, &mut rng(0)).is_err());
    }

    #[test]
    fn test_random_coordinates_respect_viewport() {
        let mouse = PerlinMouse::new(short(1.0, Some(9)), Pacing::Simulated).unwrap();
        let viewport = Viewport::new(320, 200);
        let path = mouse.generate_random_coordinates(viewport, &mut rng(2)).unwrap();
        assert_eq!(path.len(), 100);
        for c in &path {
            assert!(viewport.contains(c.x, c.y), "{c:?} outside {viewport:?}");
        }
    }

    #[test]
    fn test_scroll_remaps_into_range() {
        let mouse = PerlinMouse::new(short(0.5, Some(5)), Pacing::Simulated).unwrap();
        let path = mouse.generate_scroll_coordinates(100, 600, &mut rng(3)).unwrap();
        assert_eq!(path.len(), 51);
        assert!(path.iter().all(|c| c.x == 0));
        assert!(path.iter().all(|c| (100..=600).contains(&c.y)));
        assert_eq!(path.last(), Some(&Coordinate::new(0, 600)));
    }

    #[test]
    fn test_simulated_pacing_is_reproducible() {
        let mouse = PerlinMouse::new(short(0.3, None), Pacing::Simulated).unwrap();
        let a = mouse.raw_path(Viewport::REFERENCE, &mut rng(21)).unwrap();
        let b = mouse.raw_path(Viewport::REFERENCE, &mut rng(21)).unwrap();
        assert_eq!(a, b);
    }
}
