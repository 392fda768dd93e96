//! Bezier-curve trajectories.
//!
//! Interior control points are drawn inside the start/end bounding box and
//! jittered, then the curve is sampled at 60 samples per second of
//! movement. The outer control points are the anchors themselves, so the
//! first and last samples are exactly `start` and `end`.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use oxymouse_common::error::{OxymouseError, OxymouseResult};
use oxymouse_trajectory_model::coordinate::{scroll_path, Coordinate, Trajectory};
use oxymouse_trajectory_model::params::{frame_count, BezierParams};
use oxymouse_trajectory_model::viewport::Viewport;

use crate::curve::bezier_curve;
use crate::movement::{random_target, MouseMovement};

/// Trajectory generator built on high-order Bezier curves.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BezierMouse {
    params: BezierParams,
}

impl BezierMouse {
    pub fn new(params: BezierParams) -> OxymouseResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &BezierParams {
        &self.params
    }
}

impl MouseMovement for BezierMouse {
    fn generate_coordinates<R: Rng + ?Sized>(
        &self,
        from: Coordinate,
        to: Coordinate,
        rng: &mut R,
    ) -> OxymouseResult<Trajectory> {
        generate_bezier_mouse_movements(from, to, &self.params, rng)
    }

    fn generate_random_coordinates<R: Rng + ?Sized>(
        &self,
        viewport: Viewport,
        rng: &mut R,
    ) -> OxymouseResult<Trajectory> {
        viewport.validate()?;
        let target = random_target(viewport, rng);
        generate_bezier_mouse_movements(Coordinate::ORIGIN, target, &self.params, rng)
    }

    fn generate_scroll_coordinates<R: Rng + ?Sized>(
        &self,
        start_y: i32,
        end_y: i32,
        rng: &mut R,
    ) -> OxymouseResult<Trajectory> {
        let path = generate_bezier_mouse_movements(
            Coordinate::new(0, start_y),
            Coordinate::new(0, end_y),
            &self.params,
            rng,
        )?;
        Ok(scroll_path(path.into_iter().map(|c| c.y), end_y))
    }
}

/// Generate a Bezier movement from `start` to `end`.
///
/// Produces `floor(duration * 60)` samples whose first and last elements
/// equal the anchors exactly.
pub fn generate_bezier_mouse_movements<R: Rng + ?Sized>(
    start: Coordinate,
    end: Coordinate,
    params: &BezierParams,
    rng: &mut R,
) -> OxymouseResult<Trajectory> {
    params.validate()?;

    let control_points = control_points(start, end, params, rng)?;
    let num_steps = frame_count(params.duration);
    let path = bezier_curve(&control_points, num_steps);

    tracing::debug!(
        control_points = control_points.len(),
        samples = path.len(),
        "bezier path generated"
    );
    Ok(path)
}

/// Anchors plus `complexity - 2` jittered interior points.
pub fn control_points<R: Rng + ?Sized>(
    start: Coordinate,
    end: Coordinate,
    params: &BezierParams,
    rng: &mut R,
) -> OxymouseResult<Vec<(f64, f64)>> {
    let complexity = params.effective_complexity();
    let spread = params.randomness * 100.0;
    if !(spread * 2.0).is_finite() || spread < 0.0 {
        return Err(OxymouseError::invalid_parameter(
            "randomness",
            format!("jitter spread {spread} is not a usable range"),
        ));
    }

    let xs = Uniform::new_inclusive(start.x.min(end.x), start.x.max(end.x));
    let ys = Uniform::new_inclusive(start.y.min(end.y), start.y.max(end.y));
    let jitter = Uniform::new_inclusive(-spread, spread);

    let mut points = Vec::with_capacity(complexity);
    points.push(start.as_f64());
    for _ in 0..complexity - 2 {
        points.push((xs.sample(rng) as f64, ys.sample(rng) as f64));
    }
    // Anchors are never jittered.
    for point in points.iter_mut().skip(1) {
        point.0 += jitter.sample(rng);
        point.1 += jitter.sample(rng);
    }
    points.push(end.as_f64());

    Ok(points)
}
