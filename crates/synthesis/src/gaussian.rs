//! Gaussian random-walk trajectories.
//!
//! A quadratic Bezier baseline carries the pointer from start to end. Two
//! independent random walks (one per axis) are smoothed, rescaled to the
//! size of the movement, and added on top. The anchors are then forced
//! back onto the first and last samples.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use oxymouse_common::error::OxymouseResult;
use oxymouse_trajectory_model::coordinate::{scroll_path, Coordinate, Trajectory};
use oxymouse_trajectory_model::params::{frame_count, GaussianParams};
use oxymouse_trajectory_model::viewport::Viewport;

use crate::curve::{linspace, quadratic_bezier};
use crate::movement::{random_target, MouseMovement};
use crate::walk::{gaussian_smooth, morph_distribution, random_walk};

/// Trajectory generator built on smoothed Gaussian random walks.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GaussianMouse {
    params: GaussianParams,
}

impl GaussianMouse {
    pub fn new(params: GaussianParams) -> OxymouseResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &GaussianParams {
        &self.params
    }
}

impl MouseMovement for GaussianMouse {
    fn generate_coordinates<R: Rng + ?Sized>(
        &self,
        from: Coordinate,
        to: Coordinate,
        rng: &mut R,
    ) -> OxymouseResult<Trajectory> {
        generate_gaussian_mouse_movements(from, to, &self.params, rng)
    }

    fn generate_random_coordinates<R: Rng + ?Sized>(
        &self,
        viewport: Viewport,
        rng: &mut R,
    ) -> OxymouseResult<Trajectory> {
        viewport.validate()?;
        let target = random_target(viewport, rng);
        generate_gaussian_mouse_movements(Coordinate::ORIGIN, target, &self.params, rng)
    }

    fn generate_scroll_coordinates<R: Rng + ?Sized>(
        &self,
        start_y: i32,
        end_y: i32,
        rng: &mut R,
    ) -> OxymouseResult<Trajectory> {
        let path = generate_gaussian_mouse_movements(
            Coordinate::new(0, start_y),
            Coordinate::new(0, end_y),
            &self.params,
            rng,
        )?;
        Ok(scroll_path(path.into_iter().map(|c| c.y), end_y))
    }
}

/// Generate a random-walk movement from `start` to `end`.
///
/// Produces `floor(duration * 60)` samples whose first and last elements
/// equal the anchors exactly.
pub fn generate_gaussian_mouse_movements<R: Rng + ?Sized>(
    start: Coordinate,
    end: Coordinate,
    params: &GaussianParams,
    rng: &mut R,
) -> OxymouseResult<Trajectory> {
    params.validate()?;

    let num_points = frame_count(params.duration);
    let stddev = params.randomness * 10.0;

    let walk_x = random_walk(num_points, stddev, rng)?;
    let walk_y = random_walk(num_points, stddev, rng)?;

    let smooth_x = gaussian_smooth(&walk_x, params.smoothness)?;
    let smooth_y = gaussian_smooth(&walk_y, params.smoothness)?;

    let dx = end.x as f64 - start.x as f64;
    let dy = end.y as f64 - start.y as f64;
    let noise_x = morph_distribution(&smooth_x, dx / 2.0, dx / 6.0);
    let noise_y = morph_distribution(&smooth_y, dy / 2.0, dy / 6.0);

    let control_x = uniform_between(start.x, end.x, rng);
    let control_y = uniform_between(start.y, end.y, rng);

    let (start_x, start_y) = start.as_f64();
    let (end_x, end_y) = end.as_f64();

    let mut path: Trajectory = linspace(num_points)
        .into_iter()
        .zip(noise_x.iter().zip(&noise_y))
        .map(|(t, (nx, ny))| {
            Coordinate::truncate(
                quadratic_bezier(start_x, control_x, end_x, t) + nx,
                quadratic_bezier(start_y, control_y, end_y, t) + ny,
            )
        })
        .collect();

    if let Some(first) = path.first_mut() {
        *first = start;
    }
    if let Some(last) = path.last_mut() {
        *last = end;
    }

    tracing::debug!(
        samples = path.len(),
        control_x,
        control_y,
        "gaussian path generated"
    );
    Ok(path)
}

/// Uniform value between `a` and `b` in either order.
fn uniform_between<R: Rng + ?Sized>(a: i32, b: i32, rng: &mut R) -> f64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    Uniform::new_inclusive(lo as f64, hi as f64).sample(rng)
}
