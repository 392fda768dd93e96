//! The capability every trajectory generator provides.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use oxymouse_common::error::OxymouseResult;
use oxymouse_trajectory_model::coordinate::{Coordinate, Trajectory};
use oxymouse_trajectory_model::viewport::Viewport;

/// A pointer-trajectory generator.
///
/// Implementations hold only immutable parameters. All randomness comes
/// from the caller-owned `rng`, so two calls with identically seeded
/// generators produce identical paths.
pub trait MouseMovement {
    /// A path from `from` to `to`.
    fn generate_coordinates<R: Rng + ?Sized>(
        &self,
        from: Coordinate,
        to: Coordinate,
        rng: &mut R,
    ) -> OxymouseResult<Trajectory>;

    /// A path from the origin to a uniformly random point inside `viewport`.
    fn generate_random_coordinates<R: Rng + ?Sized>(
        &self,
        viewport: Viewport,
        rng: &mut R,
    ) -> OxymouseResult<Trajectory>;

    /// A vertical path with `x = 0` whose last sample is exactly `(0, end_y)`.
    fn generate_scroll_coordinates<R: Rng + ?Sized>(
        &self,
        start_y: i32,
        end_y: i32,
        rng: &mut R,
    ) -> OxymouseResult<Trajectory>;
}

/// Uniform point in `[0, width] × [0, height]`.
pub(crate) fn random_target<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Coordinate {
    let max_x = viewport.width.min(i32::MAX as u32) as i32;
    let max_y = viewport.height.min(i32::MAX as u32) as i32;
    Coordinate::new(
        Uniform::new_inclusive(0, max_x).sample(rng),
        Uniform::new_inclusive(0, max_y).sample(rng),
    )
}
