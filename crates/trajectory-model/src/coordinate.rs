//! Pixel coordinates and trajectories.
//!
//! Generators compute in `f64` and convert to pixels by truncating toward
//! zero, never rounding. [`Coordinate::truncate`] is the only float-to-pixel
//! conversion used by the generators.

use serde::{Deserialize, Serialize};

use oxymouse_common::error::Axis;

/// An integer pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

/// An ordered pointer path. Index order is temporal order.
pub type Trajectory = Vec<Coordinate>;

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Convert a floating-point position to pixels, truncating toward zero.
    pub fn truncate(x: f64, y: f64) -> Self {
        Self {
            x: x as i32,
            y: y as i32,
        }
    }

    /// The value on the given axis.
    pub fn along(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    pub fn as_f64(&self) -> (f64, f64) {
        (self.x as f64, self.y as f64)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Coordinate> for (i32, i32) {
    fn from(c: Coordinate) -> Self {
        (c.x, c.y)
    }
}

/// Inclusive value range of one axis of a trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisBounds {
    pub min: i32,
    pub max: i32,
}

impl AxisBounds {
    /// Distance between the extremes.
    pub fn span(&self) -> i64 {
        self.max as i64 - self.min as i64
    }

    /// Whether every sample has the same value.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }
}

/// Bounds of `trajectory` along `axis`, or `None` for an empty trajectory.
pub fn axis_bounds(trajectory: &[Coordinate], axis: Axis) -> Option<AxisBounds> {
    let mut values = trajectory.iter().map(|c| c.along(axis));
    let first = values.next()?;
    let (min, max) = values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
    Some(AxisBounds { min, max })
}

/// Build a scroll trajectory: x pinned to 0, `end_y` appended as the final sample.
pub fn scroll_path(ys: impl IntoIterator<Item = i32>, end_y: i32) -> Trajectory {
    ys.into_iter()
        .chain(std::iter::once(end_y))
        .map(|y| Coordinate::new(0, y))
        .collect()
}
