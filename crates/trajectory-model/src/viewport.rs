//! Viewport dimensions for randomized movements.

use serde::{Deserialize, Serialize};

use oxymouse_common::error::{OxymouseError, OxymouseResult};

/// A screen area in pixels, anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// The 1920×1080 reference screen noise-based paths are mapped onto.
    pub const REFERENCE: Viewport = Viewport {
        width: 1920,
        height: 1080,
    };

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Reject zero-sized viewports.
    pub fn validate(&self) -> OxymouseResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(OxymouseError::invalid_parameter(
                "viewport",
                format!(
                    "dimensions must be non-zero, got {}x{}",
                    self.width, self.height
                ),
            ));
        }
        Ok(())
    }

    /// Whether `(x, y)` lies within `[0, width] × [0, height]`.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x as i64 <= self.width as i64 && y as i64 <= self.height as i64
    }

    pub fn width_f64(&self) -> f64 {
        self.width as f64
    }

    pub fn height_f64(&self) -> f64 {
        self.height as f64
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::REFERENCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_screen() {
        assert_eq!(Viewport::default(), Viewport::new(1920, 1080));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let vp = Viewport::new(100, 50);
        assert!(vp.contains(0, 0));
        assert!(vp.contains(100, 50));
        assert!(!vp.contains(101, 50));
        assert!(!vp.contains(-1, 0));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(Viewport::new(0, 1080).validate().is_err());
        assert!(Viewport::new(1920, 0).validate().is_err());
        assert!(Viewport::REFERENCE.validate().is_ok());
    }
}
