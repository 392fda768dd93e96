//! Algorithm selection by name.
//!
//! Name resolution happens once, when an [`OxyMouse`] is built. After that
//! every call is forwarded straight to the selected generator.

use rand::Rng;

use oxymouse_common::error::OxymouseResult;
use oxymouse_trajectory_model::config::SynthesisConfig;
use oxymouse_trajectory_model::coordinate::{Coordinate, Trajectory};
use oxymouse_trajectory_model::params::Algorithm;
use oxymouse_trajectory_model::viewport::Viewport;

use crate::bezier::BezierMouse;
use crate::gaussian::GaussianMouse;
use crate::movement::MouseMovement;
use crate::perlin::{Pacing, PerlinMouse};

/// Default start anchor for point-to-point movements.
pub const DEFAULT_FROM: Coordinate = Coordinate::new(0, 0);
/// Default end anchor for point-to-point movements.
pub const DEFAULT_TO: Coordinate = Coordinate::new(1000, 1000);
/// Default scroll start.
pub const DEFAULT_SCROLL_START: i32 = 0;
/// Default scroll end.
pub const DEFAULT_SCROLL_END: i32 = 1000;

/// One of the available generators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Variant {
    Bezier(BezierMouse),
    Gaussian(GaussianMouse),
    Perlin(PerlinMouse),
}

impl Variant {
    /// The generator for `algorithm` with default parameters.
    pub fn with_defaults(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Bezier => Variant::Bezier(BezierMouse::default()),
            Algorithm::Gaussian => Variant::Gaussian(GaussianMouse::default()),
            Algorithm::Perlin => Variant::Perlin(PerlinMouse::default()),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            Variant::Bezier(_) => Algorithm::Bezier,
            Variant::Gaussian(_) => Algorithm::Gaussian,
            Variant::Perlin(_) => Algorithm::Perlin,
        }
    }
}

/// A trajectory generator selected by algorithm name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OxyMouse {
    variant: Variant,
}

impl OxyMouse {
    /// Resolve `algorithm` (`"bezier"`, `"gaussian"` or `"perlin"`, exact match).
    pub fn new(algorithm: &str) -> OxymouseResult<Self> {
        let algorithm: Algorithm = algorithm.parse()?;
        Ok(Self::with_algorithm(algorithm))
    }

    pub fn with_algorithm(algorithm: Algorithm) -> Self {
        Self::from_variant(Variant::with_defaults(algorithm))
    }

    pub fn from_variant(variant: Variant) -> Self {
        Self { variant }
    }

    /// Build the configured algorithm with its configured parameters.
    pub fn from_config(config: &SynthesisConfig) -> OxymouseResult<Self> {
        let variant = match config.algorithm {
            Algorithm::Bezier => Variant::Bezier(BezierMouse::new(config.bezier)?),
            Algorithm::Gaussian => Variant::Gaussian(GaussianMouse::new(config.gaussian)?),
            Algorithm::Perlin => Variant::Perlin(PerlinMouse::new(config.perlin, Pacing::default())?),
        };
        Ok(Self::from_variant(variant))
    }

    /// Replace the Perlin pacing. Other algorithms are unaffected.
    pub fn with_pacing(self, pacing: Pacing) -> Self {
        match self.variant {
            Variant::Perlin(mouse) => Self::from_variant(Variant::Perlin(mouse.with_pacing(pacing))),
            _ => self,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.variant.algorithm()
    }

    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    /// Movement from `(0, 0)` to `(1000, 1000)`.
    pub fn generate_default_coordinates<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> OxymouseResult<Trajectory> {
        self.generate_coordinates(DEFAULT_FROM, DEFAULT_TO, rng)
    }

    /// Random movement inside a 1920×1080 viewport.
    pub fn generate_default_random_coordinates<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> OxymouseResult<Trajectory> {
        self.generate_random_coordinates(Viewport::REFERENCE, rng)
    }

    /// Scroll from y = 0 to y = 1000.
    pub fn generate_default_scroll_coordinates<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> OxymouseResult<Trajectory> {
        self.generate_scroll_coordinates(DEFAULT_SCROLL_START, DEFAULT_SCROLL_END, rng)
    }
}

impl MouseMovement for OxyMouse {
    fn generate_coordinates<R: Rng + ?Sized>(
        &self,
        from: Coordinate,
        to: Coordinate,
        rng: &mut R,
    ) -> OxymouseResult<Trajectory> {
        match &self.variant {
            Variant::Bezier(mouse) => mouse.generate_coordinates(from, to, rng),
            Variant::Gaussian(mouse) => mouse.generate_coordinates(from, to, rng),
            Variant::Perlin(mouse) => mouse.generate_coordinates(from, to, rng),
        }
    }

    fn generate_random_coordinates<R: Rng + ?Sized>(
        &self,
        viewport: Viewport,
        rng: &mut R,
    ) -> OxymouseResult<Trajectory> {
        match &self.variant {
            Variant::Bezier(mouse) => mouse.generate_random_coordinates(viewport, rng),
            Variant::Gaussian(mouse) => mouse.generate_random_coordinates(viewport, rng),
            Variant::Perlin(mouse) => mouse.generate_random_coordinates(viewport, rng),
        }
    }

    fn generate_scroll_coordinates<R: Rng + ?Sized>(
        &self,
        start_y: i32,
        end_y: i32,
        rng: &mut R,
    ) -> OxymouseResult<Trajectory> {
        match &self.variant {
            Variant::Bezier(mouse) => mouse.generate_scroll_coordinates(start_y, end_y, rng),
            Variant::Gaussian(mouse) => mouse.generate_scroll_coordinates(start_y, end_y, rng),
            Variant::Perlin(mouse) => mouse.generate_scroll_coordinates(start_y, end_y, rng),
        }
    }
}
