//! OxyMouse Synthesis: human-like pointer trajectories
//!
//! Produces ordered pixel paths for automation clients that should not
//! move the pointer in perfectly straight lines:
//! - **Bezier:** random control points blended with Bernstein polynomials
//! - **Gaussian:** a smoothed random walk layered on a quadratic curve
//! - **Perlin:** coherent fractal noise sampled along a paced timeline
//!
//! This crate is pure computation with no I/O and no global state. Every
//! generator takes the random source it draws from as an argument, and the
//! paced Perlin loop takes its time source from [`Pacing`].

pub mod bezier;
pub mod curve;
pub mod dispatch;
pub mod fractal;
pub mod gaussian;
pub mod movement;
pub mod perlin;
pub mod replay;
pub mod walk;

pub use bezier::BezierMouse;
pub use dispatch::{OxyMouse, Variant};
pub use gaussian::GaussianMouse;
pub use movement::MouseMovement;
pub use perlin::{Pacing, PerlinMouse};
pub use replay::ReplayStep;
