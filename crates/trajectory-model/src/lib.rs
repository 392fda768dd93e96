//! OxyMouse Trajectory Model
//!
//! Defines the data contracts shared by every trajectory generator:
//! - **Coordinates:** integer pixel positions and ordered trajectories
//! - **Viewport:** the screen area random movements are bounded by
//! - **Parameters:** per-algorithm tuning knobs with validation
//! - **Config:** the on-disk application configuration
//!
//! Everything here is plain data. Generation lives in `oxymouse-synthesis`.

pub mod config;
pub mod coordinate;
pub mod params;
pub mod viewport;

pub use config::*;
pub use coordinate::*;
pub use params::*;
pub use viewport::*;
