//! OxyMouse Common Utilities
//!
//! Shared infrastructure for all OxyMouse crates:
//! - Error types and result aliases
//! - Time sources for paced trajectory sampling
//! - Tracing/logging initialization
//! - Configuration file helpers

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;

pub use clock::*;
pub use config::*;
pub use error::*;
