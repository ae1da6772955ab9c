//! Utility functions module
//!
//! Contains display density conversion and duration (de)serialization
//! helpers shared by the screen and the configuration layer.

pub mod density;
pub mod duration;
pub mod easing;

// Re-export commonly used items
pub use density::{Density, Dp};
