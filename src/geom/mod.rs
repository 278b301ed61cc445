//! Pure math primitives for track generation.
//!
//! This module has no dependency on the track pipeline; it provides the
//! vector/rotation types and the two interpolation schemes the pipeline is
//! built from.

mod bezier;
mod catmull;
mod math;

pub use bezier::CubicBezier;
pub use catmull::CatmullRom1;
pub use math::{Float3, Quaternion};
