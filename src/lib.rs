//! Procedural generation core for banked, elevation-varying ribbon tracks.
//!
//! A track is assembled from a small catalog of reusable curved segment
//! prefabs: the pieces are chained with C1 continuity into one globally
//! continuous, arc-length-parametrized path, a banking vector field and a
//! random smooth elevation profile are derived along it, and the result can
//! be sampled into a twisting ribbon mesh.
//!
//! # Architecture
//!
//! Layered modules with strict inward-only dependencies:
//!
//! - **geom**: math primitives (Float3, Quaternion, cubic Bezier, Catmull-Rom)
//! - **track**: catalog, composition, parametrization, banking, elevation, mesh
//!
//! The crate has no rendering, I/O, or logging surface of its own: consumers
//! query position/tangent/normal along the assembled path, or take the ribbon
//! mesh vertex/triangle buffers, and feed them to their own renderer.
//!
//! # Usage
//!
//! ```
//! use rand::{rngs::SmallRng, SeedableRng};
//! use twistytrack::{GenerationParams, Track};
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let track = Track::generate(&GenerationParams::default(), &mut rng).unwrap();
//! let mesh = track.ribbon_mesh();
//! assert_eq!(mesh.triangles.len(), track.divisions() * 2);
//! ```

pub mod error;
pub mod geom;
pub mod track;

// Re-export commonly used types at crate root
pub use error::TrackError;
pub use geom::{CubicBezier, Float3, Quaternion};
pub use track::{GenerationParams, RibbonMesh, SegmentPrefab, Track};
