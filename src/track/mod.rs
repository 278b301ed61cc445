//! High-level track assembly pipeline.
//!
//! Prefab catalog -> segment composer -> path/banking/elevation -> query
//! facade -> ribbon mesh. Each stage consumes the previous one read-only;
//! regeneration rebuilds a stage wholesale instead of patching it in place.

mod banking;
mod catalog;
mod elevation;
mod mesh;
mod params;
mod path;
mod segment;
mod spline;

pub use banking::BankingField;
pub use catalog::{catalog, lookup, piece_names, BankKeyframe, SegmentPrefab};
pub use elevation::{generate_heights, ElevationProfile};
pub use mesh::{build_ribbon, RibbonMesh};
pub use params::GenerationParams;
pub use path::TrackPath;
pub use segment::{compose, generate_pieces, NormalKeyframe, PlacedSegment};
pub use spline::Track;
