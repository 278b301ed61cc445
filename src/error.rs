use thiserror::Error;

/// Errors surfaced by track generation. Queries never fail; out-of-range
/// parameters are clamped to `[0, 1]` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackError {
    /// A piece name was not found in the prefab catalog. Composition aborts
    /// without a partial result; no default piece is substituted.
    #[error("unknown track prefab `{0}`")]
    UnknownPrefab(String),

    /// Generation parameters were rejected before any composition work began.
    #[error("degenerate generation parameters: {0}")]
    DegenerateParameters(&'static str),
}
