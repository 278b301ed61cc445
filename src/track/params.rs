use crate::error::TrackError;

/// Pure inputs to track generation. Regeneration is a deterministic function
/// of these values plus the random draws made during generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    /// Number of pieces drawn when generating a random piece list.
    pub piece_count: usize,
    /// Per-piece uniform scale range.
    pub min_scale: f32,
    pub max_scale: f32,
    /// Per-segment elevation delta range; negative deltas produce descents.
    pub min_delta: f32,
    pub max_delta: f32,
    /// Catmull-Rom tension for the elevation profile.
    pub tension: f32,
    /// Sampling density of the ribbon mesh, per curve segment.
    pub divisions_per_curve: usize,
    /// Half-width of the ribbon cross-section.
    pub width: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            piece_count: 12,
            min_scale: 0.5,
            max_scale: 1.5,
            min_delta: -2.0,
            max_delta: 2.0,
            tension: 0.5,
            divisions_per_curve: 24,
            width: 0.1,
        }
    }
}

impl GenerationParams {
    /// Rejects degenerate configurations before any generation work begins.
    pub fn validate(&self) -> Result<(), TrackError> {
        if self.piece_count == 0 {
            return Err(TrackError::DegenerateParameters(
                "piece count must be at least 1",
            ));
        }
        if self.min_scale > self.max_scale {
            return Err(TrackError::DegenerateParameters(
                "min scale exceeds max scale",
            ));
        }
        if self.min_scale <= 0.0 {
            return Err(TrackError::DegenerateParameters(
                "scale range must be positive",
            ));
        }
        if self.min_delta > self.max_delta {
            return Err(TrackError::DegenerateParameters(
                "min elevation delta exceeds max",
            ));
        }
        if self.divisions_per_curve == 0 {
            return Err(TrackError::DegenerateParameters(
                "divisions per curve must be at least 1",
            ));
        }
        if self.width <= 0.0 {
            return Err(TrackError::DegenerateParameters(
                "ribbon width must be positive",
            ));
        }
        Ok(())
    }

    /// Fixed-scale variant, handy for deterministic composition.
    pub fn unscaled() -> Self {
        Self {
            min_scale: 1.0,
            max_scale: 1.0,
            ..Self::default()
        }
    }
}
