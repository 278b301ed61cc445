use rand::Rng;

use crate::geom::CatmullRom1;

use super::params::GenerationParams;

/// Smooth elevation-over-`t` profile, independent of the path's planar shape.
///
/// One control height per segment boundary (N segments give N+1 heights) at
/// index-normalized positions `i / N`, fitted with an open Catmull-Rom curve.
/// The first height is always 0: the ground reference for the whole track.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevationProfile {
    curve: CatmullRom1,
}

impl ElevationProfile {
    /// Draws fresh boundary heights as a random walk from 0, with per-segment
    /// deltas uniform in `[min_delta, max_delta]`.
    pub fn generate<R: Rng>(
        segment_count: usize,
        params: &GenerationParams,
        rng: &mut R,
    ) -> Self {
        Self::from_heights(
            generate_heights(segment_count, params.min_delta, params.max_delta, rng),
            params.tension,
        )
    }

    pub fn from_heights(heights: Vec<f32>, tension: f32) -> Self {
        Self {
            curve: CatmullRom1::new(heights, tension),
        }
    }

    /// Boundary heights, one per segment boundary.
    pub fn heights(&self) -> &[f32] {
        self.curve.values()
    }

    pub fn tension(&self) -> f32 {
        self.curve.tension()
    }

    /// Re-fits the spline with a new tension, keeping the same heights.
    pub fn with_tension(&self, tension: f32) -> Self {
        Self::from_heights(self.curve.values().to_vec(), tension)
    }

    /// Height at global parameter `t` (clamped to [0, 1]).
    pub fn height_at(&self, t: f32) -> f32 {
        self.curve.sample(t)
    }
}

/// Random-walk boundary heights: `count + 1` values starting at exactly 0.
pub fn generate_heights<R: Rng>(count: usize, min_delta: f32, max_delta: f32, rng: &mut R) -> Vec<f32> {
    let mut heights = Vec::with_capacity(count + 1);
    let mut height = 0.0;
    heights.push(height);
    for _ in 0..count {
        height += rng.random_range(min_delta..=max_delta);
        heights.push(height);
    }
    heights
}
