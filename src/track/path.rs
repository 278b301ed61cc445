use crate::geom::Float3;

use super::segment::PlacedSegment;

/// The ordered concatenation of all placed segment curves, exposed as one
/// continuous curve with a global arc-length parametrization: equal
/// increments of the global parameter correspond to equal distances traveled.
#[derive(Debug, Clone)]
pub struct TrackPath {
    segments: Vec<PlacedSegment>,
    /// Cumulative arc length at the end of each segment; last entry is the
    /// total length.
    cumulative: Vec<f32>,
    total_length: f32,
}

impl TrackPath {
    pub fn new(segments: Vec<PlacedSegment>) -> Self {
        let mut cumulative = Vec::with_capacity(segments.len());
        let mut total_length = 0.0;
        for segment in &segments {
            total_length += segment.curve.length();
            cumulative.push(total_length);
        }
        Self {
            segments,
            cumulative,
            total_length,
        }
    }

    pub fn segments(&self) -> &[PlacedSegment] {
        &self.segments
    }

    pub fn total_length(&self) -> f32 {
        self.total_length
    }

    pub fn cumulative_lengths(&self) -> &[f32] {
        &self.cumulative
    }

    /// Maps a global parameter to (segment index, local arc fraction).
    /// The query is clamped to [0, 1]; t = 1 resolves to the last segment at
    /// local 1 rather than overshooting past the final boundary.
    pub fn locate(&self, t: f32) -> (usize, f32) {
        debug_assert!(!self.segments.is_empty(), "locate on an empty path");

        let target = t.clamp(0.0, 1.0) * self.total_length;
        let index = self
            .cumulative
            .partition_point(|&end| end < target)
            .min(self.segments.len() - 1);

        let start = if index == 0 {
            0.0
        } else {
            self.cumulative[index - 1]
        };
        let span = self.cumulative[index] - start;
        let local = if span > 0.0 {
            ((target - start) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        (index, local)
    }

    /// Planar position at global parameter `t` (the composed curves live on
    /// the ground plane; elevation is applied by the track facade).
    pub fn position_at(&self, t: f32) -> Float3 {
        let (index, local) = self.locate(t);
        self.segments[index].curve.point_at_arc(local)
    }

    /// Unit tangent at global parameter `t`.
    pub fn tangent_at(&self, t: f32) -> Float3 {
        let (index, local) = self.locate(t);
        self.segments[index].curve.tangent_at_arc(local)
    }

    /// Overwrites per-segment entry heights from a fresh elevation pass.
    /// Planar geometry is untouched.
    pub(crate) fn set_enter_heights(&mut self, heights: &[f32]) {
        for (segment, &height) in self.segments.iter_mut().zip(heights) {
            segment.enter_height = height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::params::GenerationParams;
    use crate::track::segment::compose;
    use approx::assert_relative_eq;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const TOLERANCE: f32 = 1e-5;

    fn path_for(pieces: &[&str]) -> TrackPath {
        let mut rng = SmallRng::seed_from_u64(0);
        let segments = compose(pieces, &GenerationParams::unscaled(), &mut rng).unwrap();
        TrackPath::new(segments)
    }

    #[test]
    fn cumulative_lengths_are_monotonic() {
        let path = path_for(&["leftTurn", "rightTurn", "straight"]);
        let cumulative = path.cumulative_lengths();
        assert_eq!(cumulative.len(), 3);
        for pair in cumulative.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_relative_eq!(
            *cumulative.last().unwrap(),
            path.total_length(),
            epsilon = TOLERANCE
        );
    }

    #[test]
    fn endpoint_queries_resolve_to_track_ends() {
        let path = path_for(&["leftTurn", "leftTurn", "rightTurn", "leftUTurn"]);

        let start = path.position_at(0.0);
        assert_relative_eq!(start.x, 0.0, epsilon = TOLERANCE);
        assert_relative_eq!(start.z, 0.0, epsilon = TOLERANCE);

        // t = 1 must land on the last segment at local 1, not fall off the
        // end of the cumulative table.
        let (index, local) = path.locate(1.0);
        assert_eq!(index, 3);
        assert_relative_eq!(local, 1.0, epsilon = TOLERANCE);

        let end = path.position_at(1.0);
        assert_relative_eq!(end.x, -3.0, epsilon = TOLERANCE);
        assert_relative_eq!(end.z, 3.0, epsilon = TOLERANCE);
    }

    #[test]
    fn out_of_range_queries_clamp() {
        let path = path_for(&["leftTurn", "straight"]);
        assert_eq!(path.position_at(-0.5), path.position_at(0.0));
        assert_eq!(path.position_at(1.5), path.position_at(1.0));
    }

    #[test]
    fn global_parameter_is_proportional_to_arc_length() {
        // Two equal-length straights: the global midpoint must sit exactly at
        // the segment boundary.
        let path = path_for(&["straight", "straight"]);
        let (index, local) = path.locate(0.5);
        let boundary = path.position_at(0.5);
        assert!(
            (index == 0 && (local - 1.0).abs() < 1e-4)
                || (index == 1 && local.abs() < 1e-4),
            "midpoint resolved to segment {index} at local {local}"
        );
        assert_relative_eq!(boundary.z, -1.0, epsilon = 1e-3);
    }

    #[test]
    fn position_and_tangent_defined_at_every_division() {
        let path = path_for(&["leftTurn", "rightUTurn", "straight"]);
        let divisions = 3 * 24;
        for i in 0..=divisions {
            let t = i as f32 / divisions as f32;
            let tangent = path.tangent_at(t);
            assert_relative_eq!(tangent.magnitude(), 1.0, epsilon = 1e-4);
            let position = path.position_at(t);
            assert!(position.x.is_finite() && position.z.is_finite());
        }
    }
}
