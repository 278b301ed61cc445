use crate::geom::Float3;

use super::path::TrackPath;
use super::segment::NormalKeyframe;

/// The banking ("roll") vector field along the whole path: every segment's
/// local keyframes remapped into that segment's arc-length slice of [0, 1]
/// and flattened into one ascending-sorted list.
#[derive(Debug, Clone)]
pub struct BankingField {
    keyframes: Vec<NormalKeyframe>,
}

impl BankingField {
    pub fn new(path: &TrackPath) -> Self {
        let total = path.total_length();
        let cumulative = path.cumulative_lengths();
        let mut keyframes = Vec::new();

        for (i, segment) in path.segments().iter().enumerate() {
            let start = if i == 0 { 0.0 } else { cumulative[i - 1] / total };
            let end = cumulative[i] / total;
            let span = end - start;
            for key in &segment.normals {
                keyframes.push(NormalKeyframe {
                    t: start + span * key.t,
                    normal: key.normal,
                });
            }
        }

        Self { keyframes }
    }

    pub fn keyframes(&self) -> &[NormalKeyframe] {
        &self.keyframes
    }

    /// Interpolated unit normal at global parameter `t` (clamped to [0, 1]).
    /// Binary search for the bounding keyframe pair, then vector lerp and
    /// re-normalize; bank angles are bounded and keys dense enough that a
    /// spherical lerp is not needed.
    pub fn normal_at(&self, t: f32) -> Float3 {
        if self.keyframes.len() < 2 {
            return self
                .keyframes
                .first()
                .map_or(Float3::UP, |key| key.normal);
        }

        let t = t.clamp(0.0, 1.0);
        let upper = if t >= 1.0 {
            self.keyframes.len() - 1
        } else {
            self.keyframes
                .partition_point(|key| key.t <= t)
                .min(self.keyframes.len() - 1)
        };
        let lower = upper.saturating_sub(1);

        let a = self.keyframes[lower];
        let b = self.keyframes[upper];
        let span = b.t - a.t;
        // Duplicate keyframe times are disallowed by construction; guard the
        // division anyway.
        let local = if span > 0.0 { (t - a.t) / span } else { 0.0 };
        a.normal.lerp(b.normal, local).normalize()
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

    fn field_for(pieces: &[&str]) -> BankingField {
        let mut rng = SmallRng::seed_from_u64(0);
        let segments = compose(pieces, &GenerationParams::unscaled(), &mut rng).unwrap();
        BankingField::new(&TrackPath::new(segments))
    }

    #[test]
    fn keyframes_cover_the_unit_interval_in_order() {
        let field = field_for(&["leftTurn", "rightTurn", "leftUTurn"]);
        let keys = field.keyframes();
        assert_eq!(keys.first().unwrap().t, 0.0);
        assert_relative_eq!(keys.last().unwrap().t, 1.0, epsilon = TOLERANCE);
        for pair in keys.windows(2) {
            assert!(pair[0].t <= pair[1].t, "keyframes out of order");
        }
    }

    #[test]
    fn single_segment_keeps_local_keyframe_times() {
        let field = field_for(&["leftTurn"]);
        let times: Vec<f32> = field.keyframes().iter().map(|key| key.t).collect();
        assert_eq!(times, vec![0.0, 0.4, 0.6, 1.0]);
    }

    #[test]
    fn query_on_a_keyframe_returns_its_normal() {
        let field = field_for(&["leftTurn"]);
        let keyed = field.keyframes()[1];
        let queried = field.normal_at(keyed.t);
        assert_relative_eq!(queried.x, keyed.normal.x, epsilon = TOLERANCE);
        assert_relative_eq!(queried.y, keyed.normal.y, epsilon = TOLERANCE);
        assert_relative_eq!(queried.z, keyed.normal.z, epsilon = TOLERANCE);
    }

    #[test]
    fn interpolated_normals_are_unit_length() {
        let field = field_for(&["leftTurn", "rightUTurn", "straight"]);
        for i in 0..=100 {
            let normal = field.normal_at(i as f32 / 100.0);
            assert_relative_eq!(normal.magnitude(), 1.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn boundary_queries_do_not_fail() {
        let field = field_for(&["leftUTurn"]);
        assert_relative_eq!(field.normal_at(0.0).y, 1.0, epsilon = TOLERANCE);
        // t = 1 uses the last keyframe as the upper bound.
        assert_relative_eq!(field.normal_at(1.0).y, 1.0, epsilon = TOLERANCE);
        // Clamping, not failure, outside [0, 1].
        assert_relative_eq!(field.normal_at(2.0).y, 1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn unbanked_straight_keeps_the_up_normal() {
        let field = field_for(&["straight", "straight"]);
        for i in 0..=20 {
            let normal = field.normal_at(i as f32 / 20.0);
            assert_relative_eq!(normal.y, 1.0, epsilon = TOLERANCE);
        }
    }
}
