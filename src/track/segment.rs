use rand::Rng;

use crate::error::TrackError;
use crate::geom::{CubicBezier, Float3, Quaternion};

use super::catalog;
use super::params::GenerationParams;

/// A banking sample in world space: `t` is the local arc fraction within the
/// owning segment, `normal` the unit up-vector rolled about the tangent there.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NormalKeyframe {
    pub t: f32,
    pub normal: Float3,
}

/// A prefab instantiated into world space. Created once per generation pass
/// and consumed read-only downstream; regeneration replaces it wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedSegment {
    pub curve: CubicBezier,
    pub normals: Vec<NormalKeyframe>,
    /// Elevation at the segment's start, filled in by the elevation pass.
    pub enter_height: f32,
}

/// Signed yaw between the current heading and the canonical forward axis,
/// measured about the vertical axis.
fn heading_yaw(heading: Float3) -> f32 {
    heading
        .cross(Float3::FORWARD)
        .dot(Float3::DOWN)
        .atan2(Float3::FORWARD.dot(heading))
}

/// Chains prefab pieces into globally-positioned segments.
///
/// Each piece is scaled by a uniform draw from the configured range, yawed so
/// its local forward axis lines up with the running entry heading, and
/// translated to the running entry point. The next entry point/heading come
/// from the placed curve's last control edge, which guarantees a C1 join.
///
/// An unknown piece name aborts the whole composition with no partial result.
pub fn compose<R: Rng>(
    pieces: &[&str],
    params: &GenerationParams,
    rng: &mut R,
) -> Result<Vec<PlacedSegment>, TrackError> {
    params.validate()?;

    let mut enter_heading = Float3::FORWARD;
    let mut enter_point = Float3::ZERO;
    let mut segments = Vec::with_capacity(pieces.len());

    for &piece in pieces {
        let prefab = catalog::lookup(piece)?;

        let yaw = heading_yaw(enter_heading);
        let rotation = Quaternion::from_axis_angle(Float3::UP, yaw);
        let scale = rng.random_range(params.min_scale..=params.max_scale);

        let [a, b, c, d] = prefab
            .control_points
            .map(|p| rotation.mul_vec(p * scale) + enter_point);
        let curve = CubicBezier::new([a, b, c, d]);

        enter_heading = (d - c).normalize();
        enter_point = d;

        let mut normals: Vec<NormalKeyframe> = prefab
            .bank_angles
            .iter()
            .map(|key| NormalKeyframe {
                t: key.t,
                normal: Quaternion::from_axis_angle(curve.tangent_at_arc(key.t), key.angle)
                    .mul_vec(Float3::UP),
            })
            .collect();

        // Banking must be defined at the segment-end boundary: append a
        // zero-bank key at t=1 when the prefab does not provide one.
        if normals.last().map_or(true, |key| key.t < 1.0) {
            normals.push(NormalKeyframe {
                t: 1.0,
                normal: Float3::UP,
            });
        }

        segments.push(PlacedSegment {
            curve,
            normals,
            enter_height: 0.0,
        });
    }

    Ok(segments)
}

/// Draws a random piece list from the catalog, `params.piece_count` long.
pub fn generate_pieces<R: Rng>(
    params: &GenerationParams,
    rng: &mut R,
) -> Result<Vec<&'static str>, TrackError> {
    params.validate()?;
    let names = catalog::piece_names();
    Ok((0..params.piece_count)
        .map(|_| names[rng.random_range(0..names.len())])
        .collect())
}
