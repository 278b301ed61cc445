use crate::geom::Float3;

use super::spline::Track;

/// Renderable ribbon geometry: a flat vertex buffer plus triangle indices.
#[derive(Debug, Clone, PartialEq)]
pub struct RibbonMesh {
    pub vertices: Vec<Float3>,
    pub triangles: Vec<[u32; 3]>,
}

impl RibbonMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}

/// Samples the track at `divisions` steps and emits a two-triangle quad strip
/// per step, like this:
///
/// ```text
/// ____
/// | /|
/// |/_|
/// ```
///
/// The flat ends of each quad are rotated along the banking normals, so the
/// ribbon twists with the track rather than staying flat against a global up.
pub fn build_ribbon(track: &Track, divisions: usize, width: f32) -> RibbonMesh {
    let step = 1.0 / divisions as f32;
    let mut vertices = Vec::with_capacity(divisions * 6);
    let mut triangles = Vec::with_capacity(divisions * 2);

    for i in 0..divisions {
        let t = i as f32 * step;
        // The final step is clamped exactly to 1 rather than overshooting.
        let next_t = if i + 1 == divisions {
            1.0
        } else {
            (i + 1) as f32 * step
        };

        let cur = track.position_at(t);
        let next = track.position_at(next_t);
        let offset = lateral_offset(track, t, width);
        let next_offset = lateral_offset(track, next_t, width);

        let base = vertices.len() as u32;
        vertices.extend([
            // triangle one
            cur + offset,
            next + next_offset,
            cur - offset,
            // triangle two
            cur - offset,
            next + next_offset,
            next - next_offset,
        ]);
        triangles.push([base, base + 1, base + 2]);
        triangles.push([base + 3, base + 4, base + 5]);
    }

    RibbonMesh {
        vertices,
        triangles,
    }
}

/// Cross-section axis at `t`, scaled to the ribbon width. The banking normal
/// is trusted to be near-perpendicular to the tangent; it is deliberately not
/// re-orthogonalized first, so a skewed keyframe normal skews the section.
fn lateral_offset(track: &Track, t: f32, width: f32) -> Float3 {
    track
        .tangent_at(t)
        .cross(track.normal_at(t))
        .normalize()
        * width
}
