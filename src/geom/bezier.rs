use super::Float3;

/// Number of chord samples used to build the arc-length table.
const ARC_SAMPLES: usize = 200;

/// Derivative magnitudes below this are treated as degenerate (prefabs repeat
/// control points, which zeroes the analytic derivative at the endpoints).
const DEGENERATE_EPS: f32 = 1e-6;

/// Cubic Bezier curve with a precomputed arc-length table, so callers can
/// sample it by fractional distance traveled instead of by raw parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicBezier {
    points: [Float3; 4],
    /// Cumulative chord lengths at parameters i / ARC_SAMPLES, starting at 0.
    lengths: Vec<f32>,
}

impl CubicBezier {
    pub fn new(points: [Float3; 4]) -> Self {
        let mut lengths = Vec::with_capacity(ARC_SAMPLES + 1);
        lengths.push(0.0);

        let mut prev = points[0];
        let mut sum = 0.0;
        for i in 1..=ARC_SAMPLES {
            let current = evaluate(&points, i as f32 / ARC_SAMPLES as f32);
            sum += (current - prev).magnitude();
            lengths.push(sum);
            prev = current;
        }

        Self { points, lengths }
    }

    pub fn points(&self) -> &[Float3; 4] {
        &self.points
    }

    pub fn start(&self) -> Float3 {
        self.points[0]
    }

    pub fn end(&self) -> Float3 {
        self.points[3]
    }

    /// Total arc length of the curve.
    pub fn length(&self) -> f32 {
        self.lengths[ARC_SAMPLES]
    }

    /// Position at raw curve parameter `t` in [0, 1].
    pub fn point(&self, t: f32) -> Float3 {
        evaluate(&self.points, t)
    }

    /// First derivative at raw curve parameter `t`. May be zero where control
    /// points coincide; use `tangent` for a direction that is always defined.
    pub fn derivative(&self, t: f32) -> Float3 {
        let [a, b, c, d] = self.points;
        let u = 1.0 - t;
        (b - a) * (3.0 * u * u) + (c - b) * (6.0 * u * t) + (d - c) * (3.0 * t * t)
    }

    /// Unit tangent at raw curve parameter `t`.
    pub fn tangent(&self, t: f32) -> Float3 {
        let d = self.derivative(t);
        if d.magnitude() > DEGENERATE_EPS {
            return d.normalize();
        }

        // Coincident control points collapse the derivative at an endpoint;
        // the limit tangent follows the first non-degenerate control edge.
        let p = self.points;
        let edges = if t < 0.5 {
            [p[1] - p[0], p[2] - p[1], p[3] - p[2]]
        } else {
            [p[3] - p[2], p[2] - p[1], p[1] - p[0]]
        };
        for edge in edges {
            if edge.magnitude() > DEGENERATE_EPS {
                return edge.normalize();
            }
        }
        Float3::ZERO
    }

    /// Position at fractional arc length `u` in [0, 1].
    pub fn point_at_arc(&self, u: f32) -> Float3 {
        self.point(self.u_to_t(u))
    }

    /// Unit tangent at fractional arc length `u` in [0, 1].
    pub fn tangent_at_arc(&self, u: f32) -> Float3 {
        self.tangent(self.u_to_t(u))
    }

    /// Maps a fractional arc length to the raw curve parameter, via binary
    /// search over the cumulative length table plus linear interpolation.
    pub fn u_to_t(&self, u: f32) -> f32 {
        if u <= 0.0 {
            return 0.0;
        }
        if u >= 1.0 {
            return 1.0;
        }

        let target = u * self.length();
        let hi = self.lengths.partition_point(|&len| len <= target);
        let lo = hi.saturating_sub(1).min(ARC_SAMPLES - 1);

        let span = self.lengths[lo + 1] - self.lengths[lo];
        let frac = if span > 0.0 {
            (target - self.lengths[lo]) / span
        } else {
            0.0
        };

        (lo as f32 + frac) / ARC_SAMPLES as f32
    }
}

fn evaluate(points: &[Float3; 4], t: f32) -> Float3 {
    let [a, b, c, d] = *points;
    let u = 1.0 - t;
    a * (u * u * u) + b * (3.0 * u * u * t) + c * (3.0 * u * t * t) + d * (t * t * t)
}
