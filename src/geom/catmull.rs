/// One-dimensional Catmull-Rom spline with a tension coefficient.
///
/// The curve passes through every control value; the parameter maps uniformly
/// over control-point index (an open curve, endpoints are true endpoints).
/// Segment tangents are `tension * (p2 - p0)`, so a higher tension gives a
/// looser, more overshooting curve and a lower one a tighter, near-linear fit.
#[derive(Debug, Clone, PartialEq)]
pub struct CatmullRom1 {
    values: Vec<f32>,
    tension: f32,
}

impl CatmullRom1 {
    pub fn new(values: Vec<f32>, tension: f32) -> Self {
        debug_assert!(!values.is_empty(), "CatmullRom1 needs at least one value");
        Self { values, tension }
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn tension(&self) -> f32 {
        self.tension
    }

    /// Evaluates the spline at `t` in [0, 1]. Out-of-range queries clamp.
    pub fn sample(&self, t: f32) -> f32 {
        let n = self.values.len();
        if n == 1 {
            return self.values[0];
        }

        let p = (n - 1) as f32 * t.clamp(0.0, 1.0);
        let mut i = p.floor() as usize;
        let mut weight = p - i as f32;
        if i >= n - 1 {
            i = n - 2;
            weight = 1.0;
        }

        let p1 = self.values[i];
        let p2 = self.values[i + 1];
        // Missing neighbors at the open ends are extrapolated by reflection.
        let p0 = if i > 0 {
            self.values[i - 1]
        } else {
            2.0 * p1 - p2
        };
        let p3 = if i + 2 < n {
            self.values[i + 2]
        } else {
            2.0 * p2 - p1
        };

        let t0 = self.tension * (p2 - p0);
        let t1 = self.tension * (p3 - p1);
        hermite(p1, p2, t0, t1, weight)
    }
}

/// Cubic Hermite segment from `x0` to `x1` with tangents `v0`, `v1`.
fn hermite(x0: f32, x1: f32, v0: f32, v1: f32, t: f32) -> f32 {
    let c2 = -3.0 * x0 + 3.0 * x1 - 2.0 * v0 - v1;
    let c3 = 2.0 * x0 - 2.0 * x1 + v0 + v1;
    x0 + v0 * t + c2 * t * t + c3 * t * t * t
}
