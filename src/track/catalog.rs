use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::TrackError;
use crate::geom::Float3;

/// A bank-angle key in prefab space: `t` is the local arc fraction within the
/// piece, `angle` the roll in radians about the curve tangent at that point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BankKeyframe {
    pub t: f32,
    pub angle: f32,
}

impl BankKeyframe {
    pub const fn new(t: f32, angle: f32) -> Self {
        Self { t, angle }
    }
}

/// A named, reusable segment template: a cubic Bezier in a local frame where
/// the entry point is the origin and the initial tangent is `Float3::FORWARD`,
/// plus its banking keys (sorted ascending, always including `t = 0`).
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentPrefab {
    pub control_points: [Float3; 4],
    pub bank_angles: Vec<BankKeyframe>,
}

impl SegmentPrefab {
    pub fn new(control_points: [Float3; 4], bank_angles: Vec<BankKeyframe>) -> Self {
        Self {
            control_points,
            bank_angles,
        }
    }

    /// Mirror across the forward axis: the lateral coordinate of every control
    /// point and every bank angle flip sign. Forward direction and arc length
    /// are preserved, so `mirrored` is an involution.
    pub fn mirrored(&self) -> Self {
        Self {
            control_points: self
                .control_points
                .map(|p| Float3::new(-p.x, p.y, p.z)),
            bank_angles: self
                .bank_angles
                .iter()
                .map(|k| BankKeyframe::new(k.t, -k.angle))
                .collect(),
        }
    }
}

static CATALOG: OnceLock<HashMap<&'static str, SegmentPrefab>> = OnceLock::new();
static NAMES: OnceLock<Vec<&'static str>> = OnceLock::new();

/// The process-wide prefab catalog, built once on first use.
pub fn catalog() -> &'static HashMap<&'static str, SegmentPrefab> {
    CATALOG.get_or_init(build_catalog)
}

/// Catalog keys in a stable sorted order, so random piece draws are
/// reproducible under a seeded RNG.
pub fn piece_names() -> &'static [&'static str] {
    NAMES.get_or_init(|| {
        let mut names: Vec<&'static str> = catalog().keys().copied().collect();
        names.sort_unstable();
        names
    })
}

pub fn lookup(name: &str) -> Result<&'static SegmentPrefab, TrackError> {
    catalog()
        .get(name)
        .ok_or_else(|| TrackError::UnknownPrefab(name.to_string()))
}

fn build_catalog() -> HashMap<&'static str, SegmentPrefab> {
    let mut prefabs = HashMap::new();

    prefabs.insert(
        "leftTurn",
        SegmentPrefab::new(
            [
                Float3::ZERO,
                Float3::ZERO,
                Float3::new(0.0, 0.0, -1.0),
                Float3::new(-1.0, 0.0, -1.0),
            ],
            vec![
                BankKeyframe::new(0.0, 0.0),
                BankKeyframe::new(0.4, -(40.0f32.to_radians())),
                BankKeyframe::new(0.6, -(40.0f32.to_radians())),
            ],
        ),
    );

    prefabs.insert(
        "rightTurn",
        SegmentPrefab::new(
            [
                Float3::ZERO,
                Float3::ZERO,
                Float3::new(0.0, 0.0, -1.0),
                Float3::new(1.0, 0.0, -1.0),
            ],
            vec![
                BankKeyframe::new(0.0, 0.0),
                BankKeyframe::new(0.4, 25.0f32.to_radians()),
                BankKeyframe::new(0.6, 25.0f32.to_radians()),
            ],
        ),
    );

    prefabs.insert(
        "leftUTurn",
        SegmentPrefab::new(
            [
                Float3::ZERO,
                Float3::new(0.0, 0.0, -2.0),
                Float3::new(-2.0, 0.0, -2.0),
                Float3::new(-2.0, 0.0, 0.0),
            ],
            vec![
                BankKeyframe::new(0.0, 0.0),
                BankKeyframe::new(0.5, -(45.0f32.to_radians())),
            ],
        ),
    );

    prefabs.insert(
        "straight",
        SegmentPrefab::new(
            [
                Float3::ZERO,
                Float3::ZERO,
                Float3::ZERO,
                Float3::new(0.0, 0.0, -1.0),
            ],
            vec![BankKeyframe::new(0.0, 0.0)],
        ),
    );

    // Mirrored variants derived at startup.
    let right_u_turn = prefabs["leftUTurn"].mirrored();
    prefabs.insert("rightUTurn", right_u_turn);

    prefabs
}
