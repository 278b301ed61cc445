use rand::Rng;

use crate::error::TrackError;
use crate::geom::Float3;

use super::banking::BankingField;
use super::elevation::ElevationProfile;
use super::mesh::{build_ribbon, RibbonMesh};
use super::params::GenerationParams;
use super::path::TrackPath;
use super::segment::{self, generate_pieces};

/// The assembled track: path, banking field, and elevation profile behind a
/// single query surface.
///
/// Built as an immutable snapshot: every (re)build constructs complete new
/// sub-structures and only then swaps them in, so a failed rebuild leaves the
/// previous composite untouched and readers never see a partial state.
#[derive(Debug, Clone)]
pub struct Track {
    path: TrackPath,
    banking: BankingField,
    elevation: ElevationProfile,
    params: GenerationParams,
}

impl Track {
    /// Generates a track from a random piece list drawn from the catalog.
    pub fn generate<R: Rng>(params: &GenerationParams, rng: &mut R) -> Result<Self, TrackError> {
        let pieces = generate_pieces(params, rng)?;
        Self::compose(&pieces, params, rng)
    }

    /// Assembles a track from an explicit piece list.
    pub fn compose<R: Rng>(
        pieces: &[&str],
        params: &GenerationParams,
        rng: &mut R,
    ) -> Result<Self, TrackError> {
        params.validate()?;
        if pieces.is_empty() {
            return Err(TrackError::DegenerateParameters("piece list is empty"));
        }

        let mut segments = segment::compose(pieces, params, rng)?;
        let elevation = ElevationProfile::generate(segments.len(), params, rng);
        for (segment, &height) in segments.iter_mut().zip(elevation.heights()) {
            segment.enter_height = height;
        }

        let path = TrackPath::new(segments);
        let banking = BankingField::new(&path);
        Ok(Self {
            path,
            banking,
            elevation,
            params: *params,
        })
    }

    /// Redraws all elevation deltas; the planar shape is untouched.
    pub fn regenerate_heights<R: Rng>(&mut self, rng: &mut R) {
        let elevation =
            ElevationProfile::generate(self.path.segments().len(), &self.params, rng);
        self.path.set_enter_heights(elevation.heights());
        self.elevation = elevation;
    }

    /// Re-fits the elevation spline with a new tension; same heights.
    pub fn set_tension(&mut self, tension: f32) {
        self.params.tension = tension;
        self.elevation = self.elevation.with_tension(tension);
    }

    /// Changes the ribbon sampling density; geometry is unchanged.
    pub fn set_divisions_per_curve(&mut self, divisions: usize) -> Result<(), TrackError> {
        if divisions == 0 {
            return Err(TrackError::DegenerateParameters(
                "divisions per curve must be at least 1",
            ));
        }
        self.params.divisions_per_curve = divisions;
        Ok(())
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    pub fn path(&self) -> &TrackPath {
        &self.path
    }

    pub fn banking(&self) -> &BankingField {
        &self.banking
    }

    pub fn elevation(&self) -> &ElevationProfile {
        &self.elevation
    }

    /// Total number of ribbon sampling steps over the whole track.
    pub fn divisions(&self) -> usize {
        self.path.segments().len() * self.params.divisions_per_curve
    }

    /// Position at global `t`: the planar path position with its vertical
    /// channel overridden by the elevation profile.
    pub fn position_at(&self, t: f32) -> Float3 {
        let planar = self.path.position_at(t);
        Float3::new(planar.x, self.elevation.height_at(t), planar.z)
    }

    /// Unit tangent at global `t`. Tangents are computed on the flat path;
    /// elevation does not perturb them.
    pub fn tangent_at(&self, t: f32) -> Float3 {
        self.path.tangent_at(t)
    }

    /// Banking normal at global `t`.
    pub fn normal_at(&self, t: f32) -> Float3 {
        self.banking.normal_at(t)
    }

    /// Samples the track into a renderable two-triangle-per-step ribbon.
    pub fn ribbon_mesh(&self) -> RibbonMesh {
        build_ribbon(self, self.divisions(), self.params.width)
    }
}
