//! Rigid-transform search for one footprint inside one boundary.
//!
//! Candidate angles come in two tiers, tried in order:
//! 1. edge-aligned: each boundary edge's direction mod 90°, deduplicated, ascending;
//!    each such direction θ is tried as θ, θ+90, θ+180 and θ+270, so either of the
//!    footprint's axes can run along the edge, facing either way;
//! 2. fallback: a fixed sweep `0, step, 2·step, … < 360`, minus angles already tried.
//!
//! For each angle the footprint is rotated about its own centroid, then
//! translated so that centroid lands on the boundary's centroid, and only then
//! tested for containment. Nothing depends on where the footprint was
//! authored, or where the boundary sits: moving the boundary by (Δx, Δy) moves
//! the translation by the same amount and changes nothing else.

use itertools::Itertools;
use log::{debug, trace};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::{
    config::FitConfig,
    error::GeometryError,
    kernel::{Kernel, Planar},
    polygon::Polygon,
    r2::R2,
};

/// Which candidate tier produced an angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleSource {
    EdgeAligned,
    Fallback,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fit {
    pub angle: f64,
    pub source: AngleSource,
    /// Moves the rotated footprint's centroid onto the boundary centroid.
    pub translation: R2<f64>,
    /// Footprint after rotation and translation; contained in the boundary.
    pub positioned: Polygon,
}

/// Boundary-side state for a run of fits: the boundary, its centroid, and both angle tiers.
///
/// Built once per selection and reused for every pattern.
#[derive(Clone, Debug)]
pub struct FitTester<'a, K: Kernel = Planar> {
    kernel: K,
    boundary: &'a Polygon,
    boundary_centroid: R2<f64>,
    edge_angles: Vec<f64>,
    fallback_angles: Vec<f64>,
    tolerance: f64,
}

impl<'a> FitTester<'a, Planar> {
    pub fn new(boundary: &'a Polygon, cfg: &FitConfig) -> Result<Self, GeometryError> {
        FitTester::with_kernel(Planar::from(cfg), boundary, cfg)
    }
}

impl<'a, K: Kernel> FitTester<'a, K> {
    pub fn with_kernel(kernel: K, boundary: &'a Polygon, cfg: &FitConfig) -> Result<Self, GeometryError> {
        let boundary_centroid = kernel.centroid(boundary)?;
        let edge_angles = quarter_turns(&edge_aligned_angles(boundary, cfg), cfg);
        let fallback_angles = fallback_angles(cfg)
            .into_iter()
            .filter(|a| !edge_angles.contains(a))
            .collect();
        debug!(
            "boundary centroid {}, edge-aligned angles {:?}",
            boundary_centroid, edge_angles,
        );
        Ok(FitTester {
            kernel,
            boundary,
            boundary_centroid,
            edge_angles,
            fallback_angles,
            tolerance: cfg.tolerance,
        })
    }

    pub fn boundary_centroid(&self) -> R2<f64> {
        self.boundary_centroid
    }

    /// Edge-aligned candidates, in the order they are tried.
    pub fn edge_angles(&self) -> &[f64] {
        &self.edge_angles
    }

    pub fn fallback_angles(&self) -> &[f64] {
        &self.fallback_angles
    }

    /// Candidate angles in the order they are tried.
    pub fn candidates(&self) -> impl Iterator<Item = (f64, AngleSource)> + '_ {
        self.edge_angles
            .iter()
            .map(|&a| (a, AngleSource::EdgeAligned))
            .chain(self.fallback_angles.iter().map(|&a| (a, AngleSource::Fallback)))
    }

    /// First candidate angle at which `shoulder` fits, or `None`.
    ///
    /// Fails only if `shoulder` itself is degenerate.
    pub fn try_fit(&self, shoulder: &Polygon) -> Result<Option<Fit>, GeometryError> {
        let origin = self.kernel.centroid(shoulder)?;
        for (angle, source) in self.candidates() {
            let rotated = self.kernel.rotate(shoulder, angle, origin);
            let translation = self.boundary_centroid - self.kernel.centroid(&rotated)?;
            let positioned = self.kernel.translate(&rotated, translation.x, translation.y);
            if self.kernel.contains(self.boundary, &positioned, self.tolerance) {
                debug!("fit at {}° ({:?}), translation {}", angle, source, translation);
                return Ok(Some(Fit { angle, source, translation, positioned }));
            }
            trace!("no fit at {}°", angle);
        }
        Ok(None)
    }
}

/// One-shot form of [`FitTester::try_fit`].
pub fn try_fit(shoulder: &Polygon, boundary: &Polygon, cfg: &FitConfig) -> Result<Option<Fit>, GeometryError> {
    FitTester::new(boundary, cfg)?.try_fit(shoulder)
}

/// Direction of each boundary edge mod 90°, snapped to the angle grid, deduplicated, ascending.
pub fn edge_aligned_angles(boundary: &Polygon, cfg: &FitConfig) -> Vec<f64> {
    let mut angles: Vec<f64> = boundary
        .edges()
        .filter(|(a, b)| a != b)
        .map(|(a, b)| {
            let d = b - a;
            cfg.quantize(d.y.atan2(d.x).to_degrees(), 90.)
        })
        .collect();
    angles.sort_by_key(|a| OrderedFloat(*a));
    angles.dedup();
    angles
}

/// Each edge direction followed by its three quarter turns, on the [0, 360) grid; repeats dropped.
pub fn quarter_turns(directions: &[f64], cfg: &FitConfig) -> Vec<f64> {
    directions
        .iter()
        .flat_map(|d| (0..4).map(move |k| cfg.quantize(d + 90. * k as f64, 360.)))
        .unique_by(|a| OrderedFloat(*a))
        .collect()
}

/// `0, step, 2·step, …` below 360, snapped to the angle grid.
pub fn fallback_angles(cfg: &FitConfig) -> Vec<f64> {
    let step = cfg.fallback_step_deg;
    if step <= 0. || !step.is_finite() {
        return vec![0.];
    }
    let n = (360. / step).ceil() as usize;
    let mut angles: Vec<f64> = (0..n)
        .map(|i| i as f64 * step)
        .filter(|a| *a < 360.)
        .map(|a| cfg.quantize(a, 360.))
        .collect();
    angles.dedup();
    angles
}
