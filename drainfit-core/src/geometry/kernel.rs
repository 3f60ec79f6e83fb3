//! Geometry abstraction used by the fit tester and the selector.
//!
//! The search only ever talks to a [`Kernel`]; [`Planar`] is the one
//! implementation, backed by [`Polygon`]'s closed-form operations.

use crate::{config::FitConfig, error::GeometryError, polygon::Polygon, r2::R2};

pub trait Kernel {
    fn area(&self, polygon: &Polygon) -> f64;
    /// Area-weighted centroid; `DegenerateGeometry` when the area is ~0.
    fn centroid(&self, polygon: &Polygon) -> Result<R2<f64>, GeometryError>;
    fn rotate(&self, polygon: &Polygon, degrees: f64, origin: R2<f64>) -> Polygon;
    fn translate(&self, polygon: &Polygon, dx: f64, dy: f64) -> Polygon;
    fn contains(&self, outer: &Polygon, inner: &Polygon, tolerance: f64) -> bool;
    /// Simple, non-degenerate, at least 3 vertices.
    fn validate(&self, polygon: &Polygon) -> Result<(), GeometryError>;
}

/// Euclidean plane, f64 coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Planar {
    pub area_eps: f64,
}

impl Default for Planar {
    fn default() -> Self {
        Planar { area_eps: 1e-9 }
    }
}

impl From<&FitConfig> for Planar {
    fn from(cfg: &FitConfig) -> Self {
        Planar { area_eps: cfg.area_eps }
    }
}

impl Kernel for Planar {
    fn area(&self, polygon: &Polygon) -> f64 {
        polygon.area()
    }
    fn centroid(&self, polygon: &Polygon) -> Result<R2<f64>, GeometryError> {
        polygon.centroid(self.area_eps)
    }
    fn rotate(&self, polygon: &Polygon, degrees: f64, origin: R2<f64>) -> Polygon {
        polygon.rotate(degrees, origin)
    }
    fn translate(&self, polygon: &Polygon, dx: f64, dy: f64) -> Polygon {
        polygon.translate(dx, dy)
    }
    fn contains(&self, outer: &Polygon, inner: &Polygon, tolerance: f64) -> bool {
        outer.contains_polygon(inner, tolerance)
    }
    fn validate(&self, polygon: &Polygon) -> Result<(), GeometryError> {
        polygon.validate(self.area_eps)
    }
}
