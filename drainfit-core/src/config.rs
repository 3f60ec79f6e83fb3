use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Finest fallback step; keeps the sweep to at most 36,000 angles.
pub const MIN_FALLBACK_STEP_DEG: f64 = 0.01;

/// Tolerances and search parameters shared by the fit tester and the selector.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    /// Containment slack in feet: an inner vertex may sit this far outside the boundary.
    pub tolerance: f64,
    /// Rings with |area| below this are degenerate.
    pub area_eps: f64,
    /// Smallest boundary accepted by `select`, in square feet.
    pub min_boundary_area: f64,
    /// Step of the fallback rotation sweep over [0, 360).
    pub fallback_step_deg: f64,
    /// Grid that candidate angles are snapped to.
    pub angle_precision: f64,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            area_eps: 1e-9,
            min_boundary_area: 1.0,
            fallback_step_deg: 5.0,
            angle_precision: 1e-6,
        }
    }
}

impl FitConfig {
    pub fn with_tolerance(self, tolerance: f64) -> Self {
        Self { tolerance, ..self }
    }

    /// Rejects values that would make the search meaningless (NaN angles, an unbounded sweep).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let check = |field, value: f64, range, ok: bool| {
            if ok && value.is_finite() {
                Ok(())
            } else {
                Err(ConfigError { field, value, range })
            }
        };
        check("tolerance", self.tolerance, "[0, ∞)", self.tolerance >= 0.)?;
        check("area_eps", self.area_eps, "[0, ∞)", self.area_eps >= 0.)?;
        check("min_boundary_area", self.min_boundary_area, "[0, ∞)", self.min_boundary_area >= 0.)?;
        check(
            "fallback_step_deg",
            self.fallback_step_deg,
            "[0.01, 360]",
            self.fallback_step_deg >= MIN_FALLBACK_STEP_DEG && self.fallback_step_deg <= 360.,
        )?;
        check(
            "angle_precision",
            self.angle_precision,
            "(0, 0.01]",
            self.angle_precision > 0. && self.angle_precision <= MIN_FALLBACK_STEP_DEG,
        )
    }

    /// Snap `degrees` onto the `angle_precision` grid, in [0, `modulus`).
    pub fn quantize(&self, degrees: f64, modulus: f64) -> f64 {
        let grid = (modulus / self.angle_precision).round();
        let steps = (degrees.rem_euclid(modulus) / self.angle_precision).round() % grid;
        steps * self.angle_precision
    }
}
