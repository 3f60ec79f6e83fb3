//! Priority-ordered selection over a [`Catalog`].
//!
//! Products are tried in catalog order and patterns in declaration order; the
//! first pattern that meets the required area and fits wins. A later product
//! is never preferred over an earlier one that fits, however much better its
//! own fit would be.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    catalog::{Catalog, Pattern, Product},
    config::FitConfig,
    error::{GeometryError, ValidationError},
    fit::{AngleSource, Fit, FitTester},
    kernel::{Kernel, Planar},
    polygon::Polygon,
    r2::R2,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    pub product: String,
    pub pattern: String,
}

impl Attempt {
    fn new(product: &Product, pattern: &Pattern) -> Self {
        Attempt { product: product.id.clone(), pattern: pattern.id.clone() }
    }
}

/// Pattern skipped because its own geometry is malformed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InvalidPattern {
    pub product: String,
    pub pattern: String,
    pub reason: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    pub product: String,
    pub pattern: String,
    /// Counter-clockwise, degrees, about the shoulder's authored centroid.
    pub rotation: f64,
    /// Boundary centroid minus the authored (unrotated) shoulder centroid.
    /// Placement applies the rotation first, then this offset.
    pub translation: R2<f64>,
    /// The pattern's stored credit, not the shoulder's geometric area.
    pub credited_area: f64,
    pub angle_source: AngleSource,
    /// Shoulder as validated against the boundary.
    pub positioned_shoulder: Polygon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_pieces: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_rectangular: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NoFitFound {
    /// Every pair that passed the area pre-filter, in the order tried.
    pub attempted: Vec<Attempt>,
    /// Largest credit among attempted patterns that did not fit.
    pub largest_failed_area: Option<f64>,
    /// Pairs skipped because their shoulder geometry is malformed.
    pub invalid: Vec<InvalidPattern>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Selection {
    Fit(SelectionResult),
    NoFit(NoFitFound),
}

impl Selection {
    pub fn fit(&self) -> Option<&SelectionResult> {
        match self {
            Selection::Fit(r) => Some(r),
            Selection::NoFit(_) => None,
        }
    }

    pub fn into_fit(self) -> Option<SelectionResult> {
        match self {
            Selection::Fit(r) => Some(r),
            Selection::NoFit(_) => None,
        }
    }

    pub fn is_fit(&self) -> bool {
        matches!(self, Selection::Fit(_))
    }
}

/// Select a product/pattern for `boundary` using the [`Planar`] kernel.
pub fn select(
    catalog: &Catalog,
    boundary: &Polygon,
    required_area: f64,
    cfg: &FitConfig,
) -> Result<Selection, ValidationError> {
    select_with(&Planar::from(cfg), catalog, boundary, required_area, cfg)
}

/// Check the per-call inputs: sane fit parameters, a usable boundary and a positive requirement.
pub fn validate_inputs<K: Kernel>(
    kernel: &K,
    boundary: &Polygon,
    required_area: f64,
    cfg: &FitConfig,
) -> Result<(), ValidationError> {
    cfg.validate()?;
    if required_area <= 0. || !required_area.is_finite() {
        return Err(ValidationError::NonPositiveRequirement(required_area));
    }
    kernel.validate(boundary)?;
    let area = kernel.area(boundary);
    if area < cfg.min_boundary_area {
        return Err(ValidationError::BoundaryTooSmall { area, min: cfg.min_boundary_area });
    }
    Ok(())
}

pub fn select_with<K: Kernel + Clone>(
    kernel: &K,
    catalog: &Catalog,
    boundary: &Polygon,
    required_area: f64,
    cfg: &FitConfig,
) -> Result<Selection, ValidationError> {
    validate_inputs(kernel, boundary, required_area, cfg)?;
    let tester = FitTester::with_kernel(kernel.clone(), boundary, cfg)?;
    let boundary_centroid = tester.boundary_centroid();

    let mut no_fit = NoFitFound::default();
    for (product, pattern) in catalog.pairs() {
        if pattern.credited_area < required_area {
            debug!(
                "{}/{}: credit {} < required {}, skipping",
                product.id, pattern.id, pattern.credited_area, required_area,
            );
            continue;
        }
        let attempt = Attempt::new(product, pattern);
        match evaluate(kernel, &tester, pattern) {
            Ok(Some((fit, authored_centroid))) => {
                let result = SelectionResult {
                    product: product.id.clone(),
                    pattern: pattern.id.clone(),
                    rotation: fit.angle,
                    translation: boundary_centroid - authored_centroid,
                    credited_area: pattern.credited_area,
                    angle_source: fit.source,
                    positioned_shoulder: fit.positioned,
                    num_pieces: pattern.num_pieces,
                    is_rectangular: pattern.is_rectangular,
                };
                info!(
                    "selected {}/{} at {}°, translation {}, credit {}",
                    result.product, result.pattern, result.rotation, result.translation, result.credited_area,
                );
                return Ok(Selection::Fit(result));
            }
            Ok(None) => {
                debug!("{}/{}: no fit", product.id, pattern.id);
                no_fit.largest_failed_area = Some(
                    no_fit.largest_failed_area.map_or(pattern.credited_area, |a| a.max(pattern.credited_area)),
                );
                no_fit.attempted.push(attempt);
            }
            Err(e) => {
                warn!("{}/{}: skipping malformed shoulder: {}", product.id, pattern.id, e);
                no_fit.invalid.push(InvalidPattern {
                    product: attempt.product.clone(),
                    pattern: attempt.pattern.clone(),
                    reason: e.to_string(),
                });
                no_fit.attempted.push(attempt);
            }
        }
    }
    info!(
        "no fit for {} sq ft: {} attempted, {} invalid",
        required_area, no_fit.attempted.len(), no_fit.invalid.len(),
    );
    Ok(Selection::NoFit(no_fit))
}

/// Validate one pattern's shoulder and search it; geometry errors stay local to the pattern.
fn evaluate<K: Kernel>(
    kernel: &K,
    tester: &FitTester<'_, K>,
    pattern: &Pattern,
) -> Result<Option<(Fit, R2<f64>)>, GeometryError> {
    kernel.validate(&pattern.shoulder)?;
    let authored_centroid = kernel.centroid(&pattern.shoulder)?;
    Ok(tester.try_fit(&pattern.shoulder)?.map(|fit| (fit, authored_centroid)))
}
