use serde::{Deserialize, Serialize};

use crate::{
    catalog::Pattern,
    error::GeometryError,
    polygon::Polygon,
    select::SelectionResult,
    transform::{CanTransform, Transform},
};

/// A pattern's footprints in absolute (boundary) coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub shoulder: Polygon,
    pub drainfield: Polygon,
}

/// Rotation about the authored shoulder centroid, then the selection's translation.
pub fn placement_transforms(pattern: &Pattern, result: &SelectionResult, area_eps: f64) -> Result<[Transform; 2], GeometryError> {
    let origin = pattern.shoulder.centroid(area_eps)?;
    Ok([
        Transform::Rotate { degrees: result.rotation, origin },
        Transform::Translate(result.translation),
    ])
}

/// Position `pattern`'s shoulder and drainfield footprints as `result` prescribes.
pub fn place(pattern: &Pattern, result: &SelectionResult, area_eps: f64) -> Result<Placement, GeometryError> {
    let transforms = placement_transforms(pattern, result, area_eps)?;
    Ok(Placement {
        shoulder: pattern.shoulder.apply(&transforms),
        drainfield: pattern.drainfield.apply(&transforms),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::{Catalog, Product}, config::FitConfig, r2::R2, select::select};

    #[test]
    fn placed_shoulder_matches_validated_one() {
        // Shoulder authored far from the origin, drainfield inset by 1 ft
        let shoulder = Polygon::rect(300., 400., 30., 10.);
        let drainfield = Polygon::rect(301., 401., 28., 8.);
        let pattern = Pattern::new("p", shoulder, drainfield, 300.);
        let catalog = Catalog::new(vec![Product::new("x", vec![pattern.clone()])]);

        // 12×40 strip tilted 30°
        let boundary = Polygon::rect(0., 0., 40., 12.).rotate(30., R2::zero()).translate(-50., 20.);
        let cfg = FitConfig::default();
        let result = select(&catalog, &boundary, 250., &cfg).unwrap().into_fit().unwrap();
        assert_relative_eq!(result.rotation, 30., epsilon = 1e-6);

        let placement = place(&pattern, &result, cfg.area_eps).unwrap();
        for (placed, validated) in placement.shoulder.vertices.iter().zip(&result.positioned_shoulder.vertices) {
            assert_relative_eq!(placed, validated, epsilon = 1e-9);
        }
        assert!(boundary.contains_polygon(&placement.drainfield, cfg.tolerance));
        assert_relative_eq!(
            placement.drainfield.centroid(1e-9).unwrap(),
            boundary.centroid(1e-9).unwrap(),
            epsilon = 1e-9,
        );
    }
}
