//! Caller-level configuration hierarchy: trench → bed → trench+ATU → bed+ATU
//! on one boundary, then the same four split across two sub-boundaries.
//!
//! Each step is an ordinary [`select`] call; splitting only changes which
//! boundary and what share of the requirement each call gets.

use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::Catalog,
    config::FitConfig,
    error::ValidationError,
    polygon::Polygon,
    select::{select, Selection, SelectionResult},
    sizing::{BaseType, ConfigType},
};

/// Catalogs per layout family.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSet {
    pub trench: Catalog,
    pub bed: Catalog,
}

impl CatalogSet {
    pub fn get(&self, base: BaseType) -> &Catalog {
        match base {
            BaseType::Trench => &self.trench,
            BaseType::Bed => &self.bed,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Plan {
    Single {
        config_type: ConfigType,
        required_area: f64,
        result: SelectionResult,
        attempted: Vec<String>,
    },
    Split {
        config_type: ConfigType,
        /// Requirement apportioned to each sub-boundary.
        required_area_each: f64,
        results: [SelectionResult; 2],
        attempted: Vec<String>,
    },
    /// Nothing fits the single boundary; the caller should supply two sub-boundaries.
    NeedsSplit { attempted: Vec<String> },
    /// Nothing fits even when split.
    NeedsRedesign { attempted: Vec<String> },
}

impl Plan {
    pub fn attempted(&self) -> &[String] {
        match self {
            Plan::Single { attempted, .. }
            | Plan::Split { attempted, .. }
            | Plan::NeedsSplit { attempted }
            | Plan::NeedsRedesign { attempted } => attempted,
        }
    }

    /// Placed selections, one per drainfield.
    pub fn results(&self) -> Vec<&SelectionResult> {
        match self {
            Plan::Single { result, .. } => vec![result],
            Plan::Split { results, .. } => results.iter().collect(),
            Plan::NeedsSplit { .. } | Plan::NeedsRedesign { .. } => vec![],
        }
    }
}

/// Each sub-boundary's share of a split requirement: half, rounded down, at least 1 sq ft.
pub fn split_share(required_area: f64) -> f64 {
    (required_area / 2.).floor().max(1.)
}

pub fn apply_hierarchy(
    catalogs: &CatalogSet,
    boundary: &Polygon,
    flow_gpd: f64,
    split: Option<&[Polygon; 2]>,
    cfg: &FitConfig,
) -> Result<Plan, ValidationError> {
    if flow_gpd <= 0. || !flow_gpd.is_finite() {
        return Err(ValidationError::NonPositiveFlow(flow_gpd));
    }
    let mut attempted = vec![];

    for config_type in ConfigType::ALL {
        let required_area = config_type.required_area(flow_gpd);
        let catalog = catalogs.get(config_type.base());
        attempted.push(config_type.to_string());
        if let Selection::Fit(result) = select(catalog, boundary, required_area, cfg)? {
            info!("{}: {}/{} fits {} sq ft", config_type, result.product, result.pattern, required_area);
            return Ok(Plan::Single { config_type, required_area, result, attempted });
        }
    }

    let Some(sub_boundaries) = split else {
        info!("no single-boundary configuration fits {} gpd; split needed", flow_gpd);
        return Ok(Plan::NeedsSplit { attempted });
    };

    for config_type in ConfigType::ALL {
        let required_area_each = split_share(config_type.required_area(flow_gpd));
        let catalog = catalogs.get(config_type.base());
        attempted.push(format!("split_{}", config_type));

        let mut results = Vec::with_capacity(2);
        for sub in sub_boundaries {
            match select(catalog, sub, required_area_each, cfg)? {
                Selection::Fit(result) => results.push(result),
                Selection::NoFit(_) => break,
            }
        }
        if let Ok(results) = <[SelectionResult; 2]>::try_from(results) {
            info!("split {}: both halves fit {} sq ft each", config_type, required_area_each);
            return Ok(Plan::Split { config_type, required_area_each, results, attempted });
        }
    }

    info!("no configuration fits {} gpd even when split", flow_gpd);
    Ok(Plan::NeedsRedesign { attempted })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Pattern, Product};

    fn cfg() -> FitConfig {
        FitConfig::default()
    }

    /// Trench catalog with one 20×20 pattern; bed catalog with one 10×40 pattern.
    fn catalogs(trench_credit: f64, bed_credit: f64) -> CatalogSet {
        CatalogSet {
            trench: Catalog::new(vec![Product::new("mps9", vec![
                Pattern::with_shoulder("t", Polygon::rect(0., 0., 20., 20.), trench_credit),
            ])]),
            bed: Catalog::new(vec![Product::new("mps9", vec![
                Pattern::with_shoulder("b", Polygon::rect(0., 0., 10., 40.), bed_credit),
            ])]),
        }
    }

    #[test]
    fn trench_first() {
        // 300 gpd: trench needs 375
        let plan = apply_hierarchy(&catalogs(400., 600.), &Polygon::rect(0., 0., 50., 50.), 300., None, &cfg()).unwrap();
        match plan {
            Plan::Single { config_type, required_area, result, attempted } => {
                assert_eq!(config_type, ConfigType::Trench);
                assert_eq!(required_area, 375.);
                assert_eq!(result.pattern, "t");
                assert_eq!(attempted, ["trench"]);
            }
            p => panic!("unexpected plan: {:?}", p),
        }
    }

    #[test]
    fn falls_through_to_bed_atu() {
        // Trench credit 300 covers only trench+ATU (282), but its 20×20 footprint
        // doesn't fit a 12×45 strip; the bed footprint does, and 400 covers bed+ATU (375)
        let boundary = Polygon::rect(0., 0., 12., 45.);
        let plan = apply_hierarchy(&catalogs(300., 400.), &boundary, 300., None, &cfg()).unwrap();
        match &plan {
            Plan::Single { config_type, result, .. } => {
                assert_eq!(*config_type, ConfigType::BedAtu);
                assert_eq!(result.pattern, "b");
            }
            p => panic!("unexpected plan: {:?}", p),
        }
        assert_eq!(plan.attempted(), ["trench", "bed", "trench_atu", "bed_atu"]);
    }

    #[test]
    fn needs_split_then_split() {
        let boundary = Polygon::rect(0., 0., 30., 30.);
        let set = catalogs(200., 100.);
        let plan = apply_hierarchy(&set, &boundary, 300., None, &cfg()).unwrap();
        assert_eq!(plan, Plan::NeedsSplit { attempted: vec!["trench".into(), "bed".into(), "trench_atu".into(), "bed_atu".into()] });

        // Each half gets floor(375 / 2) = 187 <= 200
        let halves = [Polygon::rect(0., 0., 25., 25.), Polygon::rect(100., 0., 25., 25.)];
        let plan = apply_hierarchy(&set, &boundary, 300., Some(&halves), &cfg()).unwrap();
        match &plan {
            Plan::Split { config_type, required_area_each, results, attempted } => {
                assert_eq!(*config_type, ConfigType::Trench);
                assert_eq!(*required_area_each, 187.);
                assert_relative_eq!(results[1].translation.x - results[0].translation.x, 100., epsilon = 1e-9);
                assert_eq!(attempted.last().map(String::as_str), Some("split_trench"));
            }
            p => panic!("unexpected plan: {:?}", p),
        }
        assert_eq!(plan.results().len(), 2);
    }

    #[test]
    fn needs_redesign() {
        let tiny = [Polygon::rect(0., 0., 5., 5.), Polygon::rect(10., 0., 5., 5.)];
        let plan = apply_hierarchy(&catalogs(1000., 1000.), &Polygon::rect(0., 0., 5., 5.), 300., Some(&tiny), &cfg()).unwrap();
        match plan {
            Plan::NeedsRedesign { attempted } => assert_eq!(attempted.len(), 8),
            p => panic!("unexpected plan: {:?}", p),
        }
    }

    #[test]
    fn invalid_flow() {
        let r = apply_hierarchy(&catalogs(1., 1.), &Polygon::rect(0., 0., 5., 5.), 0., None, &cfg());
        assert_eq!(r, Err(ValidationError::NonPositiveFlow(0.)));
    }

    #[test]
    fn split_share_floor() {
        assert_eq!(split_share(375.), 187.);
        assert_eq!(split_share(500.), 250.);
        assert_eq!(split_share(1.), 1.);
    }
}
