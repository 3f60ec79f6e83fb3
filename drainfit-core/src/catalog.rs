//! Ordered product/pattern catalog.
//!
//! Product order is priority order across products; pattern order is the
//! preference order within a product. A [`Catalog`] is loaded once and only
//! ever read afterwards, so one instance can be shared (e.g. behind an `Arc`)
//! by any number of concurrent selections.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{error::CatalogError, polygon::Polygon};

/// One concrete drainfield layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    /// e.g. the trench segment lengths, `"10-10-10"`
    pub id: String,
    /// Minimum-clearance footprint, local coordinates; this is what must fit.
    pub shoulder: Polygon,
    /// Visual footprint, local coordinates; only used for placement.
    pub drainfield: Polygon,
    /// Stored credit in sq ft. Never recomputed from `shoulder`.
    pub credited_area: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_pieces: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_rectangular: Option<bool>,
}

impl Pattern {
    pub fn new(id: impl Into<String>, shoulder: Polygon, drainfield: Polygon, credited_area: f64) -> Self {
        Pattern {
            id: id.into(),
            shoulder,
            drainfield,
            credited_area,
            num_pieces: None,
            is_rectangular: None,
        }
    }

    /// Pattern whose drainfield footprint is its shoulder.
    pub fn with_shoulder(id: impl Into<String>, shoulder: Polygon, credited_area: f64) -> Self {
        let drainfield = shoulder.clone();
        Pattern::new(id, shoulder, drainfield, credited_area)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub patterns: Vec<Pattern>,
}

impl Product {
    pub fn new(id: impl Into<String>, patterns: Vec<Pattern>) -> Self {
        Product { id: id.into(), patterns }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        Catalog::from_json(&fs::read_to_string(path)?)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Every (product, pattern) pair, in priority order.
    pub fn pairs(&self) -> impl Iterator<Item = (&Product, &Pattern)> {
        self.products
            .iter()
            .flat_map(|product| product.patterns.iter().map(move |pattern| (product, pattern)))
    }

    /// Look up a pattern by product and pattern id.
    pub fn pattern(&self, product: &str, pattern: &str) -> Option<&Pattern> {
        self.pairs()
            .find(|(p, q)| p.id == product && q.id == pattern)
            .map(|(_, q)| q)
    }

    pub fn is_empty(&self) -> bool {
        self.products.iter().all(|p| p.patterns.is_empty())
    }
}
