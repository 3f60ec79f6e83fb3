//! Input files: catalogs, boundaries, fit parameters.

use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use log::{info, warn};
use serde::de::DeserializeOwned;

use drainfit_core::{Catalog, FitConfig, Polygon};

fn read_json<T: DeserializeOwned>(path: &str) -> Result<T> {
    let file = File::open(Path::new(path)).with_context(|| format!("opening {}", path))?;
    serde_json::from_reader(BufReader::new(file)).with_context(|| format!("parsing {}", path))
}

pub fn catalog(path: &str) -> Result<Catalog> {
    let catalog = Catalog::from_path(path).with_context(|| format!("loading catalog {}", path))?;
    if catalog.is_empty() {
        warn!("{}: catalog has no patterns; nothing can be selected", path);
    }
    info!("{}: {} products, {} patterns", path, catalog.products().len(), catalog.pairs().count());
    Ok(catalog)
}

/// A boundary file holds a JSON array of `[x, y]` pairs; a trailing closing vertex is dropped.
pub fn boundary(path: &str) -> Result<Polygon> {
    let boundary: Polygon = read_json(path)?;
    let (lo, hi) = boundary.bounds();
    info!("{}: {} vertices, {:.1} sq ft, extent {} to {}", path, boundary.num_vertices(), boundary.area(), lo, hi);
    Ok(boundary)
}

/// A partial `FitConfig`; missing fields take their defaults.
pub fn config(path: &str) -> Result<FitConfig> {
    let cfg: FitConfig = read_json(path)?;
    cfg.validate().with_context(|| format!("checking {}", path))?;
    Ok(cfg)
}
