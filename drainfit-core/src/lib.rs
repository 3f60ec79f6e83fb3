#[cfg_attr(not(test), allow(unused_imports))]
#[macro_use]
extern crate approx;

// Organized modules
pub mod geometry;

pub mod catalog;
pub mod config;
pub mod error;
pub mod fit;
pub mod hierarchy;
pub mod placement;
pub mod select;
pub mod sizing;

pub use geometry::kernel;
pub use geometry::polygon;
pub use geometry::r2;
pub use geometry::transform;

// Re-export key types for external use
pub use catalog::{Catalog, Pattern, Product};
pub use config::FitConfig;
pub use error::{CatalogError, ConfigError, GeometryError, ValidationError};
pub use fit::{try_fit, Fit, FitTester};
pub use hierarchy::{apply_hierarchy, CatalogSet, Plan};
pub use placement::{place, Placement};
pub use polygon::Polygon;
pub use r2::R2;
pub use select::{select, NoFitFound, Selection, SelectionResult};
pub use sizing::ConfigType;

/// Parse a log level string into LevelFilter.
pub fn parse_log_level(level: Option<&str>) -> Result<log::LevelFilter, error::LogLevelError> {
    match level {
        Some("error") => Ok(log::LevelFilter::Error),
        Some("warn") => Ok(log::LevelFilter::Warn),
        Some("info") | Some("") | None => Ok(log::LevelFilter::Info),
        Some("debug") => Ok(log::LevelFilter::Debug),
        Some("trace") => Ok(log::LevelFilter::Trace),
        Some(level) => Err(error::LogLevelError(level.to_string())),
    }
}
