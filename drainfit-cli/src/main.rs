//! Command-line driver for drainfield selection.
//!
//! - `select`: one catalog, one boundary, one required area
//! - `plan`: trench/bed catalogs and a flow, walked through the configuration hierarchy

mod load;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use log::debug;
use serde::Serialize;

use drainfit_core::{
    apply_hierarchy, place, select, CatalogSet, FitConfig, Placement, Plan, Selection,
};

#[derive(Parser)]
#[command(name = "drainfit")]
#[command(about = "Fit septic drainfield patterns into site boundaries", long_about = None)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("DRAINFIT_BUILD_SHA"), ")"))]
struct Cli {
    /// Containment slack in feet
    #[arg(long, global = true)]
    tolerance: Option<f64>,

    /// Fitting parameters (JSON); `--tolerance` overrides its tolerance
    #[arg(long, global = true)]
    config: Option<String>,

    /// error, warn, info, debug or trace
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Select the first product/pattern that fits one boundary
    Select {
        /// Catalog file (JSON)
        #[arg(short, long)]
        catalog: String,

        /// Boundary file: JSON array of [x, y] pairs
        #[arg(short, long)]
        boundary: String,

        /// Required absorption area, sq ft
        #[arg(short, long)]
        required: f64,
    },

    /// Walk trench → bed → trench+ATU → bed+ATU, then the split variants
    Plan {
        /// Trench catalog file (JSON)
        #[arg(long)]
        trench: String,

        /// Bed catalog file (JSON)
        #[arg(long)]
        bed: String,

        /// Boundary file: JSON array of [x, y] pairs
        #[arg(short, long)]
        boundary: String,

        /// Daily design flow, gallons per day
        #[arg(short, long)]
        flow: f64,

        /// Sub-boundary files for a split layout; pass exactly two
        #[arg(short, long, num_args = 1)]
        split: Vec<String>,
    },
}

#[derive(Serialize)]
struct PlanOutput {
    #[serde(flatten)]
    plan: Plan,
    placements: Vec<Placement>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = drainfit_core::parse_log_level(cli.log_level.as_deref())?;
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let mut cfg = match &cli.config {
        Some(path) => load::config(path)?,
        None => FitConfig::default(),
    };
    if let Some(tolerance) = cli.tolerance {
        cfg = cfg.with_tolerance(tolerance);
    }
    cfg.validate().context("invalid fit parameters")?;
    debug!("{:?}", cfg);

    match cli.command {
        Commands::Select { catalog, boundary, required } => {
            let catalog = load::catalog(&catalog)?;
            let boundary = load::boundary(&boundary)?;
            let selection = select(&catalog, &boundary, required, &cfg)?;
            print_json(&selection)?;
            if let Selection::NoFit(_) = selection {
                std::process::exit(1);
            }
        }
        Commands::Plan { trench, bed, boundary, flow, split } => {
            let catalogs = CatalogSet {
                trench: load::catalog(&trench)?,
                bed: load::catalog(&bed)?,
            };
            let boundary = load::boundary(&boundary)?;
            let split = match split.as_slice() {
                [] => None,
                [a, b] => Some([load::boundary(a)?, load::boundary(b)?]),
                other => return Err(anyhow!("--split takes exactly two boundaries, got {}", other.len())),
            };
            let plan = apply_hierarchy(&catalogs, &boundary, flow, split.as_ref(), &cfg)?;
            let placements = placements(&catalogs, &plan, &cfg)?;
            let solved = !placements.is_empty();
            print_json(&PlanOutput { plan, placements })?;
            if !solved {
                std::process::exit(1);
            }
        }
    }
    Ok(())
}

/// Absolute shoulder and drainfield footprints for each selected pattern.
fn placements(catalogs: &CatalogSet, plan: &Plan, cfg: &FitConfig) -> Result<Vec<Placement>> {
    let config_type = match plan {
        Plan::Single { config_type, .. } | Plan::Split { config_type, .. } => *config_type,
        Plan::NeedsSplit { .. } | Plan::NeedsRedesign { .. } => return Ok(vec![]),
    };
    let catalog = catalogs.get(config_type.base());
    plan.results()
        .into_iter()
        .map(|result| {
            let pattern = catalog
                .pattern(&result.product, &result.pattern)
                .ok_or_else(|| anyhow!("{}/{} missing from the {} catalog", result.product, result.pattern, config_type.base()))?;
            place(pattern, result, cfg.area_eps)
                .with_context(|| format!("placing {}/{}", result.product, result.pattern))
        })
        .collect()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
