/// Malformed polygon, detected when a ring is validated (never mid-search).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("Polygon needs at least 3 distinct vertices, found {0}")]
    TooFewVertices(usize),

    #[error("Degenerate polygon: area {area} is below the degeneracy threshold")]
    DegenerateGeometry { area: f64 },

    #[error("Self-intersecting polygon: edges {} and {} cross", edges.0, edges.1)]
    SelfIntersecting { edges: (usize, usize) },
}

/// Bad call inputs; fatal to the call and raised before any search begins.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid boundary: {0}")]
    Boundary(#[from] GeometryError),

    #[error("Boundary area {area:.3} sq ft is below the minimum {min:.3} sq ft")]
    BoundaryTooSmall { area: f64, min: f64 },

    #[error("Required area must be positive, got {0}")]
    NonPositiveRequirement(f64),

    #[error("Flow must be positive, got {0} gpd")]
    NonPositiveFlow(f64),

    #[error("Invalid fit parameters: {0}")]
    Config(#[from] ConfigError),
}

/// Fit parameter outside its usable range.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{field} = {value} is outside {range}")]
pub struct ConfigError {
    pub field: &'static str,
    pub value: f64,
    pub range: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("invalid log level: {0}")]
pub struct LogLevelError(pub String);
