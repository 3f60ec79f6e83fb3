use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Drainfield layout family; selects which catalog is searched.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseType {
    #[display(fmt = "trench")]
    Trench,
    #[display(fmt = "bed")]
    Bed,
}

impl BaseType {
    /// Loading rate, gallons per day per sq ft.
    pub fn loading_rate(self) -> f64 {
        match self {
            BaseType::Trench => 0.8,
            BaseType::Bed => 0.6,
        }
    }
}

/// Configuration type, in the order the hierarchy tries them.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigType {
    #[display(fmt = "trench")]
    Trench,
    #[display(fmt = "bed")]
    Bed,
    /// Trench with an aerobic treatment unit (25% area reduction).
    #[display(fmt = "trench_atu")]
    TrenchAtu,
    #[display(fmt = "bed_atu")]
    BedAtu,
}

/// Area multiplier when an aerobic treatment unit precedes the drainfield.
pub const ATU_REDUCTION: f64 = 0.75;

const CEIL_SLACK: f64 = 1e-9;

impl ConfigType {
    pub const ALL: [ConfigType; 4] = [
        ConfigType::Trench,
        ConfigType::Bed,
        ConfigType::TrenchAtu,
        ConfigType::BedAtu,
    ];

    pub fn base(self) -> BaseType {
        match self {
            ConfigType::Trench | ConfigType::TrenchAtu => BaseType::Trench,
            ConfigType::Bed | ConfigType::BedAtu => BaseType::Bed,
        }
    }

    pub fn has_atu(self) -> bool {
        matches!(self, ConfigType::TrenchAtu | ConfigType::BedAtu)
    }

    /// Required absorption area in sq ft for `flow_gpd`, rounded up to a whole sq ft.
    ///
    /// Division noise below 1e-9 doesn't round up (100 gpd bed+ATU is 125, not 126).
    pub fn required_area(self, flow_gpd: f64) -> f64 {
        let base = flow_gpd / self.base().loading_rate();
        let area = if self.has_atu() { base * ATU_REDUCTION } else { base };
        (area - CEIL_SLACK).ceil()
    }
}
