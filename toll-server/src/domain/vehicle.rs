//! Vehicle tariff classes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two-valued tariff category used to price tolls.
///
/// Serialized as the provider's single-letter wire codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleClass {
    /// Light vehicle (wire code "A").
    #[serde(rename = "A")]
    Car,

    /// Heavy vehicle (wire code "B").
    #[serde(rename = "B")]
    TruckVan,
}

impl VehicleClass {
    /// Single-letter code used in toll requests.
    pub fn wire_code(&self) -> &'static str {
        match self {
            VehicleClass::Car => "A",
            VehicleClass::TruckVan => "B",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            VehicleClass::Car => "Car",
            VehicleClass::TruckVan => "Truck/Van",
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
