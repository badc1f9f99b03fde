use serde::{Deserialize, Serialize};
use std::fmt;

use crate::units::Megawatts;

/// One row of the power-plant dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerPlantRecord {
    /// Long country name, the selection key (matched exactly)
    pub country_name: String,
    /// ISO-3 style country code used for map locations
    pub country_code: String,
    /// Plant name; not unique across countries
    pub plant_name: String,
    /// Primary fuel category (e.g., "Coal", "Hydro")
    pub primary_fuel: String,
    /// Installed capacity
    pub capacity_mw: Megawatts,
    /// Commissioning year, when known
    pub start_year: Option<i32>,
}

impl PowerPlantRecord {
    pub fn new(
        country_name: impl Into<String>,
        country_code: impl Into<String>,
        plant_name: impl Into<String>,
        primary_fuel: impl Into<String>,
        capacity_mw: f64,
    ) -> Self {
        Self {
            country_name: country_name.into(),
            country_code: country_code.into(),
            plant_name: plant_name.into(),
            primary_fuel: primary_fuel.into(),
            capacity_mw: Megawatts(capacity_mw),
            start_year: None,
        }
    }

    pub fn with_start_year(mut self, year: i32) -> Self {
        self.start_year = Some(year);
        self
    }
}

/// Logical columns a dataset file must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlantColumn {
    CountryName,
    CountryCode,
    PlantName,
    PrimaryFuel,
    CapacityMw,
    StartYear,
}

impl PlantColumn {
    pub const ALL: [PlantColumn; 6] = [
        PlantColumn::CountryName,
        PlantColumn::CountryCode,
        PlantColumn::PlantName,
        PlantColumn::PrimaryFuel,
        PlantColumn::CapacityMw,
        PlantColumn::StartYear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlantColumn::CountryName => "country_name",
            PlantColumn::CountryCode => "country_code",
            PlantColumn::PlantName => "plant_name",
            PlantColumn::PrimaryFuel => "primary_fuel",
            PlantColumn::CapacityMw => "capacity_mw",
            PlantColumn::StartYear => "start_year",
        }
    }
}

impl fmt::Display for PlantColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
