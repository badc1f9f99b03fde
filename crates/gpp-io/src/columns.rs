use gpp_core::PlantColumn;
use serde::{Deserialize, Serialize};

/// Header names for each logical column of the plant table.
///
/// Defaults match the cleaned `power_plant.csv` the dashboard ships with;
/// [`ColumnMap::gppd`] matches the raw WRI Global Power Plant Database export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    pub country_name: String,
    pub country_code: String,
    pub plant_name: String,
    pub primary_fuel: String,
    pub capacity_mw: String,
    pub start_year: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            country_name: "country_long".to_string(),
            country_code: "country code".to_string(),
            plant_name: "name of powerplant".to_string(),
            primary_fuel: "primary_fuel".to_string(),
            capacity_mw: "capacity in MW".to_string(),
            start_year: "start_year".to_string(),
        }
    }
}

impl ColumnMap {
    /// Headers of the upstream `global_power_plant_database.csv`.
    pub fn gppd() -> Self {
        Self {
            country_name: "country_long".to_string(),
            country_code: "country".to_string(),
            plant_name: "name".to_string(),
            primary_fuel: "primary_fuel".to_string(),
            capacity_mw: "capacity_mw".to_string(),
            start_year: "commissioning_year".to_string(),
        }
    }

    pub fn header(&self, column: PlantColumn) -> &str {
        match column {
            PlantColumn::CountryName => &self.country_name,
            PlantColumn::CountryCode => &self.country_code,
            PlantColumn::PlantName => &self.plant_name,
            PlantColumn::PrimaryFuel => &self.primary_fuel,
            PlantColumn::CapacityMw => &self.capacity_mw,
            PlantColumn::StartYear => &self.start_year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headers_match_shipped_file() {
        let map = ColumnMap::default();
        assert_eq!(map.header(PlantColumn::CountryCode), "country code");
        assert_eq!(map.header(PlantColumn::PlantName), "name of powerplant");
        assert_eq!(map.header(PlantColumn::CapacityMw), "capacity in MW");
    }

    #[test]
    fn test_gppd_header_lookup() {
        let map = ColumnMap::gppd();
        assert_eq!(map.header(PlantColumn::PlantName), "name");
        assert_eq!(map.header(PlantColumn::StartYear), "commissioning_year");
    }
}
