use serde::Serialize;
use std::collections::HashSet;

use crate::dataset::PlantDataset;

/// Headline numbers shown on the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DatasetSummary {
    pub country_count: usize,
    /// Distinct plant names, counted separately in each country
    pub plant_count: usize,
    pub fuel_type_count: usize,
    pub record_count: usize,
}

pub fn summarize(dataset: &PlantDataset) -> DatasetSummary {
    let mut countries = HashSet::new();
    let mut plants = HashSet::new();
    let mut fuels = HashSet::new();
    for record in dataset.records() {
        countries.insert(record.country_name.as_str());
        plants.insert((record.country_name.as_str(), record.plant_name.as_str()));
        fuels.insert(record.primary_fuel.as_str());
    }

    DatasetSummary {
        country_count: countries.len(),
        plant_count: plants.len(),
        fuel_type_count: fuels.len(),
        record_count: dataset.len(),
    }
}
