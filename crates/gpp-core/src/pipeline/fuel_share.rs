use serde::Serialize;
use std::collections::BTreeMap;

use crate::dataset::PlantDataset;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuelSlice {
    pub fuel: String,
    pub count: usize,
    /// Fraction of the country's plants, in `0.0..=1.0`
    pub share: f64,
    pub color: &'static str,
}

/// Plant counts per fuel type for one country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuelShareAggregate {
    pub country: String,
    pub total: usize,
    pub slices: Vec<FuelSlice>,
}

impl FuelShareAggregate {
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn count(&self, fuel: &str) -> Option<usize> {
        self.slices
            .iter()
            .find(|slice| slice.fuel == fuel)
            .map(|slice| slice.count)
    }
}

/// Count `country`'s plants per primary fuel.
///
/// Fuels with no plants in the country do not appear. Slices are ordered by
/// fuel name.
pub fn fuel_share(dataset: &PlantDataset, country: &str) -> FuelShareAggregate {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in dataset.country_rows(country) {
        *counts.entry(record.primary_fuel.as_str()).or_insert(0) += 1;
    }
    let total: usize = counts.values().sum();

    let slices = counts
        .into_iter()
        .map(|(fuel, count)| FuelSlice {
            fuel: fuel.to_string(),
            count,
            share: count as f64 / total as f64,
            color: dataset.palette().color_or_default(fuel),
        })
        .collect();

    FuelShareAggregate {
        country: country.to_string(),
        total,
        slices,
    }
}
