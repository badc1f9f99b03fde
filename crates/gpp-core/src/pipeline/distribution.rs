use serde::Serialize;
use std::collections::BTreeMap;

use crate::dataset::PlantDataset;
use crate::stats::BoxStats;
use crate::units::Megawatts;

/// Plants at or above this capacity are left out of the distribution.
pub const OUTLIER_THRESHOLD_MW: f64 = 3000.0;

/// Every retained capacity for one fuel, in file order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuelDistribution {
    pub fuel: String,
    pub color: &'static str,
    pub capacities_mw: Vec<Megawatts>,
}

impl FuelDistribution {
    pub fn box_stats(&self) -> Option<BoxStats> {
        let values: Vec<f64> = self.capacities_mw.iter().map(|mw| mw.value()).collect();
        BoxStats::from_values(&values)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapacityDistribution {
    pub country: String,
    pub groups: Vec<FuelDistribution>,
}

impl CapacityDistribution {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn value_count(&self) -> usize {
        self.groups.iter().map(|g| g.capacities_mw.len()).sum()
    }

    pub fn group(&self, fuel: &str) -> Option<&FuelDistribution> {
        self.groups.iter().find(|g| g.fuel == fuel)
    }
}

/// Per-fuel capacity values for `country`, excluding plants of
/// [`OUTLIER_THRESHOLD_MW`] or more.
pub fn capacity_distribution(dataset: &PlantDataset, country: &str) -> CapacityDistribution {
    let mut groups: BTreeMap<&str, Vec<Megawatts>> = BTreeMap::new();
    for record in dataset
        .country_rows(country)
        .filter(|r| r.capacity_mw.value() < OUTLIER_THRESHOLD_MW)
    {
        groups
            .entry(record.primary_fuel.as_str())
            .or_default()
            .push(record.capacity_mw);
    }

    CapacityDistribution {
        country: country.to_string(),
        groups: groups
            .into_iter()
            .map(|(fuel, capacities_mw)| FuelDistribution {
                fuel: fuel.to_string(),
                color: dataset.palette().color_or_default(fuel),
                capacities_mw,
            })
            .collect(),
    }
}
