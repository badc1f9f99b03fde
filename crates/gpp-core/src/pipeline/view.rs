use serde::Serialize;

use crate::dataset::PlantDataset;
use crate::pipeline::distribution::{capacity_distribution, CapacityDistribution};
use crate::pipeline::fuel_share::{fuel_share, FuelShareAggregate};
use crate::pipeline::ranking::{rank_plants, RankingAggregate};

/// The three country-filtered aggregates for a single selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryView {
    pub ranking: RankingAggregate,
    pub fuel_share: FuelShareAggregate,
    pub distribution: CapacityDistribution,
}

impl CountryView {
    /// Compute operations A, B and C for `country` on the rayon pool.
    pub fn compute(dataset: &PlantDataset, country: &str) -> Self {
        let (ranking, (fuel_share, distribution)) = rayon::join(
            || rank_plants(dataset, country),
            || {
                rayon::join(
                    || fuel_share(dataset, country),
                    || capacity_distribution(dataset, country),
                )
            },
        );
        Self {
            ranking,
            fuel_share,
            distribution,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ranking.is_empty() && self.fuel_share.is_empty() && self.distribution.is_empty()
    }
}
