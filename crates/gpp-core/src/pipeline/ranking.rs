use serde::Serialize;

use crate::dataset::PlantDataset;
use crate::record::PowerPlantRecord;
use crate::units::Megawatts;

/// How many plants the ranking keeps.
pub const RANKING_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPlant {
    /// Country of the source row; plant names repeat across countries
    pub country_name: String,
    pub plant_name: String,
    pub capacity_mw: Megawatts,
}

/// The largest plants of one country, ordered ascending by capacity so a
/// horizontal bar chart draws the biggest plant on top.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingAggregate {
    pub country: String,
    pub entries: Vec<RankedPlant>,
}

impl RankingAggregate {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn largest(&self) -> Option<&RankedPlant> {
        self.entries.last()
    }
}

/// The (up to) ten largest plants of `country`.
///
/// The sort is stable, so plants with equal capacity keep file order.
pub fn rank_plants(dataset: &PlantDataset, country: &str) -> RankingAggregate {
    let mut rows: Vec<&PowerPlantRecord> = dataset.country_rows(country).collect();
    rows.sort_by(|a, b| a.capacity_mw.total_cmp(&b.capacity_mw));
    let top = rows.split_off(rows.len().saturating_sub(RANKING_LIMIT));

    RankingAggregate {
        country: country.to_string(),
        entries: top
            .into_iter()
            .map(|record| RankedPlant {
                country_name: record.country_name.clone(),
                plant_name: record.plant_name.clone(),
                capacity_mw: record.capacity_mw,
            })
            .collect(),
    }
}
