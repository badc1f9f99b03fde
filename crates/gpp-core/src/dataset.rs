use std::collections::BTreeSet;

use crate::palette::FuelPalette;
use crate::record::PowerPlantRecord;

/// Immutable, loaded-once plant table plus its fuel palette.
///
/// Every pipeline operation borrows this context; nothing in it changes after
/// construction, so it can be shared across threads behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct PlantDataset {
    records: Vec<PowerPlantRecord>,
    palette: FuelPalette,
}

impl PlantDataset {
    pub fn new(records: Vec<PowerPlantRecord>) -> Self {
        let palette = FuelPalette::from_fuels(records.iter().map(|r| r.primary_fuel.as_str()));
        Self { records, palette }
    }

    pub fn records(&self) -> &[PowerPlantRecord] {
        &self.records
    }

    pub fn palette(&self) -> &FuelPalette {
        &self.palette
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows whose `country_name` equals `country` exactly, in file order.
    pub fn country_rows<'a>(
        &'a self,
        country: &'a str,
    ) -> impl Iterator<Item = &'a PowerPlantRecord> + 'a {
        self.records
            .iter()
            .filter(move |record| record.country_name == country)
    }

    /// Distinct country names, sorted.
    pub fn countries(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.country_name.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn contains_country(&self, country: &str) -> bool {
        self.records.iter().any(|r| r.country_name == country)
    }
}

impl FromIterator<PowerPlantRecord> for PlantDataset {
    fn from_iter<T: IntoIterator<Item = PowerPlantRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
