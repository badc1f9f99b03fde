use serde::Serialize;
use std::collections::BTreeMap;

use crate::dataset::PlantDataset;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryCount {
    pub country_code: String,
    pub count: usize,
}

/// Plant counts per country for one start year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearFrame {
    pub start_year: i32,
    pub counts: Vec<CountryCount>,
}

impl YearFrame {
    pub fn total(&self) -> usize {
        self.counts.iter().map(|c| c.count).sum()
    }
}

/// Time-indexed map data over the whole dataset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ChoroplethAggregate {
    /// Frames in ascending year order
    pub frames: Vec<YearFrame>,
    /// Rows without a start year; they belong to no frame
    pub undated_records: usize,
    /// Largest single (country, year) count, for a fixed color range
    pub max_count: usize,
}

impl ChoroplethAggregate {
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn total_dated(&self) -> usize {
        self.frames.iter().map(YearFrame::total).sum()
    }

    pub fn frame(&self, year: i32) -> Option<&YearFrame> {
        self.frames.iter().find(|f| f.start_year == year)
    }
}

/// Count rows per (country code, start year).
pub fn choropleth(dataset: &PlantDataset) -> ChoroplethAggregate {
    let mut cells: BTreeMap<i32, BTreeMap<&str, usize>> = BTreeMap::new();
    let mut undated_records = 0;
    for record in dataset.records() {
        match record.start_year {
            Some(year) => {
                *cells
                    .entry(year)
                    .or_default()
                    .entry(record.country_code.as_str())
                    .or_insert(0) += 1;
            }
            None => undated_records += 1,
        }
    }

    let mut max_count = 0;
    let frames = cells
        .into_iter()
        .map(|(start_year, by_code)| YearFrame {
            start_year,
            counts: by_code
                .into_iter()
                .map(|(code, count)| {
                    max_count = max_count.max(count);
                    CountryCount {
                        country_code: code.to_string(),
                        count,
                    }
                })
                .collect(),
        })
        .collect();

    ChoroplethAggregate {
        frames,
        undated_records,
        max_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::PowerPlantRecord;

    #[test]
    fn test_frames_sorted_by_year_then_code() {
        let dataset = PlantDataset::new(vec![
            PowerPlantRecord::new("Kenya", "KEN", "A", "Hydro", 1.0).with_start_year(2001),
            PowerPlantRecord::new("Chile", "CHL", "B", "Solar", 1.0).with_start_year(1990),
            PowerPlantRecord::new("Chile", "CHL", "C", "Solar", 1.0).with_start_year(2001),
            PowerPlantRecord::new("Chile", "CHL", "D", "Solar", 1.0).with_start_year(2001),
        ]);
        let agg = choropleth(&dataset);
        let years: Vec<_> = agg.frames.iter().map(|f| f.start_year).collect();
        assert_eq!(years, [1990, 2001]);
        let frame = agg.frame(2001).unwrap();
        assert_eq!(frame.counts[0].country_code, "CHL");
        assert_eq!(frame.counts[0].count, 2);
        assert_eq!(frame.counts[1].country_code, "KEN");
        assert_eq!(agg.max_count, 2);
    }

    #[test]
    fn test_undated_rows_are_counted_separately() {
        let dataset = PlantDataset::new(vec![
            PowerPlantRecord::new("Kenya", "KEN", "A", "Hydro", 1.0),
            PowerPlantRecord::new("Kenya", "KEN", "B", "Hydro", 1.0).with_start_year(2010),
        ]);
        let agg = choropleth(&dataset);
        assert_eq!(agg.undated_records, 1);
        assert_eq!(agg.total_dated(), 1);
    }
}
