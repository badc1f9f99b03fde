//! Tabular export of aggregates.
//!
//! Each aggregate is flattened into a polars `DataFrame` and written as CSV.
//! Country-scoped frames carry a `country` column so several exports can be
//! concatenated later.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use gpp_core::{
    capacity_distribution, choropleth, fuel_share, rank_plants, summarize, CapacityDistribution,
    ChoroplethAggregate, DatasetSummary, FuelShareAggregate, GppError, GppResult, PlantDataset,
    RankingAggregate,
};
use polars::prelude::*;

fn export_err(err: PolarsError) -> GppError {
    GppError::Export(err.to_string())
}

pub fn ranking_frame(ranking: &RankingAggregate) -> GppResult<DataFrame> {
    let n = ranking.len();
    let names: Vec<&str> = ranking.entries.iter().map(|e| e.plant_name.as_str()).collect();
    let caps: Vec<f64> = ranking.entries.iter().map(|e| e.capacity_mw.value()).collect();
    // 1 = largest plant
    let ranks: Vec<i64> = (0..n).map(|idx| (n - idx) as i64).collect();
    DataFrame::new(vec![
        Series::new("country", vec![ranking.country.as_str(); n]),
        Series::new("rank", ranks),
        Series::new("plant_name", names),
        Series::new("capacity_mw", caps),
    ])
    .map_err(export_err)
}

pub fn fuel_share_frame(share: &FuelShareAggregate) -> GppResult<DataFrame> {
    let n = share.slices.len();
    DataFrame::new(vec![
        Series::new("country", vec![share.country.as_str(); n]),
        Series::new(
            "primary_fuel",
            share.slices.iter().map(|s| s.fuel.as_str()).collect::<Vec<_>>(),
        ),
        Series::new(
            "plant_count",
            share.slices.iter().map(|s| s.count as i64).collect::<Vec<_>>(),
        ),
        Series::new(
            "share",
            share.slices.iter().map(|s| s.share).collect::<Vec<_>>(),
        ),
        Series::new(
            "color",
            share.slices.iter().map(|s| s.color).collect::<Vec<_>>(),
        ),
    ])
    .map_err(export_err)
}

/// Long format: one row per retained plant capacity.
pub fn distribution_frame(dist: &CapacityDistribution) -> GppResult<DataFrame> {
    let mut fuels = Vec::new();
    let mut caps = Vec::new();
    for group in &dist.groups {
        for mw in &group.capacities_mw {
            fuels.push(group.fuel.as_str());
            caps.push(mw.value());
        }
    }
    DataFrame::new(vec![
        Series::new("country", vec![dist.country.as_str(); caps.len()]),
        Series::new("primary_fuel", fuels),
        Series::new("capacity_mw", caps),
    ])
    .map_err(export_err)
}

pub fn choropleth_frame(map: &ChoroplethAggregate) -> GppResult<DataFrame> {
    let mut years = Vec::new();
    let mut codes = Vec::new();
    let mut counts = Vec::new();
    for frame in &map.frames {
        for cell in &frame.counts {
            years.push(frame.start_year as i64);
            codes.push(cell.country_code.as_str());
            counts.push(cell.count as i64);
        }
    }
    DataFrame::new(vec![
        Series::new("start_year", years),
        Series::new("country_code", codes),
        Series::new("plant_count", counts),
    ])
    .map_err(export_err)
}

pub fn summary_frame(summary: &DatasetSummary) -> GppResult<DataFrame> {
    DataFrame::new(vec![
        Series::new(
            "metric",
            ["countries", "power_plants", "fuel_types", "records"],
        ),
        Series::new(
            "value",
            [
                summary.country_count as i64,
                summary.plant_count as i64,
                summary.fuel_type_count as i64,
                summary.record_count as i64,
            ],
        ),
    ])
    .map_err(export_err)
}

/// Write `df` to `path` as CSV, creating parent directories.
pub fn write_csv(df: &mut DataFrame, path: &Path) -> GppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    CsvWriter::new(&mut file).finish(df).map_err(export_err)
}

/// Write every aggregate for `country` (plus the global ones) into `out_dir`.
///
/// Returns the written paths in a fixed order.
pub fn export_all(dataset: &PlantDataset, country: &str, out_dir: &Path) -> GppResult<Vec<PathBuf>> {
    let frames = [
        ("summary.csv", summary_frame(&summarize(dataset))?),
        ("ranking.csv", ranking_frame(&rank_plants(dataset, country))?),
        ("fuel_share.csv", fuel_share_frame(&fuel_share(dataset, country))?),
        (
            "capacity_distribution.csv",
            distribution_frame(&capacity_distribution(dataset, country))?,
        ),
        ("choropleth.csv", choropleth_frame(&choropleth(dataset))?),
    ];

    let mut written = Vec::with_capacity(frames.len());
    for (name, mut df) in frames {
        let path = out_dir.join(name);
        write_csv(&mut df, &path)?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpp_core::PowerPlantRecord;
    use tempfile::tempdir;

    fn dataset() -> PlantDataset {
        PlantDataset::new(vec![
            PowerPlantRecord::new("Kenya", "KEN", "Olkaria", "Geothermal", 150.0)
                .with_start_year(1981),
            PowerPlantRecord::new("Kenya", "KEN", "Gitaru", "Hydro", 225.0).with_start_year(1999),
            PowerPlantRecord::new("Kenya", "KEN", "Turkana", "Wind", 310.0),
            PowerPlantRecord::new("Chile", "CHL", "Ralco", "Hydro", 690.0).with_start_year(2004),
        ])
    }

    #[test]
    fn test_ranking_frame_ranks_largest_first() {
        let df = ranking_frame(&rank_plants(&dataset(), "Kenya")).unwrap();
        assert_eq!(df.height(), 3);
        let ranks: Vec<_> = df.column("rank").unwrap().i64().unwrap().into_no_null_iter().collect();
        assert_eq!(ranks, [3, 2, 1]);
    }

    #[test]
    fn test_empty_selection_gives_empty_frames() {
        let data = dataset();
        assert_eq!(ranking_frame(&rank_plants(&data, "Atlantis")).unwrap().height(), 0);
        assert_eq!(fuel_share_frame(&fuel_share(&data, "Atlantis")).unwrap().height(), 0);
        assert_eq!(
            distribution_frame(&capacity_distribution(&data, "Atlantis"))
                .unwrap()
                .height(),
            0
        );
    }

    #[test]
    fn test_choropleth_frame_skips_undated() {
        let df = choropleth_frame(&choropleth(&dataset())).unwrap();
        assert_eq!(df.height(), 3);
        assert_eq!(df.width(), 3);
    }

    #[test]
    fn test_export_all_writes_files() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("kenya");
        let written = export_all(&dataset(), "Kenya", &out).unwrap();
        assert_eq!(written.len(), 5);
        for path in &written {
            assert!(path.exists(), "{} missing", path.display());
        }
        let fuel = fs::read_to_string(out.join("fuel_share.csv")).unwrap();
        assert!(fuel.starts_with("country,primary_fuel,plant_count,share,color"));
        assert!(fuel.contains("Kenya,Geothermal,1,"));
    }
}
