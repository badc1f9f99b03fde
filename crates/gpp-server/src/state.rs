use std::sync::Arc;

use gpp_core::{choropleth, summarize, DatasetSummary, PlantDataset};
use gpp_viz::{choropleth_chart, Figure};
use tracing::{info, warn};

/// Read-only server state: the dataset plus everything that does not depend
/// on the selected country, computed once at startup.
#[derive(Debug)]
pub struct DashboardState {
    pub dataset: Arc<PlantDataset>,
    pub default_country: String,
    pub summary: DatasetSummary,
    pub countries: Vec<String>,
    pub choropleth: Figure,
}

impl DashboardState {
    pub fn new(dataset: Arc<PlantDataset>, default_country: impl Into<String>) -> Self {
        let default_country = default_country.into();
        if !dataset.contains_country(&default_country) {
            warn!(
                country = %default_country,
                "default country has no plants; charts will start empty"
            );
        }

        let map = choropleth(&dataset);
        info!(
            frames = map.frames.len(),
            undated = map.undated_records,
            "precomputed choropleth"
        );

        Self {
            summary: summarize(&dataset),
            countries: dataset.countries().into_iter().map(String::from).collect(),
            choropleth: choropleth_chart(&map),
            default_country,
            dataset,
        }
    }

    /// The requested country, or the default when none was given.
    pub fn resolve_country<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested.unwrap_or(&self.default_country)
    }
}
