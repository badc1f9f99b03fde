use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use gpp_cli::ChartKind;
use gpp_core::{capacity_distribution, choropleth, fuel_share, rank_plants, PlantDataset};
use gpp_viz::{choropleth_chart, distribution_chart, fuel_share_chart, ranking_chart};
use tracing::info;

use super::util::warn_if_unknown;

pub fn handle(
    dataset: &PlantDataset,
    kind: ChartKind,
    country: &str,
    out: Option<&Path>,
) -> Result<()> {
    let figure = match kind {
        ChartKind::Choropleth => choropleth_chart(&choropleth(dataset)),
        ChartKind::Ranking => {
            warn_if_unknown(dataset, country);
            ranking_chart(&rank_plants(dataset, country))
        }
        ChartKind::FuelShare => {
            warn_if_unknown(dataset, country);
            fuel_share_chart(&fuel_share(dataset, country))
        }
        ChartKind::Distribution => {
            warn_if_unknown(dataset, country);
            distribution_chart(&capacity_distribution(dataset, country))
        }
    };

    let payload = serde_json::to_string_pretty(&figure)?;
    if let Some(path) = out {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, &payload).with_context(|| format!("writing {}", path.display()))?;
        println!("Chart written to {}", path.display());
    } else {
        println!("{payload}");
    }
    info!(?kind, traces = figure.trace_count(), "chart produced");
    Ok(())
}
