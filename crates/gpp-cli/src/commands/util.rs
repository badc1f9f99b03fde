use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use gpp_cli::{DataArgs, GppConfig, SelectionArgs};
use gpp_core::PlantDataset;
use gpp_io::load_dataset;
use rayon::ThreadPoolBuilder;
use tracing::{info, warn};

pub fn configure_threads(spec: &str) {
    let count = if spec.eq_ignore_ascii_case("auto") {
        num_cpus::get()
    } else {
        spec.parse().unwrap_or_else(|_| num_cpus::get())
    };
    let _ = ThreadPoolBuilder::new().num_threads(count).build_global();
}

pub fn dataset_path(args: &DataArgs, config: &GppConfig) -> PathBuf {
    args.data.clone().unwrap_or_else(|| config.data.path.clone())
}

pub fn load(args: &DataArgs, config: &GppConfig) -> Result<PlantDataset> {
    let path = dataset_path(args, config);
    let start = Instant::now();
    let dataset = load_dataset(&path, &config.data.load_options())
        .with_context(|| format!("loading power plant dataset from {}", path.display()))?;
    info!(
        path = %path.display(),
        rows = dataset.len(),
        fuels = dataset.palette().len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "loaded dataset"
    );
    Ok(dataset)
}

pub fn selected_country<'a>(selection: &'a SelectionArgs, config: &'a GppConfig) -> &'a str {
    selection
        .country
        .as_deref()
        .unwrap_or(&config.dashboard.default_country)
}

/// Logs when `country` matches nothing; the aggregates are still produced.
pub fn warn_if_unknown(dataset: &PlantDataset, country: &str) {
    if !dataset.contains_country(country) {
        warn!(%country, "no plants found for country; aggregates are empty");
    }
}

pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value).context("serializing output to JSON")?;
    println!();
    Ok(())
}
