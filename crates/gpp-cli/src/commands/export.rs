use std::path::Path;

use anyhow::{Context, Result};
use gpp_core::PlantDataset;
use gpp_io::export_all;
use tracing::info;

use super::util::warn_if_unknown;

pub fn handle(dataset: &PlantDataset, country: &str, out_dir: &Path) -> Result<()> {
    warn_if_unknown(dataset, country);
    info!(%country, out_dir = %out_dir.display(), "exporting aggregates");
    let written = export_all(dataset, country, out_dir)
        .with_context(|| format!("exporting aggregates to {}", out_dir.display()))?;
    for path in &written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}
