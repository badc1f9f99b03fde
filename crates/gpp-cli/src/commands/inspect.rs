use std::io::{self, Write};

use anyhow::Result;
use gpp_cli::OutputFormat;
use gpp_core::{summarize, PlantDataset};
use tabwriter::TabWriter;

use super::util::print_json;

pub fn summary(dataset: &PlantDataset, format: OutputFormat) -> Result<()> {
    let summary = summarize(dataset);
    match format {
        OutputFormat::Json => print_json(&summary),
        OutputFormat::Plain => {
            let mut writer = TabWriter::new(io::stdout());
            writeln!(writer, "Number of Country\t{}", summary.country_count)?;
            writeln!(writer, "Total Power Plant\t{}", summary.plant_count)?;
            writeln!(writer, "Total Type of Fuel\t{}", summary.fuel_type_count)?;
            writeln!(writer, "Records\t{}", summary.record_count)?;
            writer.flush()?;
            Ok(())
        }
    }
}

pub fn countries(dataset: &PlantDataset, format: OutputFormat) -> Result<()> {
    let countries = dataset.countries();
    match format {
        OutputFormat::Json => print_json(&countries),
        OutputFormat::Plain => {
            for country in countries {
                println!("{country}");
            }
            Ok(())
        }
    }
}
