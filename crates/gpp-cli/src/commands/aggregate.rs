use std::io::{self, Write};

use anyhow::Result;
use gpp_cli::OutputFormat;
use gpp_core::{
    capacity_distribution, choropleth as choropleth_aggregate, fuel_share as fuel_share_aggregate,
    rank_plants, PlantDataset,
};
use tabwriter::TabWriter;

use super::util::{print_json, warn_if_unknown};

pub fn ranking(dataset: &PlantDataset, country: &str, format: OutputFormat) -> Result<()> {
    warn_if_unknown(dataset, country);
    let ranking = rank_plants(dataset, country);
    if format == OutputFormat::Json {
        return print_json(&ranking);
    }
    if ranking.is_empty() {
        println!("No plants found for {country}");
        return Ok(());
    }

    println!("Ranking of Overall Power Plants in {country}");
    let mut writer = TabWriter::new(io::stdout());
    writeln!(writer, "RANK\tPLANT\tCAPACITY")?;
    for (rank, entry) in ranking.entries.iter().rev().enumerate() {
        writeln!(writer, "{}\t{}\t{}", rank + 1, entry.plant_name, entry.capacity_mw)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn fuel_share(dataset: &PlantDataset, country: &str, format: OutputFormat) -> Result<()> {
    warn_if_unknown(dataset, country);
    let share = fuel_share_aggregate(dataset, country);
    if format == OutputFormat::Json {
        return print_json(&share);
    }
    if share.is_empty() {
        println!("No plants found for {country}");
        return Ok(());
    }

    let mut writer = TabWriter::new(io::stdout());
    writeln!(writer, "FUEL\tPLANTS\tSHARE\tCOLOR")?;
    for slice in &share.slices {
        writeln!(
            writer,
            "{}\t{}\t{:.1}%\t{}",
            slice.fuel,
            slice.count,
            slice.share * 100.0,
            slice.color
        )?;
    }
    writeln!(writer, "TOTAL\t{}\t\t", share.total)?;
    writer.flush()?;
    Ok(())
}

pub fn distribution(dataset: &PlantDataset, country: &str, format: OutputFormat) -> Result<()> {
    warn_if_unknown(dataset, country);
    let dist = capacity_distribution(dataset, country);
    if format == OutputFormat::Json {
        return print_json(&dist);
    }
    if dist.is_empty() {
        println!("No plants under 3000 MW found for {country}");
        return Ok(());
    }

    let mut writer = TabWriter::new(io::stdout());
    writeln!(
        writer,
        "FUEL\tN\tMIN\tLOWER\tQ1\tMEDIAN\tQ3\tUPPER\tMAX\tOUTLIERS"
    )?;
    for group in &dist.groups {
        if let Some(stats) = group.box_stats() {
            writeln!(
                writer,
                "{}\t{}\t{:.1}\t{:.1}\t{:.1}\t{:.1}\t{:.1}\t{:.1}\t{:.1}\t{}",
                group.fuel,
                stats.count,
                stats.min,
                stats.lower_fence,
                stats.q1,
                stats.median,
                stats.q3,
                stats.upper_fence,
                stats.max,
                stats.outliers
            )?;
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn choropleth(dataset: &PlantDataset, format: OutputFormat) -> Result<()> {
    let map = choropleth_aggregate(dataset);
    if format == OutputFormat::Json {
        return print_json(&map);
    }

    let mut writer = TabWriter::new(io::stdout());
    writeln!(writer, "START YEAR\tCOUNTRIES\tPLANTS")?;
    for frame in &map.frames {
        writeln!(
            writer,
            "{}\t{}\t{}",
            frame.start_year,
            frame.counts.len(),
            frame.total()
        )?;
    }
    writer.flush()?;
    println!("Plants without a start year: {}", map.undated_records);
    Ok(())
}
