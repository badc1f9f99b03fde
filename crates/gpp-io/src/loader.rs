//! Delimited-file loader for the plant table.
//!
//! The loader reads only the six mapped columns and validates every row up
//! front: a dataset either loads completely or fails with a
//! [`DataLoadError`] naming the offending row and column.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use gpp_core::{DataLoadError, Megawatts, PlantColumn, PlantDataset, PowerPlantRecord};
use serde::{Deserialize, Serialize};

use crate::columns::ColumnMap;

/// How to read a dataset file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Field separator; must be a single ASCII character
    pub delimiter: char,
    pub columns: ColumnMap,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            columns: ColumnMap::default(),
        }
    }
}

/// Load the plant dataset from `path`.
pub fn load_dataset(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> Result<PlantDataset, DataLoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DataLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    read_dataset(file, options)
}

/// Parse a plant table from any reader (file, socket, in-memory bytes).
pub fn read_dataset<R: Read>(
    reader: R,
    options: &LoadOptions,
) -> Result<PlantDataset, DataLoadError> {
    if !options.delimiter.is_ascii() {
        return Err(DataLoadError::Malformed(format!(
            "delimiter '{}' is not a single ASCII character",
            options.delimiter
        )));
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter as u8)
        .trim(Trim::All)
        .from_reader(reader);
    let headers = reader.headers().map_err(malformed)?.clone();
    let layout = ColumnLayout::resolve(&headers, &options.columns)?;

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let raw = result.map_err(malformed)?;
        records.push(layout.parse_row(&raw, idx + 1)?);
    }

    Ok(PlantDataset::new(records))
}

fn malformed(err: csv::Error) -> DataLoadError {
    DataLoadError::Malformed(err.to_string())
}

/// Field positions of the mapped columns in the header row, indexed by
/// `PlantColumn` discriminant.
struct ColumnLayout {
    positions: [usize; 6],
}

impl ColumnLayout {
    fn resolve(headers: &StringRecord, columns: &ColumnMap) -> Result<Self, DataLoadError> {
        let mut positions = [0usize; 6];
        for (slot, column) in positions.iter_mut().zip(PlantColumn::ALL) {
            let header = columns.header(column);
            *slot = headers
                .iter()
                .position(|h| h == header)
                .ok_or_else(|| DataLoadError::MissingColumn {
                    column,
                    header: header.to_string(),
                })?;
        }
        Ok(Self { positions })
    }

    fn field<'r>(&self, raw: &'r StringRecord, column: PlantColumn) -> &'r str {
        raw.get(self.positions[column as usize]).unwrap_or_default()
    }

    fn parse_row(&self, raw: &StringRecord, row: usize) -> Result<PowerPlantRecord, DataLoadError> {
        let capacity_mw = parse_capacity(self.field(raw, PlantColumn::CapacityMw), row)?;
        let start_year = parse_start_year(self.field(raw, PlantColumn::StartYear), row)?;

        Ok(PowerPlantRecord {
            country_name: self.field(raw, PlantColumn::CountryName).to_string(),
            country_code: self.field(raw, PlantColumn::CountryCode).to_string(),
            plant_name: self.field(raw, PlantColumn::PlantName).to_string(),
            primary_fuel: self.field(raw, PlantColumn::PrimaryFuel).to_string(),
            capacity_mw,
            start_year,
        })
    }
}

fn invalid(row: usize, column: PlantColumn, reason: impl Into<String>) -> DataLoadError {
    DataLoadError::InvalidValue {
        row,
        column,
        reason: reason.into(),
    }
}

fn parse_capacity(text: &str, row: usize) -> Result<Megawatts, DataLoadError> {
    if text.is_empty() {
        return Err(invalid(row, PlantColumn::CapacityMw, "value is empty"));
    }
    let value: f64 = text
        .parse()
        .map_err(|_| invalid(row, PlantColumn::CapacityMw, format!("'{text}' is not a number")))?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid(
            row,
            PlantColumn::CapacityMw,
            format!("'{text}' is not a non-negative finite capacity"),
        ));
    }
    Ok(Megawatts(value))
}

/// Empty and NaN cells mean "unknown". Fractional years (mid-year
/// commissioning) are floored.
fn parse_start_year(text: &str, row: usize) -> Result<Option<i32>, DataLoadError> {
    if text.is_empty() || text.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }
    let value: f64 = text
        .parse()
        .map_err(|_| invalid(row, PlantColumn::StartYear, format!("'{text}' is not a year")))?;
    if !value.is_finite() || value < i32::MIN as f64 || value > i32::MAX as f64 {
        return Err(invalid(
            row,
            PlantColumn::StartYear,
            format!("'{text}' is out of range"),
        ));
    }
    Ok(Some(value.floor() as i32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "country code,country_long,name of powerplant,capacity in MW,primary_fuel,start_year,extra\n";

    fn read(body: &str) -> Result<PlantDataset, DataLoadError> {
        let text = format!("{HEADER}{body}");
        read_dataset(text.as_bytes(), &LoadOptions::default())
    }

    #[test]
    fn test_reads_rows_in_file_order() {
        let dataset = read(
            "IDN,Indonesia,Suralaya,3400,Coal,1985,x\n\
             IDN,Indonesia,Cirata,1008.0,Hydro,,y\n",
        )
        .unwrap();
        assert_eq!(dataset.len(), 2);
        let first = &dataset.records()[0];
        assert_eq!(first.country_code, "IDN");
        assert_eq!(first.plant_name, "Suralaya");
        assert_eq!(first.capacity_mw, Megawatts(3400.0));
        assert_eq!(first.start_year, Some(1985));
        assert_eq!(dataset.records()[1].start_year, None);
    }

    #[test]
    fn test_quoted_fields_and_fractional_year() {
        let dataset = read("USA,United States of America,\"Hoover Dam, NV\",2080,Hydro,1936.75,\n").unwrap();
        let record = &dataset.records()[0];
        assert_eq!(record.plant_name, "Hoover Dam, NV");
        assert_eq!(record.start_year, Some(1936));
    }

    #[test]
    fn test_missing_column_names_logical_column() {
        let text = "country_long,name of powerplant,capacity in MW,primary_fuel,start_year\n";
        let err = read_dataset(text.as_bytes(), &LoadOptions::default()).unwrap_err();
        match err {
            DataLoadError::MissingColumn { column, header } => {
                assert_eq!(column, PlantColumn::CountryCode);
                assert_eq!(header, "country code");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_capacity_reports_row() {
        let err = read(
            "IDN,Indonesia,A,10,Coal,2000,\n\
             IDN,Indonesia,B,lots,Coal,2000,\n",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::InvalidValue {
                row: 2,
                column: PlantColumn::CapacityMw,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_capacity_rejected() {
        let err = read("IDN,Indonesia,A,,Coal,2000,\n").unwrap_err();
        assert!(err.to_string().contains("capacity_mw"));
    }

    #[test]
    fn test_ragged_row_is_malformed() {
        let err = read("IDN,Indonesia,A,10\n").unwrap_err();
        assert!(matches!(err, DataLoadError::Malformed(_)));
    }

    #[test]
    fn test_custom_delimiter_and_columns() {
        let options = LoadOptions {
            delimiter: ';',
            columns: ColumnMap::gppd(),
        };
        let text = "country;country_long;name;capacity_mw;primary_fuel;commissioning_year\n\
                    KEN;Kenya;Olkaria;150;Geothermal;1981\n";
        let dataset = read_dataset(text.as_bytes(), &options).unwrap();
        assert_eq!(dataset.records()[0].primary_fuel, "Geothermal");
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let options = LoadOptions {
            delimiter: '§',
            ..LoadOptions::default()
        };
        assert!(read_dataset(HEADER.as_bytes(), &options).is_err());
    }

    #[test]
    fn test_load_from_file_and_missing_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{HEADER}").unwrap();
        writeln!(file, "KEN,Kenya,Olkaria,150,Geothermal,1981,").unwrap();
        let dataset = load_dataset(file.path(), &LoadOptions::default()).unwrap();
        assert_eq!(dataset.countries(), vec!["Kenya"]);

        let err = load_dataset("/nonexistent/power_plant.csv", &LoadOptions::default())
            .unwrap_err();
        assert!(matches!(err, DataLoadError::Io { .. }));
    }

    #[test]
    fn test_header_only_file_is_empty_dataset() {
        let dataset = read("").unwrap();
        assert!(dataset.is_empty());
    }
}
