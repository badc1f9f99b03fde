//! # gpp-io: Power Plant Dataset I/O
//!
//! Loads the plant table from a delimited file into a
//! [`PlantDataset`](gpp_core::PlantDataset) and writes aggregates back out
//! as CSV.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gpp_io::{load_dataset, LoadOptions};
//!
//! fn main() -> anyhow::Result<()> {
//!     let dataset = load_dataset("data_input/power_plant.csv", &LoadOptions::default())?;
//!     println!("{} plants in {} countries", dataset.len(), dataset.countries().len());
//!     Ok(())
//! }
//! ```
//!
//! ## Column Mapping
//!
//! | Logical column | Default header | GPPD header |
//! |----------------|----------------|-------------|
//! | country_name | `country_long` | `country_long` |
//! | country_code | `country code` | `country` |
//! | plant_name | `name of powerplant` | `name` |
//! | primary_fuel | `primary_fuel` | `primary_fuel` |
//! | capacity_mw | `capacity in MW` | `capacity_mw` |
//! | start_year | `start_year` | `commissioning_year` |

pub mod columns;
pub mod export;
pub mod loader;

pub use columns::ColumnMap;
pub use export::{export_all, write_csv};
pub use loader::{load_dataset, read_dataset, LoadOptions};
