//! # gpp-core: Power Plant Aggregation Core
//!
//! Data model and pure aggregation pipeline behind the Global Power Plant
//! dashboard.
//!
//! ## Quick Start
//!
//! ```rust
//! use gpp_core::*;
//!
//! let dataset = PlantDataset::new(vec![
//!     PowerPlantRecord::new("Indonesia", "IDN", "Suralaya", "Coal", 3400.0)
//!         .with_start_year(1985),
//!     PowerPlantRecord::new("Indonesia", "IDN", "Cirata", "Hydro", 1008.0),
//! ]);
//!
//! let view = CountryView::compute(&dataset, "Indonesia");
//! assert_eq!(view.ranking.largest().unwrap().plant_name, "Suralaya");
//! assert_eq!(view.fuel_share.count("Hydro"), Some(1));
//!
//! let map = choropleth(&dataset);
//! assert_eq!(map.undated_records, 1);
//! ```
//!
//! ## Core Data Structures
//!
//! - [`PowerPlantRecord`] - One dataset row
//! - [`PlantDataset`] - Immutable table + [`FuelPalette`], passed to every operation
//! - [`pipeline`] - Ranking, fuel share, capacity distribution, choropleth, summary
//! - [`BoxStats`] - Quartile summary of a capacity group

pub mod dataset;
pub mod error;
pub mod palette;
pub mod pipeline;
pub mod record;
pub mod stats;
pub mod units;

pub use dataset::PlantDataset;
pub use error::{DataLoadError, GppError, GppResult};
pub use palette::{FuelPalette, G10, UNKNOWN_FUEL_COLOR};
pub use pipeline::*;
pub use record::{PlantColumn, PowerPlantRecord};
pub use stats::BoxStats;
pub use units::Megawatts;
