//! Country filter & aggregation pipeline.
//!
//! Each operation is a pure function of a [`PlantDataset`](crate::PlantDataset)
//! and, for the country-scoped ones, a selected country name. A country with no
//! rows yields empty aggregates rather than an error.
//!
//! | Aggregate | Function | Scope |
//! |-----------|----------|-------|
//! | Top-10 ranking | [`rank_plants`] | country |
//! | Plants per fuel | [`fuel_share`] | country |
//! | Capacities under 3000 MW | [`capacity_distribution`] | country |
//! | Plants per year and country | [`choropleth`] | whole dataset |

pub mod choropleth;
pub mod distribution;
pub mod fuel_share;
pub mod ranking;
pub mod summary;
pub mod view;


pub use choropleth::{choropleth, ChoroplethAggregate, CountryCount, YearFrame};
pub use distribution::{
    capacity_distribution, CapacityDistribution, FuelDistribution, OUTLIER_THRESHOLD_MW,
};
pub use fuel_share::{fuel_share, FuelShareAggregate, FuelSlice};
pub use ranking::{rank_plants, RankedPlant, RankingAggregate, RANKING_LIMIT};
pub use summary::{summarize, DatasetSummary};
pub use view::CountryView;
