//! Chart specifications for the power plant dashboard.
//!
//! Turns `gpp-core` aggregates into [`Figure`]s that serialize to Plotly JSON.

pub mod charts;
pub mod figure;

pub use charts::{
    choropleth_chart, distribution_chart, fuel_share_chart, ranking_chart, CountryFigures,
    TEALGRN,
};
pub use figure::{Figure, Frame, Layout, Trace};
