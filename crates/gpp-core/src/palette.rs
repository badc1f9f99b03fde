//! Fuel type → display color assignment.
//!
//! Every chart colors a fuel the same way. Colors come from the qualitative
//! G10 palette, assigned to the fuel types in lexicographic order so the
//! mapping depends only on *which* fuels exist, never on row order.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// The ten-color qualitative G10 palette.
pub const G10: [&str; 10] = [
    "#3366CC", "#DC3912", "#FF9900", "#109618", "#990099", "#0099C6", "#DD4477", "#66AA00",
    "#B82E2E", "#316395",
];

/// Color used for a fuel the palette has never seen.
pub const UNKNOWN_FUEL_COLOR: &str = "#7F7F7F";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FuelPalette {
    colors: BTreeMap<String, &'static str>,
}

impl FuelPalette {
    /// Build a palette from every fuel value in a dataset (duplicates are fine).
    ///
    /// With more than ten fuel types the palette wraps around.
    pub fn from_fuels<'a, I>(fuels: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let distinct: BTreeSet<&str> = fuels.into_iter().collect();
        let colors = distinct
            .into_iter()
            .enumerate()
            .map(|(idx, fuel)| (fuel.to_string(), G10[idx % G10.len()]))
            .collect();
        Self { colors }
    }

    pub fn color(&self, fuel: &str) -> Option<&'static str> {
        self.colors.get(fuel).copied()
    }

    pub fn color_or_default(&self, fuel: &str) -> &'static str {
        self.color(fuel).unwrap_or(UNKNOWN_FUEL_COLOR)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Fuels in lexicographic order with their colors.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &'static str)> + '_ {
        self.colors.iter().map(|(fuel, color)| (fuel.as_str(), *color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_is_lexicographic() {
        let palette = FuelPalette::from_fuels(["Solar", "Coal", "Hydro", "Coal"]);
        assert_eq!(palette.len(), 3);
        assert_eq!(palette.color("Coal"), Some(G10[0]));
        assert_eq!(palette.color("Hydro"), Some(G10[1]));
        assert_eq!(palette.color("Solar"), Some(G10[2]));
    }

    #[test]
    fn test_row_order_does_not_change_colors() {
        let a = FuelPalette::from_fuels(["Gas", "Wind", "Coal"]);
        let b = FuelPalette::from_fuels(["Coal", "Gas", "Wind", "Gas"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_palette_wraps_after_ten_fuels() {
        let fuels: Vec<String> = (0..12).map(|i| format!("Fuel{i:02}")).collect();
        let palette = FuelPalette::from_fuels(fuels.iter().map(String::as_str));
        assert_eq!(palette.color("Fuel10"), Some(G10[0]));
        assert_eq!(palette.color("Fuel11"), Some(G10[1]));
    }

    #[test]
    fn test_unknown_fuel_falls_back() {
        let palette = FuelPalette::from_fuels(["Coal"]);
        assert_eq!(palette.color("Nuclear"), None);
        assert_eq!(palette.color_or_default("Nuclear"), UNKNOWN_FUEL_COLOR);
    }
}
