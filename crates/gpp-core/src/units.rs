//! Unit newtype for plant capacities.
//!
//! Capacities travel through the pipeline as [`Megawatts`] rather than bare
//! `f64` so a capacity can't be confused with a count or a year when the
//! aggregates are assembled.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Installed capacity in megawatts (MW).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Megawatts(pub f64);

impl Megawatts {
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Total order over capacities, usable with `sort_by`.
    #[inline]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::fmt::Display for Megawatts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} MW", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_cmp_orders_capacities() {
        let mut caps = vec![Megawatts(200.0), Megawatts(50.0), Megawatts(75.0)];
        caps.sort_by(Megawatts::total_cmp);
        assert_eq!(caps, vec![Megawatts(50.0), Megawatts(75.0), Megawatts(200.0)]);
    }

    #[test]
    fn test_display_rounds_to_one_decimal() {
        assert_eq!(Megawatts(700.72).to_string(), "700.7 MW");
        assert_eq!(Megawatts(5.0).value(), 5.0);
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let json = serde_json::to_string(&Megawatts(42.0)).unwrap();
        assert_eq!(json, "42.0");
    }
}
