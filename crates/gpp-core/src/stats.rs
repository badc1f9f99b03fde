//! Five-number summaries for capacity distributions.

use serde::Serialize;

/// Tukey box-plot statistics.
///
/// Quartiles use linear interpolation between closest ranks. The fences are
/// the most extreme data points still within 1.5 × IQR of the box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxStats {
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub lower_fence: f64,
    pub upper_fence: f64,
    pub outliers: usize,
}

impl BoxStats {
    /// `None` for an empty slice. NaN values sort last and should be filtered
    /// out by the caller.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let min = sorted[0];
        let max = sorted[sorted.len() - 1];
        let q1 = quantile(&sorted, 0.25);
        let median = quantile(&sorted, 0.5);
        let q3 = quantile(&sorted, 0.75);
        let iqr = q3 - q1;
        let low = q1 - 1.5 * iqr;
        let high = q3 + 1.5 * iqr;

        let lower_fence = sorted.iter().copied().find(|v| *v >= low).unwrap_or(min);
        let upper_fence = sorted
            .iter()
            .rev()
            .copied()
            .find(|v| *v <= high)
            .unwrap_or(max);
        let outliers = sorted.iter().filter(|v| **v < low || **v > high).count();

        Some(Self {
            count: sorted.len(),
            min,
            q1,
            median,
            q3,
            max,
            lower_fence,
            upper_fence,
            outliers,
        })
    }
}

fn quantile(sorted: &[f64], p: f64) -> f64 {
    let pos = p * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value() {
        let stats = BoxStats::from_values(&[42.0]).unwrap();
        assert_eq!(stats.median, 42.0);
        assert_eq!(stats.lower_fence, 42.0);
        assert_eq!(stats.upper_fence, 42.0);
        assert_eq!(stats.outliers, 0);
    }

    #[test]
    fn test_quartiles_interpolate() {
        let stats = BoxStats::from_values(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.q1, 1.75);
        assert_eq!(stats.median, 2.5);
        assert_eq!(stats.q3, 3.25);
        assert_eq!(stats.max, 4.0);
        assert_eq!(stats.q3 - stats.q1, 1.5);
    }

    #[test]
    fn test_outlier_beyond_fence() {
        let stats = BoxStats::from_values(&[10.0, 11.0, 12.0, 13.0, 14.0, 100.0]).unwrap();
        assert_eq!(stats.outliers, 1);
        assert_eq!(stats.upper_fence, 14.0);
        assert_eq!(stats.max, 100.0);
    }

    #[test]
    fn test_empty_is_none() {
        assert!(BoxStats::from_values(&[]).is_none());
    }
}
