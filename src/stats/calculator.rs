//! Box Statistics Module
//! Quartiles, Tukey whiskers and outliers for box plots.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

/// Whisker reach in multiples of the inter-quartile range.
pub const WHISKER_IQR_FACTOR: f64 = 1.5;

/// Summary drawn for a single box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStats {
    pub count: usize,
    pub mean: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Smallest data point within `q1 - 1.5 * IQR`.
    pub lower_whisker: f64,
    /// Largest data point within `q3 + 1.5 * IQR`.
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

impl Default for BoxStats {
    fn default() -> Self {
        Self {
            count: 0,
            mean: f64::NAN,
            q1: f64::NAN,
            median: f64::NAN,
            q3: f64::NAN,
            lower_whisker: f64::NAN,
            upper_whisker: f64::NAN,
            outliers: Vec::new(),
        }
    }
}

impl BoxStats {
    /// Lowest and highest value drawn (whiskers and outliers).
    pub fn extent(&self) -> Option<(f64, f64)> {
        if self.count == 0 {
            return None;
        }
        let lo = self
            .outliers
            .iter()
            .copied()
            .fold(self.lower_whisker, f64::min);
        let hi = self
            .outliers
            .iter()
            .copied()
            .fold(self.upper_whisker, f64::max);
        Some((lo, hi))
    }
}

/// Computes box statistics, in parallel across columns.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute box statistics for an array of values.
    pub fn compute_box_stats(values: &[f64]) -> BoxStats {
        let n = values.len();
        if n == 0 {
            return BoxStats::default();
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let q1 = Self::percentile(&sorted, 25.0);
        let median = Self::percentile(&sorted, 50.0);
        let q3 = Self::percentile(&sorted, 75.0);
        let iqr = q3 - q1;
        let low_fence = q1 - WHISKER_IQR_FACTOR * iqr;
        let high_fence = q3 + WHISKER_IQR_FACTOR * iqr;

        let lower_whisker = sorted
            .iter()
            .copied()
            .find(|&v| v >= low_fence)
            .unwrap_or(q1);
        let upper_whisker = sorted
            .iter()
            .rev()
            .copied()
            .find(|&v| v <= high_fence)
            .unwrap_or(q3);
        let outliers = sorted
            .iter()
            .copied()
            .filter(|&v| v < low_fence || v > high_fence)
            .collect();

        BoxStats {
            count: n,
            mean: values.iter().mean(),
            q1,
            median,
            q3,
            lower_whisker,
            upper_whisker,
            outliers,
        }
    }

    /// Calculate percentile using linear interpolation (NumPy compatible).
    pub fn percentile(sorted_values: &[f64], p: f64) -> f64 {
        let n = sorted_values.len();
        if n == 0 {
            return f64::NAN;
        }
        if n == 1 {
            return sorted_values[0];
        }

        let rank = (p / 100.0) * (n - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = (rank.ceil() as usize).min(n - 1);
        let frac = rank - lower as f64;

        if lower == upper {
            sorted_values[lower]
        } else {
            sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
        }
    }

    /// Compute statistics for several columns in parallel, preserving order.
    pub fn compute_all_parallel(columns: &[Vec<f64>]) -> Vec<BoxStats> {
        columns
            .par_iter()
            .map(|values| Self::compute_box_stats(values))
            .collect()
    }
}
