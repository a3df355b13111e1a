//! Descriptive Statistics Computation

use serde::Serialize;

/// First quartile, median and third quartile of a sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quartiles {
    /// 25th percentile
    pub q1: f64,
    /// 50th percentile
    pub median: f64,
    /// 75th percentile
    pub q3: f64,
}

impl Quartiles {
    /// Quartiles of an empty sample
    pub const UNDEFINED: Quartiles = Quartiles {
        q1: f64::NAN,
        median: f64::NAN,
        q3: f64::NAN,
    };

    /// Compute quartiles from an already sorted slice
    pub fn from_sorted(sorted: &[f64]) -> Self {
        Self {
            q1: quantile_sorted(sorted, 0.25),
            median: quantile_sorted(sorted, 0.5),
            q3: quantile_sorted(sorted, 0.75),
        }
    }

    /// Interquartile range
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Central tendency and spread of a sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DescriptiveStats {
    /// Number of observations
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// Quartiles (linear interpolation)
    pub quartiles: Quartiles,
}

impl DescriptiveStats {
    /// Statistics of an empty sample: zero count, every numeric field NaN
    pub fn empty() -> Self {
        Self {
            count: 0,
            mean: f64::NAN,
            min: f64::NAN,
            max: f64::NAN,
            quartiles: Quartiles::UNDEFINED,
        }
    }

    /// Compute descriptive statistics from a slice of values
    pub fn compute(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::empty();
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        Self {
            count: values.len(),
            mean: mean(values),
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            quartiles: Quartiles::from_sorted(&sorted),
        }
    }

    /// Whether the sample had no observations
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Arithmetic mean, NaN for an empty slice.
///
/// Values are summed in slice order so repeated calls on the same input are
/// bit-identical.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Quantile of a sorted slice using linear interpolation between closest ranks.
///
/// The rank of `p` is `p * (n - 1)`; the result interpolates between the two
/// sorted values around it. NaN for an empty slice. `p` is clamped to [0, 1].
pub fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }

    let rank = p.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let fraction = rank - lower as f64;

    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

/// Quantile of an unsorted slice (see [`quantile_sorted`])
pub fn quantile(values: &[f64], p: f64) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    quantile_sorted(&sorted, p)
}
