//! Equal-width histogram of simulated final capitals.

use serde::{Deserialize, Serialize};

/// One histogram bucket covering `[lower, upper)`; the last bucket also
/// includes `upper`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Inclusive lower edge.
    pub lower: f64,
    /// Upper edge.
    pub upper: f64,
    /// Number of values in the bucket.
    pub count: u32,
}

/// Partition `[min, max]` of `values` into `bins` equal-width buckets.
///
/// Returns an empty histogram when there are no values or no bins. When every
/// value is identical the buckets have zero width and all values land in the
/// last one.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = (max - min) / bins as f64;

    let mut buckets: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: min + width * i as f64,
            upper: if i + 1 == bins {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();

    for &value in values {
        let idx = if width > 0.0 {
            (((value - min) / width).floor() as usize).min(bins - 1)
        } else {
            bins - 1
        };
        buckets[idx].count += 1;
    }

    buckets
}
