use serde::Serialize;

use crate::{descriptive::len_f64, error::StatsError};

/// Equal-width histogram spanning the data range `[min, max]`.
///
/// The range is divided into `bin_count` buckets of width
/// `(max - min) / bin_count`. Every bucket is half-open except the last, which
/// is closed so that the maximum value is counted there rather than in an
/// overflow bucket. Bucket counts always sum to the number of input values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    /// Buckets in ascending order of their start value.
    pub bins: Vec<HistogramBin>,
}

/// A single bucket of a [`Histogram`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    /// Inclusive lower bound.
    pub start: f64,
    /// Upper bound; exclusive except for the last bucket.
    pub end: f64,
    /// Number of values in this bucket.
    pub count: u64,
}

impl Histogram {
    /// Builds a histogram with `bin_count` equal-width buckets.
    ///
    /// When every value is equal the width is zero: all values are counted in
    /// the first bucket and every bucket spans `[min, min]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tabstat_stats::histogram::Histogram;
    /// let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
    /// let histogram = Histogram::new(&values, 5).unwrap();
    /// assert_eq!(histogram.bins.len(), 5);
    /// assert_eq!(histogram.total_count(), 10);
    /// assert_eq!(histogram.bins[4].end, 10.0);
    /// ```
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(values: &[f64], bin_count: usize) -> Result<Self, StatsError> {
        if bin_count == 0 {
            return Err(StatsError::InvalidBinCount { bin_count });
        }
        StatsError::require_len(values, 1)?;

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        // A range wider than f64::MAX is binned on halved values; halving is
        // exact for magnitudes this large.
        let scale = if (max - min).is_finite() { 1.0 } else { 0.5 };
        let low = min * scale;
        let width = (max * scale - low) / len_f64(bin_count);

        let mut bins = (0..bin_count)
            .map(|idx| HistogramBin {
                // Recompute bounds from the index to avoid accumulating rounding error
                start: ((low + len_f64(idx) * width) / scale).min(max),
                end: if idx + 1 == bin_count {
                    max
                } else {
                    ((low + len_f64(idx + 1) * width) / scale).min(max)
                },
                count: 0,
            })
            .collect::<Vec<_>>();

        if width == 0.0 {
            bins[0].count = values.len() as u64;
            return Ok(Self { bins });
        }

        for &value in values {
            // floor((v - min) / width) reaches bin_count only for the maximum
            let idx = (((value * scale - low) / width).floor() as usize).min(bin_count - 1);
            bins[idx].count += 1;
        }

        Ok(Self { bins })
    }

    /// Width shared by every bucket; zero when all values are equal.
    ///
    /// Infinite when the width itself exceeds `f64::MAX`, as for a single
    /// bucket spanning `[-f64::MAX, f64::MAX]`; the bounds stay finite.
    #[must_use]
    pub fn bin_width(&self) -> f64 {
        self.bins
            .first()
            .map_or(0.0, |bin| bin.end - bin.start)
    }

    /// Sum of all bucket counts; equals the number of input values.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// Largest bucket count, useful for scaling a rendered bar chart.
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }
}

/// Partitions `values` into `bin_count` equal-width buckets over `[min, max]`.
///
/// See [`Histogram::new`].
pub fn histogram(values: &[f64], bin_count: usize) -> Result<Histogram, StatsError> {
    Histogram::new(values, bin_count)
}
