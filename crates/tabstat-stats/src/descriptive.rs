//! Descriptive statistics over a numeric column.
//!
//! Each statistic has its own precondition: mean, median and mode need at
//! least one value, sample variance and standard deviation need two. The
//! standalone functions fail independently; [`describe`] fails only when the
//! input is empty and leaves the dispersion fields empty for a single value.

use serde::Serialize;

use crate::error::StatsError;

/// Summary of a numeric column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    /// Number of values.
    pub count: usize,
    /// The minimum value.
    pub min: f64,
    /// The maximum value.
    pub max: f64,
    /// The arithmetic mean.
    pub mean: f64,
    /// The median; the average of the two middle values for an even count.
    pub median: f64,
    /// The most frequent value, the smallest one on ties.
    pub mode: f64,
    /// Sample variance (N - 1 denominator), `None` for fewer than two values.
    pub variance: Option<f64>,
    /// Sample standard deviation, `None` for fewer than two values.
    pub std_dev: Option<f64>,
}

impl Statistics {
    /// Computes statistics from unsorted values.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tabstat_stats::descriptive::Statistics;
    /// let stats = Statistics::new(&[5.0, 2.0, 4.0, 1.0, 3.0]).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// ```
    pub fn new(values: &[f64]) -> Result<Self, StatsError> {
        let sorted = sorted(values);
        Self::from_sorted(&sorted)
    }

    /// Computes statistics from pre-sorted values, skipping the sort.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    pub fn from_sorted(sorted_values: &[f64]) -> Result<Self, StatsError> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );
        StatsError::require_len(sorted_values, 1)?;

        let mean = mean(sorted_values)?;
        let variance = (sorted_values.len() >= 2).then(|| {
            sum_of_squared_deviations(sorted_values, mean) / len_f64(sorted_values.len() - 1)
        });

        Ok(Self {
            count: sorted_values.len(),
            min: sorted_values[0],
            max: sorted_values[sorted_values.len() - 1],
            mean,
            median: median_of_sorted(sorted_values),
            mode: mode_of_sorted(sorted_values),
            variance,
            std_dev: variance.map(f64::sqrt),
        })
    }
}

/// Computes count, extremes, mean, median, mode and sample dispersion.
///
/// # Examples
///
/// ```
/// use tabstat_stats::describe;
///
/// let stats = describe(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert_eq!(stats.mean, 3.0);
/// assert_eq!(stats.median, 3.0);
/// assert!((stats.std_dev.unwrap() - 1.5811).abs() < 1e-4);
/// ```
pub fn describe(values: &[f64]) -> Result<Statistics, StatsError> {
    Statistics::new(values)
}

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> Result<f64, StatsError> {
    StatsError::require_len(values, 1)?;
    Ok(values.iter().sum::<f64>() / len_f64(values.len()))
}

/// Median of unsorted values.
pub fn median(values: &[f64]) -> Result<f64, StatsError> {
    StatsError::require_len(values, 1)?;
    Ok(median_of_sorted(&sorted(values)))
}

/// Most frequent value.
///
/// When several values share the highest frequency the smallest of them is
/// returned, independent of input order. Values are compared with `==`, so
/// `-0.0` and `0.0` count as the same value.
pub fn mode(values: &[f64]) -> Result<f64, StatsError> {
    StatsError::require_len(values, 1)?;
    Ok(mode_of_sorted(&sorted(values)))
}

/// Sample variance, dividing the sum of squared deviations by N - 1.
pub fn sample_variance(values: &[f64]) -> Result<f64, StatsError> {
    StatsError::require_len(values, 2)?;
    let mean = mean(values)?;
    Ok(sum_of_squared_deviations(values, mean) / len_f64(values.len() - 1))
}

/// Sample standard deviation.
pub fn sample_std_dev(values: &[f64]) -> Result<f64, StatsError> {
    sample_variance(values).map(f64::sqrt)
}

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

fn median_of_sorted(sorted_values: &[f64]) -> f64 {
    let mid = sorted_values.len() / 2;
    if sorted_values.len().is_multiple_of(2) {
        f64::midpoint(sorted_values[mid - 1], sorted_values[mid])
    } else {
        sorted_values[mid]
    }
}

// Runs of equal values are adjacent after sorting; only a strictly longer run
// replaces the current best, so the first (smallest) tied value is kept.
#[expect(clippy::float_cmp)]
fn mode_of_sorted(sorted_values: &[f64]) -> f64 {
    let mut best = (sorted_values[0], 0);
    let mut run = (sorted_values[0], 0);
    for &value in sorted_values {
        if value == run.0 {
            run.1 += 1;
        } else {
            run = (value, 1);
        }
        if run.1 > best.1 {
            best = run;
        }
    }
    best.0
}

fn sum_of_squared_deviations(values: &[f64], mean: f64) -> f64 {
    values.iter().map(|v| (v - mean).powi(2)).sum()
}

#[expect(clippy::cast_precision_loss)]
pub(crate) fn len_f64(len: usize) -> f64 {
    len as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_describe_five_values() {
        let stats = describe(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(stats.count, 5);
        assert_eq!(stats.mean, 3.0);
        assert_eq!(stats.median, 3.0);
        assert_eq!(stats.mode, 1.0);
        assert!((stats.variance.unwrap() - 2.5).abs() < EPS);
        assert!((stats.std_dev.unwrap() - 1.581_138_830_084_189_8).abs() < EPS);
    }

    #[test]
    fn test_median_even_count_averages_middle_pair() {
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
        assert_eq!(median(&[7.0]).unwrap(), 7.0);
    }

    #[test]
    fn test_mode_most_frequent() {
        assert_eq!(mode(&[3.0, 1.0, 3.0, 2.0, 3.0, 1.0]).unwrap(), 3.0);
    }

    #[test]
    fn test_mode_tie_picks_smallest() {
        assert_eq!(mode(&[5.0, 5.0, 2.0, 2.0, 9.0]).unwrap(), 2.0);
        assert_eq!(mode(&[2.0, 2.0, 5.0, 5.0, 9.0]).unwrap(), 2.0);
        // all distinct: every value ties at frequency one
        assert_eq!(mode(&[8.0, -1.0, 4.0]).unwrap(), -1.0);
    }

    #[test]
    fn test_mode_treats_signed_zeros_as_equal() {
        assert_eq!(mode(&[-0.0, 0.0, 1.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_single_value_omits_dispersion() {
        let stats = describe(&[42.0]).unwrap();
        assert_eq!(stats.mean, 42.0);
        assert_eq!(stats.median, 42.0);
        assert_eq!(stats.mode, 42.0);
        assert_eq!(stats.variance, None);
        assert_eq!(stats.std_dev, None);
        assert_eq!(
            sample_std_dev(&[42.0]),
            Err(StatsError::InsufficientData {
                required: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_empty_input_fails_every_statistic() {
        let expected = Err(StatsError::InsufficientData {
            required: 1,
            actual: 0,
        });
        assert!(describe(&[]).unwrap_err().is_insufficient_data());
        assert_eq!(mean(&[]), expected);
        assert_eq!(median(&[]), expected);
        assert_eq!(mode(&[]), expected);
        assert!(sample_variance(&[]).unwrap_err().is_insufficient_data());
    }

    #[test]
    fn test_constant_values_have_zero_std_dev() {
        assert_eq!(sample_std_dev(&[4.0, 4.0, 4.0]).unwrap(), 0.0);
    }

    #[test]
    #[should_panic(expected = "values must be sorted in ascending order")]
    fn test_from_sorted_rejects_unsorted() {
        let _ = Statistics::from_sorted(&[3.0, 1.0]);
    }

    #[test]
    fn test_serializes_missing_dispersion_as_null() {
        let json = serde_json::to_value(describe(&[1.0]).unwrap()).unwrap();
        assert!(json["std_dev"].is_null());
        assert_eq!(json["count"], 1);
    }
}
