//! Z-score outlier detection.
//!
//! A value is an outlier when its distance from the mean, measured in sample
//! standard deviations, is strictly greater than the threshold.

use serde::Serialize;

use crate::{descriptive, error::StatsError};

/// A flagged value and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutlierRecord {
    /// 0-based position in the input column.
    pub index: usize,
    /// The flagged value.
    pub value: f64,
    /// Absolute z-score, `|value - mean| / std_dev`.
    pub z_score: f64,
}

/// Flags every value whose absolute z-score exceeds `threshold`.
///
/// Records are returned in ascending index order; an empty vector means no
/// value exceeded the threshold. A column with zero standard deviation has no
/// outliers.
///
/// Fails with [`StatsError::InvalidThreshold`] for a negative or NaN
/// threshold, and with [`StatsError::InsufficientData`] for fewer than two
/// values.
///
/// # Examples
///
/// ```
/// use tabstat_stats::detect_outliers;
///
/// let outliers = detect_outliers(&[10.0, 10.0, 10.0, 10.0, 100.0], 1.5).unwrap();
/// assert_eq!(outliers.len(), 1);
/// assert_eq!(outliers[0].index, 4);
/// ```
pub fn detect_outliers(values: &[f64], threshold: f64) -> Result<Vec<OutlierRecord>, StatsError> {
    if threshold.is_nan() || threshold < 0.0 {
        return Err(StatsError::InvalidThreshold { threshold });
    }
    StatsError::require_len(values, 2)?;
    let mean = descriptive::mean(values)?;
    let std_dev = descriptive::sample_std_dev(values)?;
    if std_dev == 0.0 {
        return Ok(vec![]);
    }

    let outliers = values
        .iter()
        .enumerate()
        .map(|(index, &value)| OutlierRecord {
            index,
            value,
            z_score: (value - mean).abs() / std_dev,
        })
        .filter(|record| record.z_score > threshold)
        .collect();
    Ok(outliers)
}
