use crate::{descriptive, error::StatsError};

/// Pearson correlation coefficient between two equal-length columns.
///
/// ```text
/// r = Σ(xᵢ - x̄)(yᵢ - ȳ) / √(Σ(xᵢ - x̄)² · Σ(yᵢ - ȳ)²)
/// ```
///
/// Fails with [`StatsError::LengthMismatch`] when the lengths differ and with
/// [`StatsError::UndefinedCorrelation`] when the denominator is zero, which is
/// the case when either column has zero variance (including empty and
/// single-element input). The result is clamped into `[-1, 1]`.
///
/// # Examples
///
/// ```
/// use tabstat_stats::correlate;
///
/// let r = correlate(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
/// assert!((r - 1.0).abs() < 1e-12);
/// ```
pub fn correlate(x: &[f64], y: &[f64]) -> Result<f64, StatsError> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    if x.is_empty() {
        return Err(StatsError::UndefinedCorrelation);
    }

    let mean_x = descriptive::mean(x)?;
    let mean_y = descriptive::mean(y)?;
    // Scaled deviations lie in [-1, 1], so each sum stays within [-n, n] and
    // each sum of squares is at least 1, whatever the magnitude of the data.
    let scale_x = max_abs_deviation(x, mean_x);
    let scale_y = max_abs_deviation(y, mean_y);
    if scale_x == 0.0 || scale_y == 0.0 {
        return Err(StatsError::UndefinedCorrelation);
    }

    let (mut covariance, mut ss_x, mut ss_y) = (0.0, 0.0, 0.0);
    for (xi, yi) in x.iter().zip(y) {
        let dx = (xi - mean_x) / scale_x;
        let dy = (yi - mean_y) / scale_y;
        covariance += dx * dy;
        ss_x += dx * dx;
        ss_y += dy * dy;
    }
    let denominator = ss_x.sqrt() * ss_y.sqrt();

    Ok((covariance / denominator).clamp(-1.0, 1.0))
}

fn max_abs_deviation(values: &[f64], mean: f64) -> f64 {
    values
        .iter()
        .map(|v| (v - mean).abs())
        .fold(0.0, f64::max)
}
