//! Numeric column extraction.
//!
//! This is the single place where raw text cells are coerced into numbers.
//! Every analytical component consumes the resulting [`NumericColumn`].

use serde::Serialize;

use crate::{dataset::Dataset, error::StatsError};

/// Values of one column, one per row, in row order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericColumn {
    name: String,
    values: Vec<f64>,
}

impl NumericColumn {
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl AsRef<[f64]> for NumericColumn {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

/// Extracts `column` from every row of `dataset` as finite floating-point
/// numbers.
///
/// The whole column is returned or nothing is: the first row lacking the key
/// yields [`StatsError::ColumnNotFound`], the first cell that is not a finite
/// number yields [`StatsError::NonNumericValue`]. `row` in either error is
/// the 0-based index of the row in `dataset`.
///
/// Surrounding whitespace is ignored. Unlike a plain `str::parse::<f64>()`,
/// which accepts `nan`, `inf`, `infinity` and literals that overflow such as
/// `1e400`, non-finite results are rejected as non-numeric: a single one would
/// make every statistic over the column undefined.
///
/// # Examples
///
/// ```
/// use tabstat_stats::{Dataset, Row, StatsError, extract};
///
/// let dataset = Dataset::from_iter([
///     Row::from_iter([("temperature", "21.5")]),
///     Row::from_iter([("temperature", "abc")]),
/// ]);
/// let err = extract(&dataset, "temperature").unwrap_err();
/// assert!(matches!(err, StatsError::NonNumericValue { row: 1, .. }));
/// ```
pub fn extract(dataset: &Dataset, column: &str) -> Result<NumericColumn, StatsError> {
    let values = dataset
        .iter()
        .enumerate()
        .map(|(row, record)| {
            let raw = record
                .get(column)
                .ok_or_else(|| StatsError::ColumnNotFound {
                    column: column.to_owned(),
                    row,
                })?;
            parse_cell(raw).ok_or_else(|| StatsError::NonNumericValue {
                column: column.to_owned(),
                row,
                value: raw.to_owned(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(NumericColumn::new(column, values))
}

fn parse_cell(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
