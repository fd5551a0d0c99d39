/// Failure raised by an analytical operation.
///
/// Every variant carries the context a caller needs to explain the failure
/// (column name, offending value, required vs. actual length). Row indices
/// are 0-based positions in the [`Dataset`](crate::dataset::Dataset).
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum StatsError {
    #[display("column '{column}' not found in row {row}")]
    ColumnNotFound { column: String, row: usize },
    #[display("non-numeric value '{value}' in column '{column}' at row {row}")]
    NonNumericValue {
        column: String,
        row: usize,
        value: String,
    },
    #[display("insufficient data: need at least {required} values, got {actual}")]
    InsufficientData { required: usize, actual: usize },
    #[display("invalid bin count {bin_count}: must be a positive integer")]
    InvalidBinCount { bin_count: usize },
    #[display("length mismatch: {left} values vs. {right} values")]
    LengthMismatch { left: usize, right: usize },
    #[display("correlation undefined: standard deviation is zero")]
    UndefinedCorrelation,
    #[display("invalid threshold {threshold}: must be a non-negative number")]
    InvalidThreshold { threshold: f64 },
}

/// Fieldless classification of [`StatsError`], for boundary policy such as
/// exit-code selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ErrorKind {
    #[display("column not found")]
    ColumnNotFound,
    #[display("non-numeric value")]
    NonNumericValue,
    #[display("insufficient data")]
    InsufficientData,
    #[display("invalid bin count")]
    InvalidBinCount,
    #[display("length mismatch")]
    LengthMismatch,
    #[display("undefined correlation")]
    UndefinedCorrelation,
    #[display("invalid threshold")]
    InvalidThreshold,
}

impl StatsError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ColumnNotFound { .. } => ErrorKind::ColumnNotFound,
            Self::NonNumericValue { .. } => ErrorKind::NonNumericValue,
            Self::InsufficientData { .. } => ErrorKind::InsufficientData,
            Self::InvalidBinCount { .. } => ErrorKind::InvalidBinCount,
            Self::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            Self::UndefinedCorrelation => ErrorKind::UndefinedCorrelation,
            Self::InvalidThreshold { .. } => ErrorKind::InvalidThreshold,
        }
    }

    pub(crate) fn require_len(values: &[f64], required: usize) -> Result<(), Self> {
        if values.len() < required {
            return Err(Self::InsufficientData {
                required,
                actual: values.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_context() {
        let err = StatsError::NonNumericValue {
            column: "temperature".to_owned(),
            row: 3,
            value: "abc".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "non-numeric value 'abc' in column 'temperature' at row 3"
        );

        let err = StatsError::InsufficientData {
            required: 2,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "insufficient data: need at least 2 values, got 1"
        );
    }

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(
            StatsError::UndefinedCorrelation.kind(),
            ErrorKind::UndefinedCorrelation
        );
        assert_eq!(
            StatsError::InvalidBinCount { bin_count: 0 }.kind(),
            ErrorKind::InvalidBinCount
        );
        assert!(StatsError::LengthMismatch { left: 1, right: 2 }.is_length_mismatch());
    }

    #[test]
    fn test_require_len() {
        assert!(StatsError::require_len(&[1.0, 2.0], 2).is_ok());
        assert_eq!(
            StatsError::require_len(&[1.0], 2),
            Err(StatsError::InsufficientData {
                required: 2,
                actual: 1
            })
        );
    }
}
