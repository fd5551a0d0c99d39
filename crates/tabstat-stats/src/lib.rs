//! Statistical analysis core for the tabstat tool.
//!
//! This crate turns one column (or a pair of columns) of a tabular dataset
//! into statistical summaries:
//!
//! - **Column extraction**: Parse a named column of raw text cells into numbers
//! - **Descriptive statistics**: Mean, median, mode and sample standard deviation
//! - **Histogram generation**: Equal-width buckets spanning the data range
//! - **Correlation**: Pearson correlation coefficient between two columns
//! - **Outlier detection**: Z-score flagging against a threshold
//!
//! Every operation is a pure function over in-memory data that returns either
//! a complete result or a single [`StatsError`]. Reading files and presenting
//! results are left to the caller.
//!
//! # Modules
//!
//! - [`dataset`]: Rows and datasets of raw text cells
//! - [`column`]: Fallible numeric column extraction
//! - [`descriptive`]: Descriptive statistics
//! - [`histogram`]: Equal-width histograms
//! - [`correlation`]: Pearson correlation
//! - [`outlier`]: Z-score outlier detection
//! - [`error`]: The error taxonomy shared by all operations
//!
//! # Examples
//!
//! ```
//! use tabstat_stats::{Dataset, Row, correlate, describe, detect_outliers, extract, histogram};
//!
//! let dataset = Dataset::from_iter(
//!     [("1", "2"), ("2", "4"), ("3", "6"), ("4", "8"), ("5", "10")]
//!         .into_iter()
//!         .map(|(x, y)| Row::from_iter([("x", x), ("y", y)])),
//! );
//! let x = extract(&dataset, "x").unwrap();
//! let y = extract(&dataset, "y").unwrap();
//!
//! let stats = describe(x.values()).unwrap();
//! assert_eq!(stats.mean, 3.0);
//!
//! let histogram = histogram(x.values(), 2).unwrap();
//! assert_eq!(histogram.total_count(), 5);
//!
//! let r = correlate(x.values(), y.values()).unwrap();
//! assert!((r - 1.0).abs() < 1e-12);
//!
//! assert!(detect_outliers(x.values(), 3.0).unwrap().is_empty());
//! ```

pub use self::{
    column::{NumericColumn, extract},
    correlation::correlate,
    dataset::{Dataset, Row},
    descriptive::{Statistics, describe},
    error::{ErrorKind, StatsError},
    histogram::{Histogram, HistogramBin, histogram},
    outlier::{OutlierRecord, detect_outliers},
};

pub mod column;
pub mod correlation;
pub mod dataset;
pub mod descriptive;
pub mod error;
pub mod histogram;
pub mod outlier;
