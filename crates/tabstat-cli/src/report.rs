//! Presentation of analysis results.
//!
//! Each command builds one report. Text rendering shows summary figures with
//! three decimals and raw values (mode, outlier values, threshold) in their
//! shortest round-trip form; JSON rendering serializes the report as is.

use std::io;

use serde::Serialize;
use tabstat_stats::{Histogram, OutlierRecord, Statistics};

pub(crate) trait Report: Serialize {
    fn write_text(&self, w: &mut dyn io::Write) -> io::Result<()>;
}

#[derive(Debug, Serialize)]
pub(crate) struct StatsReport<'a> {
    pub column: &'a str,
    #[serde(flatten)]
    pub statistics: Statistics,
}

impl Report for StatsReport<'_> {
    fn write_text(&self, w: &mut dyn io::Write) -> io::Result<()> {
        let stats = &self.statistics;
        writeln!(w, "Mean: {:.3}", stats.mean)?;
        writeln!(w, "Median: {:.3}", stats.median)?;
        writeln!(w, "Mode: {:?}", stats.mode)?;
        match stats.std_dev {
            Some(std_dev) => writeln!(w, "Standard Deviation: {std_dev:.3}")?,
            None => writeln!(
                w,
                "Standard Deviation: n/a (need at least 2 values, got {})",
                stats.count
            )?,
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct HistogramReport<'a> {
    pub column: &'a str,
    pub bin_count: usize,
    #[serde(flatten)]
    pub histogram: Histogram,
}

impl Report for HistogramReport<'_> {
    fn write_text(&self, w: &mut dyn io::Write) -> io::Result<()> {
        for bin in &self.histogram.bins {
            let bar = "*".repeat(usize::try_from(bin.count).unwrap_or(usize::MAX));
            writeln!(w, "{:.2} - {:.2} | {bar}", bin.start, bin.end)?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CorrelationReport<'a> {
    pub column_x: &'a str,
    pub column_y: &'a str,
    pub count: usize,
    pub coefficient: f64,
}

impl Report for CorrelationReport<'_> {
    fn write_text(&self, w: &mut dyn io::Write) -> io::Result<()> {
        writeln!(
            w,
            "Correlation between '{}' and '{}': {:.3}",
            self.column_x, self.column_y, self.coefficient
        )
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct OutliersReport<'a> {
    pub column: &'a str,
    pub threshold: f64,
    pub outliers: Vec<OutlierRecord>,
}

impl Report for OutliersReport<'_> {
    fn write_text(&self, w: &mut dyn io::Write) -> io::Result<()> {
        if self.outliers.is_empty() {
            return writeln!(
                w,
                "No outliers detected with threshold z-score={:?}.",
                self.threshold
            );
        }
        writeln!(w, "Outliers (threshold z-score={:?}):", self.threshold)?;
        for record in &self.outliers {
            writeln!(w, "Index {}: {:?}", record.index, record.value)?;
        }
        Ok(())
    }
}
