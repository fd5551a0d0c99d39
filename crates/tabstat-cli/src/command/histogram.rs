use clap::Args;

use crate::{output::OutputArg, report::HistogramReport, source::InputArg};

#[derive(Debug, Clone, Args)]
pub(crate) struct HistogramArg {
    #[command(flatten)]
    pub input: InputArg,

    /// Numeric column to bin
    pub column: String,

    /// Number of equal-width buckets
    #[arg(default_value_t = 10)]
    pub bins: usize,

    #[command(flatten)]
    pub output: OutputArg,
}

pub(crate) fn run(arg: &HistogramArg) -> anyhow::Result<()> {
    let table = arg.input.read_table()?;
    let column = table.extract(&arg.column)?;
    let histogram = tabstat_stats::histogram(column.values(), arg.bins)?;
    log::debug!(
        "binned {} values of '{}' into {} buckets of width {}",
        histogram.total_count(),
        arg.column,
        histogram.bins.len(),
        histogram.bin_width()
    );

    arg.output.emit(&HistogramReport {
        column: &arg.column,
        bin_count: arg.bins,
        histogram,
    })
}
