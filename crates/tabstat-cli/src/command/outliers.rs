use clap::Args;

use crate::{output::OutputArg, report::OutliersReport, source::InputArg};

#[derive(Debug, Clone, Args)]
pub(crate) struct OutliersArg {
    #[command(flatten)]
    pub input: InputArg,

    /// Numeric column to scan
    pub column: String,

    /// Flag values whose absolute z-score exceeds this
    #[arg(default_value_t = 2.0, allow_negative_numbers = true)]
    pub threshold: f64,

    #[command(flatten)]
    pub output: OutputArg,
}

pub(crate) fn run(arg: &OutliersArg) -> anyhow::Result<()> {
    let table = arg.input.read_table()?;
    let column = table.extract(&arg.column)?;
    let outliers = tabstat_stats::detect_outliers(column.values(), arg.threshold)?;
    log::debug!(
        "{} of {} values of '{}' exceed z-score {}",
        outliers.len(),
        column.len(),
        arg.column,
        arg.threshold
    );

    arg.output.emit(&OutliersReport {
        column: &arg.column,
        threshold: arg.threshold,
        outliers,
    })
}
