use clap::Args;

use crate::{output::OutputArg, report::CorrelationReport, source::InputArg};

#[derive(Debug, Clone, Args)]
pub(crate) struct CorrelationArg {
    #[command(flatten)]
    pub input: InputArg,

    /// First numeric column
    pub column_x: String,

    /// Second numeric column
    pub column_y: String,

    #[command(flatten)]
    pub output: OutputArg,
}

pub(crate) fn run(arg: &CorrelationArg) -> anyhow::Result<()> {
    let table = arg.input.read_table()?;
    let x = table.extract(&arg.column_x)?;
    let y = table.extract(&arg.column_y)?;
    let coefficient = tabstat_stats::correlate(x.values(), y.values())?;
    log::debug!(
        "correlated '{}' and '{}' over {} rows",
        arg.column_x,
        arg.column_y,
        x.len()
    );

    arg.output.emit(&CorrelationReport {
        column_x: &arg.column_x,
        column_y: &arg.column_y,
        count: x.len(),
        coefficient,
    })
}
