use clap::Args;

use crate::{output::OutputArg, report::StatsReport, source::InputArg};

#[derive(Debug, Clone, Args)]
pub(crate) struct StatsArg {
    #[command(flatten)]
    pub input: InputArg,

    /// Numeric column to summarize
    pub column: String,

    #[command(flatten)]
    pub output: OutputArg,
}

pub(crate) fn run(arg: &StatsArg) -> anyhow::Result<()> {
    let table = arg.input.read_table()?;
    let column = table.extract(&arg.column)?;
    let statistics = tabstat_stats::describe(column.values())?;
    log::debug!("described {} values of '{}'", statistics.count, arg.column);

    arg.output.emit(&StatsReport {
        column: &arg.column,
        statistics,
    })
}
