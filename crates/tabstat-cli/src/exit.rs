//! Process exit codes derived from the failure that ended a command.

use std::process::ExitCode;

use tabstat_stats::{ErrorKind, StatsError};

/// I/O failures and malformed input files.
pub(crate) const IO_FAILURE: u8 = 1;
/// Invalid arguments; clap also exits with 2 on usage errors.
pub(crate) const INVALID_ARGUMENT: u8 = 2;
/// The requested column is missing or not numeric.
pub(crate) const BAD_COLUMN: u8 = 3;
/// The data cannot support the requested statistic.
pub(crate) const UNDEFINED_RESULT: u8 = 4;

pub(crate) fn exit_code(err: &anyhow::Error) -> ExitCode {
    ExitCode::from(code_for(err))
}

fn code_for(err: &anyhow::Error) -> u8 {
    let Some(stats_err) = err.downcast_ref::<StatsError>() else {
        return IO_FAILURE;
    };
    match stats_err.kind() {
        ErrorKind::InvalidBinCount | ErrorKind::InvalidThreshold => INVALID_ARGUMENT,
        ErrorKind::ColumnNotFound | ErrorKind::NonNumericValue => BAD_COLUMN,
        ErrorKind::InsufficientData
        | ErrorKind::LengthMismatch
        | ErrorKind::UndefinedCorrelation => UNDEFINED_RESULT,
    }
}
