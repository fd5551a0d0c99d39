//! Delimited text file reader producing a [`Dataset`].

use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Args;
use tabstat_stats::{Dataset, NumericColumn, Row, StatsError};

#[derive(Debug, Clone, Args)]
pub(crate) struct InputArg {
    /// Path to the delimited text file; the first line is the header
    pub file: PathBuf,

    /// Field delimiter (a single ASCII character)
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,
}

impl InputArg {
    pub fn read_table(&self) -> anyhow::Result<Table> {
        let delimiter = delimiter_byte(self.delimiter)?;
        read_table(&self.file, delimiter)
    }
}

fn delimiter_byte(delimiter: char) -> anyhow::Result<u8> {
    u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .with_context(|| format!("Delimiter must be a single ASCII character, got {delimiter:?}"))
}

/// A dataset read from a file, remembering the file line each row starts on.
#[derive(Debug)]
pub(crate) struct Table {
    pub dataset: Dataset,
    lines: Vec<u64>,
    path: PathBuf,
}

impl Table {
    /// Extracts a numeric column.
    ///
    /// A row-level failure keeps its [`StatsError`] and gains the file path and
    /// line of the offending row as context.
    pub fn extract(&self, column: &str) -> anyhow::Result<NumericColumn> {
        tabstat_stats::extract(&self.dataset, column).map_err(|err| {
            let row = match &err {
                StatsError::ColumnNotFound { row, .. }
                | StatsError::NonNumericValue { row, .. } => Some(*row),
                _ => None,
            };
            match row.and_then(|row| self.lines.get(row)) {
                Some(line) => anyhow::Error::new(err)
                    .context(format!("{}, line {line}", self.path.display())),
                None => err.into(),
            }
        })
    }
}

pub(crate) fn read_table(path: &Path, delimiter: u8) -> anyhow::Result<Table> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    let table = parse_table(BufReader::new(file), delimiter, path.to_owned())
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;

    log::info!(
        "loaded {} rows with columns [{}] from {}",
        table.dataset.len(),
        table.dataset.column_names().join(", "),
        path.display()
    );
    Ok(table)
}

/// Parses delimited text with a header line into rows keyed by header name.
///
/// Cells are trimmed. A record shorter than the header lacks the trailing
/// keys; fields beyond the header are ignored.
pub(crate) fn parse_table<R>(reader: R, delimiter: u8, path: PathBuf) -> anyhow::Result<Table>
where
    R: io::Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = reader
        .headers()
        .context("Failed to read header line")?
        .clone();

    let mut lines = Vec::new();
    let dataset = reader
        .records()
        .map(|record| -> anyhow::Result<Row> {
            let record = record.context("Failed to parse record")?;
            let line = record.position().map_or(0, csv::Position::line);
            if record.len() < headers.len() {
                log::debug!(
                    "record at line {line} has {} of {} fields",
                    record.len(),
                    headers.len()
                );
            }
            lines.push(line);
            Ok(headers.iter().zip(record.iter()).collect::<Row>())
        })
        .collect::<anyhow::Result<Dataset>>()?;

    Ok(Table {
        dataset,
        lines,
        path,
    })
}
