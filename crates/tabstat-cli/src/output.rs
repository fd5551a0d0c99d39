use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::PathBuf,
};

use anyhow::Context;
use clap::{Args, ValueEnum};

use crate::report::Report;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// Pretty-printed JSON object
    Json,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct OutputArg {
    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl OutputArg {
    pub fn emit<R>(&self, report: &R) -> anyhow::Result<()>
    where
        R: Report,
    {
        let mut output = Output::from_output_path(self.output.clone())?;
        output.write_report(report, self.format)
    }
}

#[derive(Debug)]
pub(crate) enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_report<R>(&mut self, report: &R, format: OutputFormat) -> anyhow::Result<()>
    where
        R: Report,
    {
        match format {
            OutputFormat::Text => report
                .write_text(&mut *self)
                .with_context(|| format!("Failed to write report to {}", self.display_path()))?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *self, report)
                    .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
                writeln!(&mut *self).with_context(|| {
                    format!(
                        "Failed to write newline after JSON to {}",
                        self.display_path()
                    )
                })?;
            }
        }
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        log::debug!("report written to {}", self.display_path());
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::report::CorrelationReport;

    fn report() -> CorrelationReport<'static> {
        CorrelationReport {
            column_x: "temperature",
            column_y: "humidity",
            count: 3,
            coefficient: -0.5,
        }
    }

    #[test]
    fn test_text_report_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.txt");
        let arg = OutputArg {
            format: OutputFormat::Text,
            output: Some(path.clone()),
        };
        arg.emit(&report()).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Correlation between 'temperature' and 'humidity': -0.500\n"
        );
    }

    #[test]
    fn test_json_report_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.json");
        let mut output = Output::open(path.clone()).unwrap();
        assert_eq!(output.display_path(), path.display().to_string());
        output.write_report(&report(), OutputFormat::Json).unwrap();
        drop(output);

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.ends_with("}\n"));
        let json = serde_json::from_str::<serde_json::Value>(&text).unwrap();
        assert_eq!(json["column_x"], "temperature");
        assert_eq!(json["count"], 3);
        assert_eq!(json["coefficient"], -0.5);
    }

    #[test]
    fn test_existing_file_is_replaced() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.txt");
        fs::write(&path, "stale contents that are longer than the report\n").unwrap();

        Output::open(path.clone())
            .unwrap()
            .write_report(&report(), OutputFormat::Text)
            .unwrap();
        assert!(fs::read_to_string(&path).unwrap().starts_with("Correlation"));
        assert!(!fs::read_to_string(&path).unwrap().contains("stale"));
    }

    #[test]
    fn test_unwritable_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("report.txt");
        let err = Output::open(path).unwrap_err();
        assert!(err.to_string().contains("Failed to create output file"));
    }
}
