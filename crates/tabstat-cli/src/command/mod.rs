use clap::{Parser, Subcommand};

use self::{
    correlation::CorrelationArg, histogram::HistogramArg, outliers::OutliersArg, stats::StatsArg,
};

mod correlation;
mod histogram;
mod outliers;
mod stats;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Analysis to run
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Mean, median, mode and standard deviation of a column
    Stats(StatsArg),
    /// Equal-width histogram of a column
    Histogram(HistogramArg),
    /// Pearson correlation between two columns
    Correlation(CorrelationArg),
    /// Z-score outliers of a column
    Outliers(OutliersArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Stats(arg) => stats::run(&arg)?,
        Mode::Histogram(arg) => histogram::run(&arg)?,
        Mode::Correlation(arg) => correlation::run(&arg)?,
        Mode::Outliers(arg) => outliers::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;
    use crate::output::OutputFormat;

    fn parse(args: &[&str]) -> Mode {
        CommandArgs::try_parse_from(std::iter::once("tabstat").chain(args.iter().copied()))
            .unwrap()
            .mode
    }

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_stats_args() {
        let Mode::Stats(arg) = parse(&["stats", "data.csv", "temperature"]) else {
            panic!("expected stats");
        };
        assert_eq!(arg.input.file.to_str(), Some("data.csv"));
        assert_eq!(arg.input.delimiter, ',');
        assert_eq!(arg.column, "temperature");
        assert_eq!(arg.output.format, OutputFormat::Text);
        assert!(arg.output.output.is_none());
    }

    #[test]
    fn test_histogram_default_bins() {
        let Mode::Histogram(arg) = parse(&["histogram", "data.csv", "humidity"]) else {
            panic!("expected histogram");
        };
        assert_eq!(arg.bins, 10);

        let Mode::Histogram(arg) = parse(&["histogram", "data.csv", "humidity", "4"]) else {
            panic!("expected histogram");
        };
        assert_eq!(arg.bins, 4);
    }

    #[test]
    fn test_correlation_args() {
        let Mode::Correlation(arg) = parse(&[
            "correlation",
            "data.csv",
            "temperature",
            "humidity",
            "--delimiter",
            ";",
            "--format",
            "json",
        ]) else {
            panic!("expected correlation");
        };
        assert_eq!(arg.column_x, "temperature");
        assert_eq!(arg.column_y, "humidity");
        assert_eq!(arg.input.delimiter, ';');
        assert_eq!(arg.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_outliers_threshold() {
        let Mode::Outliers(arg) = parse(&["outliers", "data.csv", "wind_speed"]) else {
            panic!("expected outliers");
        };
        assert!((arg.threshold - 2.0).abs() < f64::EPSILON);

        let Mode::Outliers(arg) =
            parse(&["outliers", "data.csv", "wind_speed", "3.5", "--output", "out.txt"])
        else {
            panic!("expected outliers");
        };
        assert!((arg.threshold - 3.5).abs() < f64::EPSILON);
        assert_eq!(
            arg.output.output.as_deref().and_then(|p| p.to_str()),
            Some("out.txt")
        );
    }

    #[test]
    fn test_usage_errors() {
        assert!(CommandArgs::try_parse_from(["tabstat", "stats", "data.csv"]).is_err());
        assert!(
            CommandArgs::try_parse_from(["tabstat", "histogram", "data.csv", "x", "ten"]).is_err()
        );
        assert!(
            CommandArgs::try_parse_from(["tabstat", "correlation", "data.csv", "x"]).is_err()
        );
        assert!(CommandArgs::try_parse_from(["tabstat", "median", "data.csv", "x"]).is_err());
    }
}
