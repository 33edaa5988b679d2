//! Training Log Report CLI Application
//!
//! This is the command-line interface for the training log report library.
//! It uses the train-log-report library and adds:
//! - Optional TOML configuration with command-line overrides
//! - Logging setup
//! - Console status and error messages with exit codes
//! - Interactive display of the saved image

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use train_log_report::{read_training_log, ReportConfig, ReportError, ReportGenerator};

mod config;
mod display;

/// Training Log Report - Plot RL training metrics from train-log.csv
#[derive(Parser, Debug)]
#[command(name = "train-log-cli")]
#[command(about = "Render reward, loss, epsilon and throughput charts from a training log", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the training log CSV (default: train-log.csv)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output image path (default: training_metrics.png)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output resolution in dots per inch (default: 150)
    #[arg(long, value_name = "N")]
    dpi: Option<u32>,

    /// Figure title
    #[arg(long, value_name = "TEXT")]
    title: Option<String>,

    /// Do not try to open the image after saving
    #[arg(long)]
    no_show: bool,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Training Log Report CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using report library v{}", train_log_report::VERSION);

    let app_config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => config::AppConfig::default(),
    };
    let (input, report_config) = resolve_settings(&args, &app_config);

    let log = match read_training_log(&input) {
        Ok(log) => log,
        Err(ReportError::InputMissing(path)) => {
            println!("Error: {} not found. Run training first.", path.display());
            std::process::exit(1);
        }
        Err(ReportError::InputEmpty(path)) => {
            println!("Error: {} is empty.", path.display());
            std::process::exit(1);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to load training log {:?}", input));
        }
    };

    let show = report_config.show;
    let generator = ReportGenerator::new(report_config);
    let written = generator
        .render(&log)
        .with_context(|| format!("Failed to write {:?}", generator.config().output))?;

    println!("✓ Saved visualization to {}", written.display());

    if show {
        display::show_image(&written);
    }

    Ok(())
}

/// Merge config file values with command-line flags (flags win)
fn resolve_settings(args: &Args, app_config: &config::AppConfig) -> (PathBuf, ReportConfig) {
    let input = args
        .input
        .clone()
        .unwrap_or_else(|| app_config.input_path());

    let mut report = app_config.report_config();
    if let Some(output) = &args.output {
        report = report.with_output(output.clone());
    }
    if let Some(dpi) = args.dpi {
        report = report.with_dpi(dpi);
    }
    if let Some(title) = &args.title {
        report = report.with_title(title.clone());
    }
    if args.no_show {
        report = report.with_show(false);
    }

    log::debug!("Input: {:?}, report settings: {:?}", input, report);
    (input, report)
}

/// Initialize logging based on verbosity level
///
/// Logs go to stderr; the default level is `Warn` so a normal run prints only
/// its status line.
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("train-log-cli").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_arguments_match_defaults() {
        let args = parse(&[]);
        let (input, report) = resolve_settings(&args, &config::AppConfig::default());

        assert_eq!(input, PathBuf::from("train-log.csv"));
        assert_eq!(report, ReportConfig::default());
    }

    #[test]
    fn test_flags_override_config_file() {
        let app_config: config::AppConfig = toml::from_str(
            r#"
            [input]
            path = "from-config.csv"

            [output]
            path = "from-config.png"
            dpi = 100
            title = "From Config"
        "#,
        )
        .unwrap();

        let args = parse(&["--output", "flag.png", "--dpi", "72", "--no-show"]);
        let (input, report) = resolve_settings(&args, &app_config);

        assert_eq!(input, PathBuf::from("from-config.csv"));
        assert_eq!(report.output, PathBuf::from("flag.png"));
        assert_eq!(report.dpi, 72);
        assert_eq!(report.title, "From Config");
        assert!(!report.show);
    }

    #[test]
    fn test_verbosity_flags() {
        let args = parse(&["-vv", "--input", "runs/a.csv", "--title", "Run A"]);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.input, Some(PathBuf::from("runs/a.csv")));
        assert_eq!(args.title.as_deref(), Some("Run A"));
        assert!(!args.quiet);
    }
}
