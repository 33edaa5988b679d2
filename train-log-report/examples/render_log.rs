//! Standalone training log renderer
//!
//! Loads a training log, prints a short summary of what was read and renders
//! the metrics image without going through the CLI's config handling.
//!
//! Usage:
//!   render_log <train-log.csv> [--output <file.png>] [--dpi <n>] [--title <text>]
//!
//! Example:
//!   render_log runs/breakout/train-log.csv --output breakout.png --dpi 100

use std::env;
use std::path::PathBuf;
use train_log_report::{read_training_log, Metric, ReportConfig, ReportGenerator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <train-log.csv> [--output <file.png>] [--dpi <n>] [--title <text>]", args[0]);
        std::process::exit(1);
    }

    let input = PathBuf::from(&args[1]);
    let mut config = ReportConfig::new().with_show(false);

    let mut i = 2;
    while i < args.len() {
        let value = args.get(i + 1);
        match (args[i].as_str(), value) {
            ("--output", Some(v)) => config = config.with_output(v),
            ("--dpi", Some(v)) => config = config.with_dpi(v.parse()?),
            ("--title", Some(v)) => config = config.with_title(v.as_str()),
            _ => {
                eprintln!("Unknown or incomplete argument: {}", args[i]);
                std::process::exit(1);
            }
        }
        i += 2;
    }

    let log = read_training_log(&input)?;

    println!("=== TRAINING LOG ===");
    println!("Rows: {}", log.len());
    if let Some((first, last)) = log.episode_range() {
        println!("Episodes: {}..={}", first, last);
    }
    if let Some(last) = log.rows().last() {
        for metric in Metric::ALL {
            println!("  {:<14} last = {:.4}", metric.column(), last.value(metric));
        }
    }

    let written = ReportGenerator::new(config).render(&log)?;
    println!("\nSaved {}", written.display());

    Ok(())
}
