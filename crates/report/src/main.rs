//! Sentence Complexity Report - Main Entry Point

use anyhow::Result;
use clap::Parser;
use report::{init_logging, render, Analyzer, Overrides, ReportConfig};
use std::path::PathBuf;
use tracing::info;

/// Compare simple and complex sentences of labeled corpora
#[derive(Parser, Debug)]
#[command(name = "complexity-report", version, about)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, env = "COMPLEXITY_CONFIG")]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: Overrides,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = ReportConfig::load(cli.config.as_deref())?;
    cli.overrides.apply(&mut config);

    init_logging(config.tracing_level()?, config.log_json)?;

    info!("=== Sentence Complexity Report v{} ===", env!("CARGO_PKG_VERSION"));

    let report = Analyzer::new(&config).run(&config.datasets)?;
    println!("{}", render(&report, config.format)?);

    Ok(())
}
