//! `license-riskr` — score the licensing risks of a project's third-party
//! component bill.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load and validate the project definition ([`loader`]).
//! 3. Build the engine with every risk analyzer ([`engine`]).
//! 4. Run the analysis and collect the ordered results.
//! 5. Render the requested report ([`report`], or JSON straight from the
//!    structured results).
//! 6. Exit `0`, or `1` when `--fail-above` is set and exceeded.

use anyhow::Result;
use clap::Parser;

use license_riskr::cli::{Cli, ReportFormat};
use license_riskr::engine::RiskAnalysisEngine;
use license_riskr::loader;
use license_riskr::report;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.sample {
        println!("{}", loader::sample_json());
        return Ok(());
    }

    let Some(path) = cli.project.as_deref() else {
        // clap enforces the argument unless --sample is given.
        return Ok(());
    };
    let project = loader::load_project(path)?;

    let engine = RiskAnalysisEngine::with_default_analyzers(&project);
    let results = engine.analyze()?;

    match cli.report {
        ReportFormat::Terminal => {
            report::terminal::render_report(&results, &project, cli.verbose, cli.quiet)?;
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
    }

    if let Some(threshold) = cli.fail_above {
        if results.iter().any(|r| r.risk_value() > threshold) {
            std::process::exit(1);
        }
    }

    Ok(())
}
