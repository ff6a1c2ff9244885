use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "license-riskr",
    about = "Assess licensing risks in a project's third-party component bill",
    version
)]
pub struct Cli {
    /// Project definition JSON file
    #[arg(required_unless_present = "sample")]
    pub project: Option<PathBuf>,

    /// Print a sample project definition and exit
    #[arg(long)]
    pub sample: bool,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Exit with code 1 if any category's risk value exceeds this threshold
    #[arg(long, value_name = "RISK")]
    pub fail_above: Option<f64>,

    /// Show good things alongside root causes, warnings and tips
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print the summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
