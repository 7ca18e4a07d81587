use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "covlap")]
#[command(about = "Analyze serials holdings for redundant package coverage", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Console output format
    #[arg(long, value_enum, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full overlap analysis and write the report tables
    Analyze {
        /// Holdings CSV export to analyze
        #[arg(long)]
        holdings: PathBuf,

        /// TOML config carrying the package denylist
        #[arg(long)]
        config: Option<PathBuf>,

        /// Directory for summary.csv, package_index.csv and the
        /// per-package detail files
        #[arg(long, default_value = "reports")]
        out_dir: PathBuf,

        /// Processing date resolving open-ended coverage (defaults to today)
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },

    /// Print the working package set with its stable indices
    Packages {
        /// Holdings CSV export to analyze
        #[arg(long)]
        holdings: PathBuf,

        /// TOML config carrying the package denylist
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a holdings file and report data quality issues
    Check {
        /// Holdings CSV export to validate
        #[arg(long)]
        holdings: PathBuf,

        /// TOML config carrying the package denylist
        #[arg(long)]
        config: Option<PathBuf>,

        /// Processing date resolving open-ended coverage (defaults to today)
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
}
