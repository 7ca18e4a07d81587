use crate::args::OutputFormat;
use crate::config::Config;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;

/// Data-quality report over one holdings file. Malformed values are not
/// errors for the analysis itself (they degrade per row), so this is the
/// one place a user can see how much of the input actually parses.
#[derive(Debug, Serialize)]
struct CheckReport {
    rows: usize,
    excluded_rows: usize,
    working_packages: usize,
    journals: usize,
    rows_without_begin: usize,
    rows_without_end: usize,
    skipped_embargo_specs: usize,
}

pub fn handle(
    holdings_path: &Path,
    config: &Config,
    as_of: NaiveDate,
    format: OutputFormat,
) -> Result<()> {
    let raws = covlap_ingest::read_holdings(holdings_path)
        .with_context(|| format!("Failed to read holdings from {}", holdings_path.display()))?;

    super::validate_denylist(&raws, config)?;

    let working: Vec<_> = raws
        .iter()
        .filter(|raw| !config.is_excluded(&raw.package_name))
        .collect();

    let mut rows_without_begin = 0;
    let mut rows_without_end = 0;
    let mut skipped_embargo_specs = 0;
    let mut packages = HashSet::new();
    let mut journals = HashSet::new();

    for raw in &working {
        let holding = covlap_engine::normalize_holding(raw, as_of);

        if holding.effective_begin.is_none() {
            rows_without_begin += 1;
        }
        if holding.effective_end.is_none() {
            rows_without_end += 1;
        }
        if !raw.embargo.trim().is_empty()
            && covlap_engine::parse_embargo_days(&raw.embargo).is_none()
        {
            skipped_embargo_specs += 1;
        }

        packages.insert(holding.package_name);
        journals.insert(holding.journal_key);
    }

    let report = CheckReport {
        rows: raws.len(),
        excluded_rows: raws.len() - working.len(),
        working_packages: packages.len(),
        journals: journals.len(),
        rows_without_begin,
        rows_without_end,
        skipped_embargo_specs,
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Plain => print_report(&report),
    }

    Ok(())
}

fn print_report(report: &CheckReport) {
    println!("HOLDINGS CHECK");
    println!("{}", "=".repeat(72));
    println!("Rows:                        {}", report.rows);
    println!("Excluded by denylist:        {}", report.excluded_rows);
    println!("Working packages:            {}", report.working_packages);
    println!("Distinct journals:           {}", report.journals);
    println!("Rows without a begin date:   {}", report.rows_without_begin);
    println!("Rows without an end date:    {}", report.rows_without_end);
    println!("Embargo specs skipped:       {}", report.skipped_embargo_specs);
}
