use crate::args::OutputFormat;
use crate::config::Config;
use crate::output;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;

pub fn handle(
    holdings_path: &Path,
    config: &Config,
    out_dir: &Path,
    as_of: NaiveDate,
    format: OutputFormat,
) -> Result<()> {
    let raws = super::load_working_rows(holdings_path, config)?;

    let holdings = covlap_engine::normalize_all(&raws, as_of);
    let packages = covlap_engine::working_packages(holdings.iter().map(|h| h.package_name.as_str()));
    let results = covlap_engine::analyze(&holdings);
    let summaries = covlap_engine::summarize(&results);
    let index = covlap_engine::package_index(&packages);

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    output::write_summary_csv(&out_dir.join("summary.csv"), &summaries)?;
    output::write_index_csv(&out_dir.join("package_index.csv"), &index)?;
    for entry in &index {
        let rows = covlap_engine::detail_for_package(&results, &entry.package_name);
        let file_name = format!("package_{:03}.csv", entry.index);
        output::write_detail_csv(&out_dir.join(file_name), &rows)?;
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summaries)?),
        OutputFormat::Plain => {
            output::print_summary(&summaries);
            println!();
            println!(
                "Wrote {} report files to {}",
                index.len() + 2,
                out_dir.display()
            );
        }
    }

    Ok(())
}
