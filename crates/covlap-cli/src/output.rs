use anyhow::Result;
use chrono::NaiveDate;
use covlap_types::{OverlapResult, PackageIndexEntry, PackageSummary, StrategyOutcome};
use std::path::Path;

const STRATEGIES: [&str; 3] = ["earliest", "latest", "longest"];

pub fn write_summary_csv(path: &Path, summaries: &[PackageSummary]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "package_name",
        "total_journals",
        "covered_journals",
        "covered_pct",
    ])?;

    for summary in summaries {
        wtr.write_record(&[
            summary.package_name.clone(),
            summary.total_journals.to_string(),
            summary.covered_journals.to_string(),
            format!("{:.2}", summary.covered_pct),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_index_csv(path: &Path, entries: &[PackageIndexEntry]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["index", "package_name"])?;

    for entry in entries {
        wtr.write_record(&[entry.index.to_string(), entry.package_name.clone()])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_detail_csv(path: &Path, rows: &[&OverlapResult]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header: Vec<String> = ["journal_key", "begin", "end", "duration_days", "hidden"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    for strategy in STRATEGIES {
        for suffix in ["package", "hidden", "begin", "end", "covered"] {
            header.push(format!("{}_{}", strategy, suffix));
        }
    }
    header.push("covered".to_string());
    wtr.write_record(&header)?;

    for row in rows {
        let mut record: Vec<String> = vec![
            row.journal_key.to_string(),
            date_field(row.begin),
            date_field(row.end),
            int_field(row.duration_days),
            row.hidden.to_string(),
        ];
        for outcome in [&row.earliest, &row.latest, &row.longest] {
            push_outcome(&mut record, outcome);
        }
        record.push(row.covered.to_string());
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

fn push_outcome(record: &mut Vec<String>, outcome: &StrategyOutcome) {
    match &outcome.candidate {
        Some(candidate) => {
            record.push(candidate.package_name.clone());
            record.push(candidate.hidden.to_string());
            record.push(date_field(candidate.begin));
            record.push(date_field(candidate.end));
        }
        None => {
            for _ in 0..4 {
                record.push(String::new());
            }
        }
    }
    record.push(outcome.covered.to_string());
}

fn date_field(date: Option<NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_default()
}

fn int_field(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub fn print_summary(summaries: &[PackageSummary]) {
    println!("OVERLAP SUMMARY");
    println!("{}", "=".repeat(72));
    println!(
        "{:<44} {:>8} {:>8} {:>8}",
        "Package", "Total", "Covered", "Pct"
    );

    for summary in summaries {
        println!(
            "{:<44} {:>8} {:>8} {:>7.1}%",
            truncate(&summary.package_name, 44),
            summary.total_journals,
            summary.covered_journals,
            summary.covered_pct
        );
    }
}

pub fn print_package_index(entries: &[PackageIndexEntry]) {
    println!("WORKING PACKAGE SET");
    println!("{}", "=".repeat(72));

    for entry in entries {
        println!("{:>6}  {}", entry.index, entry.package_name);
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max - 3).collect();
        format!("{}...", kept)
    }
}
