use covlap_types::{OverlapResult, PackageIndexEntry, PackageSummary};
use std::collections::HashMap;

/// Aggregate the full result set into one summary row per package, in
/// the same first-appearance order the engine emitted.
pub fn summarize(results: &[OverlapResult]) -> Vec<PackageSummary> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();

    for result in results {
        let entry = counts.entry(result.package_name.as_str()).or_insert_with(|| {
            order.push(result.package_name.as_str());
            (0, 0)
        });
        entry.0 += 1;
        if result.covered {
            entry.1 += 1;
        }
    }

    order
        .into_iter()
        .map(|package_name| {
            let (total, covered) = counts[package_name];
            PackageSummary {
                package_name: package_name.to_string(),
                total_journals: total,
                covered_journals: covered,
                covered_pct: if total == 0 {
                    0.0
                } else {
                    covered as f64 * 100.0 / total as f64
                },
            }
        })
        .collect()
}

/// Detail rows for one package, covered rows first. The sort is stable,
/// so within each group the engine's journal order is preserved.
pub fn detail_for_package<'a>(
    results: &'a [OverlapResult],
    package: &str,
) -> Vec<&'a OverlapResult> {
    let mut rows: Vec<&OverlapResult> = results
        .iter()
        .filter(|result| result.package_name == package)
        .collect();
    rows.sort_by_key(|result| !result.covered);
    rows
}

/// The package index table: working-set position becomes the stable
/// numeric index used to name each per-package detail output.
pub fn package_index(packages: &[String]) -> Vec<PackageIndexEntry> {
    packages
        .iter()
        .enumerate()
        .map(|(index, package_name)| PackageIndexEntry {
            index,
            package_name: package_name.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use covlap_types::{JournalKey, StrategyOutcome};

    fn result(package: &str, journal: &str, covered: bool) -> OverlapResult {
        let absent = StrategyOutcome {
            candidate: None,
            covered,
        };
        OverlapResult {
            journal_key: JournalKey::new("1", journal),
            package_name: package.to_string(),
            hidden: false,
            begin: None,
            end: None,
            duration_days: None,
            earliest: absent.clone(),
            latest: absent.clone(),
            longest: absent,
            covered,
        }
    }

    #[test]
    fn summary_counts_and_percentage() {
        let results = vec![
            result("Alpha", "X", true),
            result("Alpha", "Y", false),
            result("Alpha", "Z", true),
            result("Beta", "X", false),
        ];

        let summaries = summarize(&results);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].package_name, "Alpha");
        assert_eq!(summaries[0].total_journals, 3);
        assert_eq!(summaries[0].covered_journals, 2);
        assert!((summaries[0].covered_pct - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(summaries[1].covered_journals, 0);
        assert_eq!(summaries[1].covered_pct, 0.0);
    }

    #[test]
    fn detail_sorts_covered_first_and_stable() {
        let results = vec![
            result("Alpha", "W", false),
            result("Alpha", "X", true),
            result("Alpha", "Y", false),
            result("Alpha", "Z", true),
            result("Beta", "X", true),
        ];

        let rows = detail_for_package(&results, "Alpha");

        let keys: Vec<&str> = rows.iter().map(|r| r.journal_key.as_str()).collect();
        assert_eq!(keys, ["1X", "1Z", "1W", "1Y"]);
    }

    #[test]
    fn package_index_is_positional() {
        let packages = vec!["Beta".to_string(), "Alpha".to_string()];

        let index = package_index(&packages);

        assert_eq!(index[0].index, 0);
        assert_eq!(index[0].package_name, "Beta");
        assert_eq!(index[1].index, 1);
        assert_eq!(index[1].package_name, "Alpha");
    }
}
