use crate::containment::contains;
use crate::select::{earliest_candidate, latest_candidate, longest_candidate};
use covlap_types::{CandidateSummary, Holding, JournalKey, OverlapResult, StrategyOutcome};
use std::collections::{HashMap, HashSet};

/// Journal-key lookup over the full normalized holdings table, built once
/// per run. Replaces re-filtering the whole table for every package.
pub struct JournalIndex<'a> {
    by_journal: HashMap<&'a JournalKey, Vec<&'a Holding>>,
}

impl<'a> JournalIndex<'a> {
    pub fn build(holdings: &'a [Holding]) -> Self {
        let mut by_journal: HashMap<&JournalKey, Vec<&Holding>> = HashMap::new();
        for holding in holdings {
            by_journal.entry(&holding.journal_key).or_default().push(holding);
        }
        Self { by_journal }
    }

    /// All holdings of one journal, in input order, across every package.
    pub fn holdings_of(&self, journal_key: &JournalKey) -> &[&'a Holding] {
        self.by_journal
            .get(journal_key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Distinct package names in first-appearance order. The position in this
/// list is the package's stable index for the report outputs.
pub fn working_packages<'a, I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut packages = Vec::new();
    for name in names {
        if seen.insert(name) {
            packages.push(name.to_string());
        }
    }
    packages
}

/// Run the overlap analysis for every package in the working set.
///
/// Packages are processed independently; results accumulate in one
/// append-only collection in package order, so a parallel driver could
/// fan packages out and merge without changing the output.
pub fn analyze(holdings: &[Holding]) -> Vec<OverlapResult> {
    let index = JournalIndex::build(holdings);
    let packages = working_packages(holdings.iter().map(|h| h.package_name.as_str()));

    let mut results = Vec::with_capacity(holdings.len());
    for package in &packages {
        results.extend(analyze_package(package, holdings, &index));
    }
    results
}

/// Evaluate one investigated package: for each of its holdings, select
/// the earliest/latest/longest alternates among other packages' holdings
/// of the same journal and test containment against each.
pub fn analyze_package(
    package: &str,
    holdings: &[Holding],
    index: &JournalIndex<'_>,
) -> Vec<OverlapResult> {
    holdings
        .iter()
        .filter(|holding| holding.package_name == package)
        .map(|investigated| {
            let candidates: Vec<&Holding> = index
                .holdings_of(&investigated.journal_key)
                .iter()
                .copied()
                .filter(|candidate| candidate.package_name != package)
                .collect();

            let earliest = outcome(investigated, earliest_candidate(&candidates));
            let latest = outcome(investigated, latest_candidate(&candidates));
            let longest = outcome(investigated, longest_candidate(&candidates));
            let covered = earliest.covered || latest.covered || longest.covered;

            OverlapResult {
                journal_key: investigated.journal_key.clone(),
                package_name: investigated.package_name.clone(),
                hidden: investigated.hidden,
                begin: investigated.effective_begin,
                end: investigated.effective_end,
                duration_days: investigated.duration_days,
                earliest,
                latest,
                longest,
                covered,
            }
        })
        .collect()
}

fn outcome(investigated: &Holding, candidate: Option<&Holding>) -> StrategyOutcome {
    StrategyOutcome {
        covered: candidate.is_some_and(|c| contains(c, investigated)),
        candidate: candidate.map(CandidateSummary::of),
    }
}
