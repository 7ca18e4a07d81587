use crate::holding::{Holding, JournalKey};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The fields of an alternate-package holding that the reports need to
/// audit a selection: who provides it, whether it is publicly visible,
/// and its effective interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSummary {
    pub package_name: String,
    pub hidden: bool,
    pub begin: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl CandidateSummary {
    pub fn of(holding: &Holding) -> Self {
        Self {
            package_name: holding.package_name.clone(),
            hidden: holding.hidden,
            begin: holding.effective_begin,
            end: holding.effective_end,
        }
    }
}

/// Result of one selection strategy for one investigated holding:
/// the chosen candidate (absent when no other package holds the journal)
/// and whether that candidate's interval contains the investigated one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyOutcome {
    pub candidate: Option<CandidateSummary>,
    pub covered: bool,
}

/// One row per (investigated package, journal) pair: the investigated
/// holding's normalized fields plus the earliest/latest/longest selection
/// outcomes and the combined coverage verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlapResult {
    pub journal_key: JournalKey,
    pub package_name: String,
    pub hidden: bool,
    pub begin: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub duration_days: Option<i64>,

    pub earliest: StrategyOutcome,
    pub latest: StrategyOutcome,
    pub longest: StrategyOutcome,

    /// True when at least one of the three strategies found a containing
    /// candidate.
    pub covered: bool,
}
