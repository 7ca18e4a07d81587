// Engine module - Core overlap analysis (normalization, selection, containment, aggregation)
// This layer sits between raw holdings (ingest) and CLI presentation

pub mod containment;
pub mod normalize;
pub mod overlap;
pub mod report;
pub mod select;

pub use containment::contains;
pub use normalize::{normalize_holding, parse_coverage_date, parse_embargo_days};
pub use overlap::{analyze, analyze_package, working_packages, JournalIndex};
pub use report::{detail_for_package, package_index, summarize};

use chrono::NaiveDate;
use covlap_types::{Holding, RawHolding};

// Façade API - Stable public interface for the CLI layer

/// Normalize a batch of raw holdings against one processing date.
pub fn normalize_all(raws: &[RawHolding], as_of: NaiveDate) -> Vec<Holding> {
    raws.iter().map(|raw| normalize_holding(raw, as_of)).collect()
}
