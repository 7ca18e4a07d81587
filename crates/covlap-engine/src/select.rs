use covlap_types::Holding;
use std::cmp::Ordering;

// Candidate selection over the other-package holdings of one journal.
//
// Each strategy is a pure comparator applied to the same candidate list,
// keeping the tie-break rules auditable in one place. Undefined dates and
// durations always compare as worse than defined ones, so a holding with
// missing bounds stays eligible but can only win when nothing better
// exists (and then fails containment anyway).

/// Candidate starting earliest. Among equal begin dates the longer
/// coverage wins; remaining ties break on package name.
pub fn earliest_candidate<'a>(candidates: &[&'a Holding]) -> Option<&'a Holding> {
    candidates.iter().copied().min_by(|a, b| {
        by_begin_asc(a, b)
            .then_with(|| by_duration_desc(a, b))
            .then_with(|| by_package_name(a, b))
    })
}

/// Candidate ending latest. Among equal end dates the longer coverage
/// wins; remaining ties break on package name.
pub fn latest_candidate<'a>(candidates: &[&'a Holding]) -> Option<&'a Holding> {
    candidates.iter().copied().min_by(|a, b| {
        by_end_desc(a, b)
            .then_with(|| by_duration_desc(a, b))
            .then_with(|| by_package_name(a, b))
    })
}

/// Candidate with the longest coverage duration. Ties on duration break
/// on package name rather than input order, so results never depend on
/// how the source file happens to be sorted.
pub fn longest_candidate<'a>(candidates: &[&'a Holding]) -> Option<&'a Holding> {
    candidates
        .iter()
        .copied()
        .min_by(|a, b| by_duration_desc(a, b).then_with(|| by_package_name(a, b)))
}

fn by_begin_asc(a: &Holding, b: &Holding) -> Ordering {
    match (a.effective_begin, b.effective_begin) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn by_end_desc(a: &Holding, b: &Holding) -> Ordering {
    match (a.effective_end, b.effective_end) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn by_duration_desc(a: &Holding, b: &Holding) -> Ordering {
    match (a.duration_days, b.duration_days) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn by_package_name(a: &Holding, b: &Holding) -> Ordering {
    a.package_name.cmp(&b.package_name)
}
