use chrono::{Duration, NaiveDate};
use covlap_types::{Holding, JournalKey, RawHolding};

/// Sentinel end date marking open-ended coverage. Resolved to the
/// processing date before any embargo adjustment.
const PRESENT: &str = "present";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a coverage date string. Empty and malformed values both yield
/// `None`; a holding with an unusable bound proceeds through the pipeline
/// and simply never satisfies containment.
pub fn parse_coverage_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Parse an embargo spec of the form "<number> <unit>" into days.
///
/// Units map as years -> 365, months -> 30, anything else -> 1. A missing
/// or unparseable numeric value yields `None`, which skips the embargo
/// adjustment entirely.
pub fn parse_embargo_days(spec: &str) -> Option<i64> {
    let spec = spec.trim();
    if spec.is_empty() {
        return None;
    }

    let (value, unit) = spec.split_once(' ')?;
    let value: i64 = value.trim().parse().ok()?;

    let per_unit = match unit.trim().to_ascii_lowercase().as_str() {
        "years" => 365,
        "months" => 30,
        _ => 1,
    };

    Some(value * per_unit)
}

/// Convert one raw holding into its effective coverage interval.
///
/// Resolution order: custom dates override managed dates when non-empty,
/// the "present" sentinel becomes `as_of`, and the embargo (if parseable)
/// is subtracted from the end bound only. The begin bound is never
/// embargo-adjusted.
pub fn normalize_holding(raw: &RawHolding, as_of: NaiveDate) -> Holding {
    let begin_raw = resolve(&raw.custom_coverage_begin, &raw.managed_coverage_begin);
    let end_raw = resolve(&raw.custom_coverage_end, &raw.managed_coverage_end);

    let effective_begin = parse_coverage_date(begin_raw);

    let resolved_end = if end_raw.trim() == PRESENT {
        Some(as_of)
    } else {
        parse_coverage_date(end_raw)
    };

    let effective_end = match (resolved_end, parse_embargo_days(&raw.embargo)) {
        (Some(end), Some(days)) => Duration::try_days(days)
            .and_then(|embargo| end.checked_sub_signed(embargo)),
        (end, _) => end,
    };

    let duration_days = match (effective_begin, effective_end) {
        (Some(begin), Some(end)) => Some((end - begin).num_days()),
        _ => None,
    };

    Holding {
        journal_key: JournalKey::new(&raw.kbid, &raw.title),
        package_name: raw.package_name.clone(),
        hidden: raw.hide_on_publication_finder.trim().eq_ignore_ascii_case("yes"),
        effective_begin,
        effective_end,
        duration_days,
    }
}

fn resolve<'a>(custom: &'a str, managed: &'a str) -> &'a str {
    if custom.trim().is_empty() {
        managed
    } else {
        custom
    }
}
