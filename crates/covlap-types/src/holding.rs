use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Journal identity used to group holdings across packages.
///
/// The knowledge-base identifier and the title are concatenated so that
/// two distinct journals sharing a title never collapse into one key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JournalKey(String);

impl JournalKey {
    pub fn new(kbid: &str, title: &str) -> Self {
        Self(format!("{}{}", kbid.trim(), title.trim()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JournalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the holdings export, exactly as found in the source file.
///
/// All coverage fields stay raw strings here: an empty string means
/// "not set" and must remain distinguishable from any real value until
/// normalization resolves the effective interval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawHolding {
    #[serde(rename = "KBID")]
    pub kbid: String,

    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "PackageName")]
    pub package_name: String,

    #[serde(rename = "ManagedCoverageBegin", default)]
    pub managed_coverage_begin: String,

    #[serde(rename = "ManagedCoverageEnd", default)]
    pub managed_coverage_end: String,

    /// Overrides the managed begin date when non-empty.
    #[serde(rename = "CustomCoverageBegin", default)]
    pub custom_coverage_begin: String,

    /// Overrides the managed end date when non-empty. The literal value
    /// "present" marks open-ended coverage.
    #[serde(rename = "CustomCoverageEnd", default)]
    pub custom_coverage_end: String,

    /// "<number> <unit>" delay during which the newest issues are
    /// inaccessible; empty when the holding has no embargo.
    #[serde(rename = "Embargo", default)]
    pub embargo: String,

    #[serde(rename = "HideOnPublicationFinder", default)]
    pub hide_on_publication_finder: String,
}

/// A holding after normalization: the effective coverage interval with
/// custom-date overrides and embargo already applied.
///
/// `None` in a date or duration field means the source data did not yield
/// a usable value; it propagates as "no duration" and disqualifies the
/// interval from ever satisfying containment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holding {
    pub journal_key: JournalKey,
    pub package_name: String,
    pub hidden: bool,
    pub effective_begin: Option<NaiveDate>,
    pub effective_end: Option<NaiveDate>,
    pub duration_days: Option<i64>,
}
