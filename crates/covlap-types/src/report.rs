use serde::{Deserialize, Serialize};

/// Per-package aggregate for the summary table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageSummary {
    pub package_name: String,
    pub total_journals: usize,
    pub covered_journals: usize,
    /// 100 x covered/total; 0.0 for an empty package.
    pub covered_pct: f64,
}

/// One row of the package index table, correlating a package name with
/// the stable numeric index used to name its detail output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageIndexEntry {
    pub index: usize,
    pub package_name: String,
}
