pub mod analyze;
pub mod check;
pub mod packages;

use crate::config::Config;
use anyhow::{Context, Result};
use covlap_types::RawHolding;
use std::collections::HashSet;
use std::path::Path;

/// Read the holdings file, verify the denylist against it and drop the
/// denylisted rows. Every handler goes through this so configuration
/// errors surface before any per-package processing starts.
pub(crate) fn load_working_rows(path: &Path, config: &Config) -> Result<Vec<RawHolding>> {
    let raws = covlap_ingest::read_holdings(path)
        .with_context(|| format!("Failed to read holdings from {}", path.display()))?;

    validate_denylist(&raws, config)?;

    Ok(raws
        .into_iter()
        .filter(|raw| !config.is_excluded(&raw.package_name))
        .collect())
}

pub(crate) fn validate_denylist(raws: &[RawHolding], config: &Config) -> Result<()> {
    let present: HashSet<&str> = raws.iter().map(|raw| raw.package_name.as_str()).collect();
    let missing = config.missing_packages(&present);
    if !missing.is_empty() {
        anyhow::bail!(
            "Denylist references packages absent from the holdings file: {}",
            missing.join(", ")
        );
    }
    Ok(())
}
