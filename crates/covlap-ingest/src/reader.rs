use crate::{Error, Result};
use covlap_types::RawHolding;
use std::io::Read;
use std::path::Path;

/// Columns every holdings export must carry. Validated against the header
/// row before any record is deserialized, so a malformed export fails with
/// one diagnostic instead of a parse error per row.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "KBID",
    "Title",
    "PackageName",
    "ManagedCoverageBegin",
    "ManagedCoverageEnd",
    "CustomCoverageBegin",
    "CustomCoverageEnd",
    "Embargo",
    "HideOnPublicationFinder",
];

/// Read all holding records from a CSV file.
pub fn read_holdings(path: &Path) -> Result<Vec<RawHolding>> {
    let file = std::fs::File::open(path)?;
    read_holdings_from(file)
}

/// Read all holding records from any CSV source.
pub fn read_holdings_from<R: Read>(reader: R) -> Result<Vec<RawHolding>> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr.headers()?.clone();
    let mut missing = Vec::new();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            missing.push(column.to_string());
        }
    }
    if !missing.is_empty() {
        return Err(Error::MissingColumns(missing));
    }

    let mut holdings = Vec::new();
    for record in rdr.deserialize() {
        let holding: RawHolding = record?;
        holdings.push(holding);
    }

    Ok(holdings)
}
