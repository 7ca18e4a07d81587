use crate::args::OutputFormat;
use crate::config::Config;
use crate::output;
use anyhow::Result;
use std::path::Path;

pub fn handle(holdings_path: &Path, config: &Config, format: OutputFormat) -> Result<()> {
    let raws = super::load_working_rows(holdings_path, config)?;

    let packages =
        covlap_engine::working_packages(raws.iter().map(|raw| raw.package_name.as_str()));
    let index = covlap_engine::package_index(&packages);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&index)?),
        OutputFormat::Plain => output::print_package_index(&index),
    }

    Ok(())
}
