use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Run configuration. Currently only the package denylist: names listed
/// here (trial subscriptions and the like) are dropped from the working
/// set before any computation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub excluded_packages: Vec<String>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config =
            toml::from_str(&content).with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }

    pub fn is_excluded(&self, package: &str) -> bool {
        self.excluded_packages.iter().any(|p| p == package)
    }

    /// Denylist entries naming packages that do not occur in the input.
    /// A non-empty answer is a configuration error: it usually means a
    /// typo, and silently ignoring it would leave a package in the
    /// analysis that the user meant to drop.
    pub fn missing_packages(&self, present: &HashSet<&str>) -> Vec<String> {
        self.excluded_packages
            .iter()
            .filter(|p| !present.contains(p.as_str()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_excludes_nothing() {
        let config = Config::default();

        assert!(config.excluded_packages.is_empty());
        assert!(!config.is_excluded("Alpha"));
    }

    #[test]
    fn loads_denylist_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "excluded_packages = [\"Trial Package\", \"Beta\"]").unwrap();

        let config = Config::load_from(file.path()).unwrap();

        assert_eq!(config.excluded_packages.len(), 2);
        assert!(config.is_excluded("Trial Package"));
        assert!(!config.is_excluded("Alpha"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = Config::load_from(Path::new("/nonexistent/covlap.toml"));

        assert!(result.is_err());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "excluded_packages = \"not a list").unwrap();

        let result = Config::load_from(file.path());

        assert!(result.is_err());
    }

    #[test]
    fn missing_packages_reports_unknown_entries() {
        let config = Config {
            excluded_packages: vec!["Alpha".to_string(), "Ghost".to_string()],
        };
        let present: HashSet<&str> = ["Alpha", "Beta"].into_iter().collect();

        assert_eq!(config.missing_packages(&present), ["Ghost"]);
    }
}
