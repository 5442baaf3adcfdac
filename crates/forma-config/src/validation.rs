//! Validation behavior configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ValidationConfig {
    /// Path to a catalog of known record ids and usernames. Empty disables
    /// reference checks unless `--catalog` is passed.
    #[serde(default)]
    pub catalog_path: String,

    /// Fail the whole batch on the first invalid input instead of reporting
    /// every input.
    #[serde(default)]
    pub fail_fast: bool,
}

impl ValidationConfig {
    /// Check whether a catalog is configured.
    pub fn has_catalog(&self) -> bool {
        !self.catalog_path.trim().is_empty()
    }

    /// The configured catalog path, if any.
    pub fn catalog(&self) -> Option<PathBuf> {
        self.has_catalog()
            .then(|| PathBuf::from(self.catalog_path.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_catalog_by_default() {
        let config = ValidationConfig::default();
        assert!(!config.has_catalog());
        assert!(config.catalog().is_none());
        assert!(!config.fail_fast);
    }

    #[test]
    fn whitespace_only_catalog_is_ignored() {
        let config = ValidationConfig {
            catalog_path: "   ".into(),
            fail_fast: false,
        };
        assert!(!config.has_catalog());
    }

    #[test]
    fn catalog_path_is_trimmed() {
        let config = ValidationConfig {
            catalog_path: " ids.json ".into(),
            fail_fast: true,
        };
        assert_eq!(config.catalog(), Some(PathBuf::from("ids.json")));
    }
}
