use crate::{CatalogError, Pattern};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Selects what the showcase demonstrates. Every key is optional.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    pub patterns: Vec<Pattern>,
    pub products: Vec<String>,
    pub additions: Vec<String>,
    pub observers: Vec<String>,
    pub message: String,
    pub verbose: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            patterns: Pattern::ALL.to_vec(),
            products: vec!["A".to_string(), "B".to_string()],
            additions: vec!["milk".to_string()],
            observers: vec!["Observer 1".to_string(), "Observer 2".to_string()],
            message: "Hello Observers".to_string(),
            verbose: false,
        }
    }
}

impl CatalogConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        toml::from_str(contents).map_err(|e| CatalogError::config(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, CatalogError> {
        toml::to_string(self).map_err(|e| CatalogError::config(e.to_string()))
    }

    pub fn with_patterns<I: IntoIterator<Item = Pattern>>(mut self, patterns: I) -> Self {
        self.patterns = patterns.into_iter().collect();
        self
    }

    pub fn with_message<S: Into<String>>(mut self, message: S) -> Self {
        self.message = message.into();
        self
    }

    pub fn is_enabled(&self, pattern: Pattern) -> bool {
        self.patterns.contains(&pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = CatalogConfig::from_toml_str("").unwrap();
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = CatalogConfig::from_toml_str(
            r#"
            patterns = ["Observer", "command"]
            message = "X"
            "#,
        )
        .unwrap();

        assert_eq!(config.patterns, vec![Pattern::Observer, Pattern::Command]);
        assert_eq!(config.message, "X");
        assert_eq!(config.products, vec!["A", "B"]);
        assert!(!config.is_enabled(Pattern::Singleton));
    }

    #[test]
    fn test_unknown_pattern_is_config_error() {
        let result = CatalogConfig::from_toml_str(r#"patterns = ["visitor"]"#);
        assert!(matches!(result, Err(CatalogError::ConfigError(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "additions = [\"milk\", \"milk\"]").unwrap();
        writeln!(file, "verbose = true").unwrap();

        let config = CatalogConfig::load(file.path()).unwrap();

        assert_eq!(config.additions, vec!["milk", "milk"]);
        assert!(config.verbose);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = CatalogConfig::load(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CatalogError::ConfigError(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = CatalogConfig::default().with_patterns([Pattern::Adapter]);
        let text = config.to_toml_string().unwrap();
        assert_eq!(CatalogConfig::from_toml_str(&text).unwrap(), config);
    }
}
