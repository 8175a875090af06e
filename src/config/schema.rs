//! Config schema and deserialization

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Root config structure for .maturityrc.json
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Extend another config file (path relative to this config)
    #[serde(default)]
    pub extends: Option<String>,

    /// Catalog document to score against. Relative paths are resolved
    /// against the directory of the config file that names them.
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Minimum acceptable category score (exit 1 if any category is below)
    #[serde(default)]
    pub threshold: Option<f64>,
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(mut self, cli_catalog: Option<&Path>, cli_threshold: Option<f64>) -> Self {
        if let Some(catalog) = cli_catalog {
            self.catalog = Some(catalog.to_path_buf());
        }
        if cli_threshold.is_some() {
            self.threshold = cli_threshold;
        }
        self
    }

    /// Make a relative catalog path relative to `config_dir`
    pub fn resolve_paths(&mut self, config_dir: &Path) {
        if let Some(catalog) = self.catalog.take() {
            self.catalog = Some(if catalog.is_absolute() {
                catalog
            } else {
                config_dir.join(catalog)
            });
        }
    }

    /// Merge another config into this one (for extends)
    pub fn merge_from(&mut self, base: Config) {
        // Base values are overridden by this config's values
        if self.catalog.is_none() {
            self.catalog = base.catalog;
        }
        if self.threshold.is_none() {
            self.threshold = base.threshold;
        }
        if self.extends.is_none() {
            self.extends = base.extends;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let config: Config =
            serde_json::from_str(r#"{"catalog": "questions.json", "threshold": 65.5}"#).unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("questions.json")));
        assert_eq!(config.threshold, Some(65.5));
        assert!(config.extends.is_none());
    }

    #[test]
    fn test_merge_with_cli_overrides() {
        let config = Config {
            extends: None,
            catalog: Some(PathBuf::from("a.json")),
            threshold: Some(50.0),
        };
        let merged = config.merge_with_cli(Some(Path::new("b.json")), Some(70.0));
        assert_eq!(merged.catalog, Some(PathBuf::from("b.json")));
        assert_eq!(merged.threshold, Some(70.0));

        let kept = Config {
            threshold: Some(50.0),
            ..Config::default()
        }
        .merge_with_cli(None, None);
        assert_eq!(kept.threshold, Some(50.0));
    }

    #[test]
    fn test_resolve_relative_catalog() {
        let mut config = Config {
            catalog: Some(PathBuf::from("data/questions.json")),
            ..Config::default()
        };
        config.resolve_paths(Path::new("/project"));
        assert_eq!(
            config.catalog,
            Some(PathBuf::from("/project/data/questions.json"))
        );
    }
}
