//! Configuration loading for Maturity

mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".maturityrc.json";

/// Find and load config file with extends resolution. Searches current directory then parents.
pub fn load_config(work_dir: &Path, custom_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(p) = custom_path {
        let path = if p.is_absolute() {
            p.to_path_buf()
        } else {
            work_dir.join(p)
        };
        if path.exists() {
            Some(path)
        } else {
            anyhow::bail!("Config file not found: {}", path.display());
        }
    } else {
        find_config_in_parents(work_dir)
    };

    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load_config_with_extends(&path, &mut HashSet::new())
        }
        None => Ok(Config::default()),
    }
}

/// Load a config file and resolve extends chain
fn load_config_with_extends(config_path: &Path, visited: &mut HashSet<PathBuf>) -> Result<Config> {
    // Prevent circular extends
    let canonical = config_path
        .canonicalize()
        .unwrap_or_else(|_| config_path.to_path_buf());
    if !visited.insert(canonical) {
        anyhow::bail!(
            "Circular extends detected in config: {}",
            config_path.display()
        );
    }

    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
    let mut config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in config: {}", config_path.display()))?;

    let config_dir = config_path.parent().unwrap_or(Path::new("."));
    config.resolve_paths(config_dir);

    if let Some(threshold) = config.threshold {
        if !(0.0..=100.0).contains(&threshold) {
            anyhow::bail!(
                "Threshold must be between 0 and 100, got {} in {}",
                threshold,
                config_path.display()
            );
        }
    }

    if let Some(extends) = config.extends.take() {
        let base_config = resolve_extends(config_dir, config_path, &extends, visited)?;
        config.merge_from(base_config);
    }

    Ok(config)
}

/// Resolve an extends reference to a config
fn resolve_extends(
    config_dir: &Path,
    config_path: &Path,
    extends: &str,
    visited: &mut HashSet<PathBuf>,
) -> Result<Config> {
    let extends_path = config_dir.join(extends);

    // Ensure it has .json extension
    let extends_path = if extends_path.extension().is_none() {
        extends_path.with_extension("json")
    } else {
        extends_path
    };

    if !extends_path.exists() {
        anyhow::bail!(
            "Extended config not found: {} (referenced from {})",
            extends_path.display(),
            config_path.display()
        );
    }

    load_config_with_extends(&extends_path, visited)
}

/// Search for .maturityrc.json in directory and its parents
fn find_config_in_parents(mut dir: &Path) -> Option<PathBuf> {
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(path: &Path, content: &str) {
        let mut file = fs::File::create(path).unwrap();
        writeln!(file, "{}", content).unwrap();
    }

    #[test]
    fn test_no_config_is_default() {
        let dir = TempDir::new().unwrap();
        let config = load_config(dir.path(), None).unwrap();
        assert!(config.catalog.is_none());
        assert!(config.threshold.is_none());
    }

    #[test]
    fn test_found_in_parent_dir() {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir.path().join(CONFIG_FILENAME),
            r#"{ "catalog": "questions.json", "threshold": 60 }"#,
        );
        let nested = dir.path().join("answers").join("2024");
        fs::create_dir_all(&nested).unwrap();

        let config = load_config(&nested, None).unwrap();
        assert_eq!(config.threshold, Some(60.0));
        // Catalog resolves next to the config, not the search start
        assert_eq!(config.catalog, Some(dir.path().join("questions.json")));
    }

    #[test]
    fn test_custom_path_missing() {
        let dir = TempDir::new().unwrap();
        let err = load_config(dir.path(), Some(Path::new("missing.json"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_config_extends() {
        let dir = TempDir::new().unwrap();
        let shared = dir.path().join("shared");
        fs::create_dir_all(&shared).unwrap();

        write_file(
            &shared.join("base.json"),
            r#"{ "catalog": "catalog.json", "threshold": 50 }"#,
        );
        write_file(
            &dir.path().join(CONFIG_FILENAME),
            r#"{ "extends": "./shared/base", "threshold": 75 }"#,
        );

        let config = load_config(dir.path(), None).unwrap();

        // Child threshold overrides base
        assert_eq!(config.threshold, Some(75.0));
        // Base catalog is inherited, resolved against the base config's directory
        assert_eq!(config.catalog, Some(shared.join("catalog.json")));
    }

    #[test]
    fn test_circular_extends_rejected() {
        let dir = TempDir::new().unwrap();
        write_file(&dir.path().join("a.json"), r#"{ "extends": "./b.json" }"#);
        write_file(&dir.path().join("b.json"), r#"{ "extends": "./a.json" }"#);

        let err = load_config(dir.path(), Some(Path::new("a.json"))).unwrap_err();
        assert!(format!("{:#}", err).contains("Circular extends"));
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let dir = TempDir::new().unwrap();
        write_file(&dir.path().join(CONFIG_FILENAME), r#"{ "threshold": 150 }"#);
        let err = load_config(dir.path(), None).unwrap_err();
        assert!(err.to_string().contains("between 0 and 100"));
    }

    #[test]
    fn test_invalid_json_reported() {
        let dir = TempDir::new().unwrap();
        write_file(&dir.path().join(CONFIG_FILENAME), "{ not json");
        let err = load_config(dir.path(), None).unwrap_err();
        assert!(err.to_string().contains("Invalid JSON in config"));
    }
}
