use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::query::DuplicateKeyPolicy;

/// Global configuration loaded from `~/.config/urlstate/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlStateConfig {
    /// Which occurrence of a repeated query key is parsed: "last" (default) or "first".
    #[serde(default)]
    pub duplicate_keys: DuplicateKeyPolicy,
    /// Navigate to `<path>` instead of `<path>?` when a mutation empties the query.
    #[serde(default)]
    pub strip_empty_query_marker: bool,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlstate")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlStateConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<UrlStateConfig> {
    if !path.exists() {
        let default_cfg = UrlStateConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: UrlStateConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = UrlStateConfig::default();
        assert_eq!(cfg.duplicate_keys, DuplicateKeyPolicy::LastWins);
        assert!(!cfg.strip_empty_query_marker);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = UrlStateConfig {
            duplicate_keys: DuplicateKeyPolicy::FirstWins,
            strip_empty_query_marker: true,
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: UrlStateConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_missing_fields_use_defaults() {
        let cfg: UrlStateConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, UrlStateConfig::default());
        let cfg: UrlStateConfig = toml::from_str("duplicate_keys = \"first\"").unwrap();
        assert_eq!(cfg.duplicate_keys, DuplicateKeyPolicy::FirstWins);
        assert!(!cfg.strip_empty_query_marker);
    }

    #[test]
    fn config_toml_rejects_unknown_policy() {
        assert!(toml::from_str::<UrlStateConfig>("duplicate_keys = \"middle\"").is_err());
    }

    #[test]
    fn load_or_init_creates_then_reads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let created = load_or_init_at(&path).unwrap();
        assert_eq!(created, UrlStateConfig::default());
        assert!(path.exists());

        fs::write(&path, "strip_empty_query_marker = true\n").unwrap();
        let loaded = load_or_init_at(&path).unwrap();
        assert!(loaded.strip_empty_query_marker);
    }

    #[test]
    fn load_or_init_reports_bad_file() {
        let f = tempfile::NamedTempFile::new().unwrap();
        fs::write(f.path(), "duplicate_keys = 3").unwrap();
        let err = load_or_init_at(f.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("invalid config"));
    }
}
