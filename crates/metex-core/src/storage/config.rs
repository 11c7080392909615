//! Configuration persistence.
//!
//! metex keeps one small TOML file, by default at
//! `~/.config/metex/config.toml`, holding the catalog file to open when no
//! path is given on the command line. Expand/collapse and selection state
//! are session-local and never persisted.

use super::Result;
use crate::error::StorageError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Persisted settings.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Catalog JSON file to open by default.
    pub catalog: Option<PathBuf>,
}

impl Config {
    /// Resolve which catalog file this session should open.
    ///
    /// Priority: explicit path (CLI) > `METEX_CATALOG` > config file.
    /// `None` means nothing is configured anywhere; callers fall back to the
    /// built-in mock catalog.
    pub fn resolve_catalog(
        explicit: Option<PathBuf>,
        config_file: Option<PathBuf>,
    ) -> Result<Option<PathBuf>> {
        if explicit.is_some() {
            return Ok(explicit);
        }
        if let Some(path) = Self::catalog_from_env() {
            return Ok(Some(path));
        }
        Ok(Self::load(config_file)?.catalog)
    }

    fn catalog_from_env() -> Option<PathBuf> {
        std::env::var_os("METEX_CATALOG")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }

    /// Read settings from the given file, or the default location.
    /// A missing file is an empty configuration, not an error.
    pub fn load(file: Option<PathBuf>) -> Result<Self> {
        let path = match file {
            Some(p) => p,
            None => Self::default_file()?,
        };

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| StorageError::FileIo {
            path: path.display().to_string(),
            source,
        })?;

        toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
            message: format!("{} is not valid config TOML: {}", path.display(), e),
        })
    }

    /// Write settings to the given file, or the default location, creating
    /// parent directories as needed.
    pub fn save(&self, file: Option<PathBuf>) -> Result<()> {
        let path = match file {
            Some(p) => p,
            None => Self::default_file()?,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.display().to_string(),
                source,
            })?;
        }

        let content = toml::to_string(self).map_err(|e| StorageError::ConfigParseError {
            message: format!("could not serialize config: {}", e),
        })?;

        fs::write(&path, content).map_err(|source| StorageError::FileIo {
            path: path.display().to_string(),
            source,
        })
    }

    /// Location of the config file inside a custom configuration directory.
    pub fn file_in(dir: &Path) -> PathBuf {
        dir.join("config.toml")
    }

    fn default_file() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(StorageError::ConfigDirNotFound)?;
        Ok(home.join(".config").join("metex").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_empty_by_default() {
        assert_eq!(Config::default().catalog, None);
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempdir().expect("tempdir");
        let file = Config::file_in(dir.path());

        let config = Config {
            catalog: Some(PathBuf::from("/data/warehouse.json")),
        };
        config.save(Some(file.clone())).expect("save");

        assert_eq!(Config::load(Some(file)).expect("load"), config);
    }

    #[test]
    fn test_save_creates_missing_directories() {
        let dir = tempdir().expect("tempdir");
        let file = dir.path().join("nested").join("deeper").join("config.toml");

        Config::default().save(Some(file.clone())).expect("save");
        assert!(file.exists());
    }

    #[test]
    fn test_missing_file_loads_as_empty() {
        let dir = tempdir().expect("tempdir");
        let config = Config::load(Some(dir.path().join("absent.toml"))).expect("load");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_rejects_invalid_toml() {
        let dir = tempdir().expect("tempdir");
        let file = Config::file_in(dir.path());
        fs::write(&file, "catalog = [broken").unwrap();

        assert!(matches!(
            Config::load(Some(file)),
            Err(StorageError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_explicit_path_beats_config_file() {
        let dir = tempdir().expect("tempdir");
        let file = Config::file_in(dir.path());
        Config {
            catalog: Some(PathBuf::from("/from/config.json")),
        }
        .save(Some(file.clone()))
        .expect("save");

        let resolved =
            Config::resolve_catalog(Some(PathBuf::from("/from/cli.json")), Some(file)).expect("resolve");
        assert_eq!(resolved, Some(PathBuf::from("/from/cli.json")));
    }

    #[test]
    fn test_config_file_supplies_default_catalog() {
        let dir = tempdir().expect("tempdir");
        let file = Config::file_in(dir.path());
        Config {
            catalog: Some(PathBuf::from("/from/config.json")),
        }
        .save(Some(file.clone()))
        .expect("save");

        let resolved = Config::resolve_catalog(None, Some(file)).expect("resolve");
        assert_eq!(resolved, Some(PathBuf::from("/from/config.json")));
    }
}
