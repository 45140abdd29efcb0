//! The gearkit home directory: an optional `catalog.toml` (or
//! `catalog.json`) and an optional `config.toml` with heuristics.
//!
//! Anything missing falls back to the built-in catalog and default
//! heuristics, so a fresh install works with an empty directory.

use std::path::{Path, PathBuf};
use std::{env, fs};

use gearkit_core::{Catalog, Engine, Heuristics};

use crate::error::{CatalogError, Result};
use crate::file::{load_catalog, load_heuristics};

const CATALOG_FILES: [&str; 2] = ["catalog.toml", "catalog.json"];
const CONFIG_FILE: &str = "config.toml";

/// Default base directory for gearkit data.
fn default_base_dir() -> PathBuf {
    dirs_home().join(".gearkit")
}

fn dirs_home() -> PathBuf {
    env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

#[derive(Debug, Clone)]
pub struct GearHome {
    base: PathBuf,
}

impl GearHome {
    /// Open the home directory, creating it if needed.
    /// `base_dir`: override the base directory (for testing).
    pub fn open(base_dir: Option<&Path>) -> Result<Self> {
        let base = base_dir.map(PathBuf::from).unwrap_or_else(default_base_dir);
        fs::create_dir_all(&base).map_err(|source| CatalogError::Write {
            path: base.clone(),
            source,
        })?;
        Ok(Self { base })
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// First catalog file present in the home directory.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        CATALOG_FILES
            .iter()
            .map(|name| self.base.join(name))
            .find(|p| p.is_file())
    }

    pub fn config_path(&self) -> Option<PathBuf> {
        Some(self.base.join(CONFIG_FILE)).filter(|p| p.is_file())
    }

    /// Catalog from `override_path`, else the home catalog, else built-in.
    pub fn load_catalog(&self, override_path: Option<&Path>) -> Result<Catalog> {
        match override_path.map(PathBuf::from).or_else(|| self.catalog_path()) {
            Some(path) => load_catalog(&path),
            None => {
                tracing::debug!(base = %self.base.display(), "no catalog file, using built-in");
                Ok(Catalog::builtin())
            }
        }
    }

    /// Heuristics from `override_path`, else `config.toml`, else defaults.
    pub fn load_heuristics(&self, override_path: Option<&Path>) -> Result<Heuristics> {
        match override_path.map(PathBuf::from).or_else(|| self.config_path()) {
            Some(path) => load_heuristics(&path),
            None => Ok(Heuristics::default()),
        }
    }

    pub fn open_engine(
        &self,
        catalog_path: Option<&Path>,
        config_path: Option<&Path>,
    ) -> Result<Engine> {
        let catalog = self.load_catalog(catalog_path)?;
        let heuristics = self.load_heuristics(config_path)?;
        Ok(Engine::new(catalog, heuristics))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::save_catalog;
    use gearkit_core::{BundleRequest, Style};

    #[test]
    fn test_empty_home_uses_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let home = GearHome::open(Some(dir.path())).unwrap();
        assert!(home.catalog_path().is_none());
        assert!(home.config_path().is_none());
        let engine = home.open_engine(None, None).unwrap();
        assert_eq!(engine.catalog().len(), Catalog::builtin().len());
        assert_eq!(engine.heuristics(), &Heuristics::default());
    }

    #[test]
    fn test_directory_creation() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        let home = GearHome::open(Some(&nested)).unwrap();
        assert!(nested.is_dir());
        assert_eq!(home.base(), nested.as_path());
    }

    #[test]
    fn test_home_catalog_picked_up() {
        let dir = tempfile::tempdir().unwrap();
        let home = GearHome::open(Some(dir.path())).unwrap();
        let path = dir.path().join("catalog.toml");
        save_catalog(&Catalog::builtin(), &path).unwrap();
        assert_eq!(home.catalog_path(), Some(path));

        let smaller: Vec<_> = Catalog::builtin()
            .into_items()
            .into_iter()
            .filter(|i| i.id != "sk-all")
            .collect();
        save_catalog(&Catalog::new(smaller), &dir.path().join("catalog.toml")).unwrap();

        let engine = home.open_engine(None, None).unwrap();
        assert!(engine.catalog().get("sk-all").is_none());
        let bundle = engine.generate_bundle(&BundleRequest {
            budget: 500.0,
            size: "M".to_string(),
            style: Style::Classic,
        });
        assert_eq!(bundle.len(), 6);
    }

    #[test]
    fn test_override_paths_win() {
        let dir = tempfile::tempdir().unwrap();
        let home = GearHome::open(Some(dir.path())).unwrap();
        fs::write(dir.path().join("config.toml"), "max_alternatives = 3\n").unwrap();
        let other = dir.path().join("other.toml");
        fs::write(&other, "max_alternatives = 1\n").unwrap();

        assert_eq!(home.load_heuristics(None).unwrap().max_alternatives, 3);
        assert_eq!(home.load_heuristics(Some(&other)).unwrap().max_alternatives, 1);
    }

    #[test]
    fn test_invalid_catalog_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let home = GearHome::open(Some(dir.path())).unwrap();
        fs::write(dir.path().join("catalog.json"), "{\"version\":\"1\"}").unwrap();
        assert!(matches!(
            home.load_catalog(None),
            Err(CatalogError::Json { .. })
        ));
    }
}
