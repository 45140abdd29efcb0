//! Catalog and heuristics files.
//!
//! Catalogs are TOML (`[[items]]` tables) or the versioned JSON wire
//! document; the format follows the file extension. Field names are the wire
//! names (`originalPrice`, `ratingCount`), snake_case spellings are accepted.

use std::fs;
use std::path::Path;

use gearkit_core::serde_compat::{WireCatalog, WireItem};
use gearkit_core::{Catalog, CatalogItem, Heuristics};
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::validate::validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("toml") => Ok(CatalogFormat::Toml),
            Some("json") => Ok(CatalogFormat::Json),
            _ => Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
struct TomlCatalog {
    items: Vec<WireItem>,
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn write(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| CatalogError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse catalog text in `format`. `path` is only used in error messages.
pub fn parse_catalog(text: &str, format: CatalogFormat, path: &Path) -> Result<Catalog> {
    let catalog = match format {
        CatalogFormat::Toml => {
            let file: TomlCatalog = toml::from_str(text).map_err(|source| CatalogError::Toml {
                path: path.to_path_buf(),
                source,
            })?;
            Catalog::new(file.items.into_iter().map(CatalogItem::from).collect())
        }
        CatalogFormat::Json => {
            let wire: WireCatalog =
                serde_json::from_str(text).map_err(|source| CatalogError::Json {
                    path: path.to_path_buf(),
                    source,
                })?;
            wire.into_catalog()
        }
    };

    validate(catalog.items())?;
    Ok(catalog)
}

/// Load and validate a catalog file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let format = CatalogFormat::from_path(path)?;
    let catalog = parse_catalog(&read(path)?, format, path)?;
    tracing::info!(path = %path.display(), items = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Render a catalog in `format`.
pub fn render_catalog(catalog: &Catalog, format: CatalogFormat) -> Result<String> {
    match format {
        CatalogFormat::Toml => {
            let file = TomlCatalog {
                items: catalog.iter().map(WireItem::from).collect(),
            };
            Ok(toml::to_string_pretty(&file)?)
        }
        CatalogFormat::Json => Ok(serde_json::to_string_pretty(&WireCatalog::from_catalog(
            catalog,
        ))?),
    }
}

/// Write a catalog, choosing the format from the extension.
pub fn save_catalog(catalog: &Catalog, path: &Path) -> Result<()> {
    let format = CatalogFormat::from_path(path)?;
    write(path, &render_catalog(catalog, format)?)?;
    tracing::info!(path = %path.display(), items = catalog.len(), "catalog written");
    Ok(())
}

/// Load heuristics from TOML. Missing keys keep their defaults.
pub fn load_heuristics(path: &Path) -> Result<Heuristics> {
    let heuristics: Heuristics = toml::from_str(&read(path)?).map_err(|source| {
        CatalogError::Toml {
            path: path.to_path_buf(),
            source,
        }
    })?;
    tracing::info!(path = %path.display(), "heuristics loaded");
    Ok(heuristics)
}
