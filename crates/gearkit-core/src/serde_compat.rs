//! JSON serde for the versioned catalog wire format.
//!
//! The wire format uses camelCase field names (`originalPrice`,
//! `ratingCount`) and keeps categories and tags as raw strings so a document
//! written by one build can be read by another that knows more synonyms.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CatalogItem, Category, Style, Tag};

pub const CURRENT_VERSION: &str = "1";

// --- Wire format types ---

#[derive(Serialize, Deserialize, Debug)]
pub struct WireCatalog {
    pub version: String,
    pub items: Vec<WireItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WireItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    pub category: String,
    pub price: f64,
    /// Accepts the snake_case spelling as well.
    #[serde(alias = "original_price")]
    pub original_price: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(alias = "rating_count", default)]
    pub rating_count: u32,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub style: Style,
}

// --- Conversion ---

impl From<WireItem> for CatalogItem {
    fn from(wire: WireItem) -> Self {
        CatalogItem {
            id: wire.id,
            name: wire.name,
            brand: wire.brand,
            category: Category::parse(&wire.category),
            price: wire.price,
            original_price: wire.original_price,
            rating: wire.rating,
            rating_count: wire.rating_count,
            image: wire.image,
            tags: wire.tags.iter().map(|t| Tag::parse(t)).collect(),
            style: wire.style,
        }
    }
}

impl From<&CatalogItem> for WireItem {
    fn from(item: &CatalogItem) -> Self {
        WireItem {
            id: item.id.clone(),
            name: item.name.clone(),
            brand: item.brand.clone(),
            category: item.category.as_str().to_string(),
            price: item.price,
            original_price: item.original_price,
            rating: item.rating,
            rating_count: item.rating_count,
            image: item.image.clone(),
            tags: item.tags.iter().map(|t| t.label().to_string()).collect(),
            style: item.style,
        }
    }
}

impl WireCatalog {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        WireCatalog {
            version: CURRENT_VERSION.to_string(),
            items: catalog.iter().map(WireItem::from).collect(),
        }
    }

    pub fn into_catalog(self) -> Catalog {
        if self.version != CURRENT_VERSION {
            tracing::warn!(
                version = %self.version,
                expected = CURRENT_VERSION,
                "catalog wire version differs, reading anyway"
            );
        }
        Catalog::new(self.items.into_iter().map(CatalogItem::from).collect())
    }
}

/// Deserialize a wire JSON document into a catalog.
pub fn import_json(json: &str) -> Result<Catalog, serde_json::Error> {
    let wire: WireCatalog = serde_json::from_str(json)?;
    Ok(wire.into_catalog())
}

/// Serialize a catalog to the wire JSON format.
pub fn export_json(catalog: &Catalog) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&WireCatalog::from_catalog(catalog))
}
