//! Catalog model: categories, styles, tags and the read-only item table.
//!
//! Raw strings from catalog files are folded into closed enumerations at the
//! boundary. Category and tag synonyms collapse to one canonical variant, and
//! anything still unknown is kept verbatim in an `Unrecognized` variant so it
//! flows through the engine instead of failing.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error for strings that do not name a style or skill level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Lowercase, trim and fold spaces/hyphens to underscores.
fn fold_key(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Gear category. Synonyms fold to the canonical variant on parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Jacket,
    BaseLayer,
    Pants,
    Gloves,
    Beanie,
    Goggles,
    Boots,
    Socks,
    /// Folded key of a category outside the fixed enumeration.
    Unrecognized(String),
}

impl Category {
    pub const KNOWN: [Category; 8] = [
        Category::Jacket,
        Category::BaseLayer,
        Category::Pants,
        Category::Gloves,
        Category::Beanie,
        Category::Goggles,
        Category::Boots,
        Category::Socks,
    ];

    /// Parse a raw category string, folding synonyms ("bibs" → pants,
    /// "cap" → beanie). Never fails.
    pub fn parse(raw: &str) -> Category {
        let key = fold_key(raw);
        match key.as_str() {
            "jacket" | "jackets" | "shell" | "parka" | "coat" => Category::Jacket,
            "base_layer" | "base_layers" | "baselayer" | "baselayers" | "thermal" => {
                Category::BaseLayer
            }
            "pants" | "pant" | "trousers" | "bib" | "bibs" | "salopettes" => Category::Pants,
            "gloves" | "glove" | "mitt" | "mitts" | "mitten" | "mittens" => Category::Gloves,
            "beanie" | "beanies" | "hat" | "hats" | "cap" | "caps" | "toque" => Category::Beanie,
            "goggles" | "goggle" => Category::Goggles,
            "boots" | "boot" => Category::Boots,
            "socks" | "sock" => Category::Socks,
            _ => Category::Unrecognized(key),
        }
    }

    /// Canonical machine name (`base_layer`, `jacket`, ...).
    pub fn as_str(&self) -> &str {
        match self {
            Category::Jacket => "jacket",
            Category::BaseLayer => "base_layer",
            Category::Pants => "pants",
            Category::Gloves => "gloves",
            Category::Beanie => "beanie",
            Category::Goggles => "goggles",
            Category::Boots => "boots",
            Category::Socks => "socks",
            Category::Unrecognized(key) => key,
        }
    }

    /// Human-facing label ("Base Layer").
    pub fn label(&self) -> String {
        match self {
            Category::Jacket => "Jacket".to_string(),
            Category::BaseLayer => "Base Layer".to_string(),
            Category::Pants => "Pants".to_string(),
            Category::Gloves => "Gloves".to_string(),
            Category::Beanie => "Beanie".to_string(),
            Category::Goggles => "Goggles".to_string(),
            Category::Boots => "Boots".to_string(),
            Category::Socks => "Socks".to_string(),
            Category::Unrecognized(key) => key
                .split('_')
                .filter(|w| !w.is_empty())
                .map(|w| {
                    let mut chars = w.chars();
                    match chars.next() {
                        Some(first) => first.to_uppercase().chain(chars).collect(),
                        None => String::new(),
                    }
                })
                .collect::<Vec<String>>()
                .join(" "),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Category::Unrecognized(_))
    }
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        Category::parse(&raw)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

/// Coarse aesthetic/performance classification of an item, and the target
/// style a bundle is built for. `All` marks style-agnostic items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Sporty,
    Classic,
    Premium,
    All,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Sporty => "sporty",
            Style::Classic => "classic",
            Style::Premium => "premium",
            Style::All => "all",
        }
    }

    /// Title-case name used in narrative text.
    pub fn title(&self) -> &'static str {
        match self {
            Style::Sporty => "Sporty",
            Style::Classic => "Classic",
            Style::Premium => "Premium",
            Style::All => "All",
        }
    }
}

impl FromStr for Style {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sporty" => Ok(Style::Sporty),
            "classic" => Ok(Style::Classic),
            "premium" => Ok(Style::Premium),
            "all" => Ok(Style::All),
            _ => Err(ParseError::new("style", s)),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

/// Which aspect of a product a tag speaks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// Insulating construction (down fill, synthetic insulation).
    Warmth,
    /// Weight savings.
    Weight,
    /// Build quality and tier signals.
    Quality,
    /// Fibre or membrane.
    Material,
    /// Weather and light protection.
    Protection,
    /// Cut, fit and convenience features.
    Feature,
    Unrecognized,
}

/// Product tag. Synonyms fold on parse ("insulated" → `Insulation`,
/// "merino" → `MerinoWool`) so rules match variants, not substrings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tag {
    Waterproof,
    WindResistant,
    Warm,
    Insulation,
    DownFill,
    Lightweight,
    Durable,
    Vented,
    Bib,
    MoistureWicking,
    Layering,
    Stretch,
    MerinoWool,
    Natural,
    Grip,
    Touchscreen,
    HelmetCompatible,
    Reflective,
    UvProtection,
    AntiFog,
    Otg,
    WideView,
    MagneticLens,
    Cushioned,
    Premium,
    Pro,
    GoreTex,
    Technical,
    Unrecognized(String),
}

impl Tag {
    pub fn parse(raw: &str) -> Tag {
        let key = fold_key(raw);
        match key.as_str() {
            "waterproof" => Tag::Waterproof,
            "wind_resistant" | "windproof" => Tag::WindResistant,
            "warm" => Tag::Warm,
            "insulation" | "insulated" | "insulating" => Tag::Insulation,
            "down_fill" | "down" | "down_filled" => Tag::DownFill,
            "lightweight" | "ultralight" => Tag::Lightweight,
            "durable" => Tag::Durable,
            "vented" => Tag::Vented,
            "bib" => Tag::Bib,
            "moisture_wicking" | "wicking" => Tag::MoistureWicking,
            "layering" => Tag::Layering,
            "stretch" => Tag::Stretch,
            "merino_wool" | "merino" => Tag::MerinoWool,
            "natural" => Tag::Natural,
            "grip" => Tag::Grip,
            "touchscreen" => Tag::Touchscreen,
            "helmet_compatible" => Tag::HelmetCompatible,
            "reflective" => Tag::Reflective,
            "uv_protection" => Tag::UvProtection,
            "anti_fog" => Tag::AntiFog,
            "otg" => Tag::Otg,
            "wide_view" => Tag::WideView,
            "magnetic_lens" => Tag::MagneticLens,
            "cushioned" => Tag::Cushioned,
            "premium" => Tag::Premium,
            "pro" => Tag::Pro,
            "gore_tex" | "goretex" => Tag::GoreTex,
            "technical" => Tag::Technical,
            _ => Tag::Unrecognized(raw.trim().to_string()),
        }
    }

    /// Canonical catalog label ("down-fill", "UV-protection").
    pub fn label(&self) -> &str {
        match self {
            Tag::Waterproof => "waterproof",
            Tag::WindResistant => "wind-resistant",
            Tag::Warm => "warm",
            Tag::Insulation => "insulation",
            Tag::DownFill => "down-fill",
            Tag::Lightweight => "lightweight",
            Tag::Durable => "durable",
            Tag::Vented => "vented",
            Tag::Bib => "bib",
            Tag::MoistureWicking => "moisture-wicking",
            Tag::Layering => "layering",
            Tag::Stretch => "stretch",
            Tag::MerinoWool => "merino-wool",
            Tag::Natural => "natural",
            Tag::Grip => "grip",
            Tag::Touchscreen => "touchscreen",
            Tag::HelmetCompatible => "helmet-compatible",
            Tag::Reflective => "reflective",
            Tag::UvProtection => "UV-protection",
            Tag::AntiFog => "anti-fog",
            Tag::Otg => "OTG",
            Tag::WideView => "wide-view",
            Tag::MagneticLens => "magnetic-lens",
            Tag::Cushioned => "cushioned",
            Tag::Premium => "premium",
            Tag::Pro => "pro",
            Tag::GoreTex => "gore-tex",
            Tag::Technical => "technical",
            Tag::Unrecognized(raw) => raw,
        }
    }

    pub fn kind(&self) -> TagKind {
        match self {
            Tag::Insulation | Tag::DownFill => TagKind::Warmth,
            Tag::Lightweight => TagKind::Weight,
            Tag::Premium | Tag::Pro | Tag::Technical | Tag::Durable => TagKind::Quality,
            Tag::MerinoWool | Tag::Natural | Tag::GoreTex => TagKind::Material,
            Tag::Waterproof
            | Tag::WindResistant
            | Tag::UvProtection
            | Tag::AntiFog
            | Tag::Reflective => TagKind::Protection,
            Tag::Warm
            | Tag::Vented
            | Tag::Bib
            | Tag::MoistureWicking
            | Tag::Layering
            | Tag::Stretch
            | Tag::Grip
            | Tag::Touchscreen
            | Tag::HelmetCompatible
            | Tag::Otg
            | Tag::WideView
            | Tag::MagneticLens
            | Tag::Cushioned => TagKind::Feature,
            Tag::Unrecognized(_) => TagKind::Unrecognized,
        }
    }
}

impl From<String> for Tag {
    fn from(raw: String) -> Self {
        Tag::parse(&raw)
    }
}

impl From<&str> for Tag {
    fn from(raw: &str) -> Self {
        Tag::parse(raw)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.label().to_string()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// A purchasable catalog entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub category: Category,
    pub price: f64,
    pub original_price: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub rating_count: u32,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub style: Style,
}

impl CatalogItem {
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    pub fn tags_of_kind(&self, kind: TagKind) -> impl Iterator<Item = &Tag> {
        self.tags.iter().filter(move |t| t.kind() == kind)
    }
}

/// Read-only item table with an id index. Catalog order is significant:
/// it breaks ranking ties and orders alternatives.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog. When ids repeat, lookups resolve to the first entry.
    pub fn new(items: Vec<CatalogItem>) -> Self {
        let mut by_id = HashMap::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            by_id.entry(item.id.clone()).or_insert(idx);
        }
        Self { items, by_id }
    }

    /// The fixed ski catalog shipped with the engine.
    pub fn builtin() -> Self {
        Self::new(crate::builtin::builtin_items())
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.by_id.get(id).map(|&idx| &self.items[idx])
    }

    pub fn in_category(&self, category: &Category) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter().filter(move |i| &i.category == category)
    }

    pub fn into_items(self) -> Vec<CatalogItem> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_synonyms_fold() {
        assert_eq!(Category::parse("bib"), Category::Pants);
        assert_eq!(Category::parse("Bibs"), Category::Pants);
        assert_eq!(Category::parse("hat"), Category::Beanie);
        assert_eq!(Category::parse(" cap "), Category::Beanie);
        assert_eq!(Category::parse("Base Layer"), Category::BaseLayer);
        assert_eq!(Category::parse("base-layer"), Category::BaseLayer);
        assert_eq!(Category::parse("mittens"), Category::Gloves);
    }

    #[test]
    fn test_unrecognized_category_kept() {
        let c = Category::parse("Avalanche Pack");
        assert_eq!(c, Category::Unrecognized("avalanche_pack".to_string()));
        assert!(!c.is_recognized());
        assert_eq!(c.label(), "Avalanche Pack");
    }

    #[test]
    fn test_category_serde_uses_canonical_name() {
        let json = serde_json::to_string(&Category::BaseLayer).unwrap();
        assert_eq!(json, "\"base_layer\"");
        let back: Category = serde_json::from_str("\"bibs\"").unwrap();
        assert_eq!(back, Category::Pants);
    }

    #[test]
    fn test_tag_synonyms_fold() {
        assert_eq!(Tag::parse("insulated"), Tag::Insulation);
        assert_eq!(Tag::parse("Merino"), Tag::MerinoWool);
        assert_eq!(Tag::parse("GORE-TEX"), Tag::GoreTex);
        assert_eq!(Tag::parse("UV-protection"), Tag::UvProtection);
    }

    #[test]
    fn test_waterproof_is_not_pro() {
        // Variant matching, not substring matching.
        assert_ne!(Tag::parse("waterproof"), Tag::Pro);
        assert_eq!(Tag::parse("waterproof").kind(), TagKind::Protection);
    }

    #[test]
    fn test_unrecognized_tag_keeps_raw_text() {
        let t = Tag::parse(" Heated ");
        assert_eq!(t.label(), "Heated");
        assert_eq!(t.kind(), TagKind::Unrecognized);
    }

    #[test]
    fn test_style_parse_case_insensitive() {
        assert_eq!("Premium".parse::<Style>().unwrap(), Style::Premium);
        assert_eq!("ALL".parse::<Style>().unwrap(), Style::All);
        assert!("retro".parse::<Style>().is_err());
    }

    #[test]
    fn test_builtin_catalog_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 17);
        let jacket = catalog.get("j-premium").unwrap();
        assert_eq!(jacket.category, Category::Jacket);
        assert!(jacket.has_tag(&Tag::DownFill));
        assert_eq!(catalog.in_category(&Category::Jacket).count(), 3);
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_builtin_prices_never_exceed_original() {
        for item in Catalog::builtin().iter() {
            assert!(item.price <= item.original_price, "{}", item.id);
            assert!((0.0..=5.0).contains(&item.rating), "{}", item.id);
        }
    }

    #[test]
    fn test_duplicate_ids_resolve_to_first() {
        let mut items = crate::builtin::builtin_items();
        let mut dup = items[0].clone();
        dup.name = "Shadow".to_string();
        items.push(dup);
        let catalog = Catalog::new(items);
        assert_ne!(catalog.get("j-sporty").unwrap().name, "Shadow");
    }

    #[test]
    fn test_tags_of_kind() {
        let catalog = Catalog::builtin();
        let item = catalog.get("j-premium").unwrap();
        let warmth: Vec<&Tag> = item.tags_of_kind(TagKind::Warmth).collect();
        assert_eq!(warmth, vec![&Tag::DownFill, &Tag::Insulation]);
    }
}
