//! Same-category substitutes for the detail-view replace flow.

use serde::Serialize;

use crate::bundle::Bundle;
use crate::catalog::{Catalog, CatalogItem, Style, TagKind};
use crate::config::TradeoffBands;

/// Why an alternative differs from the current pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeoffKind {
    Warmer,
    Lighter,
    Affordable,
    Premium,
    Neutral,
}

impl TradeoffKind {
    pub fn label(&self) -> &'static str {
        match self {
            TradeoffKind::Warmer => "Warmer",
            TradeoffKind::Lighter => "Lighter",
            TradeoffKind::Affordable => "More affordable",
            TradeoffKind::Premium => "More premium",
            TradeoffKind::Neutral => "Different style",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alternative {
    pub item: CatalogItem,
    pub tradeoff: &'static str,
    pub kind: TradeoffKind,
}

/// True when `candidate` has a tag of `kind` that `original` lacks.
fn gains_kind(candidate: &CatalogItem, original: &CatalogItem, kind: TagKind) -> bool {
    candidate
        .tags_of_kind(kind)
        .any(|tag| !original.has_tag(tag))
}

/// First matching rule wins: price bands, then warmth, weight, style.
pub fn classify_tradeoff(
    candidate: &CatalogItem,
    original: &CatalogItem,
    bands: &TradeoffBands,
) -> TradeoffKind {
    if candidate.price < original.price * bands.affordable_ratio {
        TradeoffKind::Affordable
    } else if candidate.price > original.price * bands.premium_ratio {
        TradeoffKind::Premium
    } else if gains_kind(candidate, original, TagKind::Warmth) {
        TradeoffKind::Warmer
    } else if gains_kind(candidate, original, TagKind::Weight) {
        TradeoffKind::Lighter
    } else if candidate.style == Style::Premium && original.style != Style::Premium {
        TradeoffKind::Premium
    } else {
        TradeoffKind::Neutral
    }
}

/// Up to `limit` same-category items outside `bundle`, in catalog order.
pub fn find_alternatives(
    catalog: &Catalog,
    item: &CatalogItem,
    bundle: &Bundle,
    bands: &TradeoffBands,
    limit: usize,
) -> Vec<Alternative> {
    catalog
        .in_category(&item.category)
        .filter(|c| c.id != item.id && !bundle.contains(&c.id))
        .take(limit)
        .map(|c| {
            let kind = classify_tradeoff(c, item, bands);
            Alternative {
                item: c.clone(),
                tradeoff: kind.label(),
                kind,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::BundleItem;
    use crate::catalog::{Category, Tag};

    fn bands() -> TradeoffBands {
        TradeoffBands::default()
    }

    fn item(id: &str, price: f64, tags: &[&str], style: Style) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: id.to_string(),
            brand: "B".to_string(),
            category: Category::Jacket,
            price,
            original_price: price,
            rating: 4.0,
            rating_count: 1,
            image: String::new(),
            tags: tags.iter().map(|t| Tag::parse(t)).collect(),
            style,
        }
    }

    #[test]
    fn test_price_bands_first() {
        let original = item("o", 100.0, &[], Style::Classic);
        let cheap = item("c", 87.0, &["down-fill"], Style::Premium);
        let dear = item("d", 113.0, &[], Style::Sporty);
        assert_eq!(classify_tradeoff(&cheap, &original, &bands()), TradeoffKind::Affordable);
        assert_eq!(classify_tradeoff(&dear, &original, &bands()), TradeoffKind::Premium);
    }

    #[test]
    fn test_warmth_then_weight_then_style() {
        let original = item("o", 100.0, &["insulation"], Style::Classic);
        let warmer = item("w", 100.0, &["down-fill"], Style::Classic);
        let lighter = item("l", 100.0, &["insulation", "lightweight"], Style::Classic);
        let posher = item("p", 100.0, &["insulation"], Style::Premium);
        let same = item("s", 100.0, &["insulation"], Style::Sporty);
        assert_eq!(classify_tradeoff(&warmer, &original, &bands()), TradeoffKind::Warmer);
        assert_eq!(classify_tradeoff(&lighter, &original, &bands()), TradeoffKind::Lighter);
        assert_eq!(classify_tradeoff(&posher, &original, &bands()), TradeoffKind::Premium);
        assert_eq!(classify_tradeoff(&same, &original, &bands()), TradeoffKind::Neutral);
    }

    #[test]
    fn test_two_item_category_yields_one() {
        let catalog = Catalog::builtin();
        let gloves = catalog.get("g-all").unwrap();
        let bundle = Bundle::from_items(vec![BundleItem::new(
            catalog.get("j-classic").unwrap().clone(),
        )]);
        let alts = find_alternatives(&catalog, gloves, &bundle, &bands(), 4);
        assert_eq!(alts.len(), 1);
        assert_eq!(alts[0].item.id, "g-premium");
        assert_eq!(alts[0].tradeoff, "More premium");
    }

    #[test]
    fn test_excludes_bundle_members() {
        let catalog = Catalog::builtin();
        let jacket = catalog.get("j-classic").unwrap();
        let bundle = Bundle::from_items(vec![
            BundleItem::new(jacket.clone()),
            BundleItem::new(catalog.get("j-premium").unwrap().clone()),
        ]);
        let alts = find_alternatives(&catalog, jacket, &bundle, &bands(), 4);
        let ids: Vec<&str> = alts.iter().map(|a| a.item.id.as_str()).collect();
        assert_eq!(ids, vec!["j-sporty"]);
    }

    #[test]
    fn test_builtin_jacket_tradeoffs() {
        let catalog = Catalog::builtin();
        let sporty = catalog.get("j-sporty").unwrap();
        let alts = find_alternatives(&catalog, sporty, &Bundle::empty(), &bands(), 4);
        let kinds: Vec<(&str, TradeoffKind)> =
            alts.iter().map(|a| (a.item.id.as_str(), a.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                ("j-classic", TradeoffKind::Neutral),
                ("j-premium", TradeoffKind::Warmer),
            ]
        );
    }

    #[test]
    fn test_limit_caps_results() {
        let items: Vec<CatalogItem> = (0..7)
            .map(|i| item(&format!("j{i}"), 100.0 + i as f64, &[], Style::Sporty))
            .collect();
        let catalog = Catalog::new(items);
        let subject = catalog.get("j0").unwrap();
        let alts = find_alternatives(&catalog, subject, &Bundle::empty(), &bands(), 4);
        let ids: Vec<&str> = alts.iter().map(|a| a.item.id.as_str()).collect();
        assert_eq!(ids, vec!["j1", "j2", "j3", "j4"]);
    }

    #[test]
    fn test_empty_when_nothing_left() {
        let catalog = Catalog::builtin();
        let boots = catalog.get("bt-classic").unwrap();
        assert!(find_alternatives(&catalog, boots, &Bundle::empty(), &bands(), 4).is_empty());
    }
}
