//! Deterministic one-sentence rationales for bundle items.
//!
//! Branches on category first, then on the most specific tag the item
//! carries. Every path ends in a sentence, including categories the engine
//! has never seen.

use crate::catalog::{CatalogItem, Category, Tag};

/// Explain why `item` earns its place in a bundle.
pub fn generate_rationale(item: &CatalogItem) -> String {
    let has = |tag: Tag| item.has_tag(&tag);

    let sentence = match &item.category {
        Category::Jacket => {
            if has(Tag::DownFill) {
                "Down fill gives the best warmth for its weight when the lifts are exposed and the wind picks up."
            } else if has(Tag::Waterproof) && has(Tag::Insulation) {
                "A waterproof shell over thermal insulation keeps you warm and dry whatever the mountain throws at you."
            } else if has(Tag::GoreTex) {
                "A breathable waterproof membrane sheds wet snow while letting heat escape on the climb."
            } else {
                "A wind-resistant outer layer with sealed seams shuts out the harshest conditions on the slope."
            }
        }
        Category::BaseLayer => {
            if has(Tag::MerinoWool) {
                "Merino wool regulates temperature and resists odour through long days on the hill."
            } else {
                "Moisture-wicking fabric moves sweat off your skin so you stay dry from first chair to last."
            }
        }
        Category::Pants => {
            if has(Tag::Bib) {
                "A bib cut closes the gap between jacket and pants so snow stays out on every fall."
            } else if has(Tag::Lightweight) {
                "A lightweight race fit frees up movement without giving up warmth."
            } else {
                "A waterproof outer shell stands up to wet snow and wind on groomed runs."
            }
        }
        Category::Gloves => {
            if has(Tag::DownFill) {
                "Down insulation under a waterproof shell keeps hands warm through the coldest lifts."
            } else {
                "An insulated grip keeps hands warm all session, with touchscreen-ready fingertips."
            }
        }
        Category::Beanie => {
            if has(Tag::MerinoWool) {
                "Slim merino knit sits under a helmet without adding bulk."
            } else {
                "A stretch fit sits snug under any helmet and catches the light on flat-light days."
            }
        }
        Category::Goggles => {
            if has(Tag::MagneticLens) {
                "Magnetic lenses swap in seconds when the light changes on the mountain."
            } else {
                "Anti-fog UV lenses give a wide, clear view in flat light and bright sun."
            }
        }
        Category::Boots => {
            "A waterproof insulated boot with an aggressive sole, built for lift-to-lodge days."
        }
        Category::Socks => {
            "A cushioned merino sock prevents boot bite and keeps feet at the right temperature."
        }
        Category::Unrecognized(_) => "A well-matched piece that rounds out your trip kit.",
    };

    sentence.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Style};

    fn item(category: &str, tags: &[&str]) -> CatalogItem {
        CatalogItem {
            id: "x".to_string(),
            name: "X".to_string(),
            brand: "B".to_string(),
            category: Category::parse(category),
            price: 10.0,
            original_price: 10.0,
            rating: 0.0,
            rating_count: 0,
            image: String::new(),
            tags: tags.iter().map(|t| Tag::parse(t)).collect(),
            style: Style::All,
        }
    }

    #[test]
    fn test_down_jacket_gets_warmth_sentence() {
        let r = generate_rationale(&item("jacket", &["down-fill", "waterproof"]));
        assert!(r.contains("Down fill"), "{r}");
    }

    #[test]
    fn test_insulated_shell_branch() {
        let r = generate_rationale(&item("jacket", &["waterproof", "insulation"]));
        assert!(r.contains("thermal insulation"), "{r}");
    }

    #[test]
    fn test_untagged_jacket_falls_through() {
        let r = generate_rationale(&item("jacket", &[]));
        assert!(r.contains("wind-resistant"), "{r}");
    }

    #[test]
    fn test_bib_pants() {
        let r = generate_rationale(&item("bibs", &["bib"]));
        assert!(r.contains("bib cut"), "{r}");
    }

    #[test]
    fn test_unknown_category_generic() {
        let r = generate_rationale(&item("avalanche pack", &["premium"]));
        assert!(r.contains("rounds out"), "{r}");
    }

    #[test]
    fn test_every_builtin_item_has_sentence() {
        for i in Catalog::builtin().iter() {
            let r = generate_rationale(i);
            assert!(!r.is_empty());
            assert!(r.ends_with('.'), "{}: {r}", i.id);
        }
    }

    #[test]
    fn test_deterministic() {
        let i = item("goggles", &["magnetic-lens"]);
        assert_eq!(generate_rationale(&i), generate_rationale(&i));
    }
}
