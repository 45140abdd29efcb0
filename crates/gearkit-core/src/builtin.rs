//! The ski-trip catalog shipped with the engine.

use crate::catalog::{CatalogItem, Category, Style, Tag};

const IMG_JACKET_A: &str = "https://images.unsplash.com/photo-1674350285486-a62fcdc2fa61?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&w=600";
const IMG_JACKET_B: &str = "https://images.unsplash.com/photo-1764602655362-a07ae9cf0f2b?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&w=600";
const IMG_BASE_A: &str = "https://images.unsplash.com/photo-1565962684631-716a905dd295?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&w=600";
const IMG_BASE_B: &str = "https://images.unsplash.com/photo-1698328722821-0500626c27d8?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&w=600";
const IMG_PANTS: &str = "https://images.unsplash.com/photo-1768777156505-296818362138?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&w=600";
const IMG_GLOVES: &str = "https://images.unsplash.com/photo-1739395670857-c9ac7e0b39b8?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&w=600";
const IMG_BEANIE: &str = "https://images.unsplash.com/photo-1625540438967-fe892ad47ed0?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&w=600";
const IMG_GOGGLES: &str = "https://images.unsplash.com/photo-1644270769241-29c182863c68?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&w=600";
const IMG_BOOTS: &str = "https://images.unsplash.com/photo-1642690167184-eb64f4ef469f?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&w=600";
const IMG_SOCKS: &str = "https://images.unsplash.com/photo-1642853474532-9aca78f70629?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&w=600";

struct Row {
    id: &'static str,
    name: &'static str,
    brand: &'static str,
    category: Category,
    price: f64,
    original_price: f64,
    rating: f64,
    rating_count: u32,
    image: &'static str,
    tags: &'static [&'static str],
    style: Style,
}

impl From<Row> for CatalogItem {
    fn from(row: Row) -> Self {
        CatalogItem {
            id: row.id.to_string(),
            name: row.name.to_string(),
            brand: row.brand.to_string(),
            category: row.category,
            price: row.price,
            original_price: row.original_price,
            rating: row.rating,
            rating_count: row.rating_count,
            image: row.image.to_string(),
            tags: row.tags.iter().map(|t| Tag::parse(t)).collect(),
            style: row.style,
        }
    }
}

pub(crate) fn builtin_items() -> Vec<CatalogItem> {
    let rows = vec![
        // Jackets
        Row {
            id: "j-sporty",
            name: "ThermoFlex Pro Ski Jacket",
            brand: "AlpineRun",
            category: Category::Jacket,
            price: 169.0,
            original_price: 199.0,
            rating: 4.7,
            rating_count: 312,
            image: IMG_JACKET_A,
            tags: &["waterproof", "insulation", "warm", "lightweight"],
            style: Style::Sporty,
        },
        Row {
            id: "j-classic",
            name: "Alpine Classic Shell Jacket",
            brand: "NordLayer",
            category: Category::Jacket,
            price: 149.0,
            original_price: 179.0,
            rating: 4.5,
            rating_count: 218,
            image: IMG_JACKET_B,
            tags: &["waterproof", "wind-resistant", "warm", "durable"],
            style: Style::Classic,
        },
        Row {
            id: "j-premium",
            name: "Summit Elite Down Jacket",
            brand: "PeakForm",
            category: Category::Jacket,
            price: 189.0,
            original_price: 229.0,
            rating: 4.9,
            rating_count: 145,
            image: IMG_JACKET_A,
            tags: &["waterproof", "down-fill", "insulation", "warm", "premium"],
            style: Style::Premium,
        },
        // Base layers
        Row {
            id: "bl-sporty",
            name: "CoreHeat Base Layer Top",
            brand: "AlpineRun",
            category: Category::BaseLayer,
            price: 38.0,
            original_price: 48.0,
            rating: 4.6,
            rating_count: 489,
            image: IMG_BASE_A,
            tags: &["moisture-wicking", "warm", "layering", "stretch"],
            style: Style::Sporty,
        },
        Row {
            id: "bl-classic",
            name: "MerinoPlus Thermal Crew",
            brand: "WoolCraft",
            category: Category::BaseLayer,
            price: 52.0,
            original_price: 65.0,
            rating: 4.8,
            rating_count: 276,
            image: IMG_BASE_B,
            tags: &["merino-wool", "warm", "layering", "natural"],
            style: Style::Classic,
        },
        Row {
            id: "bl-premium",
            name: "ThermoCore Elite Base",
            brand: "PeakForm",
            category: Category::BaseLayer,
            price: 68.0,
            original_price: 85.0,
            rating: 4.9,
            rating_count: 92,
            image: IMG_BASE_A,
            tags: &["merino-wool", "moisture-wicking", "warm", "layering", "premium"],
            style: Style::Premium,
        },
        // Pants
        Row {
            id: "p-sporty",
            name: "PowderRider Ski Pants",
            brand: "AlpineRun",
            category: Category::Pants,
            price: 109.0,
            original_price: 139.0,
            rating: 4.6,
            rating_count: 341,
            image: IMG_PANTS,
            tags: &["waterproof", "warm", "durable", "vented"],
            style: Style::Sporty,
        },
        Row {
            id: "p-classic",
            name: "Alpine Classic Ski Bibs",
            brand: "NordLayer",
            category: Category::Pants,
            price: 135.0,
            original_price: 165.0,
            rating: 4.7,
            rating_count: 197,
            image: IMG_PANTS,
            tags: &["waterproof", "wind-resistant", "warm", "durable", "bib"],
            style: Style::Classic,
        },
        Row {
            id: "p-premium",
            name: "Summit Pro Race Pants",
            brand: "PeakForm",
            category: Category::Pants,
            price: 149.0,
            original_price: 185.0,
            rating: 4.8,
            rating_count: 88,
            image: IMG_PANTS,
            tags: &["waterproof", "insulation", "warm", "lightweight", "premium"],
            style: Style::Premium,
        },
        // Gloves
        Row {
            id: "g-all",
            name: "Peak Grip Ski Gloves",
            brand: "AlpineRun",
            category: Category::Gloves,
            price: 44.0,
            original_price: 55.0,
            rating: 4.5,
            rating_count: 523,
            image: IMG_GLOVES,
            tags: &["waterproof", "warm", "grip", "touchscreen"],
            style: Style::All,
        },
        Row {
            id: "g-premium",
            name: "Summit Pro Mittens",
            brand: "PeakForm",
            category: Category::Gloves,
            price: 62.0,
            original_price: 79.0,
            rating: 4.8,
            rating_count: 154,
            image: IMG_GLOVES,
            tags: &["waterproof", "insulation", "warm", "down-fill", "premium"],
            style: Style::Premium,
        },
        // Beanies
        Row {
            id: "b-classic",
            name: "TrailHead Merino Beanie",
            brand: "WoolCraft",
            category: Category::Beanie,
            price: 26.0,
            original_price: 32.0,
            rating: 4.9,
            rating_count: 687,
            image: IMG_BEANIE,
            tags: &["merino-wool", "warm", "layering", "helmet-compatible"],
            style: Style::Classic,
        },
        Row {
            id: "b-sporty",
            name: "StretchFit Sport Beanie",
            brand: "AlpineRun",
            category: Category::Beanie,
            price: 19.0,
            original_price: 25.0,
            rating: 4.4,
            rating_count: 389,
            image: IMG_BEANIE,
            tags: &["warm", "stretch", "layering", "reflective", "helmet-compatible"],
            style: Style::Sporty,
        },
        // Goggles
        Row {
            id: "og-sporty",
            name: "ClearVision OTG Goggles",
            brand: "AlpineRun",
            category: Category::Goggles,
            price: 58.0,
            original_price: 75.0,
            rating: 4.6,
            rating_count: 241,
            image: IMG_GOGGLES,
            tags: &["UV-protection", "anti-fog", "OTG", "wide-view"],
            style: Style::Sporty,
        },
        Row {
            id: "og-premium",
            name: "ProLens Mag Goggles",
            brand: "PeakForm",
            category: Category::Goggles,
            price: 85.0,
            original_price: 109.0,
            rating: 4.9,
            rating_count: 113,
            image: IMG_GOGGLES,
            tags: &["UV-protection", "anti-fog", "magnetic-lens", "premium", "wide-view"],
            style: Style::Premium,
        },
        // Boots
        Row {
            id: "bt-classic",
            name: "AllTerrain Winter Boots",
            brand: "NordLayer",
            category: Category::Boots,
            price: 149.0,
            original_price: 185.0,
            rating: 4.6,
            rating_count: 302,
            image: IMG_BOOTS,
            tags: &["waterproof", "insulation", "warm", "grip", "durable"],
            style: Style::Classic,
        },
        // Socks
        Row {
            id: "sk-all",
            name: "MerinoSki Performance Socks",
            brand: "WoolCraft",
            category: Category::Socks,
            price: 19.0,
            original_price: 24.0,
            rating: 4.7,
            rating_count: 814,
            image: IMG_SOCKS,
            tags: &["merino-wool", "warm", "cushioned", "moisture-wicking"],
            style: Style::All,
        },
    ];

    rows.into_iter().map(CatalogItem::from).collect()
}
