//! Relative price/quality tiers.
//!
//! An item's tier comes from where its price sits in its category's price
//! distribution (or the whole catalog's, for thin categories), then bumps one
//! step if it carries a quality signal tag. Tiers are display-only and never
//! feed back into selection.
//!
//! Threshold tables are built once per catalog and held in an explicit cache
//! owned by the classifier. Whoever swaps the catalog calls
//! [`TierClassifier::invalidate`].

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CatalogItem, Category, Tag};
use crate::constants::{EPSILON, MIN_CATEGORY_SAMPLE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Value,
    Standard,
    Premium,
}

impl Tier {
    /// One step up; premium saturates.
    pub fn bumped(self) -> Tier {
        match self {
            Tier::Value => Tier::Standard,
            Tier::Standard | Tier::Premium => Tier::Premium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Value => "value",
            Tier::Standard => "standard",
            Tier::Premium => "premium",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value ceiling and premium floor for one price distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceThresholds {
    pub value_ceiling: f64,
    pub premium_floor: f64,
}

impl PriceThresholds {
    /// Thresholds at the 1/3 and 2/3 ranks of the sorted prices:
    /// `p[floor(n/3)]` and `p[ceil(2n/3) - 1]`. `None` for an empty list.
    pub fn from_prices(prices: &[f64]) -> Option<Self> {
        if prices.is_empty() {
            return None;
        }
        let mut sorted = prices.to_vec();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        let value_idx = n / 3;
        let premium_idx = (2 * n).div_ceil(3) - 1;

        Some(Self {
            value_ceiling: sorted[value_idx],
            premium_floor: sorted[premium_idx],
        })
    }

    /// Both thresholds sit on the same price (three items, or a flat list).
    pub fn is_collapsed(&self) -> bool {
        (self.premium_floor - self.value_ceiling).abs() < EPSILON
    }

    /// Collapsed thresholds compare strictly, so only the shared price itself
    /// is standard and a single-priced list stays all standard.
    pub fn classify(&self, price: f64) -> Tier {
        if self.is_collapsed() {
            let pivot = self.value_ceiling;
            if price < pivot - EPSILON {
                Tier::Value
            } else if price > pivot + EPSILON {
                Tier::Premium
            } else {
                Tier::Standard
            }
        } else if price <= self.value_ceiling {
            Tier::Value
        } else if price >= self.premium_floor {
            Tier::Premium
        } else {
            Tier::Standard
        }
    }
}

/// Per-category thresholds plus the catalog-wide fallback.
#[derive(Debug, Clone)]
struct ThresholdTable {
    by_category: HashMap<Category, PriceThresholds>,
    catalog_wide: Option<PriceThresholds>,
}

impl ThresholdTable {
    fn build(catalog: &Catalog) -> Self {
        let mut grouped: HashMap<Category, Vec<f64>> = HashMap::new();
        for item in catalog.iter() {
            grouped
                .entry(item.category.clone())
                .or_default()
                .push(item.price);
        }

        let by_category = grouped
            .into_iter()
            .filter(|(_, prices)| prices.len() >= MIN_CATEGORY_SAMPLE)
            .filter_map(|(category, prices)| {
                PriceThresholds::from_prices(&prices).map(|t| (category, t))
            })
            .collect();

        let all: Vec<f64> = catalog.iter().map(|i| i.price).collect();

        Self {
            by_category,
            catalog_wide: PriceThresholds::from_prices(&all),
        }
    }

    fn thresholds_for(&self, category: &Category) -> Option<&PriceThresholds> {
        self.by_category
            .get(category)
            .or(self.catalog_wide.as_ref())
    }
}

/// Tier classifier with an explicitly managed threshold cache.
#[derive(Debug)]
pub struct TierClassifier {
    signals: Vec<Tag>,
    table: OnceLock<ThresholdTable>,
    builds: AtomicUsize,
}

impl TierClassifier {
    pub fn new(signals: Vec<Tag>) -> Self {
        Self {
            signals,
            table: OnceLock::new(),
            builds: AtomicUsize::new(0),
        }
    }

    /// Full tier: price classification, then the signal-tag bump.
    pub fn classify(&self, item: &CatalogItem, catalog: &Catalog) -> Tier {
        let tier = self.price_tier(item, catalog);
        if self.has_signal(item) {
            tier.bumped()
        } else {
            tier
        }
    }

    /// Tier from price position alone.
    pub fn price_tier(&self, item: &CatalogItem, catalog: &Catalog) -> Tier {
        self.table(catalog)
            .thresholds_for(&item.category)
            .map(|t| t.classify(item.price))
            .unwrap_or(Tier::Standard)
    }

    pub fn has_signal(&self, item: &CatalogItem) -> bool {
        item.tags.iter().any(|t| self.signals.contains(t))
    }

    /// Drop cached thresholds; the next lookup rebuilds them.
    pub fn invalidate(&mut self) {
        if self.table.take().is_some() {
            tracing::debug!("tier threshold cache invalidated");
        }
    }

    /// Replace the signal list. Thresholds stay cached (they depend on prices only).
    pub fn set_signals(&mut self, signals: Vec<Tag>) {
        self.signals = signals;
    }

    pub fn is_cached(&self) -> bool {
        self.table.get().is_some()
    }

    /// How many times thresholds have been built.
    pub fn threshold_builds(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }

    fn table(&self, catalog: &Catalog) -> &ThresholdTable {
        self.table.get_or_init(|| {
            self.builds.fetch_add(1, Ordering::Relaxed);
            let table = ThresholdTable::build(catalog);
            tracing::debug!(
                categories = table.by_category.len(),
                items = catalog.len(),
                "built tier thresholds"
            );
            table
        })
    }
}

impl Default for TierClassifier {
    fn default() -> Self {
        Self::new(crate::config::Heuristics::default().tier_signals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Style;

    fn item(id: &str, category: &str, price: f64, tags: &[&str]) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: id.to_string(),
            brand: "Test".to_string(),
            category: Category::parse(category),
            price,
            original_price: price,
            rating: 4.0,
            rating_count: 0,
            image: String::new(),
            tags: tags.iter().map(|t| Tag::parse(t)).collect(),
            style: Style::Classic,
        }
    }

    #[test]
    fn test_threshold_indices() {
        // n=6: floor(6/3)=2, ceil(12/3)-1=3
        let t = PriceThresholds::from_prices(&[60.0, 10.0, 50.0, 20.0, 40.0, 30.0]).unwrap();
        assert_eq!(t.value_ceiling, 30.0);
        assert_eq!(t.premium_floor, 40.0);
        assert_eq!(t.classify(10.0), Tier::Value);
        assert_eq!(t.classify(30.0), Tier::Value);
        assert_eq!(t.classify(35.0), Tier::Standard);
        assert_eq!(t.classify(40.0), Tier::Premium);
    }

    #[test]
    fn test_two_prices_split_value_premium() {
        let t = PriceThresholds::from_prices(&[150.0, 50.0]).unwrap();
        assert_eq!(t.classify(50.0), Tier::Value);
        assert_eq!(t.classify(150.0), Tier::Premium);
    }

    #[test]
    fn test_single_price_is_standard() {
        let t = PriceThresholds::from_prices(&[80.0]).unwrap();
        assert!(t.is_collapsed());
        assert_eq!(t.classify(80.0), Tier::Standard);
    }

    #[test]
    fn test_equal_prices_collapse() {
        let t = PriceThresholds::from_prices(&[25.0, 25.0, 25.0, 25.0]).unwrap();
        assert_eq!(t.classify(25.0), Tier::Standard);
    }

    #[test]
    fn test_three_distinct_prices_spread() {
        // n=3: floor(3/3)=1, ceil(6/3)-1=1, both thresholds on the middle price
        let t = PriceThresholds::from_prices(&[300.0, 100.0, 200.0]).unwrap();
        assert!(t.is_collapsed());
        assert_eq!(t.classify(100.0), Tier::Value);
        assert_eq!(t.classify(200.0), Tier::Standard);
        assert_eq!(t.classify(300.0), Tier::Premium);
    }

    #[test]
    fn test_three_item_category_gets_all_tiers() {
        let catalog = Catalog::new(vec![
            item("a", "jacket", 100.0, &[]),
            item("b", "jacket", 200.0, &[]),
            item("c", "jacket", 300.0, &[]),
        ]);
        let classifier = TierClassifier::new(Vec::new());
        let tiers: Vec<Tier> = catalog
            .iter()
            .map(|i| classifier.price_tier(i, &catalog))
            .collect();
        assert_eq!(tiers, vec![Tier::Value, Tier::Standard, Tier::Premium]);
    }

    #[test]
    fn test_empty_prices() {
        assert!(PriceThresholds::from_prices(&[]).is_none());
    }

    #[test]
    fn test_two_item_catalog_scenario() {
        let catalog = Catalog::new(vec![
            item("cheap", "gloves", 50.0, &[]),
            item("dear", "gloves", 150.0, &[]),
        ]);
        let classifier = TierClassifier::default();
        assert_eq!(classifier.classify(&catalog.items()[0], &catalog), Tier::Value);
        assert_eq!(classifier.classify(&catalog.items()[1], &catalog), Tier::Premium);
    }

    #[test]
    fn test_thin_category_uses_catalog_wide() {
        let catalog = Catalog::new(vec![
            item("a", "jacket", 10.0, &[]),
            item("b", "jacket", 20.0, &[]),
            item("c", "jacket", 30.0, &[]),
            item("d", "jacket", 40.0, &[]),
            item("e", "jacket", 50.0, &[]),
            item("f", "jacket", 60.0, &[]),
            item("odd", "snowshoes", 60.0, &[]),
        ]);
        let classifier = TierClassifier::default();
        // catalog-wide n=7: p[2]=30, p[4]=50
        let odd = catalog.get("odd").unwrap();
        assert_eq!(classifier.price_tier(odd, &catalog), Tier::Premium);
    }

    #[test]
    fn test_synonym_categories_group_together() {
        let catalog = Catalog::new(vec![
            item("a", "pants", 100.0, &[]),
            item("b", "bibs", 200.0, &[]),
            item("c", "trousers", 300.0, &[]),
            item("d", "socks", 1.0, &[]),
        ]);
        let classifier = TierClassifier::default();
        // Three pants items form their own distribution around 200.
        let tier = |id: &str| classifier.price_tier(catalog.get(id).unwrap(), &catalog);
        assert_eq!(tier("a"), Tier::Value);
        assert_eq!(tier("b"), Tier::Standard);
        assert_eq!(tier("c"), Tier::Premium);
    }

    #[test]
    fn test_signal_bumps_one_step() {
        let catalog = Catalog::new(vec![
            item("cheap", "gloves", 50.0, &["merino"]),
            item("dear", "gloves", 150.0, &["premium"]),
        ]);
        let classifier = TierClassifier::default();
        assert_eq!(classifier.classify(&catalog.items()[0], &catalog), Tier::Standard);
        assert_eq!(classifier.classify(&catalog.items()[1], &catalog), Tier::Premium);
    }

    #[test]
    fn test_waterproof_does_not_bump() {
        let catalog = Catalog::new(vec![
            item("cheap", "gloves", 50.0, &["waterproof", "UV-protection"]),
            item("dear", "gloves", 150.0, &[]),
        ]);
        let classifier = TierClassifier::default();
        assert_eq!(classifier.classify(&catalog.items()[0], &catalog), Tier::Value);
    }

    #[test]
    fn test_cache_hit_and_invalidate() {
        let catalog = Catalog::builtin();
        let mut classifier = TierClassifier::default();
        assert!(!classifier.is_cached());

        let item = catalog.get("j-classic").unwrap();
        let first = classifier.classify(item, &catalog);
        let second = classifier.classify(item, &catalog);
        assert_eq!(first, second);
        assert_eq!(classifier.threshold_builds(), 1);

        classifier.invalidate();
        assert!(!classifier.is_cached());
        classifier.classify(item, &catalog);
        assert_eq!(classifier.threshold_builds(), 2);
    }

    #[test]
    fn test_builtin_tiers() {
        let catalog = Catalog::builtin();
        let classifier = TierClassifier::default();
        let tier = |id: &str| classifier.classify(catalog.get(id).unwrap(), &catalog);

        // Three-item categories split around the middle price, then bump.
        assert_eq!(tier("j-classic"), Tier::Value);
        assert_eq!(tier("j-sporty"), Tier::Premium);
        assert_eq!(tier("j-premium"), Tier::Premium);
        assert_eq!(tier("bl-sporty"), Tier::Value);
        assert_eq!(tier("bl-classic"), Tier::Premium);
        assert_eq!(tier("p-sporty"), Tier::Value);
        assert_eq!(tier("p-classic"), Tier::Standard);
        // Thin categories use catalog-wide thresholds (52 / 135).
        assert_eq!(tier("g-all"), Tier::Value);
        assert_eq!(tier("g-premium"), Tier::Premium);
        assert_eq!(tier("b-sporty"), Tier::Value);
        assert_eq!(tier("b-classic"), Tier::Standard);
        assert_eq!(tier("og-sporty"), Tier::Standard);
        assert_eq!(tier("bt-classic"), Tier::Premium);
        assert_eq!(tier("sk-all"), Tier::Standard);
    }

    #[test]
    fn test_bump_ordering() {
        assert_eq!(Tier::Value.bumped(), Tier::Standard);
        assert_eq!(Tier::Standard.bumped(), Tier::Premium);
        assert_eq!(Tier::Premium.bumped(), Tier::Premium);
        assert!(Tier::Value < Tier::Standard && Tier::Standard < Tier::Premium);
    }
}
