//! Bundles and the generator that builds them.
//!
//! A [`Bundle`] is a value: its aggregates are computed from its items at
//! construction and the fields are private, so a bundle with stale totals
//! cannot exist. Every change (slider, swap, remove, replace) produces a new
//! bundle.

use serde::Serialize;

use crate::catalog::{Catalog, CatalogItem, Category, Style};
use crate::config::Heuristics;
use crate::picker::StylePicker;
use crate::rationale::generate_rationale;

/// One catalog item plus the sentence explaining its pick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BundleItem {
    pub item: CatalogItem,
    pub rationale: String,
}

impl BundleItem {
    /// Wrap an item, generating its rationale.
    pub fn new(item: CatalogItem) -> Self {
        let rationale = generate_rationale(&item);
        Self { item, rationale }
    }

    pub fn id(&self) -> &str {
        &self.item.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bundle {
    items: Vec<BundleItem>,
    total_price: f64,
    original_price: f64,
    savings: f64,
}

impl Bundle {
    /// Build a bundle, summing aggregates over `items`.
    pub fn from_items(items: Vec<BundleItem>) -> Self {
        let total_price: f64 = items.iter().map(|i| i.item.price).sum();
        let original_price: f64 = items.iter().map(|i| i.item.original_price).sum();
        Self {
            items,
            total_price,
            original_price,
            savings: original_price - total_price,
        }
    }

    pub fn empty() -> Self {
        Self::from_items(Vec::new())
    }

    pub fn items(&self) -> &[BundleItem] {
        &self.items
    }

    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    pub fn original_price(&self) -> f64 {
        self.original_price
    }

    pub fn savings(&self) -> f64 {
        self.savings
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.id()).collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|i| i.id() == id)
    }

    pub fn find(&self, id: &str) -> Option<&BundleItem> {
        self.items.iter().find(|i| i.id() == id)
    }

    /// The item filling `category`, if any.
    pub fn in_category(&self, category: &Category) -> Option<&BundleItem> {
        self.items.iter().find(|i| &i.item.category == category)
    }

    /// A new bundle with `old_id` swapped for `replacement` at the same
    /// position. `None` when `old_id` is absent, the replacement is from a
    /// different category, or it is already in the bundle.
    pub fn replacing(&self, old_id: &str, replacement: CatalogItem) -> Option<Bundle> {
        let pos = self.items.iter().position(|i| i.id() == old_id)?;
        if self.items[pos].item.category != replacement.category || self.contains(&replacement.id)
        {
            return None;
        }
        let mut items = self.items.clone();
        items[pos] = BundleItem::new(replacement);
        Some(Bundle::from_items(items))
    }

    /// A new bundle without `id`. `None` when `id` is absent.
    pub fn without(&self, id: &str) -> Option<Bundle> {
        if !self.contains(id) {
            return None;
        }
        let items = self
            .items
            .iter()
            .filter(|i| i.id() != id)
            .cloned()
            .collect();
        Some(Bundle::from_items(items))
    }
}

/// Format a currency amount: whole amounts without cents.
pub fn format_price(amount: f64) -> String {
    if amount.fract().abs() < 1e-9 {
        format!("${amount:.0}")
    } else {
        format!("${amount:.2}")
    }
}

/// Inputs for one bundle generation.
#[derive(Debug, Clone, PartialEq)]
pub struct BundleRequest {
    pub budget: f64,
    /// Carried through for the caller; selection does not use it.
    pub size: String,
    pub style: Style,
}

/// Builds bundles across required and optional categories.
pub struct BundleGenerator<'a> {
    catalog: &'a Catalog,
    heuristics: &'a Heuristics,
}

impl<'a> BundleGenerator<'a> {
    pub fn new(catalog: &'a Catalog, heuristics: &'a Heuristics) -> Self {
        Self {
            catalog,
            heuristics,
        }
    }

    /// Required categories are filled unconditionally; optional ones only
    /// while the running total stays within budget. A category with no
    /// eligible candidate is left out.
    pub fn generate(&self, request: &BundleRequest) -> Bundle {
        let picker = StylePicker::new(self.catalog, &self.heuristics.style_fallback);
        let mut selected: Vec<BundleItem> = Vec::new();
        let mut used: Vec<&str> = Vec::new();
        let mut running_total = 0.0;

        for category in &self.heuristics.required_categories {
            match picker.pick(category, request.style, &used) {
                Some(item) => {
                    used.push(&item.id);
                    running_total += item.price;
                    selected.push(BundleItem::new(item.clone()));
                }
                None => {
                    tracing::debug!(%category, "no candidate for required category, omitting");
                }
            }
        }

        for category in &self.heuristics.optional_categories {
            let Some(item) = picker.pick(category, request.style, &used) else {
                continue;
            };
            if running_total + item.price <= request.budget {
                used.push(&item.id);
                running_total += item.price;
                selected.push(BundleItem::new(item.clone()));
            } else {
                tracing::debug!(
                    %category,
                    item = %item.id,
                    running_total,
                    budget = request.budget,
                    "optional item skipped, over budget"
                );
            }
        }

        Bundle::from_items(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn generate(style: Style, budget: f64) -> Bundle {
        let catalog = Catalog::builtin();
        let heuristics = Heuristics::default();
        BundleGenerator::new(&catalog, &heuristics).generate(&BundleRequest {
            budget,
            size: "M".to_string(),
            style,
        })
    }

    #[test]
    fn test_classic_500() {
        let bundle = generate(Style::Classic, 500.0);
        assert_eq!(
            bundle.ids(),
            vec!["j-classic", "bl-classic", "p-classic", "g-all", "b-classic", "og-sporty", "sk-all"]
        );
        assert_relative_eq!(bundle.total_price(), 483.0);
        assert_relative_eq!(bundle.original_price(), 595.0);
        assert_relative_eq!(bundle.savings(), 112.0);
    }

    #[test]
    fn test_sporty_500() {
        let bundle = generate(Style::Sporty, 500.0);
        assert_eq!(
            bundle.ids(),
            vec!["j-sporty", "bl-sporty", "p-sporty", "g-all", "b-sporty", "og-sporty", "sk-all"]
        );
        assert_relative_eq!(bundle.total_price(), 456.0);
    }

    #[test]
    fn test_premium_500_skips_optional_over_budget() {
        let bundle = generate(Style::Premium, 500.0);
        assert_eq!(
            bundle.ids(),
            vec!["j-premium", "bl-premium", "p-premium", "g-premium", "b-classic"]
        );
        assert_relative_eq!(bundle.total_price(), 494.0);
    }

    #[test]
    fn test_required_items_ignore_budget() {
        let bundle = generate(Style::Premium, 100.0);
        assert_eq!(bundle.len(), 5);
        assert!(bundle.total_price() > 100.0);
    }

    #[test]
    fn test_optional_fits_exactly_at_budget() {
        // Classic required total is 406; goggles (58) land on 464 exactly.
        let bundle = generate(Style::Classic, 464.0);
        assert!(bundle.contains("og-sporty"));
        assert!(!bundle.contains("sk-all"));
    }

    #[test]
    fn test_skipped_optional_does_not_block_cheaper_one() {
        // 406 + 58 > 430 but 406 + 19 fits.
        let bundle = generate(Style::Classic, 430.0);
        assert!(!bundle.contains("og-sporty"));
        assert!(bundle.contains("sk-all"));
    }

    #[test]
    fn test_missing_category_soft_fails() {
        let catalog = Catalog::new(
            Catalog::builtin()
                .into_items()
                .into_iter()
                .filter(|i| i.category != Category::Gloves)
                .collect(),
        );
        let heuristics = Heuristics::default();
        let bundle = BundleGenerator::new(&catalog, &heuristics).generate(&BundleRequest {
            budget: 500.0,
            size: "M".to_string(),
            style: Style::Classic,
        });
        assert!(bundle.in_category(&Category::Gloves).is_none());
        assert!(bundle.in_category(&Category::Jacket).is_some());
    }

    #[test]
    fn test_items_carry_rationales() {
        let bundle = generate(Style::Classic, 500.0);
        for item in bundle.items() {
            assert_eq!(item.rationale, generate_rationale(&item.item));
        }
    }

    #[test]
    fn test_replacing_recomputes_aggregates() {
        let bundle = generate(Style::Classic, 500.0);
        let catalog = Catalog::builtin();
        let swapped = bundle
            .replacing("j-classic", catalog.get("j-premium").unwrap().clone())
            .unwrap();
        assert_eq!(swapped.items()[0].id(), "j-premium");
        assert_relative_eq!(swapped.total_price(), 483.0 + 40.0);
        assert_relative_eq!(swapped.savings(), swapped.original_price() - swapped.total_price());
        // original bundle untouched
        assert_eq!(bundle.items()[0].id(), "j-classic");
    }

    #[test]
    fn test_replacing_rejects_other_category_or_duplicate() {
        let bundle = generate(Style::Classic, 500.0);
        let catalog = Catalog::builtin();
        assert!(bundle.replacing("j-classic", catalog.get("g-premium").unwrap().clone()).is_none());
        assert!(bundle.replacing("missing", catalog.get("j-premium").unwrap().clone()).is_none());
        assert!(bundle.replacing("j-classic", catalog.get("j-classic").unwrap().clone()).is_none());
    }

    #[test]
    fn test_without() {
        let bundle = generate(Style::Classic, 500.0);
        let smaller = bundle.without("sk-all").unwrap();
        assert_eq!(smaller.len(), bundle.len() - 1);
        assert_relative_eq!(smaller.total_price(), 464.0);
        assert!(bundle.without("nope").is_none());
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(500.0), "$500");
        assert_eq!(format_price(19.5), "$19.50");
    }
}
