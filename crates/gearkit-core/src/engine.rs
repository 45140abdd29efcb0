//! Engine: one catalog, one set of heuristics, one tier cache.
//!
//! The engine is the stateless facade a UI talks to. It holds no session
//! state; every call takes its inputs explicitly and returns new values.

use crate::adjust::{Adjustment, BundleAdjuster, Preferences, SliderKind};
use crate::alternatives::{Alternative, find_alternatives};
use crate::bundle::{Bundle, BundleGenerator, BundleRequest};
use crate::catalog::{Catalog, CatalogItem, Category, Style};
use crate::config::Heuristics;
use crate::picker::StylePicker;
use crate::rationale;
use crate::tier::{Tier, TierClassifier};

#[derive(Debug)]
pub struct Engine {
    catalog: Catalog,
    heuristics: Heuristics,
    tiers: TierClassifier,
}

impl Engine {
    pub fn new(catalog: Catalog, heuristics: Heuristics) -> Self {
        let tiers = TierClassifier::new(heuristics.tier_signals.clone());
        Self {
            catalog,
            heuristics,
            tiers,
        }
    }

    pub fn with_builtin() -> Self {
        Self::new(Catalog::builtin(), Heuristics::default())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn heuristics(&self) -> &Heuristics {
        &self.heuristics
    }

    pub fn tiers(&self) -> &TierClassifier {
        &self.tiers
    }

    /// Swap the catalog and drop cached tier thresholds.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        tracing::info!(items = catalog.len(), "catalog replaced");
        self.catalog = catalog;
        self.tiers.invalidate();
    }

    pub fn set_heuristics(&mut self, heuristics: Heuristics) {
        self.tiers.set_signals(heuristics.tier_signals.clone());
        self.heuristics = heuristics;
    }

    pub fn generate_bundle(&self, request: &BundleRequest) -> Bundle {
        BundleGenerator::new(&self.catalog, &self.heuristics).generate(request)
    }

    pub fn adjust_bundle(
        &self,
        current: &Bundle,
        vibe: f64,
        budget_priority: f64,
        preferences: &Preferences,
        changed: SliderKind,
    ) -> Adjustment {
        BundleAdjuster::new(&self.catalog, &self.heuristics).adjust(
            current,
            vibe,
            budget_priority,
            preferences,
            changed,
        )
    }

    /// Best same-category item for `style` outside `exclude`.
    pub fn get_replacement(
        &self,
        category: &Category,
        style: Style,
        exclude: &[&str],
    ) -> Option<&CatalogItem> {
        StylePicker::new(&self.catalog, &self.heuristics.style_fallback).pick(
            category, style, exclude,
        )
    }

    /// True when another catalog item of the same category sits outside `bundle`.
    pub fn can_replace(&self, item: &CatalogItem, bundle: &Bundle) -> bool {
        self.catalog
            .in_category(&item.category)
            .any(|c| c.id != item.id && !bundle.contains(&c.id))
    }

    pub fn get_alternatives(&self, item: &CatalogItem, bundle: &Bundle) -> Vec<Alternative> {
        find_alternatives(
            &self.catalog,
            item,
            bundle,
            &self.heuristics.tradeoff,
            self.heuristics.max_alternatives,
        )
    }

    pub fn product_tier(&self, item: &CatalogItem) -> Tier {
        self.tiers.classify(item, &self.catalog)
    }

    pub fn generate_rationale(&self, item: &CatalogItem) -> String {
        rationale::generate_rationale(item)
    }

    pub fn is_required(&self, category: &Category) -> bool {
        self.heuristics.is_required(category)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_builtin()
    }
}
