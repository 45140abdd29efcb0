//! Tunable heuristics. Every hand-tuned list or cut point the engine uses
//! lives here so it can be changed from a config file without touching the
//! selection algorithms.

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Style, Tag};
use crate::constants::{
    AFFORDABLE_RATIO, BUDGET_WEIGHT, MAX_ALTERNATIVES, NOTABLE_TOTAL_DELTA, PERFORMANCE_VIBE_BELOW,
    PREMIUM_ABOVE, PREMIUM_RATIO, REFINED_VIBE_ABOVE, SPORTY_BELOW, VIBE_WEIGHT,
};

/// How the two priority sliders blend into one effective style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderBlend {
    pub vibe_weight: f64,
    pub budget_weight: f64,
    pub sporty_below: f64,
    pub premium_above: f64,
    pub performance_vibe_below: f64,
    pub refined_vibe_above: f64,
}

impl Default for SliderBlend {
    fn default() -> Self {
        Self {
            vibe_weight: VIBE_WEIGHT,
            budget_weight: BUDGET_WEIGHT,
            sporty_below: SPORTY_BELOW,
            premium_above: PREMIUM_ABOVE,
            performance_vibe_below: PERFORMANCE_VIBE_BELOW,
            refined_vibe_above: REFINED_VIBE_ABOVE,
        }
    }
}

/// Price ratios that label an alternative cheaper or pricier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeoffBands {
    pub affordable_ratio: f64,
    pub premium_ratio: f64,
}

impl Default for TradeoffBands {
    fn default() -> Self {
        Self {
            affordable_ratio: AFFORDABLE_RATIO,
            premium_ratio: PREMIUM_RATIO,
        }
    }
}

/// Engine configuration. Missing fields in a config file take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Heuristics {
    /// Always filled when a candidate exists, in this order.
    pub required_categories: Vec<Category>,
    /// Filled only while the running total stays within budget.
    pub optional_categories: Vec<Category>,
    /// Styles ranked after an exact match, best first.
    pub style_fallback: Vec<Style>,
    /// Tags that bump a tier one step.
    pub tier_signals: Vec<Tag>,
    pub max_alternatives: usize,
    /// Total price change that counts as notable in budget feedback.
    pub notable_total_delta: f64,
    pub blend: SliderBlend,
    pub tradeoff: TradeoffBands,
}

impl Default for Heuristics {
    fn default() -> Self {
        Self {
            required_categories: vec![
                Category::Jacket,
                Category::BaseLayer,
                Category::Pants,
                Category::Gloves,
                Category::Beanie,
            ],
            optional_categories: vec![Category::Goggles, Category::Socks],
            style_fallback: vec![Style::All, Style::Classic],
            tier_signals: vec![
                Tag::Premium,
                Tag::Pro,
                Tag::GoreTex,
                Tag::MerinoWool,
                Tag::Insulation,
                Tag::Technical,
            ],
            max_alternatives: MAX_ALTERNATIVES,
            notable_total_delta: NOTABLE_TOTAL_DELTA,
            blend: SliderBlend::default(),
            tradeoff: TradeoffBands::default(),
        }
    }
}

impl Heuristics {
    pub fn is_required(&self, category: &Category) -> bool {
        self.required_categories.contains(category)
    }

    pub fn is_optional(&self, category: &Category) -> bool {
        self.optional_categories.contains(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let h = Heuristics::default();
        assert_eq!(h.required_categories.len(), 5);
        assert_eq!(h.optional_categories, vec![Category::Goggles, Category::Socks]);
        assert!(h.is_required(&Category::Beanie));
        assert!(!h.is_required(&Category::Boots));
        assert!(h.is_optional(&Category::Socks));
        assert_eq!(h.max_alternatives, 4);
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let h: Heuristics =
            serde_json::from_str(r#"{"max_alternatives": 2, "blend": {"vibe_weight": 0.5}}"#)
                .unwrap();
        assert_eq!(h.max_alternatives, 2);
        assert!((h.blend.vibe_weight - 0.5).abs() < 1e-12);
        assert!((h.blend.budget_weight - 0.4).abs() < 1e-12);
        assert_eq!(h.style_fallback, vec![Style::All, Style::Classic]);
    }

    #[test]
    fn test_signals_parse_through_synonyms() {
        let h: Heuristics =
            serde_json::from_str(r#"{"tier_signals": ["insulated", "merino"]}"#).unwrap();
        assert_eq!(h.tier_signals, vec![Tag::Insulation, Tag::MerinoWool]);
    }
}
