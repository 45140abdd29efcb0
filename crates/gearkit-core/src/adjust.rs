//! Slider-driven re-tuning.
//!
//! Two 0–100 priorities (vibe, budget) blend into one effective style and the
//! bundle is regenerated from scratch. The old and new bundles are then diffed
//! to pick a feedback line; which slider moved only changes the feedback.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bundle::{Bundle, BundleGenerator, BundleRequest};
use crate::catalog::{Catalog, Category, ParseError, Style};
use crate::config::{Heuristics, SliderBlend};
use crate::constants::SLIDER_MAX;

/// Which slider the shopper just moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SliderKind {
    Vibe,
    #[default]
    Budget,
}

impl FromStr for SliderKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vibe" => Ok(SliderKind::Vibe),
            "budget" => Ok(SliderKind::Budget),
            _ => Err(ParseError::new("slider", s)),
        }
    }
}

/// Budget ceiling and size from the original intent, passed through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    pub budget: f64,
    pub size: String,
}

/// Feedback line shown after an adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    PerformanceFirst,
    Refined,
    BalancedVibe,
    InvestedInJacket,
    JacketForValue,
    PrioritisedQuality,
    OptimisedForValue,
    Adjusted,
}

impl Feedback {
    pub fn message(&self) -> &'static str {
        match self {
            Feedback::PerformanceFirst => {
                "Performance-first mode: technical pieces take priority."
            }
            Feedback::Refined => {
                "Refined selection: elevated materials and a polished look."
            }
            Feedback::BalancedVibe => "Balanced vibe: pieces that perform and look the part.",
            Feedback::InvestedInJacket => {
                "We invested more in the jacket, the piece that keeps paying off as your skills grow."
            }
            Feedback::JacketForValue => {
                "Dialled the jacket back to keep costs down, with the warmth essentials preserved."
            }
            Feedback::PrioritisedQuality => "Prioritised quality on the key warmth pieces.",
            Feedback::OptimisedForValue => "Optimised for value, with the essentials protected.",
            Feedback::Adjusted => "Bundle adjusted for your preferences.",
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of one slider adjustment.
#[derive(Debug, Clone, PartialEq)]
pub struct Adjustment {
    pub bundle: Bundle,
    pub style: Style,
    pub feedback: Feedback,
}

impl Adjustment {
    pub fn message(&self) -> &'static str {
        self.feedback.message()
    }
}

/// Blend both sliders into one style:
/// `vibe_weight·vibe/100 + budget_weight·budget/100`, cut at the configured
/// Sporty and Premium thresholds. Inputs are clamped to 0–100.
pub fn blend_style(vibe: f64, budget_priority: f64, blend: &SliderBlend) -> Style {
    let vibe = vibe.clamp(0.0, SLIDER_MAX) / SLIDER_MAX;
    let budget = budget_priority.clamp(0.0, SLIDER_MAX) / SLIDER_MAX;
    let combined = blend.vibe_weight * vibe + blend.budget_weight * budget;
    if combined < blend.sporty_below {
        Style::Sporty
    } else if combined > blend.premium_above {
        Style::Premium
    } else {
        Style::Classic
    }
}

pub struct BundleAdjuster<'a> {
    catalog: &'a Catalog,
    heuristics: &'a Heuristics,
}

impl<'a> BundleAdjuster<'a> {
    pub fn new(catalog: &'a Catalog, heuristics: &'a Heuristics) -> Self {
        Self {
            catalog,
            heuristics,
        }
    }

    pub fn adjust(
        &self,
        current: &Bundle,
        vibe: f64,
        budget_priority: f64,
        preferences: &Preferences,
        changed: SliderKind,
    ) -> Adjustment {
        let style = blend_style(vibe, budget_priority, &self.heuristics.blend);
        let bundle = BundleGenerator::new(self.catalog, self.heuristics).generate(&BundleRequest {
            budget: preferences.budget,
            size: preferences.size.clone(),
            style,
        });

        let feedback = match changed {
            SliderKind::Vibe => self.vibe_feedback(vibe),
            SliderKind::Budget => self.budget_feedback(current, &bundle),
        };

        tracing::debug!(%style, ?changed, ?feedback, total = bundle.total_price(), "bundle adjusted");

        Adjustment {
            bundle,
            style,
            feedback,
        }
    }

    fn vibe_feedback(&self, vibe: f64) -> Feedback {
        let blend = &self.heuristics.blend;
        if vibe < blend.performance_vibe_below {
            Feedback::PerformanceFirst
        } else if vibe > blend.refined_vibe_above {
            Feedback::Refined
        } else {
            Feedback::BalancedVibe
        }
    }

    /// Jacket identity change first, then the total price delta.
    fn budget_feedback(&self, old: &Bundle, new: &Bundle) -> Feedback {
        let old_jacket = old.in_category(&Category::Jacket);
        let new_jacket = new.in_category(&Category::Jacket);

        if let (Some(old_jacket), Some(new_jacket)) = (old_jacket, new_jacket)
            && old_jacket.id() != new_jacket.id()
        {
            return if new_jacket.item.price > old_jacket.item.price {
                Feedback::InvestedInJacket
            } else {
                Feedback::JacketForValue
            };
        }

        let delta = new.total_price() - old.total_price();
        let notable = self.heuristics.notable_total_delta;
        if delta > notable {
            Feedback::PrioritisedQuality
        } else if delta < -notable {
            Feedback::OptimisedForValue
        } else {
            Feedback::Adjusted
        }
    }
}
