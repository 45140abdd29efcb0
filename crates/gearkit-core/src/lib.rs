//! gearkit recommendation engine.
//!
//! Turns a shopper's trip intent into a priced, explained bundle of ski gear
//! from a fixed catalog. Selection is deterministic: style ranking per
//! category, required categories always filled, optional ones gated by
//! budget. Two sliders re-tune the bundle, items can be swapped, removed or
//! replaced, and every item carries a display tier and a rationale.
//!
//! Zero I/O: catalogs and heuristics come in as values; loading them from
//! disk is the caller's job.

mod builtin;

pub mod adjust;
pub mod alternatives;
pub mod bundle;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod constants;
pub mod engine;
pub mod intent;
pub mod narrative;
pub mod picker;
pub mod rationale;
pub mod serde_compat;
pub mod session;
pub mod tier;

pub use adjust::{Adjustment, BundleAdjuster, Feedback, Preferences, SliderKind, blend_style};
pub use alternatives::{Alternative, TradeoffKind, classify_tradeoff, find_alternatives};
pub use bundle::{Bundle, BundleGenerator, BundleItem, BundleRequest, format_price};
pub use catalog::{Catalog, CatalogItem, Category, ParseError, Style, Tag, TagKind};
pub use checkout::{CheckoutLine, CheckoutSnapshot};
pub use config::{Heuristics, SliderBlend, TradeoffBands};
pub use engine::Engine;
pub use intent::{IntentData, ParsedIntent, SkillLevel, parse_intent};
pub use narrative::{
    WeatherContext, WeatherKind, bundle_summary, inference_message, product_explanation,
    weather_context, why_this_works,
};
pub use picker::{StylePicker, style_rank};
pub use rationale::generate_rationale;
pub use serde_compat::{CURRENT_VERSION, export_json, import_json};
pub use session::{CartSnapshot, SessionError, ShopSession};
pub use tier::{PriceThresholds, Tier, TierClassifier};
