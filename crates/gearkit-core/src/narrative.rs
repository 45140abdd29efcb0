//! Display narrative derived from trip intent. Nothing here feeds selection.
//!
//! Conditions are detected by keyword matching on the free-form location,
//! month and activity fields, most specific combination first.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::bundle::{Bundle, format_price};
use crate::catalog::{Category, Style};
use crate::intent::{IntentData, SkillLevel};

static ALPINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)whistler|alps|rockies|sierra|aspen|vail|tignes|chamonix|mountain|alpine")
        .unwrap()
});
static WINTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)january|february|december|november|winter").unwrap());
static SUMMER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)june|july|august").unwrap());
static SNOW_SPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)ski|snowboard|snow").unwrap());
static COLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)winter|cold|freeze").unwrap());
static SNOW_CONTEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)ski|snow|slope|powder|mountain|winter").unwrap());
static SNOWBOARD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)snowboard").unwrap());
static SKI: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)ski").unwrap());

// Product detail copy uses a narrower vocabulary than the banners.
static DETAIL_ALPINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)whistler|alps|rockies|mountain|alpine").unwrap());
static DETAIL_WINTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)ski|snow|winter").unwrap());

/// Conditions inferred from an intent.
struct Conditions {
    alpine: bool,
    winter: bool,
    snow_sport: bool,
}

impl Conditions {
    fn of(intent: &IntentData) -> Self {
        Self {
            alpine: ALPINE.is_match(&intent.location),
            winter: WINTER.is_match(&intent.month),
            snow_sport: SNOW_SPORT.is_match(&intent.activity),
        }
    }
}

/// One-line banner explaining what the engine inferred from the trip.
pub fn inference_message(intent: &IntentData) -> String {
    let c = Conditions::of(intent);
    let combined = format!("{} {} {}", intent.activity, intent.location, intent.month);

    if c.snow_sport && c.alpine && c.winter {
        let suffix = if intent.skill_level == SkillLevel::Beginner {
            " for a comfortable first experience"
        } else {
            ""
        };
        format!("Cold alpine conditions detected: prioritising warmth and insulation{suffix}.")
    } else if c.snow_sport && c.winter {
        "Cold conditions detected: waterproofing and warmth come first.".to_string()
    } else if c.snow_sport || c.alpine {
        "Mountain terrain detected: recommending layered, weather-resistant pieces.".to_string()
    } else if c.winter || COLD.is_match(&combined) {
        "Winter conditions detected: warmth and protection come first.".to_string()
    } else {
        "Outdoor activity detected: recommending versatile, weather-ready pieces.".to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherKind {
    AlpineWinter,
    Winter,
    Alpine,
    Summer,
    Mild,
}

impl WeatherKind {
    pub fn icon(&self) -> &'static str {
        match self {
            WeatherKind::AlpineWinter => "❄️",
            WeatherKind::Winter => "🌨️",
            WeatherKind::Alpine => "🏔️",
            WeatherKind::Summer => "☀️",
            WeatherKind::Mild => "🌤️",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherContext {
    pub kind: WeatherKind,
    pub icon: &'static str,
    pub label: String,
}

pub fn weather_context(month: &str, location: &str) -> WeatherContext {
    let alpine = ALPINE.is_match(location);
    let winter = WINTER.is_match(month);

    let kind = if alpine && winter {
        WeatherKind::AlpineWinter
    } else if winter {
        WeatherKind::Winter
    } else if alpine {
        WeatherKind::Alpine
    } else if SUMMER.is_match(month) {
        WeatherKind::Summer
    } else {
        WeatherKind::Mild
    };

    WeatherContext {
        kind,
        icon: kind.icon(),
        label: format!("{location} • {month} conditions"),
    }
}

/// Short paragraph tying conditions, style and skill together.
pub fn why_this_works(intent: &IntentData, style: Style, bundle: &Bundle) -> String {
    let c = Conditions::of(intent);
    let location = &intent.location;

    let conditions = if c.alpine && c.winter {
        format!("cold alpine conditions in {location}")
    } else if c.alpine {
        format!("mountain conditions in {location}")
    } else if c.winter {
        format!("winter conditions near {location}")
    } else {
        format!("{} conditions in {location}", intent.month)
    };

    let priorities = match style {
        Style::Premium => "premium performance and material quality",
        Style::Sporty => "technical performance and weight savings",
        Style::Classic | Style::All => "warmth, comfort and all-round durability",
    };

    let noun = if SKI.is_match(&intent.activity) {
        "skier"
    } else if SNOWBOARD.is_match(&intent.activity) {
        "snowboarder"
    } else {
        "adventurer"
    };
    let skill = intent.skill_level.as_str().to_lowercase();
    let article = if skill.starts_with(['a', 'e', 'i', 'o', 'u']) {
        "an"
    } else {
        "a"
    };

    let closing = match (bundle.in_category(&Category::Jacket), intent.skill_level, style) {
        (Some(jacket), SkillLevel::Beginner, _) => format!(
            " The {} is a long-term investment, ready for conditions well beyond this trip.",
            jacket.item.name
        ),
        (_, _, Style::Premium) => {
            " Every piece was chosen for durability and sustained performance in demanding conditions."
                .to_string()
        }
        (_, _, Style::Sporty) => {
            " Weight and mobility were key criteria, so nothing unnecessary made the cut.".to_string()
        }
        _ => " Every item works with the others, leaving no gaps in warmth or coverage.".to_string(),
    };

    format!("Built for {conditions}, this setup prioritises {priorities} for {article} {skill} {noun}.{closing}")
}

/// Headline under the bundle title.
pub fn bundle_summary(style: Style, intent_text: &str, budget: f64) -> String {
    let context = if SNOW_CONTEXT.is_match(intent_text) {
        "on the mountain"
    } else {
        "outdoors"
    };
    let budget = format_price(budget);
    match style {
        Style::Sporty => {
            format!("Technical, performance-focused picks {context}, all under your {budget} budget.")
        }
        Style::Premium => format!(
            "Top-tier materials and construction built to perform in every condition, under {budget}."
        ),
        Style::Classic | Style::All => format!(
            "Timeless, well-proven picks that balance warmth, durability and value, under {budget}."
        ),
    }
}

/// Explanation line on the product detail view.
pub fn product_explanation(intent: &IntentData) -> String {
    let conditions = if DETAIL_ALPINE.is_match(&intent.location) {
        "cold alpine conditions"
    } else if DETAIL_WINTER.is_match(&intent.activity) {
        "winter conditions"
    } else {
        "outdoor conditions"
    };
    let skill = match intent.skill_level {
        SkillLevel::Beginner => "beginner comfort",
        SkillLevel::Advanced => "advanced performance",
        SkillLevel::Intermediate => "all-round versatility",
    };
    format!("Selected for {conditions} and {skill}.")
}
