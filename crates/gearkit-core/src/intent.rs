//! Shopper intent captured at onboarding.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::catalog::{ParseError, Style};
use crate::constants::DEFAULT_BUDGET;

static BUDGET_AMOUNT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$(\d+)").unwrap());
static SKI_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"ski|snowboard|snow|slope|mountain|winter|powder|resort").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    /// Starting style: Advanced → Premium, Intermediate → Sporty, Beginner → Classic.
    pub fn default_style(&self) -> Style {
        match self {
            SkillLevel::Advanced => Style::Premium,
            SkillLevel::Intermediate => Style::Sporty,
            SkillLevel::Beginner => Style::Classic,
        }
    }

    /// Starting position for both sliders, consistent with `default_style`.
    pub fn default_slider(&self) -> f64 {
        match self {
            SkillLevel::Advanced => 75.0,
            SkillLevel::Intermediate => 30.0,
            SkillLevel::Beginner => 50.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
        }
    }
}

impl FromStr for SkillLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(SkillLevel::Beginner),
            "intermediate" => Ok(SkillLevel::Intermediate),
            "advanced" => Ok(SkillLevel::Advanced),
            _ => Err(ParseError::new("skill level", s)),
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trip intent. Immutable for the life of a shopping session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentData {
    pub activity: String,
    pub location: String,
    pub month: String,
    pub skill_level: SkillLevel,
    pub gender: String,
    pub size: String,
    pub budget: f64,
}

/// Result of reading a free-text request.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedIntent {
    pub budget: f64,
    pub keywords: Vec<String>,
    pub is_ski_intent: bool,
}

/// Pull a budget (`$amount`, default 500), keywords and a ski flag from
/// free text.
pub fn parse_intent(text: &str) -> ParsedIntent {
    let lower = text.to_lowercase();
    let budget = BUDGET_AMOUNT
        .captures(text)
        .and_then(|c| c[1].parse::<f64>().ok())
        .unwrap_or(DEFAULT_BUDGET);

    ParsedIntent {
        budget,
        keywords: lower.split_whitespace().map(str::to_string).collect(),
        is_ski_intent: SKI_WORDS.is_match(&lower),
    }
}
