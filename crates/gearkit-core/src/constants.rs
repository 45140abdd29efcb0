/// Weight of the vibe slider in the blended style signal.
pub const VIBE_WEIGHT: f64 = 0.6;

/// Weight of the budget slider in the blended style signal.
pub const BUDGET_WEIGHT: f64 = 0.4;

/// Blended signal below this selects the Sporty style.
pub const SPORTY_BELOW: f64 = 0.35;

/// Blended signal above this selects the Premium style.
pub const PREMIUM_ABOVE: f64 = 0.65;

/// Vibe slider position below which feedback reads as performance-first.
pub const PERFORMANCE_VIBE_BELOW: f64 = 33.0;

/// Vibe slider position above which feedback reads as refined.
pub const REFINED_VIBE_ABOVE: f64 = 67.0;

/// Slider range upper bound (lower bound is 0).
pub const SLIDER_MAX: f64 = 100.0;

/// Bundle total delta (in currency units) that counts as a notable change.
pub const NOTABLE_TOTAL_DELTA: f64 = 20.0;

/// Alternative priced below this fraction of the original reads "more affordable".
pub const AFFORDABLE_RATIO: f64 = 0.88;

/// Alternative priced above this fraction of the original reads "more premium".
pub const PREMIUM_RATIO: f64 = 1.12;

/// Maximum number of alternatives surfaced for one item.
pub const MAX_ALTERNATIVES: usize = 4;

/// Categories with fewer items than this borrow catalog-wide tier thresholds.
pub const MIN_CATEGORY_SAMPLE: usize = 3;

/// Budget assumed when free text carries no `$amount`.
pub const DEFAULT_BUDGET: f64 = 500.0;

/// Numerical epsilon for price comparisons.
pub const EPSILON: f64 = 1e-9;
