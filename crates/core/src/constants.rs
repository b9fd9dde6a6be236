//! Thresholds and fixed texts shared across the engine

/// Games below this many minutes count as unplayed, both for the
/// played/unplayed split and for the `Unplayed` category.
pub const UNPLAYED_THRESHOLD_MINUTES: u64 = 60;

/// Lower bound of the `Regular` category (10 hours)
pub const REGULAR_THRESHOLD_MINUTES: u64 = 600;

/// Lower bound of the `Addict` category (100 hours)
pub const ADDICT_THRESHOLD_MINUTES: u64 = 6000;

/// Number of entries in the top games ranking
pub const TOP_GAMES_COUNT: usize = 5;

/// Length of the achievement activity calendar, today inclusive
pub const ACTIVITY_WINDOW_DAYS: usize = 365;

/// Unplayed titles offered to the recommendation prompt
pub const DEFAULT_RECOMMENDATION_SAMPLE: usize = 20;

/// Titles listed in the valuation prompt
pub const DEFAULT_VALUATION_TOP_N: usize = 30;

/// Shown when the AI answered but produced no text
pub const NO_INSIGHTS_TEXT: &str = "No insights generated.";

/// Shown when the AI call failed for any reason
pub const AI_FALLBACK_TEXT: &str = "Failed to contact the AI Oracle. Please try again.";
