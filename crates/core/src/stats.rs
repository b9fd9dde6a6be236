//! Library statistics
//!
//! Computes the summary view-model for a library snapshot: totals, the
//! shame percentage, top games and the category histogram.

use serde::{Deserialize, Serialize};

use crate::category::{classify_playtime, CategoryBucket};
use crate::constants::{TOP_GAMES_COUNT, UNPLAYED_THRESHOLD_MINUTES};
use crate::filter::sort_by_playtime;
use crate::GameRecord;

/// A labelled bar in the top games chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartEntry {
    pub label: String,
    /// Whole hours
    pub value: u64,
}

/// A slice of the category donut
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub id: CategoryBucket,
    pub label: String,
    pub count: usize,
}

/// Derived, immutable summary of one library snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryStats {
    pub total_games: usize,
    pub total_minutes: u64,
    /// Unrounded, used for ratios
    pub total_hours: f64,
    /// `total_hours` rounded for display
    pub rounded_total_hours: u64,
    pub unplayed_count: usize,
    pub played_count: usize,
    /// Share of unplayed games, one decimal
    pub shame_percentage: f64,
    /// Hours per played game, one decimal
    pub average_playtime_hours: f64,
    pub top_games: Vec<ChartEntry>,
    /// Only non-empty buckets, in ascending playtime order
    pub category_histogram: Vec<CategoryCount>,
    pub sorted_games: Vec<GameRecord>,
    /// Games under the unplayed threshold, in library order
    pub unplayed_games: Vec<GameRecord>,
}

/// Compute stats for a library. Returns `None` for an empty library, which
/// callers treat as "no data yet".
pub fn compute_library_stats(games: &[GameRecord]) -> Option<LibraryStats> {
    if games.is_empty() {
        return None;
    }

    let total_games = games.len();
    let total_minutes = games
        .iter()
        .fold(0u64, |acc, g| acc.saturating_add(g.playtime_forever));
    let total_hours = total_minutes as f64 / 60.0;

    let unplayed_games: Vec<GameRecord> = games
        .iter()
        .filter(|g| g.playtime_forever < UNPLAYED_THRESHOLD_MINUTES)
        .cloned()
        .collect();
    let unplayed_count = unplayed_games.len();
    let played_count = total_games - unplayed_count;

    let shame_percentage = round_one_decimal(unplayed_count as f64 / total_games as f64 * 100.0);
    let average_playtime_hours = round_one_decimal(total_hours / played_count.max(1) as f64);

    let sorted_games = sort_by_playtime(games);
    let top_games = sorted_games
        .iter()
        .take(TOP_GAMES_COUNT)
        .map(|g| ChartEntry {
            label: g.name.clone(),
            value: round_minutes_to_hours(g.playtime_forever),
        })
        .collect();

    Some(LibraryStats {
        total_games,
        total_minutes,
        total_hours,
        rounded_total_hours: round_minutes_to_hours(total_minutes),
        unplayed_count,
        played_count,
        shame_percentage,
        average_playtime_hours,
        top_games,
        category_histogram: category_histogram(games),
        sorted_games,
        unplayed_games,
    })
}

/// Count games per category, dropping empty buckets
pub fn category_histogram(games: &[GameRecord]) -> Vec<CategoryCount> {
    let mut counts = [0usize; 4];
    for game in games {
        let bucket = classify_playtime(game.playtime_forever);
        counts[bucket as usize] += 1;
    }

    CategoryBucket::ALL
        .into_iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(id, count)| CategoryCount {
            id,
            label: id.label().to_string(),
            count,
        })
        .collect()
}

fn round_minutes_to_hours(minutes: u64) -> u64 {
    minutes / 60 + u64::from(minutes % 60 >= 30)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
