//! Prompt builders for AI insights
//!
//! Each builder turns library stats into a single prompt string for the
//! text-generation service. Only the recommendation prompt uses randomness,
//! and its random source is supplied by the caller.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::stats::LibraryStats;
use crate::{Error, GameRecord, Result};

/// Ask for a gamer archetype and a short profile
pub fn build_profile_prompt(stats: &LibraryStats) -> String {
    let top_games = stats
        .top_games
        .iter()
        .map(|g| format!("{} ({}h)", g.label, g.value))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Analyze this Steam gamer based on their stats: Top Games: {}. \
         Pile of Shame: {} unplayed games ({:.1}%). Total Hours: {}. \
         Task: Create a funny, witty \"Gamer Archetype\" title for them \
         (e.g. \"The Cozy Collector\", \"The Achievement Hunter\") and a 2-3 sentence \
         psychological profile of their gaming habits. \
         Format the output with the title in bold (surrounded by double asterisks).",
        top_games, stats.unplayed_count, stats.shame_percentage, stats.rounded_total_hours
    )
}

/// Draw up to `sample_size` distinct games from the unplayed set
pub fn sample_unplayed<'a, R: Rng + ?Sized>(
    stats: &'a LibraryStats,
    sample_size: usize,
    rng: &mut R,
) -> Vec<&'a GameRecord> {
    let mut pool: Vec<&GameRecord> = stats.unplayed_games.iter().collect();
    pool.shuffle(rng);
    pool.truncate(sample_size);
    pool
}

/// Ask for exactly one backlog pick from a random sample of unplayed games.
///
/// Fails with [`Error::EmptyBacklog`] when there is nothing to recommend.
pub fn build_recommendation_prompt<R: Rng + ?Sized>(
    stats: &LibraryStats,
    sample_size: usize,
    rng: &mut R,
) -> Result<String> {
    if stats.unplayed_games.is_empty() {
        return Err(Error::EmptyBacklog);
    }

    let favourites = stats
        .top_games
        .iter()
        .map(|g| g.label.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let sample = sample_unplayed(stats, sample_size.max(1), rng)
        .into_iter()
        .map(|g| g.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!(
        "This Steam user loves playing: {}. However, they own these games but have \
         barely or never played them (under 1 hour): {}. \
         Task: Recommend exactly ONE game from the unplayed list that they should start next. \
         Explain why they would like it based on their favorite games. \
         Keep it short and encouraging. Use bullet points if listing reasons.",
        favourites, sample
    ))
}

/// Ask for a store value estimate, an average review score and a summary
pub fn build_valuation_prompt(stats: &LibraryStats, top_n: usize) -> String {
    let games = stats
        .sorted_games
        .iter()
        .take(top_n)
        .map(|g| g.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "I have a list of Steam games: {}. Task: Act as a \"SteamDB Simulator\". \
         1. Estimate the approximate total store value of these specific games in USD \
         (current full price, not sale price). \
         2. Give an estimated average \"Metacritic\" or \"Steam Review\" score for this \
         collection (e.g. 85/100). \
         3. Provide a brief 1-sentence financial summary. \
         Format the output with bold headings (double asterisks) for each section.",
        games
    )
}
