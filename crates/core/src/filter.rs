//! Library search and category filter

use serde::{Deserialize, Serialize};

use crate::category::CategoryBucket;
use crate::GameRecord;

/// Copy of the library ordered by playtime, most played first.
/// The sort is stable so equal playtimes keep their input order.
pub fn sort_by_playtime(games: &[GameRecord]) -> Vec<GameRecord> {
    let mut sorted = games.to_vec();
    sorted.sort_by(|a, b| b.playtime_forever.cmp(&a.playtime_forever));
    sorted
}

/// Filter the library by search term and category.
///
/// The result is always in playtime order. A blank term and `None` category
/// disable their filter; when both are set a game must satisfy both. A term
/// starting with `#` matches appid prefixes instead of names.
pub fn filter_games(
    games: &[GameRecord],
    search_term: &str,
    category: Option<CategoryBucket>,
) -> Vec<GameRecord> {
    let term = search_term.trim();

    // Check if filtering by appid (starts with #)
    let appid_filter: Option<String> = term
        .strip_prefix('#')
        .map(|rest| rest.trim().to_string())
        .filter(|rest| !rest.is_empty());
    let term_lower = term.to_lowercase();

    sort_by_playtime(games)
        .into_iter()
        .filter(|g| {
            if let Some(prefix) = &appid_filter {
                g.appid.to_string().starts_with(prefix.as_str())
            } else {
                term_lower.is_empty() || g.name.to_lowercase().contains(&term_lower)
            }
        })
        .filter(|g| category.map_or(true, |c| c.contains(g.playtime_forever)))
        .collect()
}

/// User-controlled filter state for the library list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub selected_category: Option<CategoryBucket>,
}

impl FilterState {
    pub fn new(search_term: impl Into<String>, selected_category: Option<CategoryBucket>) -> Self {
        Self {
            search_term: search_term.into(),
            selected_category,
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Select a category, or clear it if it is already selected
    pub fn toggle_category(&mut self, category: CategoryBucket) {
        if self.selected_category == Some(category) {
            self.selected_category = None;
        } else {
            self.selected_category = Some(category);
        }
    }

    pub fn clear(&mut self) {
        self.search_term.clear();
        self.selected_category = None;
    }

    pub fn is_active(&self) -> bool {
        !self.search_term.trim().is_empty() || self.selected_category.is_some()
    }

    pub fn apply(&self, games: &[GameRecord]) -> Vec<GameRecord> {
        filter_games(games, &self.search_term, self.selected_category)
    }
}
