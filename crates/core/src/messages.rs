//! JSON payloads exchanged between the server and front-ends

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::activity::ActivityDay;
use crate::insights::InsightKind;
use crate::models::*;
use crate::stats::LibraryStats;

/// Profile plus derived stats for one library snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryView {
    pub profile: PlayerProfile,
    /// `None` when the library is empty
    pub stats: Option<LibraryStats>,
    pub is_demo: bool,
    pub fetched_at: DateTime<Utc>,
}

/// Query for the filtered games list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GamesQuery {
    #[serde(default)]
    pub search: Option<String>,
    /// Category id, e.g. `casual`
    #[serde(default)]
    pub category: Option<String>,
}

/// Unlocked achievements for one game and their activity calendar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementsView {
    pub appid: u64,
    pub achievements: Vec<AchievementUnlock>,
    pub calendar: Vec<ActivityDay>,
    /// Unlocks that fall inside the calendar window
    pub unlocks_in_window: u32,
}

/// Free-form prompt for the generation passthrough
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

/// Generated text, or the fallback text when generation failed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<InsightKind>,
    pub text: String,
    /// False when `text` is the fallback
    pub generated: bool,
}
