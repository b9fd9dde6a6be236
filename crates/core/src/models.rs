//! Data models mirroring the Steam Web API payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One owned title from `IPlayerService/GetOwnedGames`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub appid: u64,
    #[serde(default)]
    pub name: String,
    /// Total lifetime playtime in minutes
    #[serde(default)]
    pub playtime_forever: u64,
    /// Unix timestamp, `0` or absent when Steam never recorded a session
    #[serde(default)]
    pub rtime_last_played: Option<u64>,
    #[serde(default)]
    pub img_icon_url: Option<String>,
}

impl GameRecord {
    pub fn new(appid: u64, name: impl Into<String>, playtime_forever: u64) -> Self {
        Self {
            appid,
            name: name.into(),
            playtime_forever,
            rtime_last_played: None,
            img_icon_url: None,
        }
    }

    /// Last session time; a stored `0` means the same as no value
    pub fn last_played(&self) -> Option<DateTime<Utc>> {
        match self.rtime_last_played {
            Some(ts) if ts > 0 => DateTime::from_timestamp(ts as i64, 0),
            _ => None,
        }
    }
}

/// Player summary from `ISteamUser/GetPlayerSummaries`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub steamid: String,
    pub personaname: String,
    #[serde(default)]
    pub avatarfull: Option<String>,
    #[serde(default)]
    pub profileurl: Option<String>,
    #[serde(default)]
    pub loccountrycode: Option<String>,
    #[serde(default)]
    pub timecreated: Option<u64>,
}

/// An achievement entry from `ISteamUserStats/GetPlayerAchievements`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementUnlock {
    pub apiname: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub achieved: u8,
    /// Unix timestamp, `0` when unknown
    #[serde(default)]
    pub unlocktime: u64,
}

impl AchievementUnlock {
    pub fn is_unlocked(&self) -> bool {
        self.achieved == 1
    }

    pub fn unlocked_at(&self) -> Option<DateTime<Utc>> {
        if self.unlocktime == 0 {
            return None;
        }
        DateTime::from_timestamp(self.unlocktime as i64, 0)
    }

    /// Display name, falling back to the API name when Steam sent none
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(&self.apiname)
    }
}

/// Turn the raw `games` array into a clean library.
///
/// Entries that don't parse or carry appid 0 are skipped, blank names get a
/// placeholder and duplicate appids keep their first occurrence.
pub fn normalize_games(entries: &[serde_json::Value]) -> Vec<GameRecord> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .filter_map(|g| serde_json::from_value::<GameRecord>(g.clone()).ok())
        .filter(|g| g.appid != 0)
        .filter(|g| seen.insert(g.appid))
        .map(|mut g| {
            if g.name.trim().is_empty() {
                g.name = format!("App {}", g.appid);
            }
            if g.img_icon_url.as_deref() == Some("") {
                g.img_icon_url = None;
            }
            g
        })
        .collect()
}
