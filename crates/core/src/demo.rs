//! Sample library shown before a real profile is loaded

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::{AchievementUnlock, GameRecord, PlayerProfile};

pub const DEMO_STEAM_ID: &str = "76561198000000000";

const DEMO_ACHIEVEMENT_COUNT: usize = 30;
// Stays inside the activity calendar window
const SPREAD_SECONDS: u64 = 364 * 24 * 60 * 60;

pub fn demo_profile() -> PlayerProfile {
    PlayerProfile {
        steamid: DEMO_STEAM_ID.to_string(),
        personaname: "DemoGamer_99".to_string(),
        avatarfull: Some(
            "https://avatars.akamai.steamstatic.com/fef49e7fa7e1997310d705b2a6158ff8dc1cdfeb_full.jpg"
                .to_string(),
        ),
        profileurl: Some("https://steamcommunity.com/".to_string()),
        loccountrycode: None,
        timecreated: Some(1_262_304_000),
    }
}

pub fn demo_games() -> Vec<GameRecord> {
    [
        (730, "Counter-Strike: Global Offensive", 85000, 1_700_000_000, "69f7ebe2735c366c65c0b33dae00e12dc40edbe4"),
        (570, "Dota 2", 120000, 1_698_000_000, "0bf11a9e2e7760d3fe72db086629305601a337fb"),
        (440, "Team Fortress 2", 4500, 1_650_000_000, "e3f595a92552da3d664ad00277fad2107345f743"),
        (271590, "Grand Theft Auto V", 100, 1_680_000_000, "1e7c62a87556c52d8b802a433f48a1c6a8585e51"),
        (252490, "Rust", 12000, 1_701_000_000, "82216e53c44862211624f1c7136015f5c8899880"),
        (292030, "The Witcher 3: Wild Hunt", 8000, 1_640_000_000, "96940d9d690a7862215c26914561845c083693e5"),
        (105600, "Terraria", 200, 1_690_000_000, "858961e95fdb869f7a6295822081597a9b0c58e5"),
        (1, "Unplayed Game A", 0, 0, ""),
        (2, "Unplayed Game B", 0, 0, ""),
    ]
    .into_iter()
    .map(|(appid, name, playtime, last_played, icon)| GameRecord {
        appid,
        name: name.to_string(),
        playtime_forever: playtime,
        rtime_last_played: Some(last_played),
        img_icon_url: Some(icon.to_string()).filter(|s| !s.is_empty()),
    })
    .collect()
}

/// Thirty unlocked achievements spread over the year before `now`
pub fn demo_achievements<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> Vec<AchievementUnlock> {
    let now_ts = now.timestamp().max(0) as u64;
    (0..DEMO_ACHIEVEMENT_COUNT)
        .map(|i| AchievementUnlock {
            apiname: format!("ACHIEVEMENT_{}", i),
            name: Some(format!("Achievement {}", i + 1)),
            description: Some("You did something amazing in the game.".to_string()),
            achieved: 1,
            unlocktime: now_ts.saturating_sub(rng.gen_range(0..SPREAD_SECONDS)),
        })
        .collect()
}
