//! Achievement route handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::convert::Infallible;
use std::sync::Arc;
use steam_analyzer_core::demo::demo_achievements;
use steam_analyzer_core::{build_activity_calendar, total_unlocks, AchievementsView};
use super::library::current_snapshot;
use crate::error::{api_error, ApiError};
use crate::AppState;

/// Unlocked achievements for one game plus the trailing-year calendar.
///
/// Each game is fetched once per snapshot; later calls hit the memo.
pub async fn get_achievements(
    State(state): State<Arc<AppState>>,
    Path((steam_id, appid)): Path<(String, u64)>,
) -> Result<Json<AchievementsView>, ApiError> {
    let steam_id = steam_id.trim().to_string();
    let snapshot = current_snapshot(&state, &steam_id).await?;

    if !snapshot.games.iter().any(|g| g.appid == appid) {
        return Err(api_error(StatusCode::NOT_FOUND, format!("Game {} is not in this library", appid)));
    }

    let generation = snapshot.generation;
    if !state.achievements.contains(&steam_id, generation, appid).await {
        tracing::debug!(steam_id = %steam_id, appid = %appid, demo = snapshot.is_demo, "Resolving achievements");
    }

    let unlocked = if snapshot.is_demo {
        state
            .achievements
            .get_or_fetch(&steam_id, generation, appid, || async {
                Ok::<_, Infallible>(demo_achievements(Utc::now(), &mut StdRng::from_entropy()))
            })
            .await
    } else {
        state
            .achievements
            .get_or_fetch(&steam_id, generation, appid, || {
                state.steam.fetch_player_achievements(&steam_id, appid)
            })
            .await
    };

    let calendar = build_activity_calendar(&unlocked, Utc::now().date_naive());
    Ok(Json(AchievementsView {
        appid,
        unlocks_in_window: total_unlocks(&calendar),
        achievements: (*unlocked).clone(),
        calendar,
    }))
}
