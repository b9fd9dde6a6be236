//! Library snapshot route handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use steam_analyzer_core::demo::DEMO_STEAM_ID;
use steam_analyzer_core::{CategoryBucket, FilterState, GameRecord, GamesQuery, LibraryView};
use crate::error::{api_error, ApiError};
use crate::library::LibrarySnapshot;
use crate::AppState;

/// Latest snapshot for a Steam ID, or 404 if none was loaded yet
pub async fn current_snapshot(state: &AppState, steam_id: &str) -> Result<Arc<LibrarySnapshot>, ApiError> {
    state.libraries.get(steam_id.trim()).await.ok_or_else(|| {
        api_error(
            StatusCode::NOT_FOUND,
            "No library loaded for this Steam ID. Refresh it first.",
        )
    })
}

/// Reset the demo library to the built-in sample data
pub async fn load_demo(State(state): State<Arc<AppState>>) -> Json<LibraryView> {
    Json(state.load_demo().await.view())
}

pub async fn refresh_library(
    State(state): State<Arc<AppState>>,
    Path(steam_id): Path<String>,
) -> Result<Json<LibraryView>, ApiError> {
    let steam_id = steam_id.trim().to_string();
    if steam_id == DEMO_STEAM_ID {
        return Ok(Json(state.load_demo().await.view()));
    }

    let profile = state.steam.fetch_player_summary(&steam_id).await.map_err(|e| {
        tracing::warn!(steam_id = %steam_id, error = %e, "Failed to fetch player summary");
        e
    })?;
    let games = state.steam.fetch_owned_games(&steam_id).await.map_err(|e| {
        tracing::warn!(steam_id = %steam_id, error = %e, "Failed to fetch owned games");
        e
    })?;

    tracing::info!(steam_id = %steam_id, games = games.len(), "Library refreshed");

    let snapshot = state
        .libraries
        .replace(&steam_id, LibrarySnapshot::new(profile, games, false))
        .await;
    state.achievements.retain_generation(&steam_id, snapshot.generation).await;
    Ok(Json(snapshot.view()))
}

pub async fn get_library(
    State(state): State<Arc<AppState>>,
    Path(steam_id): Path<String>,
) -> Result<Json<LibraryView>, ApiError> {
    let snapshot = current_snapshot(&state, &steam_id).await?;
    Ok(Json(snapshot.view()))
}

/// Games in playtime order, narrowed by `search` and `category`
pub async fn get_games(
    State(state): State<Arc<AppState>>,
    Path(steam_id): Path<String>,
    Query(query): Query<GamesQuery>,
) -> Result<Json<Vec<GameRecord>>, ApiError> {
    let snapshot = current_snapshot(&state, &steam_id).await?;

    let category = query
        .category
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .map(str::parse::<CategoryBucket>)
        .transpose()
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, e.to_string()))?;

    let filter = FilterState::new(query.search.unwrap_or_default(), category);
    Ok(Json(filter.apply(&snapshot.games)))
}
