//! AI insight route handlers

use axum::{
    extract::{ConnectInfo, Path, State},
    http::StatusCode,
    Json,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use steam_analyzer_core::{GenerateRequest, InsightKind, InsightResponse};
use super::library::current_snapshot;
use crate::error::{api_error, ApiError};
use crate::AppState;

/// Build the prompt for `kind` from the library stats and ask the AI.
///
/// Generation failures still answer 200 with the fallback text.
pub async fn generate_insight(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Path((steam_id, kind)): Path<(String, String)>,
) -> Result<Json<InsightResponse>, ApiError> {
    let kind: InsightKind = kind
        .parse()
        .map_err(|e: steam_analyzer_core::Error| api_error(StatusCode::BAD_REQUEST, e.to_string()))?;
    check_client_quota(&state, addr)?;
    let snapshot = current_snapshot(&state, &steam_id).await?;

    let stats = snapshot
        .stats
        .as_ref()
        .ok_or_else(|| api_error(StatusCode::UNPROCESSABLE_ENTITY, "Library is empty, nothing to analyze."))?;
    let prompt = kind
        .build_prompt(stats, &mut rand::thread_rng())
        .map_err(|e| api_error(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;

    tracing::info!(steam_id = %steam_id, kind = kind.id(), "Generating insight");

    let (text, generated) = state.gemini.generate_or_fallback(&prompt).await;
    Ok(Json(InsightResponse {
        kind: Some(kind),
        text,
        generated,
    }))
}

/// Raw prompt passthrough
pub async fn generate(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(body): Json<GenerateRequest>,
) -> Result<Json<InsightResponse>, ApiError> {
    if body.prompt.trim().is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, "Prompt must not be empty"));
    }
    check_client_quota(&state, addr)?;

    let (text, generated) = state.gemini.generate_or_fallback(&body.prompt).await;
    Ok(Json(InsightResponse {
        kind: None,
        text,
        generated,
    }))
}

fn check_client_quota(state: &AppState, addr: SocketAddr) -> Result<(), ApiError> {
    if state.ai_clients.try_acquire(addr.ip(), Instant::now()) {
        return Ok(());
    }
    tracing::warn!(client = %addr.ip(), "Per-client AI quota exceeded");
    Err(api_error(
        StatusCode::TOO_MANY_REQUESTS,
        "Too many requests. Please try again later.",
    ))
}
