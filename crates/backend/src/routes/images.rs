//! Steam CDN image proxy route handlers
//!
//! Missing images answer with a transparent 1x1 GIF so `<img>` tags never break.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use steam_analyzer_core::format::{banner_candidates, game_icon_url};
use crate::AppState;

const TRANSPARENT_GIF: &[u8] = &[
    0x47, 0x49, 0x46, 0x38, 0x39, 0x61, 0x01, 0x00, 0x01, 0x00, 0x80, 0x00, 0x00, 0xFF, 0xFF, 0xFF,
    0x00, 0x00, 0x00, 0x21, 0xF9, 0x04, 0x01, 0x00, 0x00, 0x00, 0x00, 0x2C, 0x00, 0x00, 0x00, 0x00,
    0x01, 0x00, 0x01, 0x00, 0x00, 0x02, 0x02, 0x44, 0x01, 0x00, 0x3B,
];

/// Library hero, then store header, then the placeholder
pub async fn get_banner(State(state): State<Arc<AppState>>, Path(appid): Path<u64>) -> Response {
    for url in banner_candidates(appid) {
        if let Some(bytes) = state.steam.fetch_image(&url).await {
            return image_response("image/jpeg", bytes);
        }
    }
    placeholder()
}

pub async fn get_icon(
    State(state): State<Arc<AppState>>,
    Path((appid, hash)): Path<(u64, String)>,
) -> Response {
    let Some(url) = game_icon_url(appid, &hash) else {
        return placeholder();
    };
    match state.steam.fetch_image(&url).await {
        Some(bytes) => image_response("image/jpeg", bytes),
        None => placeholder(),
    }
}

fn image_response(content_type: &'static str, body: Bytes) -> Response {
    (
        [(header::CONTENT_TYPE, content_type), (header::CACHE_CONTROL, "public, max-age=86400")],
        body,
    )
        .into_response()
}

fn placeholder() -> Response {
    image_response("image/gif", Bytes::from_static(TRANSPARENT_GIF))
}
