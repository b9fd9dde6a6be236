//! REST API routes

pub mod achievements;
pub mod images;
pub mod insights;
pub mod library;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

// Re-export all route handlers
pub use achievements::*;
pub use images::*;
pub use insights::*;
pub use library::*;

/// Build the API router; CORS and tracing layers are added by the caller
pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Library snapshots
        .route("/api/demo", post(load_demo))
        .route("/api/users/{steam_id}", get(get_library))
        .route("/api/users/{steam_id}/refresh", post(refresh_library))
        .route("/api/users/{steam_id}/games", get(get_games))
        .route("/api/users/{steam_id}/games/{appid}/achievements", get(get_achievements))
        // AI insights
        .route("/api/users/{steam_id}/insights/{kind}", post(generate_insight))
        .route("/api/ai/generate", post(generate))
        // Steam CDN images
        .route("/api/images/banner/{appid}", get(get_banner))
        .route("/api/images/icon/{appid}/{hash}", get(get_icon))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::Body;
    use axum::extract::connect_info::MockConnectInfo;
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use std::net::SocketAddr;
    use steam_analyzer_core::constants::AI_FALLBACK_TEXT;
    use steam_analyzer_core::demo::DEMO_STEAM_ID;
    use tower::ServiceExt;

    fn app_with(config: &Config) -> (Arc<AppState>, Router) {
        let state = Arc::new(AppState::new(config).unwrap());
        let router = api_router(Arc::clone(&state)).layer(MockConnectInfo(SocketAddr::from(([127, 0, 0, 1], 40000))));
        (state, router)
    }

    fn app() -> Router {
        app_with(&Config::default()).1
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("Content-Type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_demo_library() {
        let app = app();
        let (status, body) = send(&app, "POST", "/api/demo", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["is_demo"], true);
        assert_eq!(body["stats"]["total_games"], 9);
        assert_eq!(body["stats"]["unplayed_count"], 2);
        assert_eq!(body["stats"]["top_games"][0]["label"], "Dota 2");

        let (status, body) = send(&app, "GET", &format!("/api/users/{}", DEMO_STEAM_ID), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profile"]["personaname"], "DemoGamer_99");
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let app = app();
        let (status, body) = send(&app, "GET", "/api/users/123/games", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_filtered_games() {
        let app = app();
        send(&app, "POST", "/api/demo", None).await;

        let uri = format!("/api/users/{}/games?search=unplayed&category=unplayed", DEMO_STEAM_ID);
        let (status, body) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(|a| a.len()), Some(2));

        let uri = format!("/api/users/{}/games?category=addict", DEMO_STEAM_ID);
        let (_, body) = send(&app, "GET", &uri, None).await;
        let names: Vec<&str> = body.as_array().unwrap().iter().filter_map(|g| g["name"].as_str()).collect();
        assert_eq!(names, vec!["Dota 2", "Counter-Strike: Global Offensive", "Rust", "The Witcher 3: Wild Hunt"]);

        let uri = format!("/api/users/{}/games?category=hardcore", DEMO_STEAM_ID);
        let (status, _) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_demo_achievements_calendar() {
        let app = app();
        send(&app, "POST", "/api/demo", None).await;

        let uri = format!("/api/users/{}/games/570/achievements", DEMO_STEAM_ID);
        let (status, body) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["achievements"].as_array().map(|a| a.len()), Some(30));
        assert_eq!(body["calendar"].as_array().map(|a| a.len()), Some(365));
        assert_eq!(body["unlocks_in_window"], 30);

        // Memoized: the second call returns the same unlock times
        let (_, again) = send(&app, "GET", &uri, None).await;
        assert_eq!(body["achievements"], again["achievements"]);

        let uri = format!("/api/users/{}/games/999999/achievements", DEMO_STEAM_ID);
        let (status, _) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_insight_without_ai_key_uses_fallback() {
        let app = app();
        send(&app, "POST", "/api/demo", None).await;

        for kind in ["profile", "recommendation", "valuation"] {
            let uri = format!("/api/users/{}/insights/{}", DEMO_STEAM_ID, kind);
            let (status, body) = send(&app, "POST", &uri, None).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["kind"], kind);
            assert_eq!(body["text"], AI_FALLBACK_TEXT);
            assert_eq!(body["generated"], false);
        }

        let uri = format!("/api/users/{}/insights/horoscope", DEMO_STEAM_ID);
        let (status, _) = send(&app, "POST", &uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_generate_passthrough() {
        let app = app();
        let (status, body) = send(&app, "POST", "/api/ai/generate", Some(serde_json::json!({"prompt": "hi"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["text"], AI_FALLBACK_TEXT);
        assert!(body.get("kind").is_none());

        let (status, _) = send(&app, "POST", "/api/ai/generate", Some(serde_json::json!({"prompt": "  "}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_refresh_without_steam_key() {
        let app = app();
        let (status, body) = send(&app, "POST", "/api/users/76561198000000001/refresh", None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body["error"].as_str().unwrap().contains("API Key"));
    }

    #[tokio::test]
    async fn test_ai_quota_per_client() {
        let config = Config { ai_requests_per_ip_per_minute: 1, ..Config::default() };
        let (_, app) = app_with(&config);
        let prompt = Some(serde_json::json!({"prompt": "hi"}));

        let (status, _) = send(&app, "POST", "/api/ai/generate", prompt.clone()).await;
        assert_eq!(status, StatusCode::OK);
        let (status, body) = send(&app, "POST", "/api/ai/generate", prompt).await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body["error"], "Too many requests. Please try again later.");
    }

    #[tokio::test]
    async fn test_demo_reload_drops_achievement_memo() {
        let (state, app) = app_with(&Config::default());
        let first = state.load_demo().await;

        let uri = format!("/api/users/{}/games/570/achievements", DEMO_STEAM_ID);
        send(&app, "GET", &uri, None).await;
        assert!(state.achievements.contains(DEMO_STEAM_ID, first.generation, 570).await);

        send(&app, "POST", "/api/demo", None).await;
        let second = state.libraries.get(DEMO_STEAM_ID).await.unwrap();
        assert_ne!(first.generation, second.generation);
        assert!(!state.achievements.contains(DEMO_STEAM_ID, first.generation, 570).await);
        assert!(!state.achievements.contains(DEMO_STEAM_ID, second.generation, 570).await);
    }

    #[tokio::test]
    async fn test_icon_with_bad_hash_is_placeholder() {
        let request = Request::builder()
            .uri("/api/images/icon/570/not.a.hash")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/gif");
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.starts_with(b"GIF89a"));
    }
}
