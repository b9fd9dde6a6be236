//! Steam Analyzer Backend Server
//!
//! Provides:
//! - REST API serving library stats, filtered games and achievement calendars
//! - Steam Web API fetching, optionally through a CORS proxy
//! - AI insights built from library stats

mod config;
mod error;
mod gemini;
mod library;
mod routes;
mod steam_api;
mod throttle;

use std::net::SocketAddr;
use std::sync::Arc;

use steam_analyzer_core::demo::{demo_games, demo_profile, DEMO_STEAM_ID};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use gemini::GeminiClient;
use library::{AchievementCache, LibrarySnapshot, LibraryStore};
use steam_api::SteamClient;
use throttle::ClientLimiter;

pub struct AppState {
    pub steam: SteamClient,
    pub gemini: GeminiClient,
    pub libraries: LibraryStore,
    pub achievements: AchievementCache,
    /// Per-IP quota on the AI routes
    pub ai_clients: ClientLimiter,
}

impl AppState {
    pub fn new(config: &Config) -> reqwest::Result<Self> {
        Ok(Self {
            steam: SteamClient::new(config)?,
            gemini: GeminiClient::new(config)?,
            libraries: LibraryStore::default(),
            achievements: AchievementCache::default(),
            ai_clients: ClientLimiter::new(config.ai_requests_per_ip_per_minute),
        })
    }

    /// Replace the demo library with fresh sample data
    pub async fn load_demo(&self) -> Arc<LibrarySnapshot> {
        let snapshot = self
            .libraries
            .replace(DEMO_STEAM_ID, LibrarySnapshot::new(demo_profile(), demo_games(), true))
            .await;
        self.achievements.retain_generation(DEMO_STEAM_ID, snapshot.generation).await;
        tracing::debug!(generation = snapshot.generation, "Demo library loaded");
        snapshot
    }
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "steam_analyzer_backend=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    if !config.has_steam_credentials() {
        tracing::warn!("STEAM_API_KEY not set - only the demo library is available");
    }
    if config.gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY not set - insights will return fallback text");
    }
    if config.use_proxy {
        tracing::info!(proxy = %config.proxy_url, "Steam requests go through proxy");
    }

    let state = match AppState::new(&config) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            tracing::error!(error = %e, "Failed to build HTTP clients");
            std::process::exit(1);
        }
    };
    state.load_demo().await;

    let app = routes::api_router(Arc::clone(&state))
        .layer(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any))
        .layer(TraceLayer::new_for_http());

    tracing::info!("Starting server on {}", config.bind_address);

    let listener = match tokio::net::TcpListener::bind(&config.bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(address = %config.bind_address, error = %e, "Failed to bind");
            std::process::exit(1);
        }
    };
    if let Err(e) = axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await {
        tracing::error!(error = %e, "Server error");
    }
}
