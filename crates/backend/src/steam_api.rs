//! Steam Web API client
//!
//! Fetches player summaries, owned games and achievements, optionally
//! through a CORS proxy. Requests are paced and retried when Steam rate
//! limits us.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use serde_json::Value;
use steam_analyzer_core::{normalize_games, AchievementUnlock, GameRecord, PlayerProfile};

use crate::config::Config;
use crate::error::FetchError;
use crate::throttle::RequestPacer;

const API_PLAYER_SUMMARIES: &str = "https://api.steampowered.com/ISteamUser/GetPlayerSummaries/v2/";
const API_OWNED_GAMES: &str = "https://api.steampowered.com/IPlayerService/GetOwnedGames/v1/";
const API_ACHIEVEMENTS: &str = "https://api.steampowered.com/ISteamUserStats/GetPlayerAchievements/v1/";

const MAX_RETRIES: u32 = 3;
const INITIAL_BACKOFF: Duration = Duration::from_secs(1);

#[derive(Clone)]
pub struct SteamClient {
    client: reqwest::Client,
    api_key: Option<String>,
    /// Proxy prefix, set only when proxying is enabled
    proxy_url: Option<String>,
    pacer: Arc<RequestPacer>,
}

impl SteamClient {
    pub fn new(config: &Config) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .user_agent("SteamAnalyzer/1.0")
            .build()?;

        Ok(Self {
            client,
            api_key: config.steam_api_key.clone(),
            proxy_url: config.use_proxy.then(|| config.proxy_url.clone()),
            pacer: Arc::new(RequestPacer::new(Duration::from_millis(config.steam_min_interval_ms))),
        })
    }

    pub async fn fetch_player_summary(&self, steam_id: &str) -> Result<PlayerProfile, FetchError> {
        let key = self.credentials(steam_id)?;
        let url = self.upstream_url(API_PLAYER_SUMMARIES, &[("key", key), ("steamids", steam_id.trim())])?;
        let body = self.get_json(&url).await?;
        parse_player_summary(&body)
    }

    pub async fn fetch_owned_games(&self, steam_id: &str) -> Result<Vec<GameRecord>, FetchError> {
        let key = self.credentials(steam_id)?;
        let url = self.upstream_url(
            API_OWNED_GAMES,
            &[
                ("key", key),
                ("steamid", steam_id.trim()),
                ("include_appinfo", "true"),
                ("include_played_free_games", "true"),
            ],
        )?;
        let body = self.get_json(&url).await?;
        parse_owned_games(&body)
    }

    /// Unlocked achievements only
    pub async fn fetch_player_achievements(
        &self,
        steam_id: &str,
        appid: u64,
    ) -> Result<Vec<AchievementUnlock>, FetchError> {
        let key = self.credentials(steam_id)?;
        let appid = appid.to_string();
        let url = self.upstream_url(
            API_ACHIEVEMENTS,
            &[("appid", appid.as_str()), ("key", key), ("steamid", steam_id.trim()), ("l", "english")],
        )?;
        let body = match self.get_json(&url).await {
            Ok(body) => body,
            // Steam answers games without stats with a 4xx
            Err(FetchError::Status(status)) if status.is_client_error() => {
                return Err(FetchError::AchievementsUnavailable)
            }
            Err(e) => return Err(e),
        };
        parse_unlocked_achievements(&body)
    }

    fn credentials(&self, steam_id: &str) -> Result<&str, FetchError> {
        match self.api_key.as_deref() {
            Some(key) if !steam_id.trim().is_empty() => Ok(key),
            _ => Err(FetchError::MissingCredentials),
        }
    }

    /// Image bytes from the Steam CDN, `None` on any failure
    pub async fn fetch_image(&self, url: &str) -> Option<Bytes> {
        let response = self.client.get(url).send().await.ok()?;
        if !response.status().is_success() {
            tracing::debug!(url = %url, status = %response.status(), "Image not available");
            return None;
        }
        response.bytes().await.ok()
    }

    /// Full upstream URL with query parameters percent-encoded
    fn upstream_url(&self, base: &str, params: &[(&str, &str)]) -> Result<String, FetchError> {
        let request = self.client.get(base).query(params).build()?;
        Ok(request.url().to_string())
    }

    fn request_url(&self, url: &str) -> String {
        match &self.proxy_url {
            Some(proxy) => format!("{}{}", proxy, urlencoding::encode(url)),
            None => url.to_string(),
        }
    }

    /// GET a JSON body, backing off and retrying on HTTP 429
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let full_url = self.request_url(url);
        let mut retries = 0;
        let mut backoff = INITIAL_BACKOFF;

        loop {
            self.pacer.wait().await;
            let response = self.client.get(&full_url).send().await?;
            let status = response.status();

            if status == reqwest::StatusCode::TOO_MANY_REQUESTS && retries < MAX_RETRIES {
                tracing::warn!(?backoff, retries, "Rate limited by Steam (429), retrying");
                tokio::time::sleep(backoff).await;
                retries += 1;
                backoff *= 2;
                continue;
            }

            if !status.is_success() {
                return Err(FetchError::Status(status));
            }

            let body: Value = response.json().await?;
            return if self.proxy_url.is_some() {
                unwrap_proxy_body(body)
            } else {
                Ok(body)
            };
        }
    }
}

/// The proxy wraps the upstream body as a string in `contents`
pub fn unwrap_proxy_body(body: Value) -> Result<Value, FetchError> {
    let contents = body["contents"].as_str().ok_or_else(|| {
        FetchError::Json(serde::de::Error::custom("proxy response has no contents"))
    })?;
    Ok(serde_json::from_str(contents)?)
}

pub fn parse_player_summary(body: &Value) -> Result<PlayerProfile, FetchError> {
    let player = body["response"]["players"]
        .as_array()
        .and_then(|players| players.first())
        .ok_or(FetchError::PlayerNotFound)?;
    Ok(serde_json::from_value(player.clone())?)
}

pub fn parse_owned_games(body: &Value) -> Result<Vec<GameRecord>, FetchError> {
    let games = body["response"]["games"]
        .as_array()
        .ok_or(FetchError::GamesUnavailable)?;
    Ok(normalize_games(games))
}

pub fn parse_unlocked_achievements(body: &Value) -> Result<Vec<AchievementUnlock>, FetchError> {
    let stats = &body["playerstats"];
    if stats["success"].as_bool() == Some(false) {
        return Err(FetchError::AchievementsUnavailable);
    }

    Ok(stats["achievements"]
        .as_array()
        .map(|arr| {
            arr.iter()
                .filter_map(|a| serde_json::from_value::<AchievementUnlock>(a.clone()).ok())
                .filter(|a| a.is_unlocked())
                .collect()
        })
        .unwrap_or_default())
}
