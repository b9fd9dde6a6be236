//! Text-generation client for AI insights

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use steam_analyzer_core::constants::AI_FALLBACK_TEXT;
use steam_analyzer_core::generated_text_or_default;

use crate::config::Config;
use crate::error::AiError;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Rolling per-minute and per-day request quotas, kept in memory
pub struct UsageLimiter {
    per_minute: usize,
    per_day: usize,
    calls: Mutex<VecDeque<DateTime<Utc>>>,
}

impl UsageLimiter {
    pub fn new(per_minute: usize, per_day: usize) -> Self {
        Self {
            per_minute,
            per_day,
            calls: Mutex::new(VecDeque::new()),
        }
    }

    /// Check both quotas at `now`, dropping calls older than a day
    pub fn check(&self, now: DateTime<Utc>) -> Result<(), AiError> {
        let mut calls = self.calls.lock().unwrap_or_else(|e| e.into_inner());
        let day_ago = now - TimeDelta::days(1);
        while calls.front().is_some_and(|t| *t <= day_ago) {
            calls.pop_front();
        }

        let minute_ago = now - TimeDelta::minutes(1);
        let last_minute = calls.iter().filter(|t| **t > minute_ago).count();
        if last_minute >= self.per_minute {
            return Err(AiError::RateLimited(format!(
                "Rate limit exceeded ({} requests/minute). Please try again in a moment.",
                self.per_minute
            )));
        }
        if calls.len() >= self.per_day {
            return Err(AiError::RateLimited(format!(
                "Daily rate limit exceeded ({} requests/day). Resets rolling 24h.",
                self.per_day
            )));
        }
        Ok(())
    }

    /// Count a successful call
    pub fn record(&self, at: DateTime<Utc>) {
        let mut calls = self.calls.lock().unwrap_or_else(|e| e.into_inner());
        calls.push_back(at);
    }
}

pub struct GeminiClient {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    limiter: UsageLimiter,
}

impl GeminiClient {
    pub fn new(config: &Config) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
            limiter: UsageLimiter::new(config.ai_requests_per_minute, config.ai_requests_per_day),
        })
    }

    pub async fn generate(&self, prompt: &str) -> Result<String, AiError> {
        let api_key = self.api_key.as_deref().ok_or(AiError::MissingApiKey)?;
        self.limiter.check(Utc::now())?;

        let url = format!("{}/{}:generateContent?key={}", API_BASE, self.model, api_key);
        let body = serde_json::json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }]
        });

        let response = self.client.post(&url).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(AiError::Status(response.status()));
        }
        self.limiter.record(Utc::now());

        // A successful answer without candidate text is not a failure
        let data: serde_json::Value = response.json().await?;
        Ok(generated_text_or_default(&data))
    }

    /// Generated text, or the fixed fallback text on any failure
    pub async fn generate_or_fallback(&self, prompt: &str) -> (String, bool) {
        match self.generate(prompt).await {
            Ok(text) => (text, true),
            Err(e) => {
                tracing::warn!(error = %e, "AI generation failed, using fallback text");
                (AI_FALLBACK_TEXT.to_string(), false)
            }
        }
    }
}
