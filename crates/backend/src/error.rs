//! Error types for the external collaborators

use axum::http::StatusCode;
use axum::Json;
use thiserror::Error;

/// Failures talking to the Steam Web API
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Please provide both an API Key and Steam ID.")]
    MissingCredentials,

    #[error("HTTP Error: {0}")]
    Status(reqwest::StatusCode),

    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("User not found or profile is private.")]
    PlayerNotFound,

    #[error("Could not fetch games. Is the profile public?")]
    GamesUnavailable,

    #[error("No achievements found or private")]
    AchievementsUnavailable,
}

impl FetchError {
    /// Status the API answers with when this error ends a request
    pub fn status_code(&self) -> StatusCode {
        match self {
            FetchError::MissingCredentials => StatusCode::SERVICE_UNAVAILABLE,
            FetchError::PlayerNotFound | FetchError::GamesUnavailable | FetchError::AchievementsUnavailable => {
                StatusCode::NOT_FOUND
            }
            FetchError::Status(_) | FetchError::Http(_) | FetchError::Json(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Failures talking to the text-generation service
#[derive(Error, Debug)]
pub enum AiError {
    #[error("Server configuration error: Missing Google API Key")]
    MissingApiKey,

    #[error("{0}")]
    RateLimited(String),

    #[error("Failed to reach AI provider: {0}")]
    Http(#[from] reqwest::Error),

    #[error("AI Provider Error: {0}")]
    Status(reqwest::StatusCode),
}

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<serde_json::Value>);

pub fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(serde_json::json!({ "error": message.into() })))
}

impl From<FetchError> for ApiError {
    fn from(e: FetchError) -> Self {
        api_error(e.status_code(), format!("Failed to fetch data: {}", e))
    }
}
