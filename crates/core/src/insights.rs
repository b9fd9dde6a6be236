//! AI insight kinds and response handling

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::constants::{DEFAULT_RECOMMENDATION_SAMPLE, DEFAULT_VALUATION_TOP_N, NO_INSIGHTS_TEXT};
use crate::prompts::{build_profile_prompt, build_recommendation_prompt, build_valuation_prompt};
use crate::stats::LibraryStats;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    /// Gamer archetype and profile
    Profile,
    /// One pick from the backlog
    Recommendation,
    /// Library value estimate
    Valuation,
}

impl InsightKind {
    pub fn id(&self) -> &'static str {
        match self {
            InsightKind::Profile => "profile",
            InsightKind::Recommendation => "recommendation",
            InsightKind::Valuation => "valuation",
        }
    }

    /// Build the prompt for this insight using the default sample sizes
    pub fn build_prompt<R: Rng + ?Sized>(&self, stats: &LibraryStats, rng: &mut R) -> Result<String> {
        match self {
            InsightKind::Profile => Ok(build_profile_prompt(stats)),
            InsightKind::Recommendation => {
                build_recommendation_prompt(stats, DEFAULT_RECOMMENDATION_SAMPLE, rng)
            }
            InsightKind::Valuation => Ok(build_valuation_prompt(stats, DEFAULT_VALUATION_TOP_N)),
        }
    }
}

impl FromStr for InsightKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "profile" => Ok(InsightKind::Profile),
            "recommendation" => Ok(InsightKind::Recommendation),
            "valuation" => Ok(InsightKind::Valuation),
            _ => Err(Error::UnknownInsightKind(s.to_string())),
        }
    }
}

/// Pull the generated text out of a `generateContent` response.
///
/// Returns `None` when the payload has no candidate text at all.
pub fn extract_generated_text(response: &serde_json::Value) -> Option<String> {
    response["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .filter(|text| !text.trim().is_empty())
        .map(str::to_string)
}

/// Generated text, or the fixed "no insights" message
pub fn generated_text_or_default(response: &serde_json::Value) -> String {
    extract_generated_text(response).unwrap_or_else(|| NO_INSIGHTS_TEXT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compute_library_stats, GameRecord};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    #[test]
    fn test_parse_kind() {
        assert_eq!("Profile".parse::<InsightKind>(), Ok(InsightKind::Profile));
        assert_eq!("valuation".parse::<InsightKind>(), Ok(InsightKind::Valuation));
        assert!("horoscope".parse::<InsightKind>().is_err());
    }

    #[test]
    fn test_extract_text() {
        let response = json!({
            "candidates": [{"content": {"parts": [{"text": "**The Cozy Collector**"}]}}]
        });
        assert_eq!(extract_generated_text(&response).as_deref(), Some("**The Cozy Collector**"));
        assert_eq!(generated_text_or_default(&json!({"candidates": []})), NO_INSIGHTS_TEXT);
        assert_eq!(generated_text_or_default(&json!({"error": "quota"})), NO_INSIGHTS_TEXT);
    }

    #[test]
    fn test_build_prompt_per_kind() {
        let stats = compute_library_stats(&[GameRecord::new(1, "Portal 2", 900)]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        assert!(InsightKind::Profile.build_prompt(&stats, &mut rng).unwrap().contains("Portal 2 (15h)"));
        assert!(InsightKind::Valuation.build_prompt(&stats, &mut rng).unwrap().contains("Portal 2"));
        assert_eq!(
            InsightKind::Recommendation.build_prompt(&stats, &mut rng),
            Err(Error::EmptyBacklog)
        );
    }
}
