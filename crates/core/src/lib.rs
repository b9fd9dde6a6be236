//! Steam Analyzer core
//!
//! Pure library engine shared by the server and any front-end:
//! - Models mirroring the Steam Web API payloads
//! - Playtime categories, library statistics and the search/category filter
//! - Achievement activity calendar
//! - Prompt builders for AI insights
//!
//! Nothing in this crate performs I/O.

pub mod activity;
pub mod category;
pub mod constants;
pub mod demo;
pub mod error;
pub mod filter;
pub mod format;
pub mod insights;
pub mod messages;
pub mod models;
pub mod prompts;
pub mod stats;

pub use activity::{build_activity_calendar, total_unlocks, ActivityDay};
pub use category::{classify_playtime, CategoryBucket};
pub use error::{Error, Result};
pub use filter::{filter_games, sort_by_playtime, FilterState};
pub use insights::{extract_generated_text, generated_text_or_default, InsightKind};
pub use messages::*;
pub use models::*;
pub use prompts::{build_profile_prompt, build_recommendation_prompt, build_valuation_prompt, sample_unplayed};
pub use stats::{compute_library_stats, CategoryCount, ChartEntry, LibraryStats};
