//! Error types for the core engine

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A recommendation needs at least one unplayed game to pick from
    #[error("No unplayed games to recommend from")]
    EmptyBacklog,

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown insight kind: {0}")]
    UnknownInsightKind(String),
}

pub type Result<T> = std::result::Result<T, Error>;
