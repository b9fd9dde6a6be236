//! Playtime categories
//!
//! The single classifier used by both the histogram and the library filter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{ADDICT_THRESHOLD_MINUTES, REGULAR_THRESHOLD_MINUTES, UNPLAYED_THRESHOLD_MINUTES};
use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryBucket {
    /// Under 1 hour
    Unplayed,
    /// 1 to 10 hours
    Casual,
    /// 10 to 100 hours
    Regular,
    /// 100 hours and up
    Addict,
}

impl CategoryBucket {
    /// All buckets in ascending playtime order
    pub const ALL: [CategoryBucket; 4] = [
        CategoryBucket::Unplayed,
        CategoryBucket::Casual,
        CategoryBucket::Regular,
        CategoryBucket::Addict,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            CategoryBucket::Unplayed => "unplayed",
            CategoryBucket::Casual => "casual",
            CategoryBucket::Regular => "regular",
            CategoryBucket::Addict => "addict",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CategoryBucket::Unplayed => "Unplayed",
            CategoryBucket::Casual => "Casual",
            CategoryBucket::Regular => "Regular",
            CategoryBucket::Addict => "Addict",
        }
    }

    /// Chart label including the hour range
    pub fn label(&self) -> &'static str {
        match self {
            CategoryBucket::Unplayed => "Unplayed (< 1h)",
            CategoryBucket::Casual => "Casual (1-10h)",
            CategoryBucket::Regular => "Regular (10-100h)",
            CategoryBucket::Addict => "Addict (100h+)",
        }
    }

    pub fn contains(&self, minutes: u64) -> bool {
        classify_playtime(minutes) == *self
    }
}

impl fmt::Display for CategoryBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for CategoryBucket {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        CategoryBucket::ALL
            .into_iter()
            .find(|c| c.id() == wanted)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

/// Classify a playtime in minutes. Ranges are closed on the low end, so
/// exactly 60 minutes is `Casual` and exactly 6000 minutes is `Addict`.
pub fn classify_playtime(minutes: u64) -> CategoryBucket {
    if minutes < UNPLAYED_THRESHOLD_MINUTES {
        CategoryBucket::Unplayed
    } else if minutes < REGULAR_THRESHOLD_MINUTES {
        CategoryBucket::Casual
    } else if minutes < ADDICT_THRESHOLD_MINUTES {
        CategoryBucket::Regular
    } else {
        CategoryBucket::Addict
    }
}
