//! Mood check-in data models

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// Self-reported study quality for a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodTag {
    Studied,
    Skipped,
    Unfocused,
    StrongStudy,
}

impl MoodTag {
    /// All tags, in the column order of the mood series
    pub const ALL: [MoodTag; 4] = [
        MoodTag::Studied,
        MoodTag::Skipped,
        MoodTag::Unfocused,
        MoodTag::StrongStudy,
    ];

    /// Counts toward "days studied effectively"
    pub fn is_productive(&self) -> bool {
        matches!(self, Self::Studied | Self::StrongStudy)
    }

    /// Counts toward "days skipped or unfocused"
    pub fn is_unproductive(&self) -> bool {
        !self.is_productive()
    }

    /// Column of this tag in a mood-series vector
    pub fn index(&self) -> usize {
        match self {
            Self::Studied => 0,
            Self::Skipped => 1,
            Self::Unfocused => 2,
            Self::StrongStudy => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Studied => "studied",
            Self::Skipped => "skipped",
            Self::Unfocused => "unfocused",
            Self::StrongStudy => "strong_study",
        }
    }
}

impl fmt::Display for MoodTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoodTag {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "studied" => Ok(Self::Studied),
            "skipped" => Ok(Self::Skipped),
            // "bad_focus" is the name older snapshots used
            "unfocused" | "bad_focus" => Ok(Self::Unfocused),
            "strong_study" | "strong" => Ok(Self::StrongStudy),
            other => Err(TrackerError::InvalidInput(format!("Unknown mood: {}", other))),
        }
    }
}

/// A mood check-in; the date is the unique key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub date: NaiveDate,
    #[serde(deserialize_with = "deserialize_mood")]
    pub mood: MoodTag,
}

impl MoodEntry {
    pub fn new(date: NaiveDate, mood: MoodTag) -> Self {
        Self { date, mood }
    }
}

fn deserialize_mood<'de, D>(deserializer: D) -> Result<MoodTag, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}
