//! Data models for subjects, topics and the weekly plan

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Where a topic is in the study cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicStatus {
    /// Not studied yet
    NotStudied,
    /// Studied at least once; reviews may be scheduled
    Learned,
    /// Flagged by the learner for another pass
    NeedsReview,
}

impl Default for TopicStatus {
    fn default() -> Self {
        Self::NotStudied
    }
}

impl TopicStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotStudied => "not studied",
            Self::Learned => "learned",
            Self::NeedsReview => "needs review",
        }
    }
}

/// Manual status override, independent of the review plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusUpdate {
    Completed,
    NeedsReview,
}

impl From<StatusUpdate> for TopicStatus {
    fn from(update: StatusUpdate) -> Self {
        match update {
            StatusUpdate::Completed => TopicStatus::Learned,
            StatusUpdate::NeedsReview => TopicStatus::NeedsReview,
        }
    }
}

/// An atomic unit of study material
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: String,
    pub name: String,
    /// Free-text notes, opaque to the scheduler and reports
    #[serde(default)]
    pub notes: String,
    /// Short "must remember" points
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub status: TopicStatus,
    /// Review dates, oldest first. Either empty or exactly five entries.
    #[serde(default)]
    pub revision_dates: Vec<NaiveDate>,
}

impl Topic {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            notes: String::new(),
            key_points: Vec::new(),
            status: TopicStatus::default(),
            revision_dates: Vec::new(),
        }
    }

    pub fn has_review_plan(&self) -> bool {
        !self.revision_dates.is_empty()
    }
}

/// A named grouping of topics corresponding to a course area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: String,
    pub name: String,
    /// Display order only
    #[serde(default)]
    pub topics: Vec<Topic>,
}

impl Subject {
    pub fn new(id: impl Into<String>, name: impl Into<String>, topics: Vec<Topic>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            topics,
        }
    }

    pub fn topic(&self, topic_id: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == topic_id)
    }
}

/// One row of the static weekday plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyScheduleEntry {
    pub day: Weekday,
    pub subject_id: String,
    pub suggested_topic_name: String,
}

/// The weekly plan resolved against the current catalog for one date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub date: NaiveDate,
    pub day: Weekday,
    pub subject_id: String,
    pub subject_name: String,
    pub suggested_topic_name: String,
    /// Catalog topic matching the suggestion, or the subject's first topic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<String>,
}
