//! Mistake log data models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, TrackerError};
use crate::planner::catalog::GENERAL_TOPIC;

/// Something the learner got wrong and wants to revisit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mistake {
    pub id: Uuid,
    /// Name of the related topic, or "General"
    pub topic_name: String,
    pub detail: String,
    pub date_added: NaiveDate,
}

impl Mistake {
    /// Build a mistake entry, trimming the detail and defaulting the topic.
    ///
    /// An empty (or whitespace-only) detail is rejected.
    pub fn new(topic_name: Option<&str>, detail: &str, date_added: NaiveDate) -> Result<Self> {
        let detail = detail.trim();
        if detail.is_empty() {
            return Err(TrackerError::InvalidInput(
                "Mistake detail must not be empty".to_string(),
            ));
        }

        let topic_name = topic_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(GENERAL_TOPIC);

        Ok(Self {
            id: Uuid::new_v4(),
            topic_name: topic_name.to_string(),
            detail: detail.to_string(),
            date_added,
        })
    }
}
