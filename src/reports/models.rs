//! Report data models (computed, never stored)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::planner::ReviewKind;

/// Notification shown when no topic is due today
pub const NO_REVIEWS_MESSAGE: &str =
    "No specific revisions scheduled for today. Focus on new topics!";

/// A topic that is due on the focus date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusItem {
    pub subject_id: String,
    pub topic_id: String,
    pub topic_name: String,
    pub kind: ReviewKind,
}

/// Everything due on one date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyFocus {
    pub date: NaiveDate,
    pub items: Vec<FocusItem>,
}

impl DailyFocus {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// One-line summary for the learner
    pub fn notification(&self) -> String {
        if self.items.is_empty() {
            return NO_REVIEWS_MESSAGE.to_string();
        }

        let listed: Vec<String> = self
            .items
            .iter()
            .map(|item| format!("{} ({})", item.topic_name, item.kind.label()))
            .collect();
        format!("Today's focus: {}", listed.join(", "))
    }
}

/// Figures for the trailing seven-day window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    /// Distinct dates in the window with a check-in (0..=7)
    pub days_tracked: usize,
    /// Check-ins tagged studied or strong-study
    pub studied_count: usize,
    /// Check-ins tagged skipped or unfocused
    pub skipped_count: usize,
    /// Distinct topic names with a review date in the window
    pub topics_touched: usize,
    pub mistakes_logged: usize,
}

/// One day of the mood trend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodSeriesPoint {
    pub date: NaiveDate,
    /// Short weekday label ("Mon")
    pub label: String,
    /// One-hot over studied, skipped, unfocused, strong-study
    pub values: [u8; 4],
}

impl MoodSeriesPoint {
    pub fn has_entry(&self) -> bool {
        self.values.iter().any(|v| *v > 0)
    }
}
