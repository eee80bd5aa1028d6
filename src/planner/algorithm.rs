//! Fixed-curve spaced repetition
//!
//! Marking a topic as learned schedules five reviews on an expanding curve:
//! the study day itself, then 2, 4, 8 and 15 days after the previous review.
//!
//! | Review | Offset from study day |
//! |--------|-----------------------|
//! | R1     | 0 (new study)         |
//! | R2     | 2                     |
//! | R3     | 6                     |
//! | R4     | 14                    |
//! | R5     | 29                    |

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::models::{Topic, TopicStatus};
use crate::calendar::add_days;

/// Number of reviews in a plan
pub const REVIEW_COUNT: usize = 5;

/// Day offsets of each review relative to the study date
pub const REVIEW_OFFSETS: [i64; REVIEW_COUNT] = [0, 2, 6, 14, 29];

/// How a topic shows up on a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "number", rename_all = "snake_case")]
pub enum ReviewKind {
    /// First day of the plan
    NewStudy,
    /// A later review, numbered from 1 (so always 2..=5)
    Revision(u8),
}

impl ReviewKind {
    /// 1-based position in the plan
    pub fn number(&self) -> u8 {
        match self {
            Self::NewStudy => 1,
            Self::Revision(n) => *n,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::NewStudy => "New Study (R1)".to_string(),
            Self::Revision(n) => format!("Revision (R{})", n),
        }
    }
}

/// Compute the review dates for a topic studied on `reference_date`.
///
/// The result depends only on the date: prior plans and the topic's current
/// status are ignored.
pub fn schedule_reviews(_topic: &Topic, reference_date: NaiveDate) -> [NaiveDate; REVIEW_COUNT] {
    REVIEW_OFFSETS.map(|offset| add_days(reference_date, offset))
}

/// Mark a topic as learned on `reference_date`, replacing any earlier plan
pub fn apply_schedule(topic: &Topic, reference_date: NaiveDate) -> Topic {
    Topic {
        status: TopicStatus::Learned,
        revision_dates: schedule_reviews(topic, reference_date).to_vec(),
        ..topic.clone()
    }
}

/// Classify `date` against the topic's plan
pub fn review_position(topic: &Topic, date: NaiveDate) -> Option<ReviewKind> {
    let index = topic.revision_dates.iter().position(|d| *d == date)?;
    if index == 0 {
        Some(ReviewKind::NewStudy)
    } else {
        u8::try_from(index + 1).ok().map(ReviewKind::Revision)
    }
}

/// Earliest scheduled review on or after `from`
pub fn next_review(topic: &Topic, from: NaiveDate) -> Option<NaiveDate> {
    topic.revision_dates.iter().copied().find(|d| *d >= from)
}

/// Reviews of the plan still ahead of `from` (inclusive)
pub fn remaining_reviews(topic: &Topic, from: NaiveDate) -> usize {
    topic.revision_dates.iter().filter(|d| **d >= from).count()
}
