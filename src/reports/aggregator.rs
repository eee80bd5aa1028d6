//! Read-only scans over the study history
//!
//! Nothing here mutates its inputs; every function is a pure computation over
//! a snapshot and a reference date supplied by the caller.

use std::collections::HashSet;

use chrono::NaiveDate;

use super::models::{DailyFocus, FocusItem, MoodSeriesPoint, ReportSummary};
use crate::calendar::DateWindow;
use crate::mistakes::Mistake;
use crate::mood::{MoodEntry, MoodTag};
use crate::planner::algorithm::review_position;
use crate::planner::Subject;

/// Length of the reporting window in days, including the reference date
pub const REPORT_WINDOW_DAYS: u32 = 7;

/// Topics with a review scheduled exactly on `today`, in catalog order
pub fn daily_focus(subjects: &[Subject], today: NaiveDate) -> DailyFocus {
    let items = subjects
        .iter()
        .flat_map(|subject| {
            subject.topics.iter().filter_map(move |topic| {
                review_position(topic, today).map(|kind| FocusItem {
                    subject_id: subject.id.clone(),
                    topic_id: topic.id.clone(),
                    topic_name: topic.name.clone(),
                    kind,
                })
            })
        })
        .collect();

    DailyFocus { date: today, items }
}

/// Summarize the seven days ending at `today`.
///
/// The five figures are computed independently over the same window.
pub fn weekly_report(
    mood_entries: &[MoodEntry],
    subjects: &[Subject],
    mistakes: &[Mistake],
    today: NaiveDate,
) -> ReportSummary {
    let window = DateWindow::trailing(today, REPORT_WINDOW_DAYS);

    let in_window: Vec<&MoodEntry> = mood_entries
        .iter()
        .filter(|entry| window.contains(entry.date))
        .collect();

    let days_tracked = in_window
        .iter()
        .map(|entry| entry.date)
        .collect::<HashSet<_>>()
        .len();
    let studied_count = in_window.iter().filter(|e| e.mood.is_productive()).count();
    let skipped_count = in_window.iter().filter(|e| e.mood.is_unproductive()).count();

    let topics_touched = subjects
        .iter()
        .flat_map(|subject| &subject.topics)
        .filter(|topic| topic.revision_dates.iter().any(|d| window.contains(*d)))
        .map(|topic| topic.name.as_str())
        .collect::<HashSet<_>>()
        .len();

    let mistakes_logged = mistakes
        .iter()
        .filter(|m| window.contains(m.date_added))
        .count();

    ReportSummary {
        window_start: window.start,
        window_end: window.end,
        days_tracked,
        studied_count,
        skipped_count,
        topics_touched,
        mistakes_logged,
    }
}

/// Per-day one-hot mood vectors for the seven days ending at `today`,
/// oldest first. Days without a check-in are all zero.
pub fn weekly_mood_series(mood_entries: &[MoodEntry], today: NaiveDate) -> Vec<MoodSeriesPoint> {
    DateWindow::trailing(today, REPORT_WINDOW_DAYS)
        .days()
        .map(|date| {
            let mut values = [0u8; 4];
            if let Some(entry) = mood_entries.iter().find(|e| e.date == date) {
                values[entry.mood.index()] = 1;
            }
            MoodSeriesPoint {
                date,
                label: date.format("%a").to_string(),
                values,
            }
        })
        .collect()
}

/// Count of each tag over a series, in `MoodTag::ALL` order
pub fn series_totals(series: &[MoodSeriesPoint]) -> [(MoodTag, usize); 4] {
    MoodTag::ALL.map(|tag| {
        let total = series
            .iter()
            .map(|p| usize::from(p.values[tag.index()]))
            .sum();
        (tag, total)
    })
}
