//! The study snapshot and its copy-on-write operations
//!
//! A `StudySnapshot` is a plain value. Every mutating operation borrows the
//! current snapshot and returns a new one; on error the current snapshot is
//! untouched, so the owner can swap in the result only on success.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, TrackerError};
use crate::mistakes::Mistake;
use crate::mood::{MoodEntry, MoodTag};
use crate::planner::algorithm::{apply_schedule, REVIEW_COUNT};
use crate::planner::catalog::{plan_for, seed_subjects, weekly_schedule};
use crate::planner::{DayPlan, StatusUpdate, Subject, Topic, TopicStatus};
use crate::reports::{self, DailyFocus, MoodSeriesPoint, ReportSummary};

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

fn default_version() -> u32 {
    SNAPSHOT_VERSION
}

/// Everything the tracker knows, at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySnapshot {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub subjects: Vec<Subject>,
    /// Sorted by date, at most one per date
    #[serde(default)]
    pub mood_entries: Vec<MoodEntry>,
    #[serde(default)]
    pub mistakes: Vec<Mistake>,
}

impl Default for StudySnapshot {
    fn default() -> Self {
        Self::seeded()
    }
}

impl StudySnapshot {
    /// A fresh snapshot holding the seed catalog and no history
    pub fn seeded() -> Self {
        Self::with_subjects(seed_subjects())
    }

    pub fn with_subjects(subjects: Vec<Subject>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            subjects,
            mood_entries: Vec::new(),
            mistakes: Vec::new(),
        }
    }

    /// Check a snapshot read from outside the store.
    ///
    /// Every review plan must be empty or hold exactly five strictly
    /// increasing dates. Mood entries that share a date collapse to the last
    /// one, the same way `record_mood` overwrites, and end up sorted.
    pub fn validate(mut self) -> Result<Self> {
        for subject in &self.subjects {
            for topic in &subject.topics {
                let dates = &topic.revision_dates;
                if !dates.is_empty() && dates.len() != REVIEW_COUNT {
                    return Err(TrackerError::InvalidInput(format!(
                        "Topic '{}' in subject '{}' has {} review dates, expected 0 or {}",
                        topic.id,
                        subject.id,
                        dates.len(),
                        REVIEW_COUNT
                    )));
                }
                if !dates.windows(2).all(|w| w[0] < w[1]) {
                    return Err(TrackerError::InvalidInput(format!(
                        "Topic '{}' in subject '{}' has review dates out of order",
                        topic.id, subject.id
                    )));
                }
            }
        }

        let total = self.mood_entries.len();
        let mut entries: Vec<MoodEntry> = Vec::with_capacity(total);
        for entry in self.mood_entries.drain(..) {
            entries.retain(|e| e.date != entry.date);
            entries.push(entry);
        }
        entries.sort_by(|a, b| a.date.cmp(&b.date));
        if entries.len() < total {
            log::warn!(
                "Collapsed {} duplicate mood entries, keeping the last one per date",
                total - entries.len()
            );
        }
        self.mood_entries = entries;

        Ok(self)
    }

    // ===== Lookups =====

    pub fn find_subject(&self, subject_id: &str) -> Result<&Subject> {
        self.subjects
            .iter()
            .find(|s| s.id == subject_id)
            .ok_or_else(|| TrackerError::SubjectNotFound(subject_id.to_string()))
    }

    pub fn find_topic(&self, subject_id: &str, topic_id: &str) -> Result<&Topic> {
        self.find_subject(subject_id)?
            .topic(topic_id)
            .ok_or_else(|| TrackerError::TopicNotFound(topic_id.to_string()))
    }

    /// Find a topic by id or name across all subjects.
    ///
    /// Tries an exact id match, then an exact case-insensitive name match,
    /// then a unique case-insensitive name prefix.
    pub fn find_topic_by_name(&self, query: &str) -> Result<(&Subject, &Topic)> {
        let query_lower = query.trim().to_lowercase();
        let pairs: Vec<(&Subject, &Topic)> = self
            .subjects
            .iter()
            .flat_map(|s| s.topics.iter().map(move |t| (s, t)))
            .collect();

        if let Some(pair) = pairs.iter().find(|(_, t)| t.id == query.trim()) {
            return Ok(*pair);
        }
        if let Some(pair) = pairs.iter().find(|(_, t)| t.name.to_lowercase() == query_lower) {
            return Ok(*pair);
        }

        let matches: Vec<&(&Subject, &Topic)> = pairs
            .iter()
            .filter(|(_, t)| t.name.to_lowercase().starts_with(&query_lower))
            .collect();

        match matches.len() {
            0 => Err(TrackerError::TopicNotFound(query.to_string())),
            1 => Ok(*matches[0]),
            _ => Err(TrackerError::InvalidInput(format!(
                "Ambiguous topic name '{}'. Matches: {}",
                query,
                matches
                    .iter()
                    .map(|(_, t)| t.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }

    pub fn topics(&self) -> impl Iterator<Item = &Topic> {
        self.subjects.iter().flat_map(|s| s.topics.iter())
    }

    pub fn mood_on(&self, date: NaiveDate) -> Option<&MoodEntry> {
        self.mood_entries.iter().find(|e| e.date == date)
    }

    pub fn find_mistake(&self, id: Uuid) -> Result<&Mistake> {
        self.mistakes
            .iter()
            .find(|m| m.id == id)
            .ok_or(TrackerError::MistakeNotFound(id))
    }

    // ===== Mutations (copy-on-write) =====

    /// Clone the snapshot with one topic replaced
    fn update_topic<F>(&self, subject_id: &str, topic_id: &str, update: F) -> Result<Self>
    where
        F: FnOnce(&Topic) -> Topic,
    {
        let subject_index = self
            .subjects
            .iter()
            .position(|s| s.id == subject_id)
            .ok_or_else(|| TrackerError::SubjectNotFound(subject_id.to_string()))?;
        let topic_index = self.subjects[subject_index]
            .topics
            .iter()
            .position(|t| t.id == topic_id)
            .ok_or_else(|| TrackerError::TopicNotFound(topic_id.to_string()))?;

        let mut next = self.clone();
        let topic = &mut next.subjects[subject_index].topics[topic_index];
        *topic = update(topic);
        Ok(next)
    }

    /// Mark a topic learned on `date` and replace its review plan
    pub fn mark_learned(&self, subject_id: &str, topic_id: &str, date: NaiveDate) -> Result<Self> {
        let next = self.update_topic(subject_id, topic_id, |topic| apply_schedule(topic, date))?;
        log::debug!("Scheduled reviews for topic {} from {}", topic_id, date);
        Ok(next)
    }

    /// Override a topic's status without touching its review plan
    pub fn set_status(&self, subject_id: &str, topic_id: &str, update: StatusUpdate) -> Result<Self> {
        let status = TopicStatus::from(update);
        let next = self.update_topic(subject_id, topic_id, |topic| Topic {
            status,
            ..topic.clone()
        })?;
        log::debug!("Set status of topic {} to {:?}", topic_id, status);
        Ok(next)
    }

    /// Record the mood for `date`, replacing any earlier check-in that day
    pub fn record_mood(&self, date: NaiveDate, mood: MoodTag) -> Self {
        let mut next = self.clone();
        next.mood_entries.retain(|e| e.date != date);
        next.mood_entries.push(MoodEntry::new(date, mood));
        next.mood_entries.sort_by(|a, b| a.date.cmp(&b.date));
        log::debug!("Recorded mood {} for {}", mood, date);
        next
    }

    /// Append a mistake; returns the new snapshot and the created entry
    pub fn log_mistake(
        &self,
        topic_name: Option<&str>,
        detail: &str,
        date: NaiveDate,
    ) -> Result<(Self, Mistake)> {
        let mistake = Mistake::new(topic_name, detail, date)?;
        let mut next = self.clone();
        next.mistakes.push(mistake.clone());
        log::debug!("Logged mistake {} for topic {}", mistake.id, mistake.topic_name);
        Ok((next, mistake))
    }

    /// Delete (resolve) a mistake permanently
    pub fn delete_mistake(&self, id: Uuid) -> Result<Self> {
        self.find_mistake(id)?;
        let mut next = self.clone();
        next.mistakes.retain(|m| m.id != id);
        log::debug!("Deleted mistake {}", id);
        Ok(next)
    }

    // ===== Reports =====

    pub fn daily_focus(&self, today: NaiveDate) -> DailyFocus {
        reports::daily_focus(&self.subjects, today)
    }

    pub fn weekly_report(&self, today: NaiveDate) -> ReportSummary {
        reports::weekly_report(&self.mood_entries, &self.subjects, &self.mistakes, today)
    }

    pub fn weekly_mood_series(&self, today: NaiveDate) -> Vec<MoodSeriesPoint> {
        reports::weekly_mood_series(&self.mood_entries, today)
    }

    /// The weekday plan for `date`, resolved against this snapshot's catalog
    pub fn todays_plan(&self, date: NaiveDate) -> Option<DayPlan> {
        plan_for(&self.subjects, &weekly_schedule(), date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::parse_date;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_mark_learned_schedules_five_reviews() {
        let snapshot = StudySnapshot::seeded();
        let next = snapshot.mark_learned("mjc3_macro", "gdp", date("2025-03-01")).unwrap();

        let topic = next.find_topic("mjc3_macro", "gdp").unwrap();
        assert_eq!(topic.status, TopicStatus::Learned);
        assert_eq!(
            topic.revision_dates,
            vec![
                date("2025-03-01"),
                date("2025-03-03"),
                date("2025-03-07"),
                date("2025-03-15"),
                date("2025-03-30"),
            ]
        );

        // The original snapshot is not modified
        let original = snapshot.find_topic("mjc3_macro", "gdp").unwrap();
        assert_eq!(original.status, TopicStatus::NotStudied);
        assert!(original.revision_dates.is_empty());
    }

    #[test]
    fn test_mark_learned_twice_overwrites() {
        let snapshot = StudySnapshot::seeded()
            .mark_learned("mjc3_macro", "gdp", date("2025-03-01"))
            .unwrap();
        let again = snapshot.mark_learned("mjc3_macro", "gdp", date("2025-03-01")).unwrap();
        assert_eq!(snapshot, again);

        let later = snapshot.mark_learned("mjc3_macro", "gdp", date("2025-03-10")).unwrap();
        let topic = later.find_topic("mjc3_macro", "gdp").unwrap();
        assert_eq!(topic.revision_dates.len(), 5);
        assert_eq!(topic.revision_dates[0], date("2025-03-10"));
    }

    #[test]
    fn test_mark_learned_not_found() {
        let snapshot = StudySnapshot::seeded();

        let err = snapshot.mark_learned("nope", "gdp", date("2025-03-01")).unwrap_err();
        assert_eq!(err, TrackerError::SubjectNotFound("nope".to_string()));
        assert!(err.is_not_found());

        let err = snapshot.mark_learned("mjc3_macro", "nope", date("2025-03-01")).unwrap_err();
        assert_eq!(err, TrackerError::TopicNotFound("nope".to_string()));

        // Topic exists, but under another subject
        let err = snapshot.mark_learned("mic3_history", "gdp", date("2025-03-01")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_set_status_keeps_review_plan() {
        let learned = StudySnapshot::seeded()
            .mark_learned("mjc3_macro", "gdp", date("2025-03-01"))
            .unwrap();
        let flagged = learned.set_status("mjc3_macro", "gdp", StatusUpdate::NeedsReview).unwrap();

        let before = learned.find_topic("mjc3_macro", "gdp").unwrap();
        let after = flagged.find_topic("mjc3_macro", "gdp").unwrap();
        assert_eq!(after.status, TopicStatus::NeedsReview);
        assert_eq!(after.revision_dates, before.revision_dates);
    }

    #[test]
    fn test_set_status_completed_maps_to_learned() {
        let snapshot = StudySnapshot::seeded()
            .set_status("mic3_history", "gupta_empire", StatusUpdate::Completed)
            .unwrap();
        let topic = snapshot.find_topic("mic3_history", "gupta_empire").unwrap();
        assert_eq!(topic.status, TopicStatus::Learned);
        assert!(topic.revision_dates.is_empty());
    }

    #[test]
    fn test_set_status_not_found() {
        let err = StudySnapshot::seeded()
            .set_status("recap_all", "gdp", StatusUpdate::Completed)
            .unwrap_err();
        assert_eq!(err, TrackerError::TopicNotFound("gdp".to_string()));
    }

    #[test]
    fn test_record_mood_overwrites_same_date() {
        let snapshot = StudySnapshot::seeded()
            .record_mood(date("2025-03-05"), MoodTag::Studied)
            .record_mood(date("2025-03-05"), MoodTag::Skipped);

        assert_eq!(snapshot.mood_entries.len(), 1);
        assert_eq!(snapshot.mood_on(date("2025-03-05")).unwrap().mood, MoodTag::Skipped);
    }

    #[test]
    fn test_record_mood_keeps_entries_sorted() {
        let snapshot = StudySnapshot::seeded()
            .record_mood(date("2025-03-05"), MoodTag::Studied)
            .record_mood(date("2025-03-01"), MoodTag::Unfocused)
            .record_mood(date("2025-03-03"), MoodTag::StrongStudy);

        let dates: Vec<NaiveDate> = snapshot.mood_entries.iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![date("2025-03-01"), date("2025-03-03"), date("2025-03-05")]);
    }

    #[test]
    fn test_log_and_delete_mistake() {
        let today = date("2025-03-07");
        let (snapshot, mistake) = StudySnapshot::seeded()
            .log_mistake(Some("GDP"), "confused real and nominal", date("2025-03-04"))
            .unwrap();
        assert_eq!(snapshot.weekly_report(today).mistakes_logged, 1);

        let resolved = snapshot.delete_mistake(mistake.id).unwrap();
        assert!(resolved.mistakes.is_empty());
        assert_eq!(resolved.weekly_report(today).mistakes_logged, 0);

        let err = resolved.delete_mistake(mistake.id).unwrap_err();
        assert_eq!(err, TrackerError::MistakeNotFound(mistake.id));
    }

    #[test]
    fn test_log_mistake_invalid_leaves_snapshot() {
        let snapshot = StudySnapshot::seeded();
        let err = snapshot.log_mistake(None, "  ", date("2025-03-04")).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidInput(_)));
        assert!(snapshot.mistakes.is_empty());
    }

    #[test]
    fn test_find_topic_by_name() {
        let snapshot = StudySnapshot::seeded();

        let (subject, topic) = snapshot.find_topic_by_name("gdp").unwrap();
        assert_eq!(subject.id, "mjc3_macro");
        assert_eq!(topic.id, "gdp");

        let (_, topic) = snapshot.find_topic_by_name("indus").unwrap();
        assert_eq!(topic.id, "indus_valley");

        let (_, topic) = snapshot.find_topic_by_name("Gupta Empire").unwrap();
        assert_eq!(topic.id, "gupta_empire");
    }

    #[test]
    fn test_find_topic_by_name_errors() {
        let snapshot = StudySnapshot::seeded();
        assert!(snapshot.find_topic_by_name("quantum").unwrap_err().is_not_found());

        // "GDP", "Gupta Empire" and "Grammar Basics" all match
        let err = snapshot.find_topic_by_name("g").unwrap_err();
        assert!(matches!(err, TrackerError::InvalidInput(_)));
    }

    #[test]
    fn test_reports_from_snapshot() {
        let snapshot = StudySnapshot::seeded()
            .mark_learned("mjc3_macro", "gdp", date("2025-03-01"))
            .unwrap()
            .record_mood(date("2025-03-01"), MoodTag::Studied)
            .record_mood(date("2025-03-03"), MoodTag::Skipped)
            .record_mood(date("2025-03-05"), MoodTag::StrongStudy);

        let today = date("2025-03-07");
        let report = snapshot.weekly_report(today);
        assert_eq!(report.days_tracked, 3);
        assert_eq!(report.studied_count, 2);
        assert_eq!(report.skipped_count, 1);
        assert_eq!(report.topics_touched, 1);

        assert_eq!(
            snapshot.daily_focus(today).notification(),
            "Today's focus: GDP (Revision (R3))"
        );
        assert_eq!(snapshot.weekly_mood_series(today).len(), 7);
    }

    #[test]
    fn test_todays_plan() {
        // 2025-03-07 is a Friday
        let plan = StudySnapshot::seeded().todays_plan(date("2025-03-07")).unwrap();
        assert_eq!(plan.subject_id, "sec3_aec3_light");
        assert_eq!(plan.topic_id.as_deref(), Some("env_basics"));
    }

    fn with_plan(dates: &[&str]) -> StudySnapshot {
        let mut snapshot = StudySnapshot::seeded();
        snapshot.subjects[0].topics[0].revision_dates = dates.iter().map(|d| date(d)).collect();
        snapshot
    }

    #[test]
    fn test_validate_accepts_store_output() {
        let snapshot = StudySnapshot::seeded()
            .mark_learned("mjc3_macro", "gdp", date("2025-03-01"))
            .unwrap()
            .record_mood(date("2025-03-05"), MoodTag::Studied);
        assert_eq!(snapshot.clone().validate().unwrap(), snapshot);
    }

    #[test]
    fn test_validate_rejects_unordered_plan() {
        let snapshot = with_plan(&[
            "2025-03-07",
            "2025-03-01",
            "2025-03-03",
            "2025-03-15",
            "2025-03-30",
        ]);
        let err = snapshot.validate().unwrap_err();
        assert!(matches!(err, TrackerError::InvalidInput(_)));

        // Repeated dates are not strictly increasing either
        let snapshot = with_plan(&[
            "2025-03-01",
            "2025-03-01",
            "2025-03-07",
            "2025-03-15",
            "2025-03-30",
        ]);
        assert!(matches!(snapshot.validate(), Err(TrackerError::InvalidInput(_))));
    }

    #[test]
    fn test_validate_rejects_wrong_plan_length() {
        let snapshot = with_plan(&["2025-03-01", "2025-03-03", "2025-03-07"]);
        let err = snapshot.validate().unwrap_err();
        assert!(matches!(err, TrackerError::InvalidInput(ref msg) if msg.contains("gdp")));
    }

    #[test]
    fn test_validate_collapses_duplicate_moods() {
        let mut snapshot = StudySnapshot::seeded();
        snapshot.mood_entries = vec![
            MoodEntry::new(date("2025-03-05"), MoodTag::Studied),
            MoodEntry::new(date("2025-03-02"), MoodTag::StrongStudy),
            MoodEntry::new(date("2025-03-05"), MoodTag::Skipped),
        ];

        let snapshot = snapshot.validate().unwrap();
        let dates: Vec<NaiveDate> = snapshot.mood_entries.iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![date("2025-03-02"), date("2025-03-05")]);
        assert_eq!(snapshot.mood_on(date("2025-03-05")).unwrap().mood, MoodTag::Skipped);

        let report = snapshot.weekly_report(date("2025-03-07"));
        assert_eq!(report.days_tracked, 2);
        assert_eq!(report.studied_count, 1);
        assert_eq!(report.skipped_count, 1);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let snapshot = StudySnapshot::seeded()
            .mark_learned("mjc3_macro", "gdp", date("2025-03-01"))
            .unwrap();
        let value = serde_json::to_value(&snapshot).unwrap();

        let gdp = &value["subjects"][0]["topics"][0];
        assert_eq!(gdp["status"], "learned");
        assert_eq!(gdp["revisionDates"][0], "2025-03-01");
        assert_eq!(value["version"], SNAPSHOT_VERSION);
    }
}
