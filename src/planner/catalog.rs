//! Seed catalog and the fixed weekday plan

use chrono::{Datelike, NaiveDate, Weekday};

use super::models::{DayPlan, Subject, Topic, WeeklyScheduleEntry};

/// Topic name used for mistakes logged without a selected topic
pub const GENERAL_TOPIC: &str = "General";

/// Subjects and topics a fresh store starts with
pub fn seed_subjects() -> Vec<Subject> {
    vec![
        Subject::new(
            "mjc3_macro",
            "MJC-3: Macroeconomics",
            vec![
                Topic::new("gdp", "GDP"),
                Topic::new("fiscal_policy", "Fiscal Policy"),
                Topic::new("monetary_policy", "Monetary Policy"),
            ],
        ),
        Subject::new(
            "mic3_history",
            "MIC-3: History",
            vec![
                Topic::new("indus_valley", "Indus Valley Civilization"),
                Topic::new("gupta_empire", "Gupta Empire"),
            ],
        ),
        Subject::new(
            "mjc4_statistics",
            "MJC-4: Statistics",
            vec![Topic::new("mean_median_mode", "Mean, Median, Mode")],
        ),
        Subject::new(
            "mdc3_hindi",
            "MDC-3: Hindi",
            vec![Topic::new("grammar", "Grammar Basics")],
        ),
        Subject::new(
            "sec3_aec3_light",
            "SEC-3 / AEC-3 (Light Subjects)",
            vec![Topic::new("env_basics", "Environmental Basics")],
        ),
        Subject::new("recap_all", "Recap All Subjects", Vec::new()),
        Subject::new("test_revision", "Test + Revision", Vec::new()),
    ]
}

/// One entry per weekday, Monday first
pub fn weekly_schedule() -> Vec<WeeklyScheduleEntry> {
    [
        (Weekday::Mon, "mjc3_macro", "GDP"),
        (Weekday::Tue, "mic3_history", "Indus Valley Civilization"),
        (Weekday::Wed, "mjc4_statistics", "Mean, Median, Mode"),
        (Weekday::Thu, "mdc3_hindi", "Grammar Basics"),
        (Weekday::Fri, "sec3_aec3_light", "Environmental Basics"),
        (Weekday::Sat, "recap_all", "Review all pending topics"),
        (Weekday::Sun, "test_revision", "Take a test & review mistakes"),
    ]
    .into_iter()
    .map(|(day, subject_id, topic)| WeeklyScheduleEntry {
        day,
        subject_id: subject_id.to_string(),
        suggested_topic_name: topic.to_string(),
    })
    .collect()
}

/// Resolve the weekday plan for `date` against `subjects`.
///
/// Returns `None` when the schedule names a subject the catalog no longer has.
pub fn plan_for(subjects: &[Subject], schedule: &[WeeklyScheduleEntry], date: NaiveDate) -> Option<DayPlan> {
    let day = date.weekday();
    let entry = schedule.iter().find(|e| e.day == day)?;
    let subject = subjects.iter().find(|s| s.id == entry.subject_id)?;

    let topic_id = subject
        .topics
        .iter()
        .find(|t| t.name == entry.suggested_topic_name)
        .or_else(|| subject.topics.first())
        .map(|t| t.id.clone());

    Some(DayPlan {
        date,
        day,
        subject_id: subject.id.clone(),
        subject_name: subject.name.clone(),
        suggested_topic_name: entry.suggested_topic_name.clone(),
        topic_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::parse_date;
    use crate::planner::models::TopicStatus;

    #[test]
    fn test_seed_catalog_starts_unstudied() {
        let subjects = seed_subjects();
        assert_eq!(subjects.len(), 7);
        assert!(subjects.iter().all(|s| s.topics.len() <= 3));
        for topic in subjects.iter().flat_map(|s| &s.topics) {
            assert_eq!(topic.status, TopicStatus::NotStudied);
            assert!(topic.revision_dates.is_empty());
        }
    }

    #[test]
    fn test_weekly_schedule_covers_each_day_once() {
        let schedule = weekly_schedule();
        assert_eq!(schedule.len(), 7);
        for day in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ] {
            assert_eq!(schedule.iter().filter(|e| e.day == day).count(), 1);
        }
    }

    #[test]
    fn test_schedule_subjects_exist_in_seed() {
        let subjects = seed_subjects();
        for entry in weekly_schedule() {
            assert!(subjects.iter().any(|s| s.id == entry.subject_id));
        }
    }

    #[test]
    fn test_plan_for_weekday_resolves_topic() {
        // 2025-03-04 is a Tuesday
        let plan = plan_for(&seed_subjects(), &weekly_schedule(), parse_date("2025-03-04").unwrap())
            .unwrap();
        assert_eq!(plan.subject_id, "mic3_history");
        assert_eq!(plan.topic_id.as_deref(), Some("indus_valley"));
    }

    #[test]
    fn test_plan_for_falls_back_to_first_topic() {
        let mut subjects = seed_subjects();
        subjects[0].topics[0].name = "Gross Domestic Product".to_string();

        // 2025-03-03 is a Monday
        let plan = plan_for(&subjects, &weekly_schedule(), parse_date("2025-03-03").unwrap()).unwrap();
        assert_eq!(plan.topic_id.as_deref(), Some("gdp"));
    }

    #[test]
    fn test_plan_for_subject_without_topics() {
        // 2025-03-09 is a Sunday
        let plan = plan_for(&seed_subjects(), &weekly_schedule(), parse_date("2025-03-09").unwrap())
            .unwrap();
        assert_eq!(plan.subject_name, "Test + Revision");
        assert_eq!(plan.topic_id, None);
    }

    #[test]
    fn test_plan_for_missing_subject() {
        let subjects: Vec<Subject> = Vec::new();
        assert!(plan_for(&subjects, &weekly_schedule(), parse_date("2025-03-03").unwrap()).is_none());
    }
}
