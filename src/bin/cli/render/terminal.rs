use revise_lib::mood::MoodTag;
use revise_lib::planner::{ReviewKind, TopicStatus};
use revise_lib::reports::{MoodSeriesPoint, ReportSummary};

/// ANSI color codes
#[allow(dead_code)]
pub struct Color;

#[allow(dead_code)]
impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

/// Wrap `text` in a color code when colors are enabled
pub fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", color, text, Color::RESET)
    } else {
        text.to_string()
    }
}

pub fn status_color(status: TopicStatus) -> &'static str {
    match status {
        TopicStatus::NotStudied => Color::GRAY,
        TopicStatus::Learned => Color::GREEN,
        TopicStatus::NeedsReview => Color::YELLOW,
    }
}

pub fn review_color(kind: ReviewKind) -> &'static str {
    match kind {
        ReviewKind::NewStudy => Color::CYAN,
        ReviewKind::Revision(_) => Color::MAGENTA,
    }
}

pub fn mood_color(tag: MoodTag) -> &'static str {
    match tag {
        MoodTag::Studied => Color::GREEN,
        MoodTag::Skipped => Color::RED,
        MoodTag::Unfocused => Color::YELLOW,
        MoodTag::StrongStudy => Color::BLUE,
    }
}

/// Truncate to `width` characters, marking the cut with "..."
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// The weekly report card as terminal lines
pub fn render_report(report: &ReportSummary, use_color: bool) -> Vec<String> {
    let title = format!(
        "Weekly Study Report ({} to {})",
        report.window_start, report.window_end
    );
    let rows = [
        ("Days tracked for mood", report.days_tracked),
        ("Days studied effectively", report.studied_count),
        ("Days skipped/unfocused", report.skipped_count),
        ("Unique topics touched/revised", report.topics_touched),
        ("Mistakes logged this week", report.mistakes_logged),
    ];

    let mut lines = vec![paint(&title, Color::BOLD, use_color), "\u{2500}".repeat(title.len())];
    for (label, value) in rows {
        lines.push(format!("{:<31} {}", format!("{}:", label), value));
    }
    lines
}

/// One row per day: label, date and a marker for the recorded mood
pub fn render_mood_series(series: &[MoodSeriesPoint], use_color: bool) -> Vec<String> {
    series
        .iter()
        .map(|point| {
            let mood = MoodTag::ALL
                .iter()
                .find(|tag| point.values[tag.index()] > 0)
                .map(|tag| paint(&format!("\u{25a0} {}", tag), mood_color(*tag), use_color))
                .unwrap_or_else(|| paint("\u{00b7} no check-in", Color::DIM, use_color));
            format!("{} {}  {}", point.label, point.date, mood)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("GDP", 10), "GDP");
        assert_eq!(truncate("Indus Valley Civilization", 10), "Indus V...");
    }

    #[test]
    fn test_paint_without_color() {
        assert_eq!(paint("learned", Color::GREEN, false), "learned");
        assert_eq!(paint("x", Color::RED, true), "\x1b[31mx\x1b[0m");
    }

    #[test]
    fn test_render_report_plain() {
        let day = |d| NaiveDate::from_ymd_opt(2025, 3, d).unwrap();
        let report = ReportSummary {
            window_start: day(1),
            window_end: day(7),
            days_tracked: 3,
            studied_count: 2,
            skipped_count: 1,
            topics_touched: 1,
            mistakes_logged: 0,
        };
        let lines = render_report(&report, false);
        assert_eq!(lines[0], "Weekly Study Report (2025-03-01 to 2025-03-07)");
        assert!(lines[2].starts_with("Days tracked for mood:"));
        assert!(lines[2].ends_with(" 3"));
        assert_eq!(lines.len(), 7);
    }
}
