use anyhow::Result;

use revise_lib::planner::algorithm::{next_review, remaining_reviews};
use revise_lib::planner::StatusUpdate;

use crate::app::App;
use crate::render::terminal::{paint, status_color, truncate, Color};
use crate::{OutputFormat, StatusArg};

pub fn run_list(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let subjects = &app.snapshot.subjects;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(subjects)?);
        }
        OutputFormat::Plain => {
            let name_width = 28;
            let status_width = 12;

            for subject in subjects {
                println!("{}", paint(&subject.name, Color::BOLD, use_color));
                if subject.topics.is_empty() {
                    println!("  {}", paint("(no topics)", Color::DIM, use_color));
                    continue;
                }

                for topic in &subject.topics {
                    let status = format!("{:<sw$}", topic.status.label(), sw = status_width);
                    let next = match next_review(topic, app.today) {
                        Some(date) => format!(
                            "next {} ({} left)",
                            date,
                            remaining_reviews(topic, app.today)
                        ),
                        None if topic.has_review_plan() => "plan complete".to_string(),
                        None => String::new(),
                    };
                    println!(
                        "  {:<nw$} {} {}",
                        truncate(&topic.name, name_width),
                        paint(&status, status_color(topic.status), use_color),
                        next,
                        nw = name_width
                    );
                }
            }
        }
    }

    Ok(())
}

pub fn run_learn(app: &mut App, query: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let (subject, topic) = app.find_topic(query)?;
    let next = app.snapshot.mark_learned(&subject.id, &topic.id, app.today)?;
    app.commit(next)?;

    let updated = app.snapshot.find_topic(&subject.id, &topic.id)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(updated)?);
        }
        OutputFormat::Plain => {
            println!(
                "Marked {} as {}. Reviews scheduled:",
                paint(&updated.name, Color::BOLD, use_color),
                updated.status.label()
            );
            for (i, date) in updated.revision_dates.iter().enumerate() {
                println!("  R{}  {}", i + 1, date);
            }
        }
    }

    Ok(())
}

pub fn run_status(app: &mut App, query: &str, status: StatusArg, format: &OutputFormat) -> Result<()> {
    let update = match status {
        StatusArg::Completed => StatusUpdate::Completed,
        StatusArg::NeedsReview => StatusUpdate::NeedsReview,
    };

    let (subject, topic) = app.find_topic(query)?;
    let next = app.snapshot.set_status(&subject.id, &topic.id, update)?;
    app.commit(next)?;

    let updated = app.snapshot.find_topic(&subject.id, &topic.id)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(updated)?);
        }
        OutputFormat::Plain => {
            println!("Topic \"{}\" marked as {}.", updated.name, updated.status.label());
        }
    }

    Ok(())
}
