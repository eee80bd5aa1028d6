use anyhow::Result;

use revise_lib::calendar::weekday_name;
use revise_lib::planner::catalog::weekly_schedule;

use crate::app::App;
use crate::render::terminal::{paint, review_color, Color};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let focus = app.snapshot.daily_focus(app.today);
    let plan = app.snapshot.todays_plan(app.today);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "date": app.today.to_string(),
                "notification": focus.notification(),
                "items": focus.items,
                "plan": plan,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("{}", paint(&focus.notification(), Color::BOLD, use_color));
            for item in &focus.items {
                println!(
                    "  {} {}",
                    paint(&item.kind.label(), review_color(item.kind), use_color),
                    item.topic_name
                );
            }

            if let Some(plan) = plan {
                println!();
                println!(
                    "{}'s plan: {} \u{2192} {}",
                    weekday_name(plan.day),
                    plan.subject_name,
                    plan.suggested_topic_name
                );
            }
        }
    }

    Ok(())
}

pub fn run_schedule(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let schedule = weekly_schedule();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&schedule)?);
        }
        OutputFormat::Plain => {
            let today = chrono::Datelike::weekday(&app.today);
            for entry in &schedule {
                let subject = app
                    .snapshot
                    .find_subject(&entry.subject_id)
                    .map(|s| s.name.clone())
                    .unwrap_or_else(|_| entry.subject_id.clone());
                let line = format!(
                    "{:<10} {:<32} {}",
                    weekday_name(entry.day),
                    subject,
                    entry.suggested_topic_name
                );
                if entry.day == today {
                    println!("{}", paint(&line, Color::BOLD, use_color));
                } else {
                    println!("{}", line);
                }
            }
        }
    }

    Ok(())
}
