use anyhow::{Context, Result};
use uuid::Uuid;

use crate::app::App;
use crate::render::terminal::truncate;
use crate::OutputFormat;

pub fn run_add(app: &mut App, detail: &str, topic: Option<&str>, format: &OutputFormat) -> Result<()> {
    // Resolve to the catalog name when the topic is known; keep free text otherwise
    let topic_name = topic.map(|query| match app.snapshot.find_topic_by_name(query) {
        Ok((_, t)) => t.name.clone(),
        Err(_) => query.trim().to_string(),
    });

    let (next, mistake) = app
        .snapshot
        .log_mistake(topic_name.as_deref(), detail, app.today)?;
    app.commit(next)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&mistake)?);
        }
        OutputFormat::Plain => {
            println!("Mistake added for {}.", mistake.topic_name);
            println!("  ID: {}", mistake.id);
        }
    }

    Ok(())
}

pub fn run_list(app: &App, format: &OutputFormat) -> Result<()> {
    let mistakes = &app.snapshot.mistakes;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(mistakes)?);
        }
        OutputFormat::Plain => {
            if mistakes.is_empty() {
                println!("No mistakes added yet. Keep track of what you struggle with!");
                return Ok(());
            }

            let topic_width = mistakes
                .iter()
                .map(|m| m.topic_name.chars().count())
                .max()
                .unwrap_or(5)
                .clamp(5, 24);

            println!("{:<36} {:<10} {:<tw$} {}", "ID", "Date", "Topic", "Detail", tw = topic_width);
            println!(
                "{} {} {} {}",
                "\u{2500}".repeat(36),
                "\u{2500}".repeat(10),
                "\u{2500}".repeat(topic_width),
                "\u{2500}".repeat(20)
            );
            for mistake in mistakes {
                println!(
                    "{:<36} {:<10} {:<tw$} {}",
                    mistake.id,
                    mistake.date_added,
                    truncate(&mistake.topic_name, topic_width),
                    mistake.detail,
                    tw = topic_width
                );
            }

            println!("\n{} mistakes total", mistakes.len());
        }
    }

    Ok(())
}

pub fn run_delete(app: &mut App, id: &str, format: &OutputFormat) -> Result<()> {
    let id = Uuid::parse_str(id.trim()).with_context(|| format!("Invalid mistake id '{}'", id))?;
    let next = app.snapshot.delete_mistake(id)?;
    app.commit(next)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "deleted": id.to_string() }));
        }
        OutputFormat::Plain => {
            println!("Mistake {} resolved and removed.", id);
        }
    }

    Ok(())
}
