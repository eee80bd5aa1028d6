use anyhow::Result;

use revise_lib::calendar::parse_date;
use revise_lib::mood::MoodTag;
use revise_lib::reports::aggregator::series_totals;

use crate::app::App;
use crate::render::terminal::render_mood_series;
use crate::OutputFormat;

pub fn run_record(app: &mut App, mood: &str, date: Option<&str>, format: &OutputFormat) -> Result<()> {
    let tag: MoodTag = mood.parse()?;
    let date = match date {
        Some(value) => parse_date(value)?,
        None => app.today,
    };

    let replaced = app.snapshot.mood_on(date).map(|e| e.mood);
    let next = app.snapshot.record_mood(date, tag);
    app.commit(next)?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "date": date.to_string(),
                "mood": tag,
                "replaced": replaced,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => match replaced {
            Some(previous) if previous != tag => {
                println!("Mood for {} changed from {} to {}.", date, previous, tag)
            }
            _ => println!("Mood for {} ({}) recorded!", date, tag),
        },
    }

    Ok(())
}

pub fn run_trend(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let series = app.snapshot.weekly_mood_series(app.today);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&series)?);
        }
        OutputFormat::Plain => {
            for line in render_mood_series(&series, use_color) {
                println!("{}", line);
            }

            let totals: Vec<String> = series_totals(&series)
                .iter()
                .map(|(tag, count)| format!("{} {}", tag, count))
                .collect();
            println!("\n{}", totals.join(", "));
        }
    }

    Ok(())
}
