use anyhow::Result;

use crate::app::App;
use crate::render::terminal::render_report;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let report = app.snapshot.weekly_report(app.today);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Plain => {
            for line in render_report(&report, use_color) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
