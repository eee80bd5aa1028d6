use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

use revise_lib::calendar::parse_date;
use revise_lib::planner::{Subject, Topic};
use revise_lib::storage::{FileStorage, StudySnapshot};

/// Shared application state for CLI commands
pub struct App {
    pub storage: FileStorage,
    pub snapshot: StudySnapshot,
    pub today: NaiveDate,
}

impl App {
    /// Load the snapshot from `data_dir`; `today` overrides the local date
    pub fn new(data_dir: PathBuf, today: Option<&str>) -> Result<Self> {
        let storage = FileStorage::new(data_dir);
        let snapshot = storage.load().context("Failed to load study data")?;

        let today = match today {
            Some(value) => parse_date(value)?,
            None => Local::now().date_naive(),
        };

        Ok(Self {
            storage,
            snapshot,
            today,
        })
    }

    /// Persist `next` and make it the current snapshot
    pub fn commit(&mut self, next: StudySnapshot) -> Result<()> {
        self.storage.save(&next).context("Failed to save study data")?;
        self.snapshot = next;
        Ok(())
    }

    /// Find a topic by id or name, returning owned copies
    pub fn find_topic(&self, query: &str) -> Result<(Subject, Topic)> {
        let (subject, topic) = self.snapshot.find_topic_by_name(query)?;
        Ok((subject.clone(), topic.clone()))
    }
}
