use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::models::StudySnapshot;
use crate::error::TrackerError;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Data directory not found")]
    DataDirNotFound,

    #[error("Invalid snapshot: {0}")]
    Invalid(#[from] TrackerError),
}

pub type Result<T> = std::result::Result<T, StorageError>;

const SNAPSHOT_FILE: &str = "snapshot.json";

/// Persists the study snapshot as a single JSON file
pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Get the default data directory
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("revise"))
            .ok_or(StorageError::DataDirNotFound)
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Initialize storage directories
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;
        Ok(())
    }

    fn snapshot_path(&self) -> PathBuf {
        self.base_path.join(SNAPSHOT_FILE)
    }

    /// Load the saved snapshot, or the seed catalog if nothing was saved yet
    pub fn load(&self) -> Result<StudySnapshot> {
        let path = self.snapshot_path();
        if !path.exists() {
            log::info!("No snapshot at {:?}, starting from seed catalog", path);
            return Ok(StudySnapshot::seeded());
        }

        let content = fs::read_to_string(&path)?;
        let snapshot = serde_json::from_str::<StudySnapshot>(&content)?.validate()?;
        log::info!(
            "Loaded snapshot: {} subjects, {} mood entries, {} mistakes",
            snapshot.subjects.len(),
            snapshot.mood_entries.len(),
            snapshot.mistakes.len()
        );
        Ok(snapshot)
    }

    /// Persist a full snapshot.
    ///
    /// Writes to a temporary file first and renames it into place, so a
    /// reader never sees a partially written snapshot.
    pub fn save(&self, snapshot: &StudySnapshot) -> Result<()> {
        self.init()?;

        let json = serde_json::to_string_pretty(snapshot)?;
        let tmp_path = self.base_path.join(format!("{}.tmp", SNAPSHOT_FILE));
        fs::write(&tmp_path, json)?;
        if let Err(e) = fs::rename(&tmp_path, self.snapshot_path()) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        log::info!("Saved snapshot to {:?}", self.snapshot_path());
        Ok(())
    }
}
