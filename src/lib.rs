//! Revise: a personal study tracker
//!
//! The library holds the spaced-repetition planner, the mood and mistake
//! history, and the reports derived from them. State lives in a
//! [`storage::StudySnapshot`] value; every change produces a new snapshot that
//! the caller persists with [`storage::FileStorage`].

pub mod calendar;
pub mod config;
pub mod error;
pub mod mistakes;
pub mod mood;
pub mod planner;
pub mod reports;
pub mod storage;

pub use error::TrackerError;
pub use storage::{FileStorage, StorageError, StudySnapshot};
