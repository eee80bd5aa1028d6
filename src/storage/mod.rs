mod file_storage;
mod models;

pub use file_storage::{FileStorage, StorageError};
pub use models::*;
