//! Mistake log

pub mod models;

pub use models::*;
