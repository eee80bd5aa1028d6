//! Daily mood check-ins

pub mod models;

pub use models::*;
