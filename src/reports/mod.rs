//! Study statistics derived from the check-in, review and mistake history
//!
//! This module provides:
//! - The "what to do today" focus list and notification
//! - The trailing seven-day report
//! - The seven-day mood series used for trend charts

pub mod aggregator;
pub mod models;

pub use aggregator::{daily_focus, weekly_mood_series, weekly_report, REPORT_WINDOW_DAYS};
pub use models::*;
