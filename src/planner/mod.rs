//! Study planning for Revise
//!
//! This module provides:
//! - Subject and topic models
//! - Fixed-curve spaced repetition (five reviews per learned topic)
//! - The seed catalog and the weekday plan

pub mod algorithm;
pub mod catalog;
pub mod models;

pub use algorithm::{schedule_reviews, ReviewKind, REVIEW_OFFSETS};
pub use models::*;
