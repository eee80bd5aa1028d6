pub mod mistakes;
pub mod mood;
pub mod report;
pub mod today;
pub mod topics;
