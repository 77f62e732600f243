//! Hacker News "newest" ordering validator
//!
//! Scrapes the paginated /newest listing, collects a target number of
//! articles, and checks that they appear in strict newest-to-oldest order
//! over (timestamp, id). The run halts on the first ordering violation and
//! writes a JSON report for post-hoc inspection.

// Module declarations
pub mod application;
pub mod domain;
pub mod infrastructure;
