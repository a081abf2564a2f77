//! Aggregate statistics for the admin landing page.

pub mod client;
pub mod types;
