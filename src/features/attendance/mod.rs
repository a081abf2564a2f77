//! Daily attendance per student and subject, plus per-subject percentages.

pub mod client;
pub mod types;
