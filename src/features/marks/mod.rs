//! Exam marks per student and subject.

pub mod client;
pub mod types;
