//! Subjects, read-only: the catalog is seeded backend-side per course.

pub mod client;
pub mod types;
