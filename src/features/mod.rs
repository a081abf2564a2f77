//! Feature modules, one per backend resource. Each module pairs the wire
//! types with a thin client over [`crate::http::ApiClient`]; `register`
//! additionally carries the two-step registration wizard.

pub mod attendance;
pub mod auth;
pub mod dashboard;
pub mod marks;
pub mod register;
pub mod students;
pub mod subjects;
