//! Student records: the full CRUD surface plus the admin-side enrollment
//! flow that assigns roll numbers and the shared default password.

pub mod client;
pub mod enroll;
pub mod types;
