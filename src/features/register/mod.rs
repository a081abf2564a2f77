//! Two-step self-service registration and password reset.
//!
//! A student verifies their identity with a roll number or email, then sets
//! a password. The same flow serves first-time registration and resets; the
//! verify response decides which wording the completion message uses.

pub mod flow;
pub mod wizard;
